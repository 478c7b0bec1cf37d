//! Money-string parsing and display formatting.
//!
//! Amounts in the estimate data are carried as loosely formatted strings
//! (`"$1,234.5"`, `"-150.00"`, `"200"`). This module turns them into
//! [`Decimal`] values and back into canonical `$X,XXX.XX` display strings.
//!
//! None of these functions fail: unparseable input degrades to zero when
//! parsing, and is echoed back with a `$` prefix when formatting.

use std::str::FromStr;

use rust_decimal::{Decimal, RoundingStrategy};

/// Removes currency symbols and thousands separators, then trims whitespace.
fn strip_money(input: &str) -> String {
    input
        .chars()
        .filter(|c| *c != '$' && *c != ',')
        .collect::<String>()
        .trim()
        .to_string()
}

/// Furthest the decimal point may sit from the first digit before a number
/// is treated as non-numeric. Wider than any `f64`.
const MAX_DIGITS: usize = 400;

/// Digits of a well-formed decimal literal with its exponent applied.
///
/// Only used for literals [`Decimal`] cannot hold, so they can still be
/// formatted exactly.
#[derive(Debug, Clone, PartialEq, Eq)]
struct NumberText {
    negative: bool,
    whole: String,
    fraction: String,
}

impl NumberText {
    /// Accepts `[+-]digits[.digits][(e|E)[+-]digits]` with at least one
    /// mantissa digit.
    fn scan(s: &str) -> Option<Self> {
        let (negative, rest) = match s.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, s.strip_prefix('+').unwrap_or(s)),
        };
        let (mantissa, exponent) = match rest.split_once(['e', 'E']) {
            Some((mantissa, exponent)) => (mantissa, exponent.parse::<i64>().ok()?),
            None => (rest, 0),
        };
        let (whole, fraction) = mantissa.split_once('.').unwrap_or((mantissa, ""));
        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.bytes().chain(fraction.bytes()).all(|b| b.is_ascii_digit()) {
            return None;
        }

        let digits = format!("{whole}{fraction}");
        let point = (whole.len() as i64).saturating_add(exponent);
        if point > MAX_DIGITS as i64 {
            return None;
        }

        let (whole, fraction) = if point <= 0 {
            let zeros = usize::try_from(point.unsigned_abs())
                .unwrap_or(usize::MAX)
                .min(MAX_DIGITS);
            (String::new(), format!("{}{digits}", "0".repeat(zeros)))
        } else {
            let point = point as usize;
            if point >= digits.len() {
                let padding = "0".repeat(point - digits.len());
                (format!("{digits}{padding}"), String::new())
            } else {
                (digits[..point].to_string(), digits[point..].to_string())
            }
        };

        Some(Self {
            negative,
            whole,
            fraction,
        })
    }

    fn has_whole_part(&self) -> bool {
        self.whole.bytes().any(|b| b != b'0')
    }

    /// Closest [`Decimal`]: the type's bound for large magnitudes, zero for
    /// values that only have digits past its precision.
    fn saturated(&self) -> Decimal {
        match (self.has_whole_part(), self.negative) {
            (false, _) => Decimal::ZERO,
            (true, false) => Decimal::MAX,
            (true, true) => Decimal::MIN,
        }
    }

    /// Same output as [`format_amount`], computed on the digit string.
    fn format(&self) -> String {
        let mut fraction = self.fraction.bytes().chain(std::iter::repeat(b'0'));
        let mut digits: Vec<u8> = self.whole.bytes().collect();
        digits.extend(fraction.by_ref().take(2));
        if fraction.next().is_some_and(|b| b >= b'5') {
            increment(&mut digits);
        }

        let (whole, cents) = digits.split_at(digits.len() - 2);
        let whole = String::from_utf8_lossy(whole);
        let cents = String::from_utf8_lossy(cents);
        let whole = match whole.trim_start_matches('0') {
            "" => "0",
            trimmed => trimmed,
        };

        let negative = self.negative && !(whole == "0" && cents == "00");
        let sign = if negative { "-" } else { "" };
        format!("{sign}${}.{cents}", group_thousands(whole))
    }
}

/// Adds one to an ASCII digit string.
fn increment(digits: &mut Vec<u8>) {
    for digit in digits.iter_mut().rev() {
        if *digit == b'9' {
            *digit = b'0';
        } else {
            *digit += 1;
            return;
        }
    }
    digits.insert(0, b'1');
}

/// A stripped money string that is numeric.
enum ParsedMoney {
    InRange(Decimal),
    /// Well formed, but outside what [`Decimal`] can represent.
    OutOfRange(NumberText),
}

impl ParsedMoney {
    fn value(&self) -> Decimal {
        match self {
            Self::InRange(value) => *value,
            Self::OutOfRange(text) => text.saturated(),
        }
    }
}

/// Parses an already stripped string. Accepts plain and scientific notation.
fn parse_stripped(s: &str) -> Option<ParsedMoney> {
    if s.is_empty() {
        return None;
    }
    match Decimal::from_str(s).or_else(|_| Decimal::from_scientific(s)) {
        Ok(value) => Some(ParsedMoney::InRange(value)),
        Err(_) => NumberText::scan(s).map(ParsedMoney::OutOfRange),
    }
}

/// Parses a money string into a [`Decimal`], returning `None` when the
/// input is empty or not numeric.
///
/// Numbers too large for [`Decimal`] saturate to [`Decimal::MAX`] or
/// [`Decimal::MIN`]; numbers too small for it become zero.
pub fn try_parse_money(input: &str) -> Option<Decimal> {
    parse_stripped(&strip_money(input)).map(|parsed| parsed.value())
}

/// Parses a money string into a [`Decimal`].
///
/// All `$` and `,` characters are removed and surrounding whitespace is
/// trimmed before parsing. Empty or unparseable input yields zero, so callers
/// cannot tell "zero" from "garbage" without inspecting the input.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use estimate_core::money::parse_money;
///
/// assert_eq!(parse_money("$1,234.56"), dec!(1234.56));
/// assert_eq!(parse_money(""), Decimal::ZERO);
/// assert_eq!(parse_money("abc"), Decimal::ZERO);
/// ```
pub fn parse_money(input: &str) -> Decimal {
    try_parse_money(input).unwrap_or(Decimal::ZERO)
}

/// Rounds to cents, midpoints away from zero.
///
/// The rounding is applied to the exact decimal value that was parsed, so
/// `1234.005` becomes `1234.01` and `-1234.005` becomes `-1234.01`.
pub fn round_cents(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Inserts `,` between every group of three digits, counting from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

/// Formats a numeric amount as `$X,XXX.XX`, or `-$X,XXX.XX` when negative.
///
/// A value that rounds to zero is always rendered without a sign.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::money::format_amount;
///
/// assert_eq!(format_amount(dec!(1234567.891)), "$1,234,567.89");
/// assert_eq!(format_amount(dec!(-150)), "-$150.00");
/// assert_eq!(format_amount(dec!(-0.001)), "$0.00");
/// ```
pub fn format_amount(value: Decimal) -> String {
    let rounded = round_cents(value);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();

    let mut magnitude = rounded.abs();
    magnitude.rescale(2);
    let text = magnitude.to_string();
    let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let sign = if negative { "-" } else { "" };
    format!("{sign}${}.{cents}", group_thousands(whole))
}

/// Normalizes a money string for display.
///
/// - Empty or whitespace-only input yields `"$0.00"`.
/// - Numeric input (with or without `$` and `,`) is rendered through
///   [`format_amount`]. Numbers beyond [`Decimal`]'s range get the same
///   rounding and grouping, applied to their digits.
/// - Anything else is returned as-is, with a `$` prepended when it does not
///   already start with one.
///
/// Formatting is idempotent: feeding the output back in returns it unchanged.
///
/// # Examples
///
/// ```
/// use estimate_core::money::format_money;
///
/// assert_eq!(format_money("1234.5"), "$1,234.50");
/// assert_eq!(format_money("$1,234.50"), "$1,234.50");
/// assert_eq!(format_money("-500"), "-$500.00");
/// assert_eq!(format_money(""), "$0.00");
/// assert_eq!(format_money("abc"), "$abc");
/// ```
pub fn format_money(input: &str) -> String {
    if input.trim().is_empty() {
        return format_amount(Decimal::ZERO);
    }

    match parse_stripped(&strip_money(input)) {
        Some(ParsedMoney::InRange(value)) => format_amount(value),
        Some(ParsedMoney::OutOfRange(text)) => text.format(),
        None if input.starts_with('$') => input.to_string(),
        None => format!("${input}"),
    }
}

/// Sums a list of money strings. Unparseable entries count as zero and the
/// total saturates at [`Decimal`]'s bounds.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use estimate_core::money::sum_money;
///
/// assert_eq!(sum_money(["$385.00", "-$150.00"]), dec!(235.00));
/// ```
pub fn sum_money<I, S>(values: I) -> Decimal
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .map(|v| parse_money(v.as_ref()))
        .fold(Decimal::ZERO, Decimal::saturating_add)
}

/// Returns true when a remaining balance means nothing is owed.
///
/// Empty input counts as paid. Non-numeric input does not, so a garbled
/// balance is never mistaken for a settled one.
pub fn is_paid_in_full(remaining: &str) -> bool {
    if remaining.trim().is_empty() {
        return true;
    }
    try_parse_money(remaining).is_some_and(|v| v.is_zero())
}
