//! Headline figures for an estimate.
//!
//! The summary bar shows the offered price, what has been paid, and either a
//! "paid in full" badge or the outstanding balance. The change-order and
//! expense tabs each show a running total of their rows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{DesignSet, LayoutVariant};
use crate::money::{format_money, is_paid_in_full, sum_money};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateSummary {
    pub estimate_number: String,
    pub title: String,
    pub status: String,
    pub layout_variant: LayoutVariant,

    /// Offered price, display formatted.
    pub offered_price: String,
    /// Amount paid so far, display formatted.
    pub total_paid: String,
    /// Discounts applied, display formatted.
    pub total_savings: String,
    pub paid_in_full: bool,
    /// Outstanding balance, display formatted. `None` when paid in full.
    pub remaining: Option<String>,

    pub change_order_total: Decimal,
    pub expense_total: Decimal,
}

impl EstimateSummary {
    pub fn from_design(design: &DesignSet) -> Self {
        let payment = &design.payment;
        let paid_in_full = is_paid_in_full(&payment.remaining);

        Self {
            estimate_number: design.header.estimate_number.clone(),
            title: design.header.title.clone(),
            status: design.header.status.clone(),
            layout_variant: design.layout_variant,
            offered_price: format_money(&design.workscopes.estimate_total),
            total_paid: format_money(&payment.total_paid),
            total_savings: format_money(&payment.total_savings),
            paid_in_full,
            remaining: (!paid_in_full).then(|| format_money(&payment.remaining)),
            change_order_total: sum_money(design.change_orders.iter().map(|co| &co.amount)),
            expense_total: sum_money(design.expenses.iter().map(|e| &e.total)),
        }
    }
}
