use std::fmt;

use serde::{Deserialize, Serialize};

use super::schedule_event::{EventKind, ScheduleEvent};

/// Identifier of a design set (1, 2 and 3 in the bundled catalog).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DesignId(pub u8);

impl Default for DesignId {
    fn default() -> Self {
        Self(1)
    }
}

impl fmt::Display for DesignId {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Accent color family of a design set.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DesignTheme {
    #[default]
    Blue,
    Emerald,
    Violet,
}

/// Which layout renders the estimate data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutVariant {
    #[default]
    Default,
    Compact,
    Minimal,
}

impl LayoutVariant {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Compact => "compact",
            Self::Minimal => "minimal",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EstimateHeader {
    pub estimate_number: String,
    pub title: String,
    pub status: String,
    pub created_date: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub sort: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub product: String,
    pub qty_cost: String,
    pub qty: String,
    pub total: String,
    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Workscopes {
    /// Offered price, as a money string.
    pub estimate_total: String,
    pub workscope_label: String,
    #[serde(default)]
    pub line_items: Vec<LineItem>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentRecord {
    pub date: String,
    pub amount: String,
    pub method: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiscountKind {
    Percent,
    Fixed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Discount {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub checked: bool,
    #[serde(rename = "type")]
    pub kind: DiscountKind,
    pub percent_value: Option<u32>,
    pub amount: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payment {
    pub financing_option: String,
    pub applied_date: String,
    pub total_savings: String,
    pub total_paid: String,
    /// Outstanding balance, as a money string. Empty means nothing is owed.
    #[serde(default)]
    pub remaining: String,
    pub payments_recorded: u32,
    #[serde(default)]
    pub payment_history: Vec<PaymentRecord>,
    #[serde(default)]
    pub discounts: Vec<Discount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeOrder {
    pub date: String,
    pub order: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub desc: String,
    pub status: String,
    pub amount: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductionPhase {
    pub name: String,
    pub phase_num: String,
    /// `dd/mm/yyyy`, or empty when the phase is not scheduled yet.
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Production {
    pub phases: Vec<ProductionPhase>,
    pub internal_notes: String,
    pub material_logistics: String,
    pub permit_allocation: String,
    pub requirement_details: String,
    pub order_placed: String,
    pub expected_delivery: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Expense {
    pub vendor_name: String,
    pub invoice_date: String,
    pub total: String,
}

/// One canned estimate: the mock data plus the layout that renders it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DesignSet {
    pub id: DesignId,
    #[serde(default)]
    pub theme: DesignTheme,
    #[serde(default)]
    pub layout_variant: LayoutVariant,
    pub header: EstimateHeader,
    pub workscopes: Workscopes,
    pub payment: Payment,
    #[serde(default)]
    pub change_orders: Vec<ChangeOrder>,
    #[serde(default)]
    pub production: Production,
    #[serde(default)]
    pub expenses: Vec<Expense>,
}

impl DesignSet {
    /// Dated production milestones as calendar events.
    ///
    /// Phases without a date are left out. Dates are passed through
    /// untouched; validation happens when the events are grouped by day.
    pub fn schedule_events(&self) -> Vec<ScheduleEvent> {
        let production = &self.production;

        let mut events: Vec<ScheduleEvent> = production
            .phases
            .iter()
            .filter(|phase| !phase.date.trim().is_empty())
            .map(|phase| {
                ScheduleEvent::new(
                    phase.date.trim(),
                    format!("{} {}", phase.phase_num, phase.name),
                    EventKind::Phase,
                )
            })
            .collect();

        if !production.order_placed.trim().is_empty() {
            events.push(ScheduleEvent::new(
                production.order_placed.trim(),
                "Material order placed",
                EventKind::Order,
            ));
        }
        if !production.expected_delivery.trim().is_empty() {
            events.push(ScheduleEvent::new(
                production.expected_delivery.trim(),
                "Expected delivery",
                EventKind::Delivery,
            ));
        }

        events
    }
}
