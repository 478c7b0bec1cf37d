use serde::{Deserialize, Serialize};

/// What a schedule entry refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    /// A production phase (first call, schedule, reminder, ...).
    Phase,
    /// Material order placed.
    Order,
    /// Expected material delivery.
    Delivery,
    #[default]
    Other,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Phase => "phase",
            Self::Order => "order",
            Self::Delivery => "delivery",
            Self::Other => "other",
        }
    }
}

/// A dated entry shown on the schedule calendar.
///
/// `date` is kept as the `dd/mm/yyyy` text found in the estimate data;
/// it is only interpreted when events are grouped by day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleEvent {
    pub date: String,
    pub title: String,
    #[serde(default)]
    pub kind: EventKind,
}

impl ScheduleEvent {
    pub fn new(
        date: impl Into<String>,
        title: impl Into<String>,
        kind: EventKind,
    ) -> Self {
        Self {
            date: date.into(),
            title: title.into(),
            kind,
        }
    }
}
