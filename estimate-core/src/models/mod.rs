mod design_set;
mod schedule_event;

pub use design_set::{
    ChangeOrder, DesignId, DesignSet, DesignTheme, Discount, DiscountKind, EstimateHeader,
    Expense, LayoutVariant, LineItem, Payment, PaymentRecord, Production, ProductionPhase,
    Workscopes,
};
pub use schedule_event::{EventKind, ScheduleEvent};
