//! Data sources for the estimate toolkit: the design-set catalog and
//! schedule event files.

pub mod catalog;
pub mod events;

pub use catalog::{CatalogError, DesignCatalog};
pub use events::{ScheduleCsvLoader, ScheduleLoadError};
