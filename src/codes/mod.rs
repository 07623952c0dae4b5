//! Code-set lookup backed by an external enumeration provider.
//!
//! A code set is the list of admissible codes behind a logical endpoint
//! name. The [`EnumSource`] trait is the provider seam; [`CodeSetCache`]
//! memoizes fetches for the lifetime of one validator.

mod cache;
mod source;

pub use cache::CodeSetCache;
pub use source::{CodesError, EnumSource, StaticEnumSource};

/// Logical endpoint names of the scheduler code sets.
pub mod endpoints {
    /// Recurrence frequencies.
    pub const FREQUENCY: &str = "codes/srofrequency";
    /// Known frequency-option field names.
    pub const FREQUENCY_OPTION: &str = "codes/srofrequencyopt";
    /// Hours of the day, for Hourly schedules.
    pub const HOUR_OF_DAY: &str = "codes/srohourofday";
    /// Days of the week, for Weekly and Monthly schedules.
    pub const DAY_OF_WEEK: &str = "codes/srodow";
    /// Weeks of the month, for Monthly schedules.
    pub const WEEK_OF_MONTH: &str = "codes/srowom";
    /// Months of the year, for Semi-Annually and Yearly schedules.
    pub const MONTH_OF_YEAR: &str = "codes/sromoy";
}
