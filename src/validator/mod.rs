//! Entity validation subsystem for schedopts
//!
//! # Design Principles
//!
//! - Failures are data: checks append error records and return `false`
//! - Stages short-circuit; sibling fields do not
//! - Frequency rules are declarative tables, not branches
//! - Code sets come from an enum source and are fetched at most once
//! - Message templates are fixed and surfaced verbatim

mod entity;
mod errors;
mod matchers;
mod rules;
mod scheduler_options;

pub use entity::{specified, EntityValidator, FieldValidator};
pub use errors::{ErrorKind, ValidationError};
pub use matchers::{pattern_value_in_set, value_in_set};
pub use rules::{
    option_shapes, period_rule, OptionShape, PeriodRule, ValueSpec, FREQUENCY_OPTION_RULES,
    FREQ_WEEKLY, PERIOD_RULES,
};
pub use scheduler_options::{
    scheduled_report_validator, SchedulerOptionsValidator, SCHEDULER_OPTIONS,
};
