//! Decision tables for the scheduler frequencies.
//!
//! Everything a frequency admits is data: which field-name sets its option
//! object may take, which values each field accepts, and which wildcard
//! patterns its period and period option must match. The validator walks
//! these tables; adding a frequency means adding rows, not branches.

use crate::codes::endpoints;

/// Frequency whose day lists and month-to-date periods get special handling.
pub const FREQ_WEEKLY: &str = "Weekly";

/// Admissible values for one frequency-option field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueSpec {
    /// Fixed literal values.
    Literal(&'static [&'static str]),
    /// Inclusive integer range, one code per value.
    Range(i64, i64),
    /// Codes fetched from an enum-source endpoint.
    Codes(&'static str),
}

/// One admissible field-name set for a frequency's option object, with the
/// value spec of each field.
#[derive(Debug, Clone, Copy)]
pub struct OptionShape {
    pub fields: &'static [(&'static str, ValueSpec)],
}

impl OptionShape {
    /// Value spec for one field of the shape.
    pub fn value_spec(&self, name: &str) -> Option<&ValueSpec> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, spec)| spec)
    }
}

/// Wildcard-pattern sets for a frequency's period and period option. An
/// empty set means the field must be absent.
#[derive(Debug, Clone, Copy)]
pub struct PeriodRule {
    pub period: &'static [&'static str],
    pub period_option: &'static [&'static str],
}

const NO_PERIODS: PeriodRule = PeriodRule {
    period: &[],
    period_option: &[],
};

/// Reporting-range options shared by the calendar-driven frequencies.
const REPORT_RANGE_OPTIONS: &[&str] = &["CAL", "CAL F", "LST", r"LSD \d+"];

const DAY_OF_MONTH: ValueSpec = ValueSpec::Range(1, 31);

/// Option shapes per frequency. A frequency with no shapes (Bi-Monthly)
/// requires the option object to be absent.
pub const FREQUENCY_OPTION_RULES: &[(&str, &[OptionShape])] = &[
    (
        "Hourly",
        &[OptionShape {
            fields: &[("hour_of_day", ValueSpec::Codes(endpoints::HOUR_OF_DAY))],
        }],
    ),
    (
        "Daily",
        &[OptionShape {
            fields: &[("weekdays_only", ValueSpec::Literal(&["true", "false"]))],
        }],
    ),
    (
        FREQ_WEEKLY,
        &[OptionShape {
            fields: &[("day_of_week", ValueSpec::Codes(endpoints::DAY_OF_WEEK))],
        }],
    ),
    ("Bi-Monthly", &[]),
    (
        "Monthly",
        &[
            OptionShape {
                fields: &[("day_of_month", DAY_OF_MONTH)],
            },
            OptionShape {
                fields: &[
                    ("week_of_month", ValueSpec::Codes(endpoints::WEEK_OF_MONTH)),
                    ("day_of_week", ValueSpec::Codes(endpoints::DAY_OF_WEEK)),
                ],
            },
        ],
    ),
    (
        "Quarterly",
        &[OptionShape {
            fields: &[("day_of_month", DAY_OF_MONTH)],
        }],
    ),
    (
        "Semi-Annually",
        &[OptionShape {
            fields: &[
                ("day_of_month", DAY_OF_MONTH),
                ("month_of_year", ValueSpec::Codes(endpoints::MONTH_OF_YEAR)),
            ],
        }],
    ),
    (
        "Yearly",
        &[OptionShape {
            fields: &[
                ("day_of_month", DAY_OF_MONTH),
                ("month_of_year", ValueSpec::Codes(endpoints::MONTH_OF_YEAR)),
            ],
        }],
    ),
];

/// Period patterns per frequency. Hourly, Bi-Monthly and Semi-Annually
/// schedules carry no reporting period at all; Yearly carries only a
/// period option.
pub const PERIOD_RULES: &[(&str, PeriodRule)] = &[
    ("Hourly", NO_PERIODS),
    (
        "Daily",
        PeriodRule {
            period: &["Today", r"\d+ Days", r"\d+ Weeks"],
            period_option: &[],
        },
    ),
    (
        FREQ_WEEKLY,
        PeriodRule {
            period: &[r"\d+ Weeks", "MTD", "YTD"],
            period_option: REPORT_RANGE_OPTIONS,
        },
    ),
    ("Bi-Monthly", NO_PERIODS),
    (
        "Monthly",
        PeriodRule {
            period: &[r"\d+ Months", "YTD"],
            period_option: REPORT_RANGE_OPTIONS,
        },
    ),
    (
        "Quarterly",
        PeriodRule {
            period: &[r"\d+ Quarters", "YTD"],
            period_option: REPORT_RANGE_OPTIONS,
        },
    ),
    ("Semi-Annually", NO_PERIODS),
    (
        "Yearly",
        PeriodRule {
            period: &[],
            period_option: &["CAL", "CAL F"],
        },
    ),
];

/// Option shapes for a frequency; empty for unknown frequencies.
pub fn option_shapes(frequency: &str) -> &'static [OptionShape] {
    FREQUENCY_OPTION_RULES
        .iter()
        .find(|(name, _)| *name == frequency)
        .map(|(_, shapes)| *shapes)
        .unwrap_or(&[])
}

/// Period rule for a frequency; all-empty for unknown frequencies.
pub fn period_rule(frequency: &str) -> PeriodRule {
    PERIOD_RULES
        .iter()
        .find(|(name, _)| *name == frequency)
        .map(|(_, rule)| *rule)
        .unwrap_or(NO_PERIODS)
}
