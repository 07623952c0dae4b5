//! Staged validation of the scheduler-options payload.
//!
//! The payload arrives as a JSON document encoded into a string field on
//! the scheduled-report entity. Validation runs in stages: decode, then
//! frequency membership, then the frequency-option object, then the period
//! and period option. A failed stage appends its error and short-circuits;
//! later stages never run against a value an earlier stage rejected.

use serde_json::Value;
use tracing::debug;

use crate::codes::{endpoints, CodeSetCache, EnumSource};

use super::entity::{EntityValidator, FieldValidator};
use super::errors::ValidationError;
use super::matchers::{self, is_empty_value, scalar_text};
use super::rules::{self, ValueSpec, FREQ_WEEKLY};

/// Entity field carrying the payload, and the prefix of every error path.
pub const SCHEDULER_OPTIONS: &str = "scheduler_options";

const FREQUENCY_FIELD: &str = "scheduler_options.frequency";
const FREQUENCY_OPTION_FIELD: &str = "scheduler_options.frequency_option";
const PERIOD_FIELD: &str = "scheduler_options.period";
const PERIOD_OPTION_FIELD: &str = "scheduler_options.period_option";

/// Validates scheduler-options payloads against the frequency rule tables.
///
/// One instance accumulates errors across calls and memoizes every code set
/// it fetches, so repeated validations against the same source never refetch
/// an endpoint.
pub struct SchedulerOptionsValidator<S: EnumSource> {
    codes: CodeSetCache<S>,
    errors: Vec<ValidationError>,
}

impl<S: EnumSource> SchedulerOptionsValidator<S> {
    pub fn new(source: S) -> Self {
        Self {
            codes: CodeSetCache::new(source),
            errors: Vec::new(),
        }
    }

    /// Accumulated errors, in the order they were found.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Drains the accumulated errors, leaving the validator reusable.
    pub fn take_errors(&mut self) -> Vec<ValidationError> {
        std::mem::take(&mut self.errors)
    }

    /// Runs the staged checks against one raw field value. Returns `true`
    /// only when every stage passes; failures are recorded in [`errors`].
    ///
    /// [`errors`]: Self::errors
    pub fn validate_scheduler_options(&mut self, raw: &Value) -> bool {
        let Some(options) = decode(raw) else {
            debug!(field = SCHEDULER_OPTIONS, "payload failed to decode");
            self.errors.push(ValidationError::cant_decode(SCHEDULER_OPTIONS));
            return false;
        };

        let frequency = options.get("frequency").cloned().unwrap_or(Value::Null);
        let known = self.codes.lookup(endpoints::FREQUENCY);
        if !matchers::value_in_set(&frequency, known, FREQUENCY_FIELD, &mut self.errors) {
            return false;
        }
        let frequency_name = frequency.as_str().unwrap_or_default();

        let option = options
            .get("frequency_option")
            .cloned()
            .unwrap_or(Value::Null);
        if !self.validate_frequency_option(frequency_name, &option) {
            return false;
        }

        let period = options.get("period").cloned().unwrap_or(Value::Null);
        let period_option = options.get("period_option").cloned().unwrap_or(Value::Null);
        if !self.validate_period_and_options(frequency_name, &period, &period_option) {
            return false;
        }

        debug!(frequency = frequency_name, "scheduler options accepted");
        true
    }

    /// Checks the option object against the frequency's admissible shapes.
    fn validate_frequency_option(&mut self, frequency: &str, option: &Value) -> bool {
        let shapes = rules::option_shapes(frequency);

        // Shapeless frequencies require the option to be absent.
        if shapes.is_empty() {
            if is_empty_value(option) {
                return true;
            }
            self.errors
                .push(ValidationError::expected_empty(FREQUENCY_OPTION_FIELD));
            return false;
        }

        let Some(fields) = option.as_object() else {
            self.errors
                .push(ValidationError::expected_object(FREQUENCY_OPTION_FIELD));
            return false;
        };

        // Unknown option names are rejected before any shape matching.
        let names = Value::Array(fields.keys().cloned().map(Value::String).collect());
        let known = self.codes.lookup(endpoints::FREQUENCY_OPTION);
        if !matchers::value_in_set(&names, known, FREQUENCY_OPTION_FIELD, &mut self.errors) {
            return false;
        }

        // The provided field-name set must match one shape exactly.
        let shape = shapes.iter().find(|shape| {
            shape.fields.len() == fields.len()
                && shape.fields.iter().all(|(name, _)| fields.contains_key(*name))
        });
        let Some(shape) = shape else {
            self.errors
                .push(ValidationError::shape_mismatch(FREQUENCY_OPTION_FIELD));
            return false;
        };

        for (name, value) in fields {
            let allowed = match shape.value_spec(name) {
                Some(spec) => self.resolve_values(spec),
                None => Vec::new(),
            };
            if allowed.is_empty() {
                self.errors
                    .push(ValidationError::invalid(FREQUENCY_OPTION_FIELD));
                return false;
            }
            if !self.check_values(frequency, &allowed, value) {
                return false;
            }
        }

        true
    }

    /// Expands a value spec into the concrete list of admissible codes.
    fn resolve_values(&mut self, spec: &ValueSpec) -> Vec<String> {
        match spec {
            ValueSpec::Literal(values) => values.iter().map(|v| v.to_string()).collect(),
            ValueSpec::Range(lo, hi) => (*lo..=*hi).map(|n| n.to_string()).collect(),
            ValueSpec::Codes(endpoint) => self.codes.lookup(endpoint).to_vec(),
        }
    }

    /// Weekly day lists arrive comma-separated and every entry must be a
    /// known code; every other frequency uses the plain membership check.
    fn check_values(&mut self, frequency: &str, allowed: &[String], value: &Value) -> bool {
        if frequency == FREQ_WEEKLY {
            let text = scalar_text(value).unwrap_or_default();
            let all_known = text
                .split(',')
                .all(|part| allowed.iter().any(|code| code == part));
            if !all_known {
                self.errors
                    .push(ValidationError::invalid(FREQUENCY_OPTION_FIELD));
                return false;
            }
            return true;
        }
        matchers::value_in_set(value, allowed, FREQUENCY_OPTION_FIELD, &mut self.errors)
    }

    /// Checks the period and period option against the frequency's pattern
    /// sets. An empty pattern set demands an absent value.
    fn validate_period_and_options(
        &mut self,
        frequency: &str,
        period: &Value,
        period_option: &Value,
    ) -> bool {
        let rule = rules::period_rule(frequency);

        if rule.period.is_empty() && !is_empty_value(period) {
            self.errors
                .push(ValidationError::expected_empty(PERIOD_FIELD));
            return false;
        }
        if rule.period_option.is_empty() && !is_empty_value(period_option) {
            self.errors
                .push(ValidationError::expected_empty(PERIOD_OPTION_FIELD));
            return false;
        }
        if !rule.period.is_empty()
            && !matchers::pattern_value_in_set(period, rule.period, PERIOD_FIELD, &mut self.errors)
        {
            return false;
        }

        // A Weekly month-to-date report carries no period option at all;
        // the pattern check below is bypassed.
        if frequency == FREQ_WEEKLY && period.as_str() == Some("MTD") {
            if is_empty_value(period_option) {
                return true;
            }
            self.errors
                .push(ValidationError::expected_empty(PERIOD_OPTION_FIELD));
            return false;
        }

        if !rule.period_option.is_empty()
            && !matchers::pattern_value_in_set(
                period_option,
                rule.period_option,
                PERIOD_OPTION_FIELD,
                &mut self.errors,
            )
        {
            return false;
        }

        true
    }
}

impl<S: EnumSource> FieldValidator for SchedulerOptionsValidator<S> {
    fn validate(&mut self, value: &Value, errors: &mut Vec<ValidationError>) -> bool {
        let ok = self.validate_scheduler_options(value);
        errors.append(&mut self.errors);
        ok
    }
}

/// Entity validator for scheduled-report models: the scheduler-options
/// field gets the staged validator, everything else passes through.
pub fn scheduled_report_validator<S: EnumSource + 'static>(source: S) -> EntityValidator {
    let mut validator = EntityValidator::new();
    validator.register(
        SCHEDULER_OPTIONS,
        Box::new(SchedulerOptionsValidator::new(source)),
    );
    validator
}

/// Decodes the raw field: it must be a string whose text parses as JSON and
/// yields a populated value.
fn decode(raw: &Value) -> Option<Value> {
    let text = raw.as_str()?;
    let parsed: Value = serde_json::from_str(text).ok()?;
    if is_empty_value(&parsed) {
        return None;
    }
    Some(parsed)
}
