//! Entity Dispatch Tests
//!
//! Tests for per-field strategy dispatch on entity models:
//! - Strategies run only for the fields they are registered on
//! - A failing field does not stop the walk
//! - The scheduled-report validator wires the scheduler-options strategy
//! - Strategy errors land in the entity-level error list

use schedopts::codes::StaticEnumSource;
use schedopts::validator::{
    scheduled_report_validator, specified, EntityValidator, ErrorKind, FieldValidator,
    ValidationError,
};
use serde_json::{json, Map, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn model(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap()
}

/// Encodes a scheduler-options payload the way the entity stores it.
fn raw(payload: Value) -> Value {
    Value::String(payload.to_string())
}

/// Strategy that requires its field to be populated.
struct Required;

impl FieldValidator for Required {
    fn validate(&mut self, value: &Value, errors: &mut Vec<ValidationError>) -> bool {
        specified(value, "report.title", errors)
    }
}

// =============================================================================
// Scheduled Report Tests
// =============================================================================

/// A well-formed scheduler-options field passes entity validation.
#[test]
fn test_scheduled_report_accepts_valid_options() {
    let mut validator = scheduled_report_validator(StaticEnumSource::scheduler_defaults());

    let entity = model(json!({
        "title": "Weekly revenue",
        "scheduler_options": raw(json!({
            "frequency": "Weekly",
            "frequency_option": {"day_of_week": "Mon"},
            "period": "2 Weeks",
            "period_option": "CAL"
        }))
    }));

    assert!(validator.validate(&entity));
    assert!(validator.errors().is_empty());
}

/// A bad scheduler-options field fails the entity with its own error.
#[test]
fn test_scheduled_report_rejects_bad_options() {
    let mut validator = scheduled_report_validator(StaticEnumSource::scheduler_defaults());

    let entity = model(json!({
        "title": "Broken report",
        "scheduler_options": raw(json!({"frequency": "Fortnightly"}))
    }));

    assert!(!validator.validate(&entity));
    assert_eq!(validator.errors().len(), 1);
    assert_eq!(validator.errors()[0].field, "scheduler_options.frequency");
    assert_eq!(validator.errors()[0].kind, ErrorKind::NotInAllowedSet);
}

/// Fields without a registered strategy are ignored.
#[test]
fn test_unregistered_fields_pass_through() {
    let mut validator = scheduled_report_validator(StaticEnumSource::scheduler_defaults());

    let entity = model(json!({
        "title": 42,
        "recipients": null
    }));

    assert!(validator.validate(&entity));
    assert!(validator.errors().is_empty());
}

/// An absent scheduler-options field is not validated at all.
#[test]
fn test_absent_field_is_not_validated() {
    let mut validator = scheduled_report_validator(StaticEnumSource::scheduler_defaults());

    assert!(validator.validate(&model(json!({"title": "No schedule yet"}))));
}

// =============================================================================
// Dispatch Semantics Tests
// =============================================================================

/// Every failing field is reported in one pass.
#[test]
fn test_walk_reports_every_failing_field() {
    let mut validator = scheduled_report_validator(StaticEnumSource::scheduler_defaults());
    validator.register("title", Box::new(Required));

    let entity = model(json!({
        "title": "",
        "scheduler_options": raw(json!({"frequency": "Fortnightly"}))
    }));

    assert!(!validator.validate(&entity));
    assert_eq!(validator.errors().len(), 2);

    let fields: Vec<&str> = validator
        .errors()
        .iter()
        .map(|error| error.field.as_str())
        .collect();
    assert!(fields.contains(&"report.title"));
    assert!(fields.contains(&"scheduler_options.frequency"));
}

/// Replacing a strategy keeps only the newest registration.
#[test]
fn test_register_replaces_previous_strategy() {
    struct AlwaysFail;

    impl FieldValidator for AlwaysFail {
        fn validate(&mut self, _value: &Value, errors: &mut Vec<ValidationError>) -> bool {
            errors.push(ValidationError::invalid("title"));
            false
        }
    }

    struct AlwaysPass;

    impl FieldValidator for AlwaysPass {
        fn validate(&mut self, _value: &Value, _errors: &mut Vec<ValidationError>) -> bool {
            true
        }
    }

    let mut validator = EntityValidator::new();
    validator.register("title", Box::new(AlwaysFail));
    validator.register("title", Box::new(AlwaysPass));

    assert!(validator.validate(&model(json!({"title": "x"}))));
    assert!(validator.errors().is_empty());
}

/// Draining the errors leaves the validator reusable.
#[test]
fn test_take_errors_resets_the_entity_list() {
    let mut validator = scheduled_report_validator(StaticEnumSource::scheduler_defaults());

    validator.validate(&model(json!({
        "scheduler_options": raw(json!({"frequency": "Nope"}))
    })));
    assert_eq!(validator.take_errors().len(), 1);

    assert!(validator.validate(&model(json!({
        "scheduler_options": raw(json!({"frequency": "Bi-Monthly"}))
    }))));
    assert!(validator.errors().is_empty());
}
