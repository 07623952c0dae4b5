//! Per-field entity validation.
//!
//! An entity model is a flat map of field name to raw value. A strategy is
//! registered per field name; [`EntityValidator::validate`] walks the model
//! and runs the strategy for each registered field it finds. A failing
//! field does not stop the walk, so one pass reports every bad field.

use std::collections::HashMap;

use serde_json::{Map, Value};

use super::errors::ValidationError;
use super::matchers;

/// Validation strategy for one entity field.
pub trait FieldValidator {
    /// Validates one field value, appending failures to `errors`.
    fn validate(&mut self, value: &Value, errors: &mut Vec<ValidationError>) -> bool;
}

/// Field-dispatching entity validator.
pub struct EntityValidator {
    fields: HashMap<String, Box<dyn FieldValidator>>,
    errors: Vec<ValidationError>,
}

impl EntityValidator {
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
            errors: Vec::new(),
        }
    }

    /// Registers the strategy responsible for one field name. Registering
    /// the same name again replaces the previous strategy.
    pub fn register(&mut self, field_name: impl Into<String>, validator: Box<dyn FieldValidator>) {
        self.fields.insert(field_name.into(), validator);
    }

    /// Validates every registered field present in `model`. Fields without
    /// a registered strategy are ignored.
    pub fn validate(&mut self, model: &Map<String, Value>) -> bool {
        let mut result = true;
        for (name, value) in model {
            if let Some(validator) = self.fields.get_mut(name) {
                if !validator.validate(value, &mut self.errors) {
                    result = false;
                }
            }
        }
        result
    }

    /// Accumulated errors, in the order they were reported.
    pub fn errors(&self) -> &[ValidationError] {
        &self.errors
    }

    /// Drains the accumulated errors, leaving the validator reusable.
    pub fn take_errors(&mut self) -> Vec<ValidationError> {
        std::mem::take(&mut self.errors)
    }
}

impl Default for EntityValidator {
    fn default() -> Self {
        Self::new()
    }
}

/// Requires a populated value: null, `false`, numeric zero, `""` and `[]`
/// all count as unspecified.
pub fn specified(value: &Value, field: &str, errors: &mut Vec<ValidationError>) -> bool {
    if matchers::is_empty_value(value) {
        errors.push(ValidationError::not_specified(field));
        return false;
    }
    true
}
