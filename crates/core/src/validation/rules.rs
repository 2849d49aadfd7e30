//! Field-keyed validation errors.

use std::collections::BTreeMap;

use serde::Serialize;
use validator::ValidationErrors;

/// Error messages keyed by form field name, ready to be shown next to the
/// offending inputs. Fields and their messages keep a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FieldErrors(BTreeMap<String, Vec<String>>);

impl FieldErrors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` against `field`.
    pub fn add(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.0.entry(field.into()).or_default().push(message.into());
    }

    /// Messages recorded for `field`, empty if none.
    pub fn get(&self, field: &str) -> &[String] {
        self.0.get(field).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Fold the field errors reported by a `validator` derive into this set.
    ///
    /// Errors without a custom message fall back to the validator code.
    pub fn extend_from(&mut self, errors: &ValidationErrors) {
        for (field, field_errors) in errors.field_errors() {
            for error in field_errors.iter() {
                let message = match &error.message {
                    Some(message) => message.to_string(),
                    None => error.code.to_string(),
                };
                self.add(field.to_string(), message);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_groups_messages_per_field() {
        let mut errors = FieldErrors::new();
        errors.add("title", "first");
        errors.add("title", "second");
        errors.add("task_limit", "third");

        assert_eq!(errors.get("title"), ["first", "second"]);
        assert_eq!(errors.get("task_limit"), ["third"]);
        assert!(errors.get("description").is_empty());
    }

    #[test]
    fn serializes_as_plain_map() {
        let mut errors = FieldErrors::new();
        errors.add("title", "The title is required");

        let json = serde_json::to_value(&errors).unwrap();
        assert_eq!(json, serde_json::json!({"title": ["The title is required"]}));
    }
}
