//! Column form rules for creation and modification.

use std::num::IntErrorKind;

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::rules::FieldErrors;
use crate::board::TITLE_MAX_LENGTH;
use crate::types::DbId;

pub const MSG_REQUIRED: &str = "This value is required";
pub const MSG_TITLE_REQUIRED: &str = "The title is required";
pub const MSG_TITLE_TOO_LONG: &str = "The maximum length is 50 characters";
pub const MSG_NOT_INTEGER: &str = "This value must be an integer";
pub const MSG_NEGATIVE: &str = "This value must be greater than or equal to 0";
pub const MSG_TOO_LARGE: &str = "This value must be less than or equal to 2147483647";
pub const MSG_DUPLICATE_TITLE: &str = "Another column with the same title exists in the project";

/// Raw column form as submitted by the client.
///
/// Every field is kept as text so that bad input can be echoed back next to
/// its error message.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnForm {
    /// Owning project. Always taken from the route, never from the body.
    #[serde(skip_deserializing, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<DbId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub task_limit: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

/// A column form that passed validation.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct ColumnInput {
    #[validate(length(max = TITLE_MAX_LENGTH, message = "The maximum length is 50 characters"))]
    pub title: String,
    /// 0 means unlimited.
    #[validate(range(min = 0, message = "This value must be greater than or equal to 0"))]
    pub task_limit: i32,
    pub description: Option<String>,
}

/// Validate a form for a new column in `project_id`.
pub fn validate_creation(project_id: DbId, form: &ColumnForm) -> Result<ColumnInput, FieldErrors> {
    validate_with_owner("project_id", project_id, form)
}

/// Validate a form updating the column `column_id`.
pub fn validate_modification(column_id: DbId, form: &ColumnForm) -> Result<ColumnInput, FieldErrors> {
    validate_with_owner("id", column_id, form)
}

fn validate_with_owner(
    id_field: &str,
    id: DbId,
    form: &ColumnForm,
) -> Result<ColumnInput, FieldErrors> {
    let mut errors = FieldErrors::new();

    if id <= 0 {
        errors.add(id_field, MSG_REQUIRED);
    }

    let title = form.title.as_deref().map(str::trim).unwrap_or_default();
    if title.is_empty() {
        errors.add("title", MSG_TITLE_REQUIRED);
    }

    let task_limit = match form.task_limit.as_deref().map(str::trim) {
        None | Some("") => 0,
        Some(raw) => match raw.parse::<i32>() {
            Ok(limit) => limit,
            Err(err) => {
                let message = match err.kind() {
                    IntErrorKind::PosOverflow => MSG_TOO_LARGE,
                    IntErrorKind::NegOverflow => MSG_NEGATIVE,
                    _ => MSG_NOT_INTEGER,
                };
                errors.add("task_limit", message);
                0
            }
        },
    };

    let description = form
        .description
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string);

    let input = ColumnInput {
        title: title.to_string(),
        task_limit,
        description,
    };

    if let Err(validation_errors) = input.validate() {
        errors.extend_from(&validation_errors);
    }

    if errors.is_empty() {
        Ok(input)
    } else {
        Err(errors)
    }
}
