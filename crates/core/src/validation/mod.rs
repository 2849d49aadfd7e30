//! Form validation.
//!
//! Field-level error collection plus the column form rules. All pure logic,
//! no database access.

pub mod column;
pub mod rules;

pub use column::{validate_creation, validate_modification, ColumnForm, ColumnInput};
pub use rules::FieldErrors;
