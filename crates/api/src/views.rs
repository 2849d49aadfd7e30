//! View models rendered by the column controller.

use kanban_core::flash::Flash;
use kanban_core::validation::{ColumnForm, FieldErrors};
use kanban_db::models::column::Column;
use kanban_db::models::project::Project;
use serde::Serialize;

pub const TITLE_BOARD: &str = "Edit board";
pub const TITLE_NEW_COLUMN: &str = "Add a new column";
pub const TITLE_REMOVE_COLUMN: &str = "Remove a column from a board";

/// Board settings page: the project's columns in order.
#[derive(Debug, Serialize)]
pub struct ColumnListView {
    pub project: Project,
    pub columns: Vec<Column>,
    /// Token to send with move and remove requests.
    pub csrf_token: String,
    pub title: String,
}

/// Create or edit form, with any rejected input and its errors.
#[derive(Debug, Serialize)]
pub struct ColumnFormView {
    pub values: ColumnForm,
    pub errors: FieldErrors,
    pub project: Project,
    /// The stored column when editing.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub column: Option<Column>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
    pub title: String,
}

impl ColumnFormView {
    pub fn create(project: Project, values: ColumnForm, errors: FieldErrors) -> Self {
        Self {
            values: ColumnForm {
                project_id: Some(project.id),
                ..values
            },
            errors,
            project,
            column: None,
            flash: None,
            title: TITLE_NEW_COLUMN.to_string(),
        }
    }

    /// Edit form for `column`. Without `values` the stored column prefills it.
    pub fn edit(
        project: Project,
        column: Column,
        values: Option<ColumnForm>,
        errors: FieldErrors,
    ) -> Self {
        let values = ColumnForm {
            project_id: Some(project.id),
            ..values.unwrap_or_else(|| ColumnForm::from(&column))
        };
        Self {
            values,
            errors,
            project,
            title: format!("Edit column \"{}\"", column.title),
            column: Some(column),
            flash: None,
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }
}

/// Confirmation page shown before a column is removed.
#[derive(Debug, Serialize)]
pub struct ColumnRemovalView {
    pub column: Column,
    pub project: Project,
    pub csrf_token: String,
    pub title: String,
}
