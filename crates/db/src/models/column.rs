//! Board column entity model and DTOs.

use kanban_core::types::{DbId, Timestamp};
use kanban_core::validation::{ColumnForm, ColumnInput};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `board_columns` table.
#[derive(Debug, Clone, PartialEq, Eq, FromRow, Serialize)]
pub struct Column {
    pub id: DbId,
    pub project_id: DbId,
    pub title: String,
    /// 1-based, dense within the project.
    pub position: i32,
    /// 0 means unlimited.
    pub task_limit: i32,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for appending a column to a project's board.
#[derive(Debug, Clone)]
pub struct CreateColumn {
    pub project_id: DbId,
    pub title: String,
    pub task_limit: i32,
    pub description: Option<String>,
}

impl CreateColumn {
    pub fn new(project_id: DbId, input: ColumnInput) -> Self {
        Self {
            project_id,
            title: input.title,
            task_limit: input.task_limit,
            description: input.description,
        }
    }
}

/// DTO for editing a column. Position and project are not editable here.
#[derive(Debug, Clone)]
pub struct UpdateColumn {
    pub title: String,
    pub task_limit: i32,
    pub description: Option<String>,
}

impl From<ColumnInput> for UpdateColumn {
    fn from(input: ColumnInput) -> Self {
        Self {
            title: input.title,
            task_limit: input.task_limit,
            description: input.description,
        }
    }
}

/// Prefill an edit form with the stored values.
impl From<&Column> for ColumnForm {
    fn from(column: &Column) -> Self {
        Self {
            project_id: Some(column.project_id),
            title: Some(column.title.clone()),
            task_limit: Some(column.task_limit.to_string()),
            description: column.description.clone(),
        }
    }
}
