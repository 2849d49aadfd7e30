//! In-process board used by tests and by the server when no database is
//! configured.
//!
//! Same semantics as [`crate::board::PgBoard`]: per-project case-sensitive
//! title uniqueness and dense 1-based positions. A single mutex serializes
//! every operation.

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;
use kanban_core::board::{next_position, swap_target, ColumnDirection};
use kanban_core::types::DbId;
use tokio::sync::Mutex;

use crate::board::{BoardService, ProjectStore};
use crate::models::column::{Column, CreateColumn, UpdateColumn};
use crate::models::project::{CreateProject, Project};

#[derive(Default)]
struct MemoryState {
    last_project_id: DbId,
    last_column_id: DbId,
    projects: BTreeMap<DbId, Project>,
    columns: BTreeMap<DbId, Column>,
}

impl MemoryState {
    /// Columns of a project sorted by position.
    fn board(&self, project_id: DbId) -> Vec<&Column> {
        let mut board: Vec<&Column> = self
            .columns
            .values()
            .filter(|c| c.project_id == project_id)
            .collect();
        board.sort_by_key(|c| (c.position, c.id));
        board
    }

    fn title_taken(&self, project_id: DbId, title: &str, except: Option<DbId>) -> bool {
        self.columns
            .values()
            .any(|c| c.project_id == project_id && c.title == title && Some(c.id) != except)
    }

    fn insert_column(&mut self, input: &CreateColumn) -> Option<Column> {
        if !self.projects.contains_key(&input.project_id)
            || self.title_taken(input.project_id, &input.title, None)
        {
            return None;
        }

        let max_position = self.board(input.project_id).last().map(|c| c.position);
        self.last_column_id += 1;
        let now = Utc::now();
        let column = Column {
            id: self.last_column_id,
            project_id: input.project_id,
            title: input.title.clone(),
            position: next_position(max_position),
            task_limit: input.task_limit,
            description: input.description.clone(),
            created_at: now,
            updated_at: now,
        };
        self.columns.insert(column.id, column.clone());
        Some(column)
    }

    fn move_column(&mut self, project_id: DbId, column_id: DbId, direction: ColumnDirection) -> bool {
        let board = self.board(project_id);
        let Some(position) = board.iter().find(|c| c.id == column_id).map(|c| c.position) else {
            return false;
        };
        let Some(target) = swap_target(position, direction, board.len()) else {
            return false;
        };
        let Some(neighbour_id) = board.iter().find(|c| c.position == target).map(|c| c.id) else {
            return false;
        };

        let now = Utc::now();
        for (id, new_position) in [(column_id, target), (neighbour_id, position)] {
            if let Some(column) = self.columns.get_mut(&id) {
                column.position = new_position;
                column.updated_at = now;
            }
        }
        true
    }
}

/// Board and project store kept entirely in memory.
#[derive(Default)]
pub struct MemoryBoard {
    state: Mutex<MemoryState>,
}

impl MemoryBoard {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl BoardService for MemoryBoard {
    async fn get_columns(&self, project_id: DbId) -> Result<Vec<Column>, sqlx::Error> {
        let state = self.state.lock().await;
        Ok(state.board(project_id).into_iter().cloned().collect())
    }

    async fn get_column(&self, column_id: DbId) -> Result<Option<Column>, sqlx::Error> {
        let state = self.state.lock().await;
        Ok(state.columns.get(&column_id).cloned())
    }

    async fn add_column(&self, input: &CreateColumn) -> Result<Option<Column>, sqlx::Error> {
        let mut state = self.state.lock().await;
        Ok(state.insert_column(input))
    }

    async fn update_column(
        &self,
        column_id: DbId,
        input: &UpdateColumn,
    ) -> Result<Option<Column>, sqlx::Error> {
        let mut state = self.state.lock().await;
        let Some(project_id) = state.columns.get(&column_id).map(|c| c.project_id) else {
            return Ok(None);
        };
        if state.title_taken(project_id, &input.title, Some(column_id)) {
            return Ok(None);
        }

        let column = state.columns.get_mut(&column_id).map(|column| {
            column.title = input.title.clone();
            column.task_limit = input.task_limit;
            column.description = input.description.clone();
            column.updated_at = Utc::now();
            column.clone()
        });
        Ok(column)
    }

    async fn remove_column(&self, column_id: DbId) -> Result<bool, sqlx::Error> {
        let mut state = self.state.lock().await;
        let Some(removed) = state.columns.remove(&column_id) else {
            return Ok(false);
        };

        let now = Utc::now();
        for column in state.columns.values_mut() {
            if column.project_id == removed.project_id && column.position > removed.position {
                column.position -= 1;
                column.updated_at = now;
            }
        }
        Ok(true)
    }

    async fn move_up(&self, project_id: DbId, column_id: DbId) -> Result<bool, sqlx::Error> {
        let mut state = self.state.lock().await;
        Ok(state.move_column(project_id, column_id, ColumnDirection::Up))
    }

    async fn move_down(&self, project_id: DbId, column_id: DbId) -> Result<bool, sqlx::Error> {
        let mut state = self.state.lock().await;
        Ok(state.move_column(project_id, column_id, ColumnDirection::Down))
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        Ok(())
    }
}

#[async_trait]
impl ProjectStore for MemoryBoard {
    async fn find_project(&self, project_id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let state = self.state.lock().await;
        Ok(state.projects.get(&project_id).cloned())
    }

    async fn create_project(
        &self,
        input: &CreateProject,
        column_titles: &[String],
    ) -> Result<Project, sqlx::Error> {
        let mut state = self.state.lock().await;
        state.last_project_id += 1;
        let now = Utc::now();
        let project = Project {
            id: state.last_project_id,
            name: input.name.clone(),
            created_at: now,
            updated_at: now,
        };
        state.projects.insert(project.id, project.clone());

        for title in column_titles {
            state.insert_column(&CreateColumn {
                project_id: project.id,
                title: title.clone(),
                task_limit: 0,
                description: None,
            });
        }
        Ok(project)
    }
}
