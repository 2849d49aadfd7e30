//! Board service and project store seams.
//!
//! Handlers hold these as trait objects so the same controller code runs on
//! PostgreSQL ([`PgBoard`]) or fully in memory ([`crate::memory::MemoryBoard`]).

use async_trait::async_trait;
use kanban_core::board::ColumnDirection;
use kanban_core::types::DbId;

use crate::models::column::{Column, CreateColumn, UpdateColumn};
use crate::models::project::{CreateProject, Project};
use crate::repositories::{ColumnRepo, ProjectRepo};
use crate::DbPool;

/// Owns column persistence and board ordering.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Columns of a project in board order.
    async fn get_columns(&self, project_id: DbId) -> Result<Vec<Column>, sqlx::Error>;

    async fn get_column(&self, column_id: DbId) -> Result<Option<Column>, sqlx::Error>;

    /// Append a column.
    ///
    /// `None` means the column was not added: either the title is already
    /// used in the project or the project does not exist. Callers resolve
    /// the project first, so on a live project `None` is a duplicate title.
    async fn add_column(&self, input: &CreateColumn) -> Result<Option<Column>, sqlx::Error>;

    /// `None` means the column does not exist or the new title is taken.
    async fn update_column(
        &self,
        column_id: DbId,
        input: &UpdateColumn,
    ) -> Result<Option<Column>, sqlx::Error>;

    /// Remove a column, keeping sibling positions dense.
    async fn remove_column(&self, column_id: DbId) -> Result<bool, sqlx::Error>;

    async fn move_up(&self, project_id: DbId, column_id: DbId) -> Result<bool, sqlx::Error>;

    async fn move_down(&self, project_id: DbId, column_id: DbId) -> Result<bool, sqlx::Error>;

    /// Confirm the backing store is reachable.
    async fn health_check(&self) -> Result<(), sqlx::Error>;
}

/// Resolves and creates projects.
#[async_trait]
pub trait ProjectStore: Send + Sync {
    async fn find_project(&self, project_id: DbId) -> Result<Option<Project>, sqlx::Error>;

    /// Create a project whose board starts with `column_titles`, in order.
    async fn create_project(
        &self,
        input: &CreateProject,
        column_titles: &[String],
    ) -> Result<Project, sqlx::Error>;
}

/// PostgreSQL-backed board, delegating to the repositories.
#[derive(Clone)]
pub struct PgBoard {
    pool: DbPool,
}

impl PgBoard {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BoardService for PgBoard {
    async fn get_columns(&self, project_id: DbId) -> Result<Vec<Column>, sqlx::Error> {
        ColumnRepo::list_by_project(&self.pool, project_id).await
    }

    async fn get_column(&self, column_id: DbId) -> Result<Option<Column>, sqlx::Error> {
        ColumnRepo::find_by_id(&self.pool, column_id).await
    }

    async fn add_column(&self, input: &CreateColumn) -> Result<Option<Column>, sqlx::Error> {
        ColumnRepo::create(&self.pool, input).await
    }

    async fn update_column(
        &self,
        column_id: DbId,
        input: &UpdateColumn,
    ) -> Result<Option<Column>, sqlx::Error> {
        ColumnRepo::update(&self.pool, column_id, input).await
    }

    async fn remove_column(&self, column_id: DbId) -> Result<bool, sqlx::Error> {
        ColumnRepo::delete(&self.pool, column_id).await
    }

    async fn move_up(&self, project_id: DbId, column_id: DbId) -> Result<bool, sqlx::Error> {
        ColumnRepo::move_column(&self.pool, project_id, column_id, ColumnDirection::Up).await
    }

    async fn move_down(&self, project_id: DbId, column_id: DbId) -> Result<bool, sqlx::Error> {
        ColumnRepo::move_column(&self.pool, project_id, column_id, ColumnDirection::Down).await
    }

    async fn health_check(&self) -> Result<(), sqlx::Error> {
        crate::health_check(&self.pool).await
    }
}

#[async_trait]
impl ProjectStore for PgBoard {
    async fn find_project(&self, project_id: DbId) -> Result<Option<Project>, sqlx::Error> {
        ProjectRepo::find_by_id(&self.pool, project_id).await
    }

    async fn create_project(
        &self,
        input: &CreateProject,
        column_titles: &[String],
    ) -> Result<Project, sqlx::Error> {
        ProjectRepo::create(&self.pool, input, column_titles).await
    }
}
