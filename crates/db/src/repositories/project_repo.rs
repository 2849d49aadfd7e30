//! Repository for the `projects` table.

use kanban_core::board::next_position;
use kanban_core::types::DbId;
use sqlx::PgPool;

use super::UQ_COLUMN_TITLE;
use crate::models::project::{CreateProject, Project};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, created_at, updated_at";

/// Provides CRUD operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Insert a new project together with its initial board.
    ///
    /// `column_titles` become the board columns in the given order.
    /// Duplicate titles are skipped.
    pub async fn create(
        pool: &PgPool,
        input: &CreateProject,
        column_titles: &[String],
    ) -> Result<Project, sqlx::Error> {
        let mut tx = pool.begin().await?;

        let query = format!("INSERT INTO projects (name) VALUES ($1) RETURNING {COLUMNS}");
        let project = sqlx::query_as::<_, Project>(&query)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;

        let mut last_position = None;
        for title in column_titles {
            let position = next_position(last_position);
            let query = format!(
                "INSERT INTO board_columns (project_id, title, position) \
                 VALUES ($1, $2, $3) \
                 ON CONFLICT ON CONSTRAINT {UQ_COLUMN_TITLE} DO NOTHING"
            );
            let inserted = sqlx::query(&query)
                .bind(project.id)
                .bind(title)
                .bind(position)
                .execute(&mut *tx)
                .await?;
            if inserted.rows_affected() > 0 {
                last_position = Some(position);
            }
        }

        tx.commit().await?;
        Ok(project)
    }

    /// Find a project by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
