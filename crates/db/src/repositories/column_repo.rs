//! Repository for the `board_columns` table.

use kanban_core::board::{next_position, swap_target, ColumnDirection};
use kanban_core::types::DbId;
use sqlx::PgPool;

use super::{is_unique_violation, lock_project, UQ_COLUMN_TITLE};
use crate::models::column::{Column, CreateColumn, UpdateColumn};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, project_id, title, position, task_limit, description, created_at, updated_at";

/// Provides CRUD and ordering operations for board columns.
pub struct ColumnRepo;

impl ColumnRepo {
    /// Append a column at the end of its project's board.
    ///
    /// Returns `None` if the project already has a column with the same title
    /// (case-sensitive) or if the project does not exist.
    pub async fn create(pool: &PgPool, input: &CreateColumn) -> Result<Option<Column>, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !lock_project(&mut tx, input.project_id).await? {
            return Ok(None);
        }

        let max_position: Option<i32> =
            sqlx::query_scalar("SELECT MAX(position) FROM board_columns WHERE project_id = $1")
                .bind(input.project_id)
                .fetch_one(&mut *tx)
                .await?;

        let query = format!(
            "INSERT INTO board_columns (project_id, title, position, task_limit, description) \
             VALUES ($1, $2, $3, $4, $5) \
             ON CONFLICT ON CONSTRAINT {UQ_COLUMN_TITLE} DO NOTHING \
             RETURNING {COLUMNS}"
        );
        let column = sqlx::query_as::<_, Column>(&query)
            .bind(input.project_id)
            .bind(&input.title)
            .bind(next_position(max_position))
            .bind(input.task_limit)
            .bind(&input.description)
            .fetch_optional(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(column)
    }

    /// Find a column by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Column>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM board_columns WHERE id = $1");
        sqlx::query_as::<_, Column>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's columns in board order.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Column>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM board_columns WHERE project_id = $1 ORDER BY position, id"
        );
        sqlx::query_as::<_, Column>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a column's title, task limit and description.
    ///
    /// Returns `None` if no row with the given `id` exists or if another
    /// column of the same project already uses the new title. Keeping the
    /// current title is never a conflict.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateColumn,
    ) -> Result<Option<Column>, sqlx::Error> {
        let query = format!(
            "UPDATE board_columns c SET \
                title = $2, \
                task_limit = $3, \
                description = $4, \
                updated_at = NOW() \
             WHERE c.id = $1 \
               AND NOT EXISTS ( \
                   SELECT 1 FROM board_columns s \
                   WHERE s.project_id = c.project_id AND s.title = $2 AND s.id <> c.id \
               ) \
             RETURNING {COLUMNS}"
        );
        let result = sqlx::query_as::<_, Column>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(input.task_limit)
            .bind(&input.description)
            .fetch_optional(pool)
            .await;

        match result {
            // A concurrent rename can slip past the NOT EXISTS check.
            Err(err) if is_unique_violation(&err, UQ_COLUMN_TITLE) => Ok(None),
            other => other,
        }
    }

    /// Delete a column and close the gap it leaves in the board order.
    ///
    /// Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let Some(column) = Self::find_by_id(pool, id).await? else {
            return Ok(false);
        };

        let mut tx = pool.begin().await?;

        if !lock_project(&mut tx, column.project_id).await? {
            return Ok(false);
        }

        let removed: Option<i32> = sqlx::query_scalar(
            "DELETE FROM board_columns WHERE id = $1 AND project_id = $2 RETURNING position",
        )
        .bind(id)
        .bind(column.project_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(position) = removed else {
            return Ok(false);
        };

        sqlx::query(
            "UPDATE board_columns SET position = position - 1, updated_at = NOW() \
             WHERE project_id = $1 AND position > $2",
        )
        .bind(column.project_id)
        .bind(position)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }

    /// Swap a column with its neighbour in `direction`.
    ///
    /// Returns `false` when the column is not on the project's board or is
    /// already at that edge of the board.
    pub async fn move_column(
        pool: &PgPool,
        project_id: DbId,
        id: DbId,
        direction: ColumnDirection,
    ) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;

        if !lock_project(&mut tx, project_id).await? {
            return Ok(false);
        }

        let position: Option<i32> = sqlx::query_scalar(
            "SELECT position FROM board_columns WHERE id = $1 AND project_id = $2",
        )
        .bind(id)
        .bind(project_id)
        .fetch_optional(&mut *tx)
        .await?;

        let Some(position) = position else {
            return Ok(false);
        };

        let count: i64 =
            sqlx::query_scalar("SELECT COUNT(*) FROM board_columns WHERE project_id = $1")
                .bind(project_id)
                .fetch_one(&mut *tx)
                .await?;

        let Some(target) = swap_target(position, direction, count as usize) else {
            return Ok(false);
        };

        sqlx::query(
            "UPDATE board_columns SET \
                position = CASE WHEN id = $2 THEN $4 ELSE $3 END, \
                updated_at = NOW() \
             WHERE project_id = $1 AND (id = $2 OR position = $4)",
        )
        .bind(project_id)
        .bind(id)
        .bind(position)
        .bind(target)
        .execute(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(true)
    }
}
