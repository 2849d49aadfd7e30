//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod column_repo;
pub mod project_repo;

pub use column_repo::ColumnRepo;
pub use project_repo::ProjectRepo;

/// PostgreSQL `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Column titles are unique within a project.
pub const UQ_COLUMN_TITLE: &str = "uq_board_columns_project_title";

/// Column positions are unique within a project. Checked at commit.
pub const UQ_COLUMN_POSITION: &str = "uq_board_columns_project_position";

/// Whether `err` is a unique constraint violation on `constraint`.
pub fn is_unique_violation(err: &sqlx::Error, constraint: &str) -> bool {
    match err {
        sqlx::Error::Database(db_err) => {
            db_err.code().as_deref() == Some(UNIQUE_VIOLATION)
                && db_err.constraint() == Some(constraint)
        }
        _ => false,
    }
}

/// Lock a project row for the rest of the transaction.
///
/// Every statement that changes column positions takes this lock first, so
/// concurrent adds, moves and removals on one board run one after another.
/// Returns `false` if the project does not exist.
pub(crate) async fn lock_project(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    project_id: kanban_core::types::DbId,
) -> Result<bool, sqlx::Error> {
    let locked: Option<i64> = sqlx::query_scalar("SELECT id FROM projects WHERE id = $1 FOR UPDATE")
        .bind(project_id)
        .fetch_optional(&mut **tx)
        .await?;
    Ok(locked.is_some())
}
