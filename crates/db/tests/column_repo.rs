//! Integration tests for the PostgreSQL board repositories.
//!
//! These need a live database (`DATABASE_URL`), so they are ignored by
//! default. Run with `cargo test -p kanban-db -- --ignored`.

use kanban_core::board::ColumnDirection;
use kanban_db::models::column::{CreateColumn, UpdateColumn};
use kanban_db::models::project::CreateProject;
use kanban_db::repositories::{ColumnRepo, ProjectRepo};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

async fn new_project(pool: &PgPool, titles: &[&str]) -> i64 {
    let titles: Vec<String> = titles.iter().map(|s| s.to_string()).collect();
    ProjectRepo::create(
        pool,
        &CreateProject {
            name: "Board".to_string(),
        },
        &titles,
    )
    .await
    .unwrap()
    .id
}

fn new_column(project_id: i64, title: &str) -> CreateColumn {
    CreateColumn {
        project_id,
        title: title.to_string(),
        task_limit: 0,
        description: None,
    }
}

async fn order(pool: &PgPool, project_id: i64) -> Vec<(String, i32)> {
    ColumnRepo::list_by_project(pool, project_id)
        .await
        .unwrap()
        .into_iter()
        .map(|c| (c.title, c.position))
        .collect()
}

// ---------------------------------------------------------------------------
// Create
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn project_starts_with_default_board(pool: PgPool) {
    let project_id = new_project(&pool, &["Backlog", "Ready", "Done"]).await;
    assert_eq!(
        order(&pool, project_id).await,
        [
            ("Backlog".to_string(), 1),
            ("Ready".to_string(), 2),
            ("Done".to_string(), 3)
        ]
    );
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_appends_and_rejects_duplicates(pool: PgPool) {
    let project_id = new_project(&pool, &["Backlog"]).await;

    let review = ColumnRepo::create(&pool, &new_column(project_id, "Review"))
        .await
        .unwrap()
        .expect("unique title should be inserted");
    assert_eq!(review.position, 2);

    let duplicate = ColumnRepo::create(&pool, &new_column(project_id, "Backlog"))
        .await
        .unwrap();
    assert!(duplicate.is_none());
    assert_eq!(order(&pool, project_id).await.len(), 2);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn create_in_unknown_project_inserts_nothing(pool: PgPool) {
    let created = ColumnRepo::create(&pool, &new_column(4242, "Backlog"))
        .await
        .unwrap();
    assert!(created.is_none());
    assert!(order(&pool, 4242).await.is_empty());
}

// ---------------------------------------------------------------------------
// Update
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn update_allows_own_title_and_rejects_sibling_title(pool: PgPool) {
    let project_id = new_project(&pool, &["Backlog", "Done"]).await;
    let columns = ColumnRepo::list_by_project(&pool, project_id).await.unwrap();

    let same_title = UpdateColumn {
        title: "Backlog".to_string(),
        task_limit: 5,
        description: None,
    };
    let updated = ColumnRepo::update(&pool, columns[0].id, &same_title)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(updated.task_limit, 5);

    let clash = ColumnRepo::update(&pool, columns[1].id, &same_title)
        .await
        .unwrap();
    assert!(clash.is_none());

    let done = ColumnRepo::find_by_id(&pool, columns[1].id)
        .await
        .unwrap()
        .unwrap();
    assert_eq!(done.title, "Done");
}

// ---------------------------------------------------------------------------
// Ordering
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn move_swaps_and_stops_at_edges(pool: PgPool) {
    let project_id = new_project(&pool, &["A", "B", "C"]).await;
    let columns = ColumnRepo::list_by_project(&pool, project_id).await.unwrap();

    assert!(!ColumnRepo::move_column(&pool, project_id, columns[0].id, ColumnDirection::Up)
        .await
        .unwrap());
    assert!(ColumnRepo::move_column(&pool, project_id, columns[0].id, ColumnDirection::Down)
        .await
        .unwrap());

    let titles: Vec<String> = order(&pool, project_id)
        .await
        .into_iter()
        .map(|(title, _)| title)
        .collect();
    assert_eq!(titles, ["B", "A", "C"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
#[ignore = "requires DATABASE_URL"]
async fn delete_compacts_positions(pool: PgPool) {
    let project_id = new_project(&pool, &["A", "B", "C"]).await;
    let columns = ColumnRepo::list_by_project(&pool, project_id).await.unwrap();

    assert!(ColumnRepo::delete(&pool, columns[0].id).await.unwrap());
    assert!(!ColumnRepo::delete(&pool, columns[0].id).await.unwrap());
    assert_eq!(
        order(&pool, project_id).await,
        [("B".to_string(), 1), ("C".to_string(), 2)]
    );
}
