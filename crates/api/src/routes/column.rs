//! Route definitions for a project's board columns.

use axum::routing::{get, post};
use axum::Router;
use kanban_core::types::DbId;

use crate::handlers::column;
use crate::routes::API_PREFIX;
use crate::state::AppState;

/// Absolute URL of a project's column list, used as the redirect target of
/// every column action.
pub fn columns_url(project_id: DbId) -> String {
    format!("{API_PREFIX}/projects/{project_id}/columns")
}

/// Routes mounted at `/projects/{project_id}/columns`.
///
/// ```text
/// GET    /                       -> index
/// POST   /                       -> save
/// GET    /new                    -> create
/// POST   /{column_id}            -> update
/// GET    /{column_id}/edit       -> edit
/// POST   /{column_id}/move       -> move_column
/// GET    /{column_id}/confirm    -> confirm
/// POST   /{column_id}/remove     -> remove
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(column::index).post(column::save))
        .route("/new", get(column::create))
        .route("/{column_id}", post(column::update))
        .route("/{column_id}/edit", get(column::edit))
        .route("/{column_id}/move", post(column::move_column))
        .route("/{column_id}/confirm", get(column::confirm))
        .route("/{column_id}/remove", post(column::remove))
}
