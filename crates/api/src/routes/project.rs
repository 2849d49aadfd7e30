//! Route definitions for the `/projects` resource.
//!
//! Also nests the board column routes under `/projects/{project_id}/columns`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::project;
use crate::routes::column;
use crate::state::AppState;

/// Routes mounted at `/projects`.
///
/// ```text
/// POST   /                          -> create
/// GET    /{project_id}              -> get_by_id
/// *      /{project_id}/columns/...  -> column routes
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(project::create))
        .route("/{project_id}", get(project::get_by_id))
        .nest("/{project_id}/columns", column::router())
}
