pub mod column;
pub mod health;
pub mod project;

use axum::Router;

use crate::state::AppState;

/// Prefix every API route is nested under.
pub const API_PREFIX: &str = "/api/v1";

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                              create
/// /projects/{project_id}                                 get
///
/// /projects/{project_id}/columns                         list, save
/// /projects/{project_id}/columns/new                     creation form
/// /projects/{project_id}/columns/{column_id}             update
/// /projects/{project_id}/columns/{column_id}/edit        edit form
/// /projects/{project_id}/columns/{column_id}/move        move up/down (CSRF)
/// /projects/{project_id}/columns/{column_id}/confirm     removal confirmation
/// /projects/{project_id}/columns/{column_id}/remove      remove (CSRF)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new().nest("/projects", project::router())
}
