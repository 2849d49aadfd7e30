//! Project context extractor for project-scoped routes.

use std::collections::HashMap;

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;
use kanban_core::error::CoreError;
use kanban_core::types::DbId;
use kanban_db::models::project::Project;

use crate::error::AppError;
use crate::state::AppState;

/// The project named by the `{project_id}` path segment.
///
/// Rejects with 404 when the project does not exist, so handlers taking this
/// extractor always operate inside a real project:
///
/// ```ignore
/// async fn index(ProjectContext(project): ProjectContext) -> AppResult<Json<()>> {
///     tracing::info!(project_id = project.id, "listing board");
///     Ok(Json(()))
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ProjectContext(pub Project);

impl FromRequestParts<AppState> for ProjectContext {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let project_id = project_id_param(parts, state).await?;

        let project = state
            .projects
            .find_project(project_id)
            .await?
            .ok_or(AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            }))?;

        Ok(ProjectContext(project))
    }
}

/// Read the `{project_id}` path parameter.
pub(crate) async fn project_id_param(
    parts: &mut Parts,
    state: &AppState,
) -> Result<DbId, AppError> {
    let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
        .await
        .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

    params
        .get("project_id")
        .and_then(|raw| raw.parse::<DbId>().ok())
        .ok_or_else(|| AppError::BadRequest("Invalid or missing project_id".into()))
}
