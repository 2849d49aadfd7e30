//! Handlers for the `/projects` resource.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use kanban_core::error::CoreError;
use kanban_db::models::project::{CreateProject, Project};

use crate::error::{AppError, AppResult};
use crate::middleware::project::ProjectContext;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects
///
/// The new project's board starts with the configured default columns.
pub async fn create(
    State(state): State<AppState>,
    Json(mut input): Json<CreateProject>,
) -> AppResult<(StatusCode, Json<DataResponse<Project>>)> {
    input.name = input.name.trim().to_string();
    if input.name.is_empty() {
        return Err(AppError::Core(CoreError::Validation(
            "Project name must not be empty".into(),
        )));
    }

    let project = state
        .projects
        .create_project(&input, &state.config.default_columns)
        .await?;
    tracing::info!(project_id = project.id, "Project created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /api/v1/projects/{project_id}
pub async fn get_by_id(
    ProjectContext(project): ProjectContext,
) -> Json<DataResponse<Project>> {
    Json(DataResponse { data: project })
}
