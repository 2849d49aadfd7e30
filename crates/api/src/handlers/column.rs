//! Handlers for the board columns of a project.
//!
//! Mounted under `/projects/{project_id}/columns`. Rejected forms come back as
//! `422` views, finished actions as redirects to the column list. Failed board
//! operations are reported with a failure flash, never as an error status.

use axum::extract::{Path, Query, State};
use axum::{Form, Json};
use kanban_core::board::ColumnDirection;
use kanban_core::flash::{self, Flash};
use kanban_core::types::DbId;
use kanban_core::validation::column::MSG_DUPLICATE_TITLE;
use kanban_core::validation::{validate_creation, validate_modification, ColumnForm, FieldErrors};
use kanban_db::models::column::{Column, CreateColumn, UpdateColumn};
use kanban_db::models::project::Project;
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::csrf::{issue_token, CsrfGuard};
use crate::middleware::project::ProjectContext;
use crate::response::{DataResponse, Page, Redirect};
use crate::routes::column::columns_url;
use crate::state::AppState;
use crate::views::{ColumnFormView, ColumnListView, ColumnRemovalView, TITLE_BOARD, TITLE_REMOVE_COLUMN};

#[derive(Debug, Deserialize)]
pub struct ColumnPath {
    pub column_id: DbId,
}

#[derive(Debug, Deserialize)]
pub struct MoveParams {
    pub direction: Option<String>,
}

/// Load a column only if it belongs to `project`.
async fn find_project_column(
    state: &AppState,
    project: &Project,
    column_id: DbId,
) -> AppResult<Option<Column>> {
    let column = state.board.get_column(column_id).await?;
    Ok(column.filter(|c| c.project_id == project.id))
}

fn to_columns(project_id: DbId) -> Redirect {
    Redirect::to(columns_url(project_id))
}

/// GET /projects/{project_id}/columns
pub async fn index(
    State(state): State<AppState>,
    ProjectContext(project): ProjectContext,
) -> AppResult<Json<DataResponse<ColumnListView>>> {
    let columns = state.board.get_columns(project.id).await?;
    let csrf_token = issue_token(&state.config.csrf_secret, project.id)?;

    Ok(Json(DataResponse {
        data: ColumnListView {
            project,
            columns,
            csrf_token,
            title: TITLE_BOARD.to_string(),
        },
    }))
}

/// GET /projects/{project_id}/columns/new
pub async fn create(ProjectContext(project): ProjectContext) -> Page<ColumnFormView> {
    Page::View(ColumnFormView::create(
        project,
        ColumnForm::default(),
        FieldErrors::new(),
    ))
}

/// POST /projects/{project_id}/columns
pub async fn save(
    State(state): State<AppState>,
    ProjectContext(project): ProjectContext,
    Form(form): Form<ColumnForm>,
) -> AppResult<Page<ColumnFormView>> {
    let errors = match validate_creation(project.id, &form) {
        Ok(input) => {
            let new_column = CreateColumn::new(project.id, input);
            match state.board.add_column(&new_column).await? {
                Some(column) => {
                    tracing::info!(
                        project_id = project.id,
                        column_id = column.id,
                        position = column.position,
                        "Column created"
                    );
                    return Ok(Page::Redirect(
                        to_columns(project.id).with_flash(Flash::success(flash::COLUMN_CREATED)),
                    ));
                }
                None => {
                    let mut errors = FieldErrors::new();
                    errors.add("title", MSG_DUPLICATE_TITLE);
                    errors
                }
            }
        }
        Err(errors) => errors,
    };

    Ok(Page::Rejected(ColumnFormView::create(project, form, errors)))
}

/// GET /projects/{project_id}/columns/{column_id}/edit
pub async fn edit(
    State(state): State<AppState>,
    ProjectContext(project): ProjectContext,
    Path(ColumnPath { column_id }): Path<ColumnPath>,
) -> AppResult<Page<ColumnFormView>> {
    let Some(column) = find_project_column(&state, &project, column_id).await? else {
        return Ok(Page::Redirect(
            to_columns(project.id).with_flash(Flash::failure(flash::COLUMN_NOT_FOUND)),
        ));
    };

    Ok(Page::View(ColumnFormView::edit(
        project,
        column,
        None,
        FieldErrors::new(),
    )))
}

/// POST /projects/{project_id}/columns/{column_id}
pub async fn update(
    State(state): State<AppState>,
    ProjectContext(project): ProjectContext,
    Path(ColumnPath { column_id }): Path<ColumnPath>,
    Form(form): Form<ColumnForm>,
) -> AppResult<Page<ColumnFormView>> {
    let Some(column) = find_project_column(&state, &project, column_id).await? else {
        return Ok(Page::Redirect(
            to_columns(project.id).with_flash(Flash::failure(flash::BOARD_UPDATE_FAILED)),
        ));
    };

    let input = match validate_modification(column.id, &form) {
        Ok(input) => input,
        Err(errors) => {
            return Ok(Page::Rejected(ColumnFormView::edit(
                project,
                column,
                Some(form),
                errors,
            )));
        }
    };

    let changes = UpdateColumn::from(input);
    match state.board.update_column(column.id, &changes).await? {
        Some(updated) => {
            tracing::info!(
                project_id = project.id,
                column_id = updated.id,
                task_limit = updated.task_limit,
                "Column updated"
            );
            Ok(Page::Redirect(
                to_columns(project.id).with_flash(Flash::success(flash::BOARD_UPDATED)),
            ))
        }
        None => {
            tracing::info!(project_id = project.id, column_id, "Column update rejected");
            Ok(Page::Rejected(
                ColumnFormView::edit(project, column, Some(form), FieldErrors::new())
                    .with_flash(Flash::failure(flash::BOARD_UPDATE_FAILED)),
            ))
        }
    }
}

/// POST /projects/{project_id}/columns/{column_id}/move?direction={up|down}
///
/// Any other direction is ignored. Always redirects to the column list.
pub async fn move_column(
    State(state): State<AppState>,
    _csrf: CsrfGuard,
    ProjectContext(project): ProjectContext,
    Path(ColumnPath { column_id }): Path<ColumnPath>,
    Query(params): Query<MoveParams>,
) -> AppResult<Redirect> {
    let direction = params.direction.as_deref().and_then(ColumnDirection::parse);

    let moved = match direction {
        Some(ColumnDirection::Up) => state.board.move_up(project.id, column_id).await?,
        Some(ColumnDirection::Down) => state.board.move_down(project.id, column_id).await?,
        None => {
            tracing::debug!(
                project_id = project.id,
                column_id,
                direction = ?params.direction,
                "Ignoring unknown move direction"
            );
            false
        }
    };

    if let (true, Some(direction)) = (moved, direction) {
        tracing::info!(
            project_id = project.id,
            column_id,
            direction = direction.as_str(),
            "Column moved"
        );
    }

    Ok(to_columns(project.id))
}

/// GET /projects/{project_id}/columns/{column_id}/confirm
pub async fn confirm(
    State(state): State<AppState>,
    ProjectContext(project): ProjectContext,
    Path(ColumnPath { column_id }): Path<ColumnPath>,
) -> AppResult<Page<ColumnRemovalView>> {
    let Some(column) = find_project_column(&state, &project, column_id).await? else {
        return Ok(Page::Redirect(
            to_columns(project.id).with_flash(Flash::failure(flash::COLUMN_NOT_FOUND)),
        ));
    };

    let csrf_token = issue_token(&state.config.csrf_secret, project.id)?;
    Ok(Page::View(ColumnRemovalView {
        column,
        project,
        csrf_token,
        title: TITLE_REMOVE_COLUMN.to_string(),
    }))
}

/// POST /projects/{project_id}/columns/{column_id}/remove
pub async fn remove(
    State(state): State<AppState>,
    _csrf: CsrfGuard,
    ProjectContext(project): ProjectContext,
    Path(ColumnPath { column_id }): Path<ColumnPath>,
) -> AppResult<Redirect> {
    let removed = match find_project_column(&state, &project, column_id).await? {
        Some(column) => state.board.remove_column(column.id).await?,
        None => false,
    };

    let notice = if removed {
        tracing::info!(project_id = project.id, column_id, "Column removed");
        Flash::success(flash::COLUMN_REMOVED)
    } else {
        tracing::info!(project_id = project.id, column_id, "Column removal failed");
        Flash::failure(flash::COLUMN_REMOVE_FAILED)
    };

    Ok(to_columns(project.id).with_flash(notice))
}
