//! Shared response types for API handlers.
//!
//! Plain data uses the `{ "data": ... }` envelope. Controller actions answer
//! with a [`Page`]: a rendered view, a view re-rendered because the submitted
//! form was rejected, or a redirect carrying an optional flash notification.

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use kanban_core::flash::Flash;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
///
/// # Example
///
/// ```ignore
/// Ok(Json(DataResponse { data: items }))
/// ```
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Redirect instruction returned by state-changing actions.
///
/// Answers `303 See Other` with a `Location` header; the body repeats the
/// target and carries the flash, which is this request's only notification
/// channel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Redirect {
    pub redirect_to: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flash: Option<Flash>,
}

impl Redirect {
    pub fn to(location: impl Into<String>) -> Self {
        Self {
            redirect_to: location.into(),
            flash: None,
        }
    }

    pub fn with_flash(mut self, flash: Flash) -> Self {
        self.flash = Some(flash);
        self
    }
}

impl IntoResponse for Redirect {
    fn into_response(self) -> Response {
        (
            StatusCode::SEE_OTHER,
            [(header::LOCATION, self.redirect_to.clone())],
            Json(DataResponse { data: self }),
        )
            .into_response()
    }
}

/// Outcome of a controller action that may render a view.
#[derive(Debug)]
pub enum Page<T> {
    /// `200` with the view.
    View(T),
    /// `422` with the view re-rendered around the rejected input.
    Rejected(T),
    Redirect(Redirect),
}

impl<T: Serialize> IntoResponse for Page<T> {
    fn into_response(self) -> Response {
        match self {
            Page::View(view) => (StatusCode::OK, Json(DataResponse { data: view })).into_response(),
            Page::Rejected(view) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                Json(DataResponse { data: view }),
            )
                .into_response(),
            Page::Redirect(redirect) => redirect.into_response(),
        }
    }
}
