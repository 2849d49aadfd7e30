//! `AppError` to HTTP response mapping, for the errors this service raises.

mod common;

use std::borrow::Cow;
use std::fmt;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use common::{body_json, create_board, get, post_empty, post_json};
use http_body_util::BodyExt;
use kanban_api::error::AppError;
use kanban_core::error::CoreError;
use kanban_db::repositories::{UQ_COLUMN_POSITION, UQ_COLUMN_TITLE};
use serde_json::{json, Value};
use sqlx::error::{DatabaseError, ErrorKind};

async fn render(err: AppError) -> (StatusCode, Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

/// A PostgreSQL unique violation on `constraint`, as raised at commit.
#[derive(Debug)]
struct UniqueViolation {
    constraint: &'static str,
}

impl fmt::Display for UniqueViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "duplicate key value violates unique constraint \"{}\"", self.constraint)
    }
}

impl std::error::Error for UniqueViolation {}

impl DatabaseError for UniqueViolation {
    fn message(&self) -> &str {
        "duplicate key value violates unique constraint"
    }

    fn code(&self) -> Option<Cow<'_, str>> {
        Some(Cow::Borrowed("23505"))
    }

    fn as_error(&self) -> &(dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn as_error_mut(&mut self) -> &mut (dyn std::error::Error + Send + Sync + 'static) {
        self
    }

    fn into_error(self: Box<Self>) -> Box<dyn std::error::Error + Send + Sync + 'static> {
        self
    }

    fn constraint(&self) -> Option<&str> {
        Some(self.constraint)
    }

    fn kind(&self) -> ErrorKind {
        ErrorKind::UniqueViolation
    }
}

fn unique_violation(constraint: &'static str) -> AppError {
    AppError::Database(sqlx::Error::Database(Box::new(UniqueViolation { constraint })))
}

// ---------------------------------------------------------------------------
// Raised through the router
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unknown_project_is_404() {
    let app = common::build_test_app();
    let response = get(&app, "/api/v1/projects/42/columns/new").await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Project with id 42 not found");
}

#[tokio::test]
async fn missing_csrf_token_is_forbidden() {
    let app = common::build_test_app();
    let board = create_board(&app, "Launch").await;

    let response = post_empty(&app, &format!("{}/remove", board.column_url(1))).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let json = body_json(response).await;
    assert_eq!(json, json!({ "error": "Missing CSRF token", "code": "FORBIDDEN" }));
}

#[tokio::test]
async fn blank_project_name_is_validation_error() {
    let app = common::build_test_app();
    let response = post_json(&app, "/api/v1/projects", json!({ "name": "" })).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Project name must not be empty");
}

#[tokio::test]
async fn unparsable_project_id_is_bad_request() {
    let app = common::build_test_app();
    let response = post_empty(&app, "/api/v1/projects/abc/columns/1/move?direction=up").await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
}

// ---------------------------------------------------------------------------
// Store failures
// ---------------------------------------------------------------------------

#[tokio::test]
async fn position_race_is_409() {
    let (status, json) = render(unique_violation(UQ_COLUMN_POSITION)).await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
    assert_eq!(
        json["error"],
        "The board order changed while saving, reload and try again"
    );
}

#[tokio::test]
async fn other_unique_violations_are_sanitized() {
    let (status, json) = render(unique_violation(UQ_COLUMN_TITLE)).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert!(!json.to_string().contains(UQ_COLUMN_TITLE));
}

#[tokio::test]
async fn internal_errors_are_sanitized() {
    let errors = [
        AppError::Database(sqlx::Error::PoolTimedOut),
        AppError::Core(CoreError::Internal("CSRF key rejected: hunter2".into())),
    ];

    for err in errors {
        let (status, json) = render(err).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(json["code"], "INTERNAL_ERROR");
        assert_eq!(json["error"], "An internal error occurred");
        assert!(!json.to_string().contains("hunter2"));
    }
}
