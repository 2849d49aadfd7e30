#![allow(dead_code)]

use axum::body::Body;
use axum::http::header::{CONTENT_TYPE, LOCATION};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use kanban_api::config::ServerConfig;
use kanban_api::router::build_app_router;
use kanban_api::state::AppState;

pub const TEST_SECRET: &[u8] = b"test-secret-that-is-long-enough-for-hmac";

/// Build a test `ServerConfig` with safe defaults.
///
/// New projects start with three columns: `Todo`, `Doing`, `Done`.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        csrf_secret: TEST_SECRET.to_vec(),
        default_columns: vec!["Todo".to_string(), "Doing".to_string(), "Done".to_string()],
    }
}

/// Build the full application router over a fresh in-memory board.
///
/// Uses the same middleware stack as `main.rs`. The returned router can be
/// cloned; every clone shares the same board.
pub fn build_test_app() -> Router {
    build_app_router(AppState::in_memory(test_config()))
}

async fn send(app: &Router, request: Request<Body>) -> Response {
    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_empty(app: &Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

/// POST an `application/x-www-form-urlencoded` body, as an HTML form would.
pub async fn post_form(app: &Router, uri: &str, form: &str) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/x-www-form-urlencoded")
        .body(Body::from(form.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: &Router, uri: &str, json: Value) -> Response {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(json.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Assert `response` is a 303 redirect to `location` and return its body.
pub async fn expect_redirect(response: Response, location: &str) -> Value {
    assert_eq!(response.status(), StatusCode::SEE_OTHER);
    assert_eq!(response.headers().get(LOCATION).unwrap(), location);
    let json = body_json(response).await;
    assert_eq!(json["data"]["redirect_to"], location);
    json
}

/// A project created through the API, with its board's CSRF token.
pub struct TestBoard {
    pub project_id: i64,
    pub csrf_token: String,
}

impl TestBoard {
    pub fn columns_url(&self) -> String {
        format!("/api/v1/projects/{}/columns", self.project_id)
    }

    pub fn column_url(&self, column_id: i64) -> String {
        format!("{}/{column_id}", self.columns_url())
    }

    pub fn move_url(&self, column_id: i64, direction: &str) -> String {
        format!(
            "{}/move?direction={direction}&csrf_token={}",
            self.column_url(column_id),
            self.csrf_token
        )
    }

    pub fn remove_url(&self, column_id: i64) -> String {
        format!(
            "{}/remove?csrf_token={}",
            self.column_url(column_id),
            self.csrf_token
        )
    }
}

/// Create a project (board `Todo`, `Doing`, `Done`) and read its CSRF token
/// from the column list.
pub async fn create_board(app: &Router, name: &str) -> TestBoard {
    let response = post_json(app, "/api/v1/projects", serde_json::json!({ "name": name })).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let project_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let list = body_json(get(app, &format!("/api/v1/projects/{project_id}/columns")).await).await;
    let csrf_token = list["data"]["csrf_token"].as_str().unwrap().to_string();

    TestBoard {
        project_id,
        csrf_token,
    }
}

/// The board's columns as `(id, title)` in board order.
pub async fn board_columns(app: &Router, board: &TestBoard) -> Vec<(i64, String)> {
    let list = body_json(get(app, &board.columns_url()).await).await;
    list["data"]["columns"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| {
            (
                c["id"].as_i64().unwrap(),
                c["title"].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

pub async fn board_titles(app: &Router, board: &TestBoard) -> Vec<String> {
    board_columns(app, board)
        .await
        .into_iter()
        .map(|(_, title)| title)
        .collect()
}
