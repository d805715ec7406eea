//! Shared helpers for HTTP-level integration tests.
//!
//! Each test gets its own temporary directory holding the CSV tables and the
//! upload directory. The task table is seeded with two rows:
//!
//! | id | title         | status     |
//! |----|---------------|------------|
//! | 1  | Test Task One | Incomplete |
//! | 2  | Test Task Two | Ongoing    |

// Not every test binary uses every helper.
#![allow(dead_code)]

use axum::body::Body;
use axum::http::{header, Method, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use tempfile::TempDir;
use tower::ServiceExt;

use taskdesk_api::config::ServerConfig;
use taskdesk_api::router::build_app_router;
use taskdesk_api::state::AppState;

pub const TEST_TASKS_CSV: &str = "id,title,description,status\n\
1,Test Task One,Test Description One,Incomplete\n\
2,Test Task Two,Test Description Two,Ongoing\n";

/// Upload limit used by tests, small enough to exercise the 413 path.
pub const TEST_MAX_UPLOAD_BYTES: usize = 64 * 1024;

/// Build a test `ServerConfig` rooted in `dir`.
pub fn test_config(dir: &TempDir) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        tasks_file: dir.path().join("tasks.csv"),
        users_file: dir.path().join("users.csv"),
        upload_dir: dir.path().join("uploads"),
        max_upload_bytes: TEST_MAX_UPLOAD_BYTES,
    }
}

/// A seeded store plus the router serving it. Dropping the context removes
/// the temporary directory.
pub struct TestContext {
    pub dir: TempDir,
    pub config: ServerConfig,
    state: AppState,
}

impl TestContext {
    /// Store seeded with [`TEST_TASKS_CSV`] and an empty user table.
    pub async fn seeded() -> Self {
        Self::with_tasks_csv(TEST_TASKS_CSV).await
    }

    pub async fn with_tasks_csv(contents: &str) -> Self {
        let dir = TempDir::new().unwrap();
        let config = test_config(&dir);
        std::fs::write(&config.tasks_file, contents).unwrap();
        let state = AppState::open(config.clone()).await.unwrap();
        Self { dir, config, state }
    }

    /// The full application router, with the production middleware stack.
    pub fn app(&self) -> Router {
        build_app_router(self.state.clone(), &self.config)
    }
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn delete(app: Router, uri: &str) -> Response {
    let request = Request::builder()
        .method(Method::DELETE)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::POST, uri, body.to_string()).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    json_request(app, Method::PUT, uri, body.to_string()).await
}

/// Send a raw (possibly malformed) JSON body.
pub async fn json_request(app: Router, method: Method, uri: &str, body: String) -> Response {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

const BOUNDARY: &str = "taskdesk-test-boundary";

/// POST a multipart body with a single file part.
pub async fn post_file(
    app: Router,
    uri: &str,
    field_name: &str,
    filename: &str,
    contents: &[u8],
) -> Response {
    let mut body = Vec::new();
    body.extend_from_slice(format!("--{BOUNDARY}\r\n").as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"{field_name}\"; filename=\"{filename}\"\r\n"
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(contents);
    body.extend_from_slice(format!("\r\n--{BOUNDARY}--\r\n").as_bytes());

    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header(
            header::CONTENT_TYPE,
            format!("multipart/form-data; boundary={BOUNDARY}"),
        )
        .body(Body::from(body))
        .unwrap();
    send(app, request).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
