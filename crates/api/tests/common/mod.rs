//! Shared helpers for HTTP-level integration tests.
//!
//! [`build_test_app`] assembles the application through the same
//! [`build_app_router`] call `main.rs` uses, so every test exercises the
//! production middleware stack (CORS, request IDs, timeout, panic recovery).
//! Uploaded files land in a per-test temp directory that lives as long as
//! the returned [`TestApp`].

// Not every test binary uses every helper.
#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE};
use axum::http::Request;
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tempfile::TempDir;
use tower::util::ServiceExt;

use chitrashala_api::auth::jwt::{generate_access_token, JwtConfig};
use chitrashala_api::auth::password::hash_password;
use chitrashala_api::config::ServerConfig;
use chitrashala_api::router::build_app_router;
use chitrashala_api::state::AppState;
use chitrashala_api::uploads::FileStore;
use chitrashala_db::models::user::{CreateUser, User};
use chitrashala_db::repositories::UserRepo;

/// Fixed signing secret so fixture tokens validate against the test router.
const TEST_JWT_SECRET: &str = "integration-test-secret-not-for-production";

/// Build a test `JwtConfig` with the fixed test secret.
pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_JWT_SECRET.to_string(),
        access_token_expiry_mins: 15,
        refresh_token_expiry_days: 7,
    }
}

/// A `ServerConfig` suitable for in-process tests. The CORS origin matches
/// the dev-server default so the preflight tests exercise the real list.
pub fn test_config(uploads_dir: PathBuf) -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        uploads_dir,
        jwt: test_jwt_config(),
    }
}

/// A fully wired application plus the temp directory backing its file store.
///
/// Keep this struct alive for the duration of a test: dropping it deletes
/// the uploads directory.
pub struct TestApp {
    router: Router,
    pub uploads_dir: PathBuf,
    _uploads: TempDir,
}

impl TestApp {
    /// A clone of the application router, ready for `oneshot`.
    pub fn router(&self) -> Router {
        self.router.clone()
    }
}

/// Build the full application with all middleware layers, using the given
/// database pool and a fresh temp directory for uploads.
pub async fn build_test_app(pool: PgPool) -> TestApp {
    let uploads = tempfile::tempdir().expect("tempdir creation should succeed");
    let uploads_dir = uploads.path().to_path_buf();

    let config = test_config(uploads_dir.clone());
    let file_store = FileStore::new(uploads_dir.clone());
    file_store
        .ensure_root()
        .await
        .expect("uploads dir creation should succeed");

    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        uploads: file_store,
    };

    TestApp {
        router: build_app_router(state, &config),
        uploads_dir,
        _uploads: uploads,
    }
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// The plaintext password every fixture user is created with.
pub const TEST_PASSWORD: &str = "test_password_123!";

/// Create a user directly in the database and mint an access token for them.
///
/// Returns the user row and a bearer token signed with the test secret.
pub async fn create_user(pool: &PgPool, name: &str, email: &str, role: &str) -> (User, String) {
    let hashed = hash_password(TEST_PASSWORD).expect("hashing should succeed");
    let input = CreateUser {
        name: name.to_string(),
        email: email.to_string(),
        password_hash: hashed,
        role: role.to_string(),
    };
    let user = UserRepo::create(pool, &input)
        .await
        .expect("seed user insert failed");
    let token = generate_access_token(user.id, role, &test_jwt_config())
        .expect("seed token signing failed");
    (user, token)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

/// Send a GET request with no body.
pub async fn get(app: Router, path: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a GET request with a bearer token.
pub async fn get_auth(app: Router, path: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("GET")
        .uri(path)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a POST request with a JSON body.
pub async fn post_json(app: Router, path: &str, body: serde_json::Value) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a POST request with a JSON body and a bearer token.
pub async fn post_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a PATCH request with a JSON body and a bearer token.
pub async fn patch_json_auth(
    app: Router,
    path: &str,
    body: serde_json::Value,
    token: &str,
) -> Response {
    let request = Request::builder()
        .method("PATCH")
        .uri(path)
        .header(CONTENT_TYPE, "application/json")
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a DELETE request with a bearer token.
pub async fn delete_auth(app: Router, path: &str, token: &str) -> Response {
    let request = Request::builder()
        .method("DELETE")
        .uri(path)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Parse a response body as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}

// ---------------------------------------------------------------------------
// Multipart helpers
// ---------------------------------------------------------------------------

const MULTIPART_BOUNDARY: &str = "test-boundary-7MA4YWxkTrZu0gW";

/// Hand-built `multipart/form-data` body for upload endpoints.
#[derive(Default)]
pub struct MultipartForm {
    body: Vec<u8>,
}

impl MultipartForm {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a plain text field.
    pub fn text(mut self, name: &str, value: &str) -> Self {
        self.body
            .extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{name}\"\r\n\r\n").as_bytes(),
        );
        self.body.extend_from_slice(value.as_bytes());
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Append a file field with an explicit filename and content type.
    pub fn file(mut self, name: &str, file_name: &str, content_type: &str, data: &[u8]) -> Self {
        self.body
            .extend_from_slice(format!("--{MULTIPART_BOUNDARY}\r\n").as_bytes());
        self.body.extend_from_slice(
            format!(
                "Content-Disposition: form-data; name=\"{name}\"; filename=\"{file_name}\"\r\n"
            )
            .as_bytes(),
        );
        self.body
            .extend_from_slice(format!("Content-Type: {content_type}\r\n\r\n").as_bytes());
        self.body.extend_from_slice(data);
        self.body.extend_from_slice(b"\r\n");
        self
    }

    /// Close the form and return `(content_type_header, body)`.
    pub fn finish(mut self) -> (String, Vec<u8>) {
        self.body
            .extend_from_slice(format!("--{MULTIPART_BOUNDARY}--\r\n").as_bytes());
        (
            format!("multipart/form-data; boundary={MULTIPART_BOUNDARY}"),
            self.body,
        )
    }
}

/// Send a POST request with a multipart body and a bearer token.
pub async fn post_multipart_auth(
    app: Router,
    path: &str,
    form: MultipartForm,
    token: &str,
) -> Response {
    let (content_type, body) = form.finish();
    let request = Request::builder()
        .method("POST")
        .uri(path)
        .header(CONTENT_TYPE, content_type)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

/// Send a PATCH request with a multipart body and a bearer token.
pub async fn patch_multipart_auth(
    app: Router,
    path: &str,
    form: MultipartForm,
    token: &str,
) -> Response {
    let (content_type, body) = form.finish();
    let request = Request::builder()
        .method("PATCH")
        .uri(path)
        .header(CONTENT_TYPE, content_type)
        .header(AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::from(body))
        .expect("request should build");
    app.oneshot(request).await.expect("request should not fail")
}

// ---------------------------------------------------------------------------
// Test data
// ---------------------------------------------------------------------------

/// Enough of a PNG for format sniffing: the 8-byte signature plus an IHDR
/// chunk header.
pub fn png_bytes() -> Vec<u8> {
    let mut data = vec![0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A];
    data.extend_from_slice(&[0x00, 0x00, 0x00, 0x0D, b'I', b'H', b'D', b'R']);
    data
}

/// A minimal valid artwork upload form: one PNG plus a title.
pub fn artwork_form(title: &str) -> MultipartForm {
    MultipartForm::new()
        .file("image", "artwork.png", "image/png", &png_bytes())
        .text("title", title)
}
