//! HTTP-level integration tests for the authenticated profile endpoints.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, patch_json_auth};
use sqlx::PgPool;

/// The profile read returns the caller's account without the password hash.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_get_profile(pool: PgPool) {
    let (user, token) = common::create_user(&pool, "Profile User", "profile@test.com", "artist").await;
    let app = common::build_test_app(pool).await;

    let response = get_auth(app.router(), "/api/profile", &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["id"], user.id);
    assert_eq!(json["name"], "Profile User");
    assert_eq!(json["email"], "profile@test.com");
    assert_eq!(json["role"], "artist");
    assert!(json["bio"].is_null());
    assert!(
        json.get("passwordHash").is_none() && json.get("password_hash").is_none(),
        "password hash must never serialize"
    );
}

/// The profile endpoints require authentication.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_profile_requires_auth(pool: PgPool) {
    let app = common::build_test_app(pool).await;

    let response = get(app.router(), "/api/profile").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

/// A partial update changes only the provided fields.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_partial(pool: PgPool) {
    let (_user, token) = common::create_user(&pool, "Before", "partial@test.com", "viewer").await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "bio": "Collector of Gond prints" });
    let response = patch_json_auth(app.router(), "/api/profile", body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["bio"], "Collector of Gond prints");
    // Untouched fields survive.
    assert_eq!(json["name"], "Before");
    assert_eq!(json["email"], "partial@test.com");
}

/// Updating the name to a blank string returns 400.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_blank_name(pool: PgPool) {
    let (_user, token) = common::create_user(&pool, "Named", "named@test.com", "viewer").await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "name": "   " });
    let response = patch_json_auth(app.router(), "/api/profile", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["error"], "Name cannot be empty");
}

/// A changed email is normalized before storage.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_normalizes_email(pool: PgPool) {
    let (_user, token) = common::create_user(&pool, "Mover", "old-address@test.com", "viewer").await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "  New-Address@Test.COM " });
    let response = patch_json_auth(app.router(), "/api/profile", body, &token).await;

    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["email"], "new-address@test.com");
}

/// Changing the email to one another account holds returns 409 via the
/// unique constraint.
#[sqlx::test(migrations = "../../db/migrations")]
async fn test_update_profile_duplicate_email(pool: PgPool) {
    common::create_user(&pool, "Holder", "held@test.com", "viewer").await;
    let (_user, token) = common::create_user(&pool, "Taker", "taker@test.com", "viewer").await;
    let app = common::build_test_app(pool).await;

    let body = serde_json::json!({ "email": "held@test.com" });
    let response = patch_json_auth(app.router(), "/api/profile", body, &token).await;

    assert_eq!(response.status(), StatusCode::CONFLICT);
    let json = body_json(response).await;
    assert_eq!(json["code"], "CONFLICT");
}
