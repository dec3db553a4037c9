//! Access tokens and refresh tokens.
//!
//! An access token is a short-lived HS256 JWT whose [`Claims`] identify the
//! caller to [`AuthUser`](crate::middleware::auth::AuthUser). A refresh token
//! is an opaque random string with a server-side session row; the database
//! holds its SHA-256 digest, never the plaintext.

use chitrashala_core::types::DbId;
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Signing settings and token lifetimes.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    /// HMAC secret for signing and verifying access tokens.
    pub secret: String,
    /// Access token lifetime in minutes.
    pub access_token_expiry_mins: i64,
    /// Refresh token lifetime in days.
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Read `JWT_SECRET` (required, non-empty), `JWT_ACCESS_EXPIRY_MINS`
    /// (default 15), and `JWT_REFRESH_EXPIRY_DAYS` (default 7) from the
    /// environment.
    ///
    /// # Panics
    ///
    /// Panics on a missing or empty secret and on unparseable expiry values;
    /// the process should not come up misconfigured.
    pub fn from_env() -> Self {
        let secret =
            std::env::var("JWT_SECRET").expect("JWT_SECRET is required and has no default");
        assert!(!secret.is_empty(), "JWT_SECRET must be non-empty");

        Self {
            secret,
            access_token_expiry_mins: env_i64("JWT_ACCESS_EXPIRY_MINS", DEFAULT_ACCESS_EXPIRY_MINS),
            refresh_token_expiry_days: env_i64(
                "JWT_REFRESH_EXPIRY_DAYS",
                DEFAULT_REFRESH_EXPIRY_DAYS,
            ),
        }
    }
}

fn env_i64(name: &str, default: i64) -> i64 {
    match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be a valid i64, got '{raw}'")),
        Err(_) => default,
    }
}

/// Payload of every access token.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// The user's internal database id.
    pub sub: DbId,
    /// The user's role (`"viewer"` or `"artist"`).
    pub role: String,
    /// Expiry, seconds since the Unix epoch.
    pub exp: i64,
    /// Issue time, seconds since the Unix epoch.
    pub iat: i64,
    /// Per-token UUID for audit trails.
    pub jti: String,
}

/// Sign a fresh access token for `user_id`.
pub fn generate_access_token(
    user_id: DbId,
    role: &str,
    config: &JwtConfig,
) -> Result<String, jsonwebtoken::errors::Error> {
    let issued_at = chrono::Utc::now().timestamp();
    let claims = Claims {
        sub: user_id,
        role: role.to_string(),
        exp: issued_at + config.access_token_expiry_mins * 60,
        iat: issued_at,
        jti: Uuid::new_v4().to_string(),
    };

    // Header::default() is HS256.
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(config.secret.as_bytes()),
    )
}

/// Check an access token's signature and expiry, returning its [`Claims`].
pub fn validate_token(
    token: &str,
    config: &JwtConfig,
) -> Result<Claims, jsonwebtoken::errors::Error> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(config.secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
}

/// Mint a refresh token, returning `(plaintext, sha256_hex)`.
///
/// The plaintext goes to the client; the hex digest goes into the sessions
/// table.
pub fn generate_refresh_token() -> (String, String) {
    let token = Uuid::new_v4().to_string();
    let digest = hash_refresh_token(&token);
    (token, digest)
}

/// SHA-256 hex digest of a refresh token, for storage and lookup.
pub fn hash_refresh_token(token: &str) -> String {
    format!("{:x}", Sha256::digest(token.as_bytes()))
}
