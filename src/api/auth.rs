//! Basic authentication extractor and authorization helpers.
//!
//! The client sends `Authorization: Basic base64(username:password)` - the
//! token its login page builds. The same extractor guards every
//! state-mutating endpoint (and the user-scoped history read), so there is a
//! single authentication path instead of per-service interceptors. Handlers
//! additionally check that the authenticated principal matches the `username`
//! parameter it acts for, and that item management comes from an admin.

use crate::{
    api::AppState,
    core::user::{self, ROLE_ADMIN},
    errors::{Error, Result},
};
use axum::{
    async_trait,
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use base64::{Engine as _, engine::general_purpose::STANDARD};

/// The authenticated principal of a request.
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// Username verified against the users table
    pub username: String,
    /// The account's role string
    pub role: String,
}

impl AuthUser {
    /// Whether this user holds the marketplace-admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ROLE_ADMIN
    }

    /// Rejects non-admin users.
    ///
    /// # Errors
    /// Returns `Error::Forbidden` unless the user is an admin.
    pub fn require_admin(&self) -> Result<()> {
        if self.is_admin() {
            Ok(())
        } else {
            Err(Error::Forbidden {
                message: "Marketplace management requires the admin role".to_string(),
            })
        }
    }

    /// Rejects requests acting on behalf of someone else.
    ///
    /// The `username` request parameter must match the authenticated user
    /// (case-insensitively, consistent with the client's comparisons).
    ///
    /// # Errors
    /// Returns `Error::Forbidden` on mismatch.
    pub fn ensure_acting_as(&self, username: &str) -> Result<()> {
        if self.username.eq_ignore_ascii_case(username) {
            Ok(())
        } else {
            Err(Error::Forbidden {
                message: "You can only act on your own behalf".to_string(),
            })
        }
    }
}

/// Splits a `Basic` authorization header into its username/password pair.
fn decode_basic(header: &str) -> Option<(String, String)> {
    let encoded = header.strip_prefix("Basic ")?;
    let decoded = STANDARD.decode(encoded.trim()).ok()?;
    let decoded = String::from_utf8(decoded).ok()?;
    let (username, password) = decoded.split_once(':')?;
    Some((username.to_string(), password.to_string()))
}

#[async_trait]
impl FromRequestParts<AppState> for AuthUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self> {
        let header = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|value| value.to_str().ok())
            .ok_or(Error::Unauthorized)?;

        let (username, password) = decode_basic(header).ok_or(Error::Unauthorized)?;
        let account = user::verify_credentials(&state.database, &username, &password).await?;

        Ok(Self {
            username: account.username,
            role: account.role,
        })
    }
}
