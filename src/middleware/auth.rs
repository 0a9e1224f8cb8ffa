//! Bearer-token authentication: JWT claims, extractors and the `AuthGuard`.
//!
//! Tokens are signed JWTs carrying the user id plus a display snapshot
//! (username, staff flag, profile picture URL) so clients can render a header
//! without an extra request. Access tokens authenticate API calls; refresh
//! tokens only mint new access tokens and can be revoked via a jti blacklist.

use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts, HeaderMap},
};
use jsonwebtoken::{decode, DecodingKey, Validation};
use sea_orm::DatabaseConnection;
use serde::{Deserialize, Serialize};

use crate::{
    data::user::UserRepository,
    error::{auth::AuthError, AppError},
    state::AppState,
};

pub const TOKEN_TYPE_ACCESS: &str = "access";
pub const TOKEN_TYPE_REFRESH: &str = "refresh";

/// JWT payload shared by access and refresh tokens.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Claims {
    /// User id.
    pub sub: i32,

    /// Username snapshot at issue time.
    pub user_name: String,

    pub is_staff: bool,

    /// Profile picture URL snapshot; empty string when the user has none.
    pub profile_pic: String,

    /// "access" or "refresh".
    pub token_type: String,

    /// Unique token id, used for the refresh-token blacklist.
    pub jti: String,

    /// Issued-at, Unix seconds.
    pub iat: i64,

    /// Expiry, Unix seconds.
    pub exp: i64,
}

/// Decodes and validates a token, including its expiry.
///
/// Every decode failure collapses into `AuthError::InvalidToken` so the
/// response does not reveal why the token was rejected.
pub fn decode_claims(token: &str, secret: &str) -> Result<Claims, AuthError> {
    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::default(),
    )
    .map(|data| data.claims)
    .map_err(|_| AuthError::InvalidToken)
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(headers: &HeaderMap) -> Option<String> {
    let value = headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = value.strip_prefix("Bearer ")?;

    if token.is_empty() {
        None
    } else {
        Some(token.to_string())
    }
}

/// Extractor for endpoints that require an authenticated caller.
///
/// Rejects with 401 when the bearer token is missing, invalid, expired, or is
/// not an access token. Does not hit the database; combine with `AuthGuard`
/// to load the user row and check permissions.
pub struct AuthClaims(pub Claims);

impl FromRequestParts<AppState> for AuthClaims {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or(AuthError::MissingToken)?;
        let claims = decode_claims(&token, &state.jwt_secret)?;

        if claims.token_type != TOKEN_TYPE_ACCESS {
            return Err(AuthError::InvalidToken.into());
        }

        Ok(AuthClaims(claims))
    }
}

/// Extractor for endpoints that serve both anonymous and authenticated
/// callers, e.g. public feeds that mark which posts the viewer liked.
///
/// Never rejects: a missing or invalid token yields `None`.
pub struct OptionalAuthClaims(pub Option<Claims>);

impl FromRequestParts<AppState> for OptionalAuthClaims {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let claims = bearer_token(&parts.headers)
            .and_then(|token| decode_claims(&token, &state.jwt_secret).ok())
            .filter(|claims| claims.token_type == TOKEN_TYPE_ACCESS);

        Ok(OptionalAuthClaims(claims))
    }
}

/// Permissions checked by `AuthGuard::require`.
pub enum Permission {
    /// Caller must be a staff member.
    Staff,

    /// Caller must not be a read-only (demo) account. Endpoints that allow
    /// low-risk social actions (follow, like, save, marking notifications
    /// read) omit this permission.
    Write,
}

/// Database-backed authorization check.
///
/// Loads the user row behind validated claims and verifies the account is
/// active plus any required permissions. Loading from the database means a
/// ban or staff revocation takes effect immediately, not at token expiry.
pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    claims: &'a Claims,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, claims: &'a Claims) -> Self {
        Self { db, claims }
    }

    /// Resolves the caller and checks the given permissions.
    ///
    /// # Returns
    /// - `Ok(user)` - Active user satisfying all permissions
    /// - `Err(AuthError::UserNotInDatabase)` - Token outlived the account
    /// - `Err(AuthError::AccessDenied)` - Banned account or missing staff permission
    /// - `Err(AuthError::ReadOnlyAccount)` - Demo account attempting a write
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<entity::user::Model, AppError> {
        let user_repo = UserRepository::new(self.db);

        let Some(user) = user_repo.find_by_id(self.claims.sub).await? else {
            return Err(AuthError::UserNotInDatabase(self.claims.sub).into());
        };

        if !user.is_active {
            return Err(AuthError::AccessDenied(
                user.id,
                "Account is deactivated".to_string(),
            )
            .into());
        }

        for permission in permissions {
            match permission {
                Permission::Staff => {
                    if !user.is_staff {
                        return Err(AuthError::AccessDenied(
                            user.id,
                            "Staff permission required".to_string(),
                        )
                        .into());
                    }
                }
                Permission::Write => {
                    if user.is_read_only {
                        return Err(AuthError::ReadOnlyAccount(user.id).into());
                    }
                }
            }
        }

        Ok(user)
    }
}
