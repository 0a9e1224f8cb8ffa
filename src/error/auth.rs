use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// Login attempt with an unknown login or a wrong password.
    ///
    /// The same variant covers both cases so the response does not reveal
    /// whether the account exists. Results in a 401 Unauthorized response.
    #[error("Invalid credentials for login '{0}'")]
    InvalidCredentials(String),

    /// Login attempt against a deactivated (banned) account.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Login attempt for deactivated account '{0}'")]
    AccountDisabled(String),

    /// Request carries no bearer token but the endpoint requires one.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authentication credentials were not provided")]
    MissingToken,

    /// Bearer token failed signature validation, expired, or carries the
    /// wrong token type for the operation.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Token is invalid or expired")]
    InvalidToken,

    /// Refresh token's jti is on the blacklist.
    ///
    /// Results in a 401 Unauthorized response with the same message as
    /// `InvalidToken` so clients treat both the same way.
    #[error("Refresh token has been revoked")]
    RevokedToken,

    /// Token is valid but the user row no longer exists.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Authenticated user {0} not found in database")]
    UserNotInDatabase(i32),

    /// Authenticated user lacks a required permission.
    ///
    /// Results in a 403 Forbidden response. The reason is logged server-side
    /// and never sent to the client.
    ///
    /// # Fields
    /// - User ID of the caller
    /// - Reason for the denial, for server-side logging
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(i32, String),

    /// Read-only (demo) account attempted a mutating action outside the
    /// allowed low-risk set.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Read-only account {0} attempted a restricted action")]
    ReadOnlyAccount(i32),
}

/// Converts authentication errors into HTTP responses.
///
/// Credential and token failures map to 401 Unauthorized; permission failures
/// map to 403 Forbidden. Client-facing messages stay generic while the full
/// error is logged at debug level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        match self {
            Self::InvalidCredentials(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Invalid login or password.".to_string(),
                }),
            )
                .into_response(),
            Self::AccountDisabled(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "This account has been deactivated.".to_string(),
                }),
            )
                .into_response(),
            Self::MissingToken => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Authentication credentials were not provided.".to_string(),
                }),
            )
                .into_response(),
            Self::InvalidToken | Self::RevokedToken | Self::UserNotInDatabase(_) => (
                StatusCode::UNAUTHORIZED,
                Json(ErrorDto {
                    error: "Token is invalid or expired.".to_string(),
                }),
            )
                .into_response(),
            Self::AccessDenied(_, _) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "You do not have permission to perform this action.".to_string(),
                }),
            )
                .into_response(),
            Self::ReadOnlyAccount(_) => (
                StatusCode::FORBIDDEN,
                Json(ErrorDto {
                    error: "Demo accounts cannot perform this action.".to_string(),
                }),
            )
                .into_response(),
        }
    }
}
