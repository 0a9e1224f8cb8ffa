use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};

use crate::{
    error::AppError,
    model::{
        api::StatusDto,
        token::{LoginRequest, RefreshRequest, SignupRequest},
    },
    service::auth::AuthService,
    state::AppState,
};

/// Create a new account.
///
/// Validates the submitted username, email and password, then registers the
/// account and logs it in immediately.
///
/// # Returns
/// - `201 Created` - Token pair plus the fresh profile
/// - `400 Bad Request` - Validation failure, with the offending field named
pub async fn signup(
    State(state): State<AppState>,
    Json(payload): Json<SignupRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::new(&state).signup(payload).await?;

    Ok((StatusCode::CREATED, Json(response)))
}

/// Obtain a token pair from username (or email) and password.
///
/// # Returns
/// - `200 OK` - Access/refresh pair plus the profile
/// - `401 Unauthorized` - Unknown login, wrong password or banned account
pub async fn obtain_token(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<impl IntoResponse, AppError> {
    let response = AuthService::new(&state).login(payload).await?;

    Ok((StatusCode::OK, Json(response)))
}

/// Exchange a refresh token for a fresh pair.
///
/// The spent refresh token is blacklisted, so each refresh token works
/// exactly once.
///
/// # Returns
/// - `200 OK` - New access/refresh pair
/// - `401 Unauthorized` - Invalid, expired or already-used refresh token
pub async fn refresh_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = AuthService::new(&state).refresh(&payload.refresh).await?;

    Ok((StatusCode::OK, Json(tokens)))
}

/// Blacklist a refresh token (logout).
pub async fn blacklist_token(
    State(state): State<AppState>,
    Json(payload): Json<RefreshRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthService::new(&state).blacklist(&payload.refresh).await?;

    Ok((StatusCode::OK, Json(StatusDto::ok())))
}
