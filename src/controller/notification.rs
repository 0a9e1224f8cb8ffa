use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{AuthClaims, AuthGuard},
    model::{api::StatusDto, notification::NotificationQuery},
    service::notification::NotificationService,
    state::AppState,
};

/// List the caller's notifications, newest first. `?unread=true` restricts to
/// unread ones.
pub async fn list(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Query(query): Query<NotificationQuery>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let notifications = NotificationService::new(&state).list(&user, &query).await?;

    Ok((StatusCode::OK, Json(notifications)))
}

/// Mark one notification read.
///
/// # Returns
/// - `200 OK` - Marked
/// - `404 Not Found` - No such notification for this user
pub async fn mark_read(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(notification_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    NotificationService::new(&state)
        .mark_read(&user, notification_id)
        .await?;

    Ok((StatusCode::OK, Json(StatusDto::ok())))
}

/// Mark all of the caller's notifications read.
pub async fn mark_all_read(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    NotificationService::new(&state).mark_all_read(&user).await?;

    Ok((StatusCode::OK, Json(StatusDto::ok())))
}

/// Unread notification count, for the badge in the header.
pub async fn unread_count(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let count = NotificationService::new(&state).unread_count(&user).await?;

    Ok((StatusCode::OK, Json(count)))
}
