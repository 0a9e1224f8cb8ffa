use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    error::AppError,
    middleware::auth::{AuthClaims, AuthGuard, Permission},
    model::admin::{
        ActionLogQuery, AdminGrantRequest, ComplaintQuery, ReplaceNavigationRequest,
        UpdateComplaintRequest, UpdateSiteSettingsRequest,
    },
    service::{admin::AdminService, user::UserService},
    state::AppState,
};

/// The authenticated staff member's own profile.
///
/// # Access Control
/// - `Staff` - All `/api/admin/` endpoints except `navigation/public/`
pub async fn me(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let profile = UserService::new(&state)
        .profile(staff.id, Some(staff.id))
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Headline dashboard metrics.
pub async fn dashboard_metrics(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let metrics = AdminService::new(&state).dashboard().await?;

    Ok((StatusCode::OK, Json(metrics)))
}

/// Seven-day activity histogram, oldest day first.
pub async fn activity_chart(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let points = AdminService::new(&state).activity_chart().await?;

    Ok((StatusCode::OK, Json(points)))
}

/// Complaints for triage, newest first, optionally filtered by status.
pub async fn complaints(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Query(query): Query<ComplaintQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let complaints = AdminService::new(&state).complaints(&query).await?;

    Ok((StatusCode::OK, Json(complaints)))
}

/// Apply a triage update to one complaint.
///
/// Stamps the handling staff member; a status change sends the complainant a
/// system notification.
pub async fn update_complaint(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(complaint_id): Path<i32>,
    Json(payload): Json<UpdateComplaintRequest>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let complaint = AdminService::new(&state)
        .update_complaint(&staff, complaint_id, payload)
        .await?;

    Ok((StatusCode::OK, Json(complaint)))
}

/// Every account, newest first, for the admin user list.
pub async fn users(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let users = AdminService::new(&state).users().await?;

    Ok((StatusCode::OK, Json(users)))
}

/// Action log rows, newest first, with user/action/days filters.
pub async fn activity(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Query(query): Query<ActionLogQuery>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let logs = AdminService::new(&state).action_logs(&query).await?;

    Ok((StatusCode::OK, Json(logs)))
}

/// Full navigation config, for the admin editor.
pub async fn navigation(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let items = AdminService::new(&state).navigation().await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Replace the whole navigation config atomically.
pub async fn replace_navigation(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<ReplaceNavigationRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let items = AdminService::new(&state)
        .replace_navigation(payload.items)
        .await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Navigation entries shown to regular users. Not staff-gated: the client
/// fetches this to render its sidebar.
pub async fn public_navigation(
    State(state): State<AppState>,
) -> Result<impl IntoResponse, AppError> {
    let items = AdminService::new(&state).public_navigation().await?;

    Ok((StatusCode::OK, Json(items)))
}

/// Current site settings (maintenance switch and message).
pub async fn site_settings(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let settings = AdminService::new(&state).settings().await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Update the site settings.
pub async fn update_site_settings(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<UpdateSiteSettingsRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let settings = AdminService::new(&state).update_settings(payload).await?;

    Ok((StatusCode::OK, Json(settings)))
}

/// Current staff accounts.
pub async fn admins(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let admins = AdminService::new(&state).admins().await?;

    Ok((StatusCode::OK, Json(admins)))
}

/// Grant staff access to an account by user id.
pub async fn grant_admin(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<AdminGrantRequest>,
) -> Result<impl IntoResponse, AppError> {
    AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let admin = AdminService::new(&state).grant_admin(payload.user_id).await?;

    Ok((StatusCode::CREATED, Json(admin)))
}

/// Revoke staff access. Revoking your own access is a 400.
pub async fn revoke_admin(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let admin = AdminService::new(&state).revoke_admin(&staff, user_id).await?;

    Ok((StatusCode::OK, Json(admin)))
}
