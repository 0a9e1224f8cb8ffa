use axum::{
    extract::{Multipart, Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::MultipartForm,
    error::AppError,
    middleware::auth::{AuthClaims, AuthGuard, OptionalAuthClaims, Permission},
    model::user::{parse_pilot_type, PilotQuery, UpdateUserParams},
    service::{
        media::{MediaService, COVER_PIC_DIR, PROFILE_PIC_DIR},
        user::UserService,
    },
    state::AppState,
};

use super::parse_field;

/// Get the authenticated user's own profile.
///
/// # Returns
/// - `200 OK` - Full profile with counts
/// - `401 Unauthorized` - Missing or invalid token
pub async fn my_info(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let profile = UserService::new(&state)
        .profile(user.id, Some(user.id))
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Get a user's public profile.
///
/// Anonymous callers are served too; viewer flags (`is_following`,
/// `is_followed`) are false for them. Banned accounts 404 for everyone but
/// themselves.
pub async fn user_info(
    State(state): State<AppState>,
    OptionalAuthClaims(claims): OptionalAuthClaims,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.map(|claims| claims.sub);

    let profile = UserService::new(&state).profile(user_id, viewer_id).await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Update the authenticated user's profile (multipart).
///
/// Text fields: `email`, `password`, `pilot_type`, `flight_hours`,
/// `aircraft_types`, `license_number`, `bio`. File fields: `profile_pic`,
/// `cover_pic`. Truthy `clear_profile_pic` / `clear_cover_pic` flags remove
/// the stored picture; an uploaded file wins over its clear flag.
///
/// # Returns
/// - `200 OK` - Updated profile
/// - `400 Bad Request` - Validation failure
/// - `403 Forbidden` - Demo (read-only) account
pub async fn update_profile(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    let form = MultipartForm::read(multipart).await?;

    let pilot_type = match form.text("pilot_type") {
        Some(value) if !value.is_empty() => {
            Some(parse_pilot_type(value).ok_or_else(|| AppError::Validation {
                field: "pilot_type".to_string(),
                message: "Expected one of: virtual, real, both.".to_string(),
            })?)
        }
        _ => None,
    };

    let mut params = UpdateUserParams {
        email: form.text("email").map(str::to_string),
        pilot_type,
        flight_hours: parse_field(&form, "flight_hours")?,
        aircraft_types: form.text("aircraft_types").map(str::to_string),
        license_number: form.text("license_number").map(str::to_string),
        bio: form.text("bio").map(str::to_string),
        ..Default::default()
    };

    let media = MediaService::new(&state.http_client, &state.media);

    if let Some(file) = form.file_named("profile_pic") {
        let key = media
            .upload(PROFILE_PIC_DIR, &file.filename, file.bytes.clone())
            .await?;
        params.profile_pic = Some(key);
    } else if form.flag("clear_profile_pic") {
        params.profile_pic = Some(String::new());
    }

    if let Some(file) = form.file_named("cover_pic") {
        let key = media
            .upload(COVER_PIC_DIR, &file.filename, file.bytes.clone())
            .await?;
        params.cover_pic = Some(key);
    } else if form.flag("clear_cover_pic") {
        params.cover_pic = Some(String::new());
    }

    let password = form
        .text("password")
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let profile = UserService::new(&state)
        .update_profile(&user, params, password)
        .await?;

    Ok((StatusCode::OK, Json(profile)))
}

/// Toggle a follow edge towards another user.
///
/// Read-only demo accounts may follow; this is a low-risk social action.
///
/// # Returns
/// - `200 OK` - New edge state plus fresh counts
/// - `403 Forbidden` - Attempted self-follow
/// - `404 Not Found` - Target does not exist or is banned
pub async fn follow_unfollow(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(target_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let result = UserService::new(&state)
        .follow_toggle(&user, target_id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// List the users someone follows.
pub async fn following(
    State(state): State<AppState>,
    OptionalAuthClaims(claims): OptionalAuthClaims,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.map(|claims| claims.sub);

    let users = UserService::new(&state).following(user_id, viewer_id).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// List a user's followers.
pub async fn followers(
    State(state): State<AppState>,
    OptionalAuthClaims(claims): OptionalAuthClaims,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.map(|claims| claims.sub);

    let users = UserService::new(&state).followers(user_id, viewer_id).await?;

    Ok((StatusCode::OK, Json(users)))
}

/// File a complaint.
///
/// # Returns
/// - `201 Created` - The filed complaint, in status "new"
/// - `400 Bad Request` - Empty complaint text
pub async fn file_complaint(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Json(payload): Json<crate::model::admin::CreateComplaintRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    let complaint = crate::service::admin::AdminService::new(&state)
        .file_complaint(&user, payload)
        .await?;

    Ok((StatusCode::CREATED, Json(complaint)))
}

/// Toggle the ban flag on an account. Staff only; banning yourself is a 400.
pub async fn ban_user(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let staff = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Staff])
        .await?;

    let result = crate::service::admin::AdminService::new(&state)
        .ban_toggle(&staff, user_id)
        .await?;

    Ok((StatusCode::OK, Json(result)))
}

/// The pilot directory, with type/search/ordering filters.
pub async fn pilots(
    State(state): State<AppState>,
    OptionalAuthClaims(claims): OptionalAuthClaims,
    Query(query): Query<PilotQuery>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.map(|claims| claims.sub);

    let users = UserService::new(&state).pilots(&query, viewer_id).await?;

    Ok((StatusCode::OK, Json(users)))
}
