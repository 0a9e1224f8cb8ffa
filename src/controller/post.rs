use axum::{
    extract::{Multipart, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};

use crate::{
    controller::MultipartForm,
    error::AppError,
    middleware::auth::{AuthClaims, AuthGuard, OptionalAuthClaims, Permission},
    model::post::{CommentRequest, UpdatePostRequest},
    service::{
        media::{MediaService, POST_IMAGE_DIR},
        post::PostService,
    },
    state::AppState,
};

/// The global feed, newest first. Anonymous callers get the feed with all
/// viewer flags false.
pub async fn feed(
    State(state): State<AppState>,
    OptionalAuthClaims(claims): OptionalAuthClaims,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.map(|claims| claims.sub);

    let posts = PostService::new(&state).feed(viewer_id).await?;

    Ok((StatusCode::OK, Json(posts)))
}

/// Create a post (multipart).
///
/// Text field `content`, file field `image` repeated once per attached
/// image. Either content or at least one image is required; images keep
/// their submission order.
///
/// # Returns
/// - `201 Created` - The new post
/// - `400 Bad Request` - Empty post
/// - `403 Forbidden` - Demo (read-only) account
pub async fn create_post(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    multipart: Multipart,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    let form = MultipartForm::read(multipart).await?;
    let content = form.text("content").unwrap_or_default().to_string();

    let media = MediaService::new(&state.http_client, &state.media);

    let mut images = Vec::new();
    for file in form.files_named("image") {
        let key = media
            .upload(POST_IMAGE_DIR, &file.filename, file.bytes.clone())
            .await?;
        images.push(key);
    }

    let post = PostService::new(&state).create(&user, content, images).await?;

    Ok((StatusCode::CREATED, Json(post)))
}

/// Get a single post.
pub async fn post_detail(
    State(state): State<AppState>,
    OptionalAuthClaims(claims): OptionalAuthClaims,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let viewer_id = claims.map(|claims| claims.sub);

    let post = PostService::new(&state).get(post_id, viewer_id).await?;

    Ok((StatusCode::OK, Json(post)))
}

/// Update the caller's own post.
///
/// # Returns
/// - `200 OK` - Updated post, flagged as edited
/// - `404 Not Found` - Post missing or owned by someone else
pub async fn update_post(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(post_id): Path<i32>,
    Json(payload): Json<UpdatePostRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    let post = PostService::new(&state)
        .update(&user, post_id, payload.content)
        .await?;

    Ok((StatusCode::OK, Json(post)))
}

/// Delete the caller's own post.
pub async fn delete_post(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    PostService::new(&state).delete(&user, post_id).await?;

    Ok(StatusCode::NO_CONTENT)
}

/// Toggle a like on a post. Open to demo accounts.
pub async fn like_post(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let result = PostService::new(&state).like_toggle(&user, post_id).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Toggle a save on a post. Open to demo accounts.
pub async fn save_post(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let result = PostService::new(&state).save_toggle(&user, post_id).await?;

    Ok((StatusCode::OK, Json(result)))
}

/// Posts the caller saved, most recently saved first.
pub async fn saved_posts(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims).require(&[]).await?;

    let posts = PostService::new(&state).saved(&user).await?;

    Ok((StatusCode::OK, Json(posts)))
}

/// List a post's comments, oldest first.
pub async fn comments(
    State(state): State<AppState>,
    Path(post_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let comments = PostService::new(&state).comments(post_id).await?;

    Ok((StatusCode::OK, Json(comments)))
}

/// Add a comment to a post.
pub async fn add_comment(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(post_id): Path<i32>,
    Json(payload): Json<CommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    let comment = PostService::new(&state)
        .add_comment(&user, post_id, payload.content)
        .await?;

    Ok((StatusCode::CREATED, Json(comment)))
}

/// Update the caller's own comment.
pub async fn update_comment(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(comment_id): Path<i32>,
    Json(payload): Json<CommentRequest>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    let comment = PostService::new(&state)
        .update_comment(&user, comment_id, payload.content)
        .await?;

    Ok((StatusCode::OK, Json(comment)))
}

/// Delete the caller's own comment.
pub async fn delete_comment(
    State(state): State<AppState>,
    AuthClaims(claims): AuthClaims,
    Path(comment_id): Path<i32>,
) -> Result<impl IntoResponse, AppError> {
    let user = AuthGuard::new(&state.db, &claims)
        .require(&[Permission::Write])
        .await?;

    PostService::new(&state).delete_comment(&user, comment_id).await?;

    Ok(StatusCode::NO_CONTENT)
}
