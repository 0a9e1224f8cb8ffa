use axum::{
    extract::{Path, State},
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
};

use crate::{error::AppError, service::media::MediaService, state::AppState};

/// Proxy an object from the media store.
///
/// Keeps the object store off the public internet: clients always talk to the
/// API, which streams the object through. Responses are long-cacheable since
/// stored keys carry a random prefix and never change content.
///
/// # Returns
/// - `200 OK` - Object bytes with its content type
/// - `404 Not Found` - No such object
pub async fn media_proxy(
    State(state): State<AppState>,
    Path(path): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let media = MediaService::new(&state.http_client, &state.media);

    let Some((bytes, content_type)) = media.fetch(&path).await? else {
        return Err(AppError::NotFound("Media object not found.".to_string()));
    };

    let mut headers = HeaderMap::new();
    headers.insert(
        header::CONTENT_TYPE,
        HeaderValue::from_str(&content_type)
            .unwrap_or(HeaderValue::from_static("application/octet-stream")),
    );
    headers.insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=86400"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );

    Ok((StatusCode::OK, headers, bytes))
}
