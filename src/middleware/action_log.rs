//! Action audit log middleware.
//!
//! Records who did what where: every post-namespace request, plus mutating
//! account requests. Admin endpoints are excluded; staff activity is visible
//! through the back-office itself. A logging failure never fails the request.

use std::net::SocketAddr;

use axum::{
    extract::{ConnectInfo, Request, State},
    http::Method,
    middleware::Next,
    response::Response,
};

use crate::{
    data::action_log::ActionLogRepository,
    middleware::auth::{bearer_token, decode_claims},
    model::admin::CreateActionLogParams,
    state::AppState,
};

/// Decides whether a request lands in the action log.
///
/// - `/api/admin/...` - never logged
/// - `/api/post/...` - always logged, reads included
/// - `/api/accounts/...` - logged for mutating methods only
/// - everything else - not logged
pub fn should_log(path: &str, method: &Method) -> bool {
    if path.starts_with("/api/admin/") {
        return false;
    }

    if path.starts_with("/api/post/") {
        return true;
    }

    if path.starts_with("/api/accounts/") {
        return !matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS);
    }

    false
}

/// Writes an action log row before handing the request on.
///
/// The user id comes from the bearer token when present and valid; anonymous
/// requests log with no user. Database failures are logged and swallowed.
pub async fn action_log(State(state): State<AppState>, request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let path = request.uri().path().to_string();

    if should_log(&path, &method) {
        let user_id = bearer_token(request.headers())
            .and_then(|token| decode_claims(&token, &state.jwt_secret).ok())
            .map(|claims| claims.sub);

        let ip_address = client_ip(&request);

        let log_repo = ActionLogRepository::new(&state.db);
        let result = log_repo
            .create(CreateActionLogParams {
                user_id,
                action: format!("{} {}", method, path),
                path,
                ip_address,
                extra: serde_json::json!({}),
            })
            .await;

        if let Err(err) = result {
            tracing::warn!("Failed to record action log entry: {}", err);
        }
    }

    next.run(request).await
}

/// Client IP: first entry of `X-Forwarded-For` when present, otherwise the
/// peer address of the connection.
fn client_ip(request: &Request) -> Option<String> {
    let forwarded = request
        .headers()
        .get("x-forwarded-for")
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(',').next())
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty());

    if forwarded.is_some() {
        return forwarded;
    }

    request
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|info| info.0.ip().to_string())
}
