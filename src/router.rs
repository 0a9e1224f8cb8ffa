//! Route table.
//!
//! All API paths keep a trailing slash, matching the URL scheme clients
//! already use. Layer order (outermost first): CORS, request tracing, action
//! log, maintenance gate.

use axum::{
    middleware::from_fn_with_state,
    routing::{delete, get, patch, post, put},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::{
    controller::{admin, auth, media, notification, post as post_controller, route, user},
    middleware::{action_log::action_log, maintenance::maintenance_gate},
    state::AppState,
};

pub fn router(state: AppState) -> Router {
    Router::new()
        .merge(accounts_routes())
        .merge(post_routes())
        .merge(flight_route_routes())
        .merge(admin_routes())
        .route("/media/{*path}", get(media::media_proxy))
        .layer(from_fn_with_state(state.clone(), maintenance_gate))
        .layer(from_fn_with_state(state.clone(), action_log))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

fn accounts_routes() -> Router<AppState> {
    Router::new()
        .route("/api/accounts/token/", post(auth::obtain_token))
        .route("/api/accounts/token/refresh/", post(auth::refresh_token))
        .route("/api/accounts/token/blacklist/", post(auth::blacklist_token))
        .route("/api/accounts/signup/", post(auth::signup))
        .route("/api/accounts/info/", get(user::my_info))
        .route("/api/accounts/{id}/info/", get(user::user_info))
        .route("/api/accounts/profile/update/", put(user::update_profile))
        .route(
            "/api/accounts/follow_unfollow/{pk}/",
            post(user::follow_unfollow),
        )
        .route("/api/accounts/{id}/following/", get(user::following))
        .route("/api/accounts/{id}/followers/", get(user::followers))
        .route("/api/accounts/pilots/", get(user::pilots))
        .route("/api/accounts/notifications/", get(notification::list))
        .route(
            "/api/accounts/notifications/{pk}/read/",
            post(notification::mark_read),
        )
        .route(
            "/api/accounts/notifications/read_all/",
            post(notification::mark_all_read),
        )
        .route(
            "/api/accounts/notifications/unread_count/",
            get(notification::unread_count),
        )
        .route("/api/accounts/complaints/", post(user::file_complaint))
        .route("/api/accounts/{pk}/ban/", post(user::ban_user))
}

fn post_routes() -> Router<AppState> {
    Router::new()
        .route("/api/post/", get(post_controller::feed))
        .route("/api/post/create/", post(post_controller::create_post))
        .route("/api/post/{pk}/", get(post_controller::post_detail))
        .route("/api/post/{pk}/update/", put(post_controller::update_post))
        .route("/api/post/{pk}/delete/", delete(post_controller::delete_post))
        .route("/api/post/{pk}/like/", post(post_controller::like_post))
        .route("/api/post/{pk}/save/", post(post_controller::save_post))
        .route("/api/post/saved/", get(post_controller::saved_posts))
        .route(
            "/api/post/{pk}/comments/",
            get(post_controller::comments).post(post_controller::add_comment),
        )
        .route(
            "/api/post/comment/{pk}/",
            put(post_controller::update_comment).delete(post_controller::delete_comment),
        )
}

/// The flight route namespace lives under `/api/post/routes/`, the URL layout
/// clients already depend on.
fn flight_route_routes() -> Router<AppState> {
    Router::new()
        .route("/api/post/routes/", get(route::list_routes))
        .route("/api/post/routes/create/", post(route::create_route))
        .route("/api/post/routes/{pk}/", get(route::route_detail))
        .route("/api/post/routes/{pk}/update/", put(route::update_route))
        .route("/api/post/routes/{pk}/delete/", delete(route::delete_route))
        .route("/api/post/routes/{pk}/like/", post(route::like_route))
        .route("/api/post/routes/{pk}/save/", post(route::save_route))
        .route("/api/post/routes/my/", get(route::my_routes))
        .route("/api/post/routes/saved/", get(route::saved_routes))
        .route("/api/post/routes/following/", get(route::following_routes))
}

fn admin_routes() -> Router<AppState> {
    Router::new()
        .route("/api/admin/me/", get(admin::me))
        .route("/api/admin/dashboard/metrics/", get(admin::dashboard_metrics))
        .route(
            "/api/admin/dashboard/activity-chart/",
            get(admin::activity_chart),
        )
        .route("/api/admin/complaints/", get(admin::complaints))
        .route("/api/admin/complaints/{pk}/", patch(admin::update_complaint))
        .route("/api/admin/users/", get(admin::users))
        .route("/api/admin/activity/", get(admin::activity))
        .route(
            "/api/admin/navigation/",
            get(admin::navigation).put(admin::replace_navigation),
        )
        .route("/api/admin/navigation/public/", get(admin::public_navigation))
        .route(
            "/api/admin/site-settings/",
            get(admin::site_settings).put(admin::update_site_settings),
        )
        .route(
            "/api/admin/admins/",
            get(admin::admins).post(admin::grant_admin),
        )
        .route("/api/admin/admins/{pk}/", delete(admin::revoke_admin))
}
