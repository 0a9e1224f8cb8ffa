use crate::middleware::action_log::should_log;
use axum::http::Method;

#[test]
fn admin_requests_are_never_logged() {
    assert!(!should_log("/api/admin/users/", &Method::GET));
    assert!(!should_log("/api/admin/complaints/1/", &Method::PATCH));
}

#[test]
fn post_requests_are_always_logged() {
    assert!(should_log("/api/post/", &Method::GET));
    assert!(should_log("/api/post/create/", &Method::POST));
    assert!(should_log("/api/post/routes/", &Method::GET));
}

#[test]
fn account_requests_log_mutations_only() {
    assert!(!should_log("/api/accounts/pilots/", &Method::GET));
    assert!(!should_log("/api/accounts/info/", &Method::HEAD));
    assert!(should_log("/api/accounts/signup/", &Method::POST));
    assert!(should_log("/api/accounts/profile/update/", &Method::PUT));
}

#[test]
fn everything_else_is_quiet() {
    assert!(!should_log("/media/pics/1.jpg", &Method::GET));
    assert!(!should_log("/", &Method::POST));
}
