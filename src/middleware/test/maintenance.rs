use super::*;

use axum::{
    body::{to_bytes, Body},
    http::{header::AUTHORIZATION, Request, StatusCode},
    middleware::from_fn_with_state,
    routing::{get, post},
    Router,
};
use tower::ServiceExt;

use crate::{
    config::MediaConfig, data::site_settings::SiteSettingsRepository,
    middleware::maintenance::maintenance_gate, state::AppState,
};

fn state_for(db: &sea_orm::DatabaseConnection) -> AppState {
    AppState::new(
        db.clone(),
        reqwest::Client::new(),
        "maintenance-secret".to_string(),
        60,
        7,
        MediaConfig {
            app_url: "http://localhost:8000".to_string(),
            endpoint_url: "http://localhost:9000".to_string(),
            bucket: "test".to_string(),
            public_url: None,
            use_direct_urls: false,
            debug: true,
        },
    )
}

/// A minimal router with the gate layered on, standing in for the real one.
fn gated_router(state: AppState) -> Router {
    Router::new()
        .route("/api/post/", get(|| async { "feed" }))
        .route("/api/accounts/token/", post(|| async { "tokens" }))
        .layer(from_fn_with_state(state.clone(), maintenance_gate))
        .with_state(state)
}

fn get_posts() -> Request<Body> {
    Request::builder()
        .uri("/api/post/")
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn open_site_passes_requests_through() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SiteSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let response = gated_router(state_for(db)).oneshot(get_posts()).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn closed_site_blocks_posts_with_the_configured_message() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SiteSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SiteSettingsRepository::new(db)
        .update(Some(true), Some("Back after the airshow.".to_string()))
        .await?;

    let response = gated_router(state_for(db)).oneshot(get_posts()).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(body["detail"], "Back after the airshow.");

    Ok(())
}

#[tokio::test]
async fn closed_site_without_a_message_uses_the_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SiteSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SiteSettingsRepository::new(db).update(Some(true), None).await?;

    let response = gated_router(state_for(db)).oneshot(get_posts()).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(
        body["detail"],
        "The site is temporarily closed for maintenance."
    );

    Ok(())
}

#[tokio::test]
async fn token_endpoint_stays_reachable_while_closed() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SiteSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SiteSettingsRepository::new(db)
        .update(Some(true), Some("Closed.".to_string()))
        .await?;

    let request = Request::builder()
        .method("POST")
        .uri("/api/accounts/token/")
        .body(Body::empty())
        .unwrap();
    let response = gated_router(state_for(db)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    Ok(())
}

#[tokio::test]
async fn staff_claims_bypass_the_closed_site() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::SiteSettings)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    SiteSettingsRepository::new(db)
        .update(Some(true), Some("Closed.".to_string()))
        .await?;

    let key = jsonwebtoken::EncodingKey::from_secret(b"maintenance-secret");

    let mut staff_claims = claims_for(1);
    staff_claims.is_staff = true;
    let staff_token =
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), &staff_claims, &key).unwrap();

    let request = Request::builder()
        .uri("/api/post/")
        .header(AUTHORIZATION, format!("Bearer {}", staff_token))
        .body(Body::empty())
        .unwrap();
    let response = gated_router(state_for(db)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    // A regular user's token does not bypass the gate.
    let user_token =
        jsonwebtoken::encode(&jsonwebtoken::Header::default(), &claims_for(2), &key).unwrap();

    let request = Request::builder()
        .uri("/api/post/")
        .header(AUTHORIZATION, format!("Bearer {}", user_token))
        .body(Body::empty())
        .unwrap();
    let response = gated_router(state_for(db)).oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    Ok(())
}
