use std::net::SocketAddr;

use pilothub::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,sea_orm=warn".into()),
        )
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    startup::seed_navigation(&db).await?;
    let http_client = startup::setup_reqwest_client()?;

    let state = AppState::new(
        db,
        http_client,
        config.jwt_secret.clone(),
        config.access_token_minutes,
        config.refresh_token_days,
        config.media.clone(),
    );

    tracing::info!("Starting server");

    let app = router::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!("Listening on {}", config.bind_address);

    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
