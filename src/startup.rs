use crate::{config::Config, error::AppError};

/// Connects to the database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from
/// configuration, then runs all pending SeaORM migrations so the schema is
/// up-to-date before the application starts serving requests.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Builds the HTTP client used for object-storage requests.
///
/// Redirects are disabled so the storage endpoint cannot bounce the server to
/// arbitrary hosts.
pub fn setup_reqwest_client() -> Result<reqwest::Client, AppError> {
    let client = reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()?;

    Ok(client)
}

/// Seeds the default navigation entries when the table is empty.
///
/// Runs once at startup so a fresh deployment serves a usable navigation
/// config without requiring an admin to POST one first.
pub async fn seed_navigation(db: &sea_orm::DatabaseConnection) -> Result<(), AppError> {
    use crate::data::navigation::NavigationRepository;

    let nav_repo = NavigationRepository::new(db);
    nav_repo.ensure_defaults().await?;

    Ok(())
}
