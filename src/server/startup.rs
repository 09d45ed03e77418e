use std::time::Duration;

use tracing::Level;
use tracing_subscriber::EnvFilter;

use crate::server::{config::Config, error::AppError};

/// How long to wait for the store before giving up at startup.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(1);

/// Installs the global tracing subscriber.
///
/// `RUST_LOG` directives apply on top of the profile's default level, debug for the dev
/// profile and info otherwise.
pub fn init_tracing(config: &Config) {
    let level = if config.debug {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

/// Connects to the Sqlite database and runs pending migrations.
///
/// Establishes a connection pool using the connection string from configuration, checks
/// that the store answers, then runs all pending SeaORM migrations so both collections
/// exist before the first request.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError::DbErr)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<sea_orm::DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.connect_timeout(CONNECT_TIMEOUT).sqlx_logging(false);

    let db = Database::connect(opt).await?;
    db.ping().await?;

    Migrator::up(&db, None).await?;

    tracing::info!("Connected to database for {:?} profile", config.environment);

    Ok(db)
}
