//! # CLI Serve Command
//!
//! Starts the Crewdesk API server: connects to the database, applies
//! pending migrations, and listens for HTTP traffic.

use error::Result;
use migration::MigratorTrait as _;
use sea_orm::{ConnectOptions, Database};
use server::AppState;
use tracing::info;

use crate::{config::DatabaseConfig, ServeArgs};

/// Starts the API server
///
/// # Arguments
///
/// * `config` - Database configuration
/// * `args` - Serve command arguments
///
/// # Returns
///
/// A `Result` that resolves when the server shuts down.
pub async fn serve(config: &DatabaseConfig, args: ServeArgs) -> Result<()> {
    let database_url = crate::config::build_database_url(config);

    let mut options = ConnectOptions::new(database_url);
    options.max_connections(
        std::env::var("CREWDESK_DATABASE_POOL_SIZE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(10),
    );
    options.sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to connect to database: {}", e))?;

    migration::Migrator::up(&db, None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to apply migrations: {}", e))?;

    let jwt_config = auth::JwtConfig::from_env()?;

    let state = AppState {
        db,
        jwt_config,
        start_time: std::time::Instant::now(),
    };

    let app = server::create_app_router(state);

    let address = format!("{}:{}", args.host, args.port);
    let listener = tokio::net::TcpListener::bind(&address)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to bind {}: {}", address, e))?;

    info!(target: "serve", address = %address, "Crewdesk API server listening");

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
