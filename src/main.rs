//! Country Registry API - Main Entry Point

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, Layer};

use country_registry::infrastructure::driven_adapters::config::{AppConfig, LoggingConfig};
use country_registry::infrastructure::driven_adapters::country_repository::PostgresCountryRepository;
use country_registry::infrastructure::driven_adapters::database;
use country_registry::infrastructure::driving_adapters::api_rest::{build_router, AppState};

fn init_tracing(logging: &LoggingConfig) {
    let fmt_layer = if logging.json {
        tracing_subscriber::fmt::layer().json().boxed()
    } else {
        tracing_subscriber::fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "country_registry=debug,tower_http=debug".into()),
        )
        .with(fmt_layer)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load configuration
    let config = AppConfig::load()?;
    init_tracing(&config.logging);
    tracing::info!("Configuration loaded successfully");

    // Create database connection pool
    let pool = database::create_pool(&config.database).await?;
    tracing::info!("Database connection pool created");

    // Run migrations
    database::run_migrations(&pool).await?;
    tracing::info!("Database migrations completed");

    // Create repository and application state
    let country_repository = Arc::new(PostgresCountryRepository::new(pool));
    let app = build_router(AppState::new(country_repository));

    // Start server
    let addr = config.bind_address();
    let listener = TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
