use anyhow::Result;
use fitness_tracker::api::routes::create_routes;
use fitness_tracker::config::{run_migrations, AppConfig, DatabaseConfig, DatabaseSeeder};
use tokio::net::TcpListener;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // A missing .env is fine; the environment may already be set.
    dotenvy::dotenv().ok();

    let app_config = AppConfig::from_env()?;

    // RUST_LOG wins over LOG_LEVEL when both are set
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&app_config.log_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let db_config = DatabaseConfig::from_env()?;
    let pool = db_config.create_pool().await?;
    run_migrations(&pool).await?;
    info!("Database schema is up to date");

    if app_config.should_seed_demo_data() {
        DatabaseSeeder::new(pool.clone()).seed_all().await?;
    } else if app_config.seed_demo_data {
        warn!("SEED_DEMO_DATA ignored in production");
    }

    let app = create_routes(pool);

    let listener = TcpListener::bind(app_config.server_address()).await?;
    info!(
        "Fitness tracker starting on http://{} ({})",
        app_config.server_address(),
        app_config.environment
    );
    info!("Health check available at http://{}/health", app_config.server_address());

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %err, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
