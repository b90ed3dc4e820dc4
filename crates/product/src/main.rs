use anyhow::{Context, Result};
use product::{
    config::myconfig::{Config, Storage},
    handler::AppRouter,
    repository::{ProductoRepository, in_memory::InMemoryProductoRepository},
    state::AppState,
};
use shared::{
    config::{ConnectionManager, ConnectionPool},
    utils::init_logger,
};
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let is_dev = std::env::var("DEV_MODE")
        .map(|v| v == "true" || v == "1")
        .unwrap_or(false);
    let is_enable_file = std::env::var("ENABLE_FILE_LOG")
        .map(|v| v == "true")
        .unwrap_or(false);

    init_logger("product-service", is_dev, is_enable_file);

    let config = Config::init().context("Failed to load configuration")?;

    info!("🚀 Starting Producto Service initialization...");

    let repository = match &config.storage {
        Storage::Postgres {
            database_url,
            run_migrations,
        } => {
            let db_pool =
                ConnectionManager::new_pool(database_url, config.db_min_conn, config.db_max_conn)
                    .await
                    .context("Failed to initialize database pool")?;

            if *run_migrations {
                apply_migrations(&db_pool)
                    .await
                    .context("Failed to run database migrations")?;
            }

            ProductoRepository::new(db_pool)
        }
        Storage::Memory => {
            warn!("⚠️ Using in-memory storage; data is lost on shutdown");
            ProductoRepository::in_memory(InMemoryProductoRepository::new())
        }
    };

    let state = AppState::new(repository);

    info!("✅ Application setup completed successfully.");

    AppRouter::serve(config.port, state)
        .await
        .context("Failed to start server")?;

    info!("✅ Producto Service shutdown complete.");

    Ok(())
}

async fn apply_migrations(pool: &ConnectionPool) -> Result<()> {
    info!("📦 Running database migrations");
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
