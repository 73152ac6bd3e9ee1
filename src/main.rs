use config::Config;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Creates the users, movies, reviews and posts tables and exits.
fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    application::init_database(&config.database_path, config.database_pool_size)?;

    info!("✅ Tables created in {}", config.database_path);
    Ok(())
}
