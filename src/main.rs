//! Shelf item service

use shelf::{api, auth, core, db};

use anyhow::Result;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration (handles CLI args, env vars, and config file)
    let config = match core::config::Config::load() {
        Ok(cfg) => cfg,
        Err(e) => {
            // Logging isn't initialized yet
            eprintln!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };

    let _logger = match core::Logger::init(&config.logging) {
        Ok(logger) => logger,
        Err(e) => {
            eprintln!("Failed to initialize logging: {}", e);
            return Err(e);
        }
    };

    info!("Starting Shelf v{}", shelf::VERSION);
    info!(
        host = %config.server.host,
        port = config.server.port,
        "Server configuration"
    );
    info!(path = ?config.database.path, "Database configuration");

    let db = Arc::new(db::DatabaseManager::new(
        &config.database.path,
        config.database.connection_pool_size,
        Duration::from_millis(config.database.busy_timeout),
    )?);
    info!("Database initialized successfully");

    if let Some((username, password)) = config.security.default_account() {
        ensure_default_user(db.clone(), username, password).await?;
    }

    let server_url = format!("http://{}:{}", config.server.host, config.server.port);
    let server = api::ApiServer::new(config, db)?;
    info!(url = %server_url, "Server ready - starting to serve requests");

    server.serve().await?;

    Ok(())
}

/// Create the configured bootstrap account when no users exist yet
async fn ensure_default_user(
    db: Arc<db::DatabaseManager>,
    username: &str,
    password: &str,
) -> Result<()> {
    use shelf::db::repository::Repository;

    let user_repo = db::UserRepository::new(db);
    if user_repo.count().await? > 0 {
        return Ok(());
    }

    info!(username, "No users found, creating default user");
    user_repo
        .create(db::NewUser {
            username: username.to_string(),
            email: None,
            full_name: None,
            password_hash: auth::hash_password_blocking(password.to_string()).await?,
        })
        .await?;
    warn!(username, "Default user created from configured bootstrap credentials");

    Ok(())
}
