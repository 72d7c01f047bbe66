//! Configuration management for the portal service.
//!
//! Combines environment variables (`DATABASE_URL`, `PORT`, loaded through
//! `.env` via dotenvy) with the `config.toml` user seed list into a single
//! [`AppConfig`] consumed at startup.

/// Database URL, connection, and table creation
pub mod database;

/// User seed configuration loading from config.toml
pub mod users;

use crate::errors::{Error, Result};
use tracing::info;

/// Fully resolved application configuration.
#[derive(Debug)]
pub struct AppConfig {
    /// SQLite database URL
    pub database_url: String,
    /// TCP port the HTTP server binds to
    pub port: u16,
    /// User accounts to seed on startup
    pub users: Vec<users::UserConfig>,
}

/// Loads the complete application configuration from the environment and
/// config.toml.
///
/// # Errors
/// Returns an error if `PORT` is set but unparseable, or if config.toml is
/// missing or malformed.
pub fn load_app_configuration() -> Result<AppConfig> {
    let database_url = database::get_database_url();
    let port = load_port()?;

    let seed_config = users::load_default_config()?;
    info!(
        "Loaded {} user seed entries from config.toml",
        seed_config.users.len()
    );

    Ok(AppConfig {
        database_url,
        port,
        users: seed_config.users,
    })
}

fn load_port() -> Result<u16> {
    let raw = std::env::var("PORT").unwrap_or_else(|_| {
        info!("PORT not set, using default: 8080");
        "8080".to_string()
    });
    raw.parse().map_err(|_| Error::Config {
        message: format!("Invalid PORT value '{raw}'"),
    })
}
