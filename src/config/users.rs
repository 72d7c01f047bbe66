//! User seed configuration loading from config.toml
//!
//! This module provides functionality to load the initial user accounts
//! (username, password, role, and starting rose balance) from a TOML
//! configuration file. The users defined in config.toml are used to seed the
//! database on first run or when accounts are missing.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize)]
pub struct Config {
    /// List of user accounts to seed
    pub users: Vec<UserConfig>,
}

/// Configuration for a single user account
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    /// Login name
    pub username: String,
    /// Password checked against Basic auth credentials
    pub password: String,
    /// Authorization role (`ROLE_ADMIN` or `ROLE_STUDENT`)
    pub role: String,
    /// Starting rose balance
    pub roses: i64,
}

/// Loads the user seed configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads the user seed configuration from the default location (./config.toml)
///
/// # Errors
/// Returns an error if the file is missing or malformed.
pub fn load_default_config() -> Result<Config> {
    load_config("config.toml")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;

    #[test]
    fn test_parse_user_config() {
        let toml_str = r#"
            [[users]]
            username = "admin"
            password = "hunter2"
            role = "ROLE_ADMIN"
            roses = 0

            [[users]]
            username = "maria"
            password = "gardens"
            role = "ROLE_STUDENT"
            roses = 100
        "#;

        let config: Config = toml::from_str(toml_str).unwrap();
        assert_eq!(config.users.len(), 2);
        assert_eq!(config.users[0].username, "admin");
        assert_eq!(config.users[0].role, "ROLE_ADMIN");
        assert_eq!(config.users[0].roses, 0);

        assert_eq!(config.users[1].username, "maria");
        assert_eq!(config.users[1].roses, 100);
    }

    #[test]
    fn test_missing_field_is_rejected() {
        let toml_str = r#"
            [[users]]
            username = "nopassword"
            role = "ROLE_STUDENT"
            roses = 10
        "#;

        assert!(toml::from_str::<Config>(toml_str).is_err());
    }
}
