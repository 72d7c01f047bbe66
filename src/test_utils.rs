//! Shared test utilities.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config::database::create_tables,
    core::{idea, marketplace, user},
    entities,
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};

/// Password shared by all accounts created through these helpers.
pub const TEST_PASSWORD: &str = "secret";

/// Creates an in-memory `SQLite` database with all tables initialized.
///
/// The pool is pinned to a single connection so that every query - including
/// queries from spawned tasks - sees the same in-memory database.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let db = Database::connect(options).await?;
    create_tables(&db).await?;
    Ok(db)
}

/// Creates a `ROLE_STUDENT` account with the given starting rose balance.
pub async fn create_test_user(
    db: &DatabaseConnection,
    username: &str,
    roses: i64,
) -> Result<entities::user::Model> {
    user::create_user(
        db,
        username.to_string(),
        TEST_PASSWORD.to_string(),
        user::ROLE_STUDENT.to_string(),
        roses,
    )
    .await
}

/// Creates a `ROLE_ADMIN` account (admins hold no roses by default).
pub async fn create_admin_user(
    db: &DatabaseConnection,
    username: &str,
) -> Result<entities::user::Model> {
    user::create_user(
        db,
        username.to_string(),
        TEST_PASSWORD.to_string(),
        user::ROLE_ADMIN.to_string(),
        0,
    )
    .await
}

/// Creates a test idea with sensible defaults.
///
/// # Defaults
/// * `description`: `"Test idea description"`
/// * `created_at`: now
/// * `sdgs`: `[1, 2]`
pub async fn create_test_idea(
    db: &DatabaseConnection,
    owner: &str,
    title: &str,
) -> Result<entities::idea::Model> {
    idea::create_idea(
        db,
        owner.to_string(),
        title.to_string(),
        "Test idea description".to_string(),
        Utc::now(),
        vec![1, 2],
    )
    .await
}

/// Creates a test marketplace item with the given stock and unit price.
pub async fn create_test_item(
    db: &DatabaseConnection,
    name: &str,
    quantity: i64,
    price: i64,
) -> Result<entities::marketplace_item::Model> {
    marketplace::create_item(
        db,
        marketplace::ItemFields {
            name: name.to_string(),
            description: "Test item description".to_string(),
            quantity,
            price,
            category: "Test".to_string(),
            image: None,
        },
    )
    .await
}

/// Reads a user's current rose balance straight from the database.
pub async fn balance_of(db: &DatabaseConnection, username: &str) -> Result<i64> {
    user::get_user_by_username(db, username)
        .await?
        .map(|u| u.rose_balance)
        .ok_or_else(|| Error::UserNotFound {
            username: username.to_string(),
        })
}
