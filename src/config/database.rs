//! Database configuration module.
//!
//! Handles `SQLite` connection setup and table creation using `SeaORM`. Tables
//! are generated from the entity definitions via `Schema::create_table_from_entity`,
//! so the database schema always matches the Rust struct definitions without
//! requiring manual SQL.

use crate::entities::{ExchangeRecord, Idea, MarketplaceItem, User};
use crate::errors::Result;
use sea_orm::{ConnectionTrait, Database, DatabaseConnection, Schema};

/// Gets the database URL from the `DATABASE_URL` environment variable, falling
/// back to a local `SQLite` file that is created on first use.
#[must_use]
pub fn get_database_url() -> String {
    std::env::var("DATABASE_URL")
        .unwrap_or_else(|_| "sqlite://student_portal.sqlite?mode=rwc".to_string())
}

/// Establishes a connection to the database at the given URL.
///
/// # Errors
/// Returns an error if the database cannot be opened.
pub async fn create_connection(database_url: &str) -> Result<DatabaseConnection> {
    Database::connect(database_url).await.map_err(Into::into)
}

/// Creates all tables (users, ideas, marketplace items, exchange records) from
/// the entity definitions. Existing tables are left untouched, so this is safe
/// to run on every startup.
///
/// # Errors
/// Returns an error if a table creation statement fails.
pub async fn create_tables(db: &DatabaseConnection) -> Result<()> {
    let builder = db.get_database_backend();
    let schema = Schema::new(builder);

    for mut table in [
        schema.create_table_from_entity(User),
        schema.create_table_from_entity(Idea),
        schema.create_table_from_entity(MarketplaceItem),
        schema.create_table_from_entity(ExchangeRecord),
    ] {
        db.execute(builder.build(table.if_not_exists())).await?;
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::{
        exchange_record::Model as ExchangeRecordModel, idea::Model as IdeaModel,
        marketplace_item::Model as MarketplaceItemModel, user::Model as UserModel,
    };
    use sea_orm::{EntityTrait, QuerySelect};

    #[tokio::test]
    async fn test_create_tables() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;

        // Test that tables exist by querying them
        let _: Vec<UserModel> = User::find().limit(1).all(&db).await?;
        let _: Vec<IdeaModel> = Idea::find().limit(1).all(&db).await?;
        let _: Vec<MarketplaceItemModel> = MarketplaceItem::find().limit(1).all(&db).await?;
        let _: Vec<ExchangeRecordModel> = ExchangeRecord::find().limit(1).all(&db).await?;

        Ok(())
    }

    #[tokio::test]
    async fn test_create_tables_is_idempotent() -> Result<()> {
        let db = Database::connect("sqlite::memory:").await?;
        create_tables(&db).await?;
        create_tables(&db).await?;

        let _: Vec<UserModel> = User::find().limit(1).all(&db).await?;
        Ok(())
    }
}
