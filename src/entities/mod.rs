//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod exchange_record;
pub mod idea;
pub mod marketplace_item;
pub mod user;

// Re-export specific types to avoid conflicts
pub use exchange_record::{
    Column as ExchangeRecordColumn, Entity as ExchangeRecord, Model as ExchangeRecordModel,
};
pub use idea::{Column as IdeaColumn, Entity as Idea, Model as IdeaModel};
pub use marketplace_item::{
    Column as MarketplaceItemColumn, Entity as MarketplaceItem, Model as MarketplaceItemModel,
};
pub use user::{Column as UserColumn, Entity as User, Model as UserModel};
