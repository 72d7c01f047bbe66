//! Exchange record entity - Append-only history of marketplace exchanges.
//!
//! One row per successful exchange, scoped to the user who performed it.
//! Records carry the item name (not a foreign key) so history survives item
//! deletion.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Exchange record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "exchange_records")]
pub struct Model {
    /// Unique identifier for the record
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Username of the user who made the exchange
    pub username: String,
    /// Name of the exchanged item at exchange time
    pub item_name: String,
    /// Number of units exchanged
    pub quantity_exchanged: i64,
    /// Total roses debited (`price * quantity` at exchange time)
    pub total_roses_spent: i64,
    /// When the exchange was committed (server clock)
    pub exchange_date: DateTimeUtc,
}

/// Defines relationships between ExchangeRecord and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
