//! Marketplace item entity - Stock that users buy with roses.
//!
//! `quantity` is the remaining stock and must never go negative; it is only
//! decremented by the ledger's exchange operation. `price` is the per-unit
//! rose cost.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Marketplace item database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "marketplace_items")]
pub struct Model {
    /// Unique identifier for the item
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Display name; unique so exchange history can reference items by name
    #[sea_orm(unique)]
    pub name: String,
    /// Item description shown in the marketplace
    pub description: String,
    /// Remaining stock; never negative
    pub quantity: i64,
    /// Rose cost per unit
    pub price: i64,
    /// Free-form category label
    pub category: String,
    /// Optional uploaded image, stored as raw bytes
    pub image: Option<Vec<u8>>,
}

/// Defines relationships between MarketplaceItem and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
