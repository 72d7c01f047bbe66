//! Idea entity - Represents a proposal on the community ideas board.
//!
//! Each idea belongs to exactly one owner and accrues roses gifted by other
//! users. `rose_count` is accumulated support, not spendable currency; it only
//! ever grows, and only through the ledger's gift operation.

use sea_orm::FromJsonQueryResult;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// UN Sustainable Development Goal numbers (1..=17) tagged on an idea,
/// stored as a JSON array.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
pub struct SdgList(pub Vec<i32>);

/// Idea database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "ideas")]
pub struct Model {
    /// Unique identifier for the idea
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Short headline of the idea
    pub title: String,
    /// Full description of the idea
    pub description: String,
    /// When the idea was posted (supplied by the client at creation)
    pub created_at: DateTimeUtc,
    /// Username of the owner; the only user allowed to edit or delete it
    pub idea_owner: String,
    /// SDG tags selected by the owner
    #[sea_orm(column_type = "Json")]
    pub sdgs: SdgList,
    /// Total roses received from all gifters; monotonically non-decreasing
    pub rose_count: i64,
}

/// Defines relationships between Idea and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
