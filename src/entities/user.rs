//! User entity - Represents a portal account and its rose balance.
//!
//! The rose balance is the platform currency: it is debited by gifting roses
//! to ideas and by marketplace exchanges, and it is never exposed directly in
//! any API payload. Balance mutations go through `core::ledger` only.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// User database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    /// Unique identifier for the user
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Login name; acts as the public identity throughout the API
    #[sea_orm(unique)]
    pub username: String,
    /// Credential checked against the Basic authorization header
    pub password: String,
    /// Authorization role: `"ROLE_ADMIN"` or `"ROLE_STUDENT"`
    pub role: String,
    /// Current spendable rose balance; never negative
    pub rose_balance: i64,
}

/// Defines relationships between User and other entities
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
