//! Unified error types and result handling.
//!
//! Every fallible operation in the crate returns [`Result`]. Business-rule
//! failures (insufficient balance or stock, ownership violations) get their
//! own variants so callers can react to them without inspecting message
//! strings; the HTTP layer maps each variant to a status code and a stable
//! machine-readable error code.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A numeric input (rose amount, quantity, price) outside its valid range.
    #[error("Invalid amount: {amount}")]
    InvalidAmount { amount: i64 },

    /// Malformed input rejected before any state is touched.
    #[error("{message}")]
    Validation { message: String },

    /// The acting user's rose balance cannot cover the transaction.
    #[error("Insufficient rose balance: have {balance}, need {required}")]
    InsufficientBalance { balance: i64, required: i64 },

    /// An exchange asked for more units than the item has in stock.
    #[error("Insufficient stock: {available} available, {requested} requested")]
    InsufficientStock { available: i64, requested: i64 },

    #[error("Idea {id} not found")]
    IdeaNotFound { id: i64 },

    #[error("Marketplace item {id} not found")]
    ItemNotFound { id: i64 },

    #[error("Unknown user '{username}'")]
    UserNotFound { username: String },

    /// Users cannot gift roses to their own ideas.
    #[error("You cannot give roses to your own idea")]
    SelfGift,

    #[error("{message}")]
    Forbidden { message: String },

    #[error("Missing or invalid credentials")]
    Unauthorized,
}

// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
