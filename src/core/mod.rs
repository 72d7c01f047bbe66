//! Core business logic - framework-agnostic portal operations.
//!
//! Everything the HTTP layer does funnels through these modules. The ledger
//! owns every rose-balance mutation; the idea and marketplace modules handle
//! CRUD with ownership and validation rules; the user module handles accounts
//! and credential checks.

/// Idea board operations (create, update, delete, list) with owner checks
pub mod idea;
/// The rose ledger: gifting roses and exchanging them for marketplace stock
pub mod ledger;
/// Marketplace item management (admin CRUD)
pub mod marketplace;
/// Account lookup, credential verification, and config-driven seeding
pub mod user;
