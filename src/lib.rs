//! Student portal backend - ideas board, rose ledger, and marketplace API.
//!
//! This crate serves the HTTP API behind the student portal: a community
//! ideas board where users support each other's ideas with roses (the
//! platform's virtual currency), and a marketplace where roses are exchanged
//! for items. Every balance movement goes through the ledger in
//! [`core::ledger`], which enforces the all-or-nothing transaction rules the
//! rest of the system relies on.

// Deny the most critical lints that could lead to bugs or security issues
#![deny(
    unsafe_code,
    unsafe_op_in_unsafe_fn,
    unreachable_code,
    unreachable_patterns,
    unused_must_use,
    rustdoc::broken_intra_doc_links,
    rustdoc::private_intra_doc_links,
)]
// Warn on things that should be fixed but aren't necessarily bugs
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::inefficient_to_string,
    clippy::needless_pass_by_value,
    clippy::clone_on_ref_ptr,
    clippy::dbg_macro,
    clippy::exit,
    clippy::expect_used,
    clippy::panic,
    clippy::todo,
    clippy::unimplemented,
    clippy::unwrap_used,
    clippy::cognitive_complexity,
    clippy::large_enum_variant,
    clippy::match_same_arms,
    clippy::enum_glob_use,
    clippy::semicolon_if_nothing_returned,
    clippy::wildcard_imports,
    future_incompatible,
    rust_2018_idioms,
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions, // Common pattern in Rust
    clippy::missing_errors_doc,      // Will add gradually
    clippy::missing_panics_doc,      // Will add gradually
)]

/// HTTP interface - routers, auth extractor, DTOs, and the server loop
pub mod api;
/// Configuration management for database, server, and seed accounts
pub mod config;
/// Core business logic - the rose ledger, idea board, marketplace, and users
pub mod core;
/// SeaORM entity definitions for database tables
pub mod entities;
/// Unified error types and result handling
pub mod errors;

#[cfg(test)]
pub mod test_utils;
