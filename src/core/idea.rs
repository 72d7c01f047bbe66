//! Idea board business logic.
//!
//! Provides create, update, delete, and listing for ideas. Mutations are
//! restricted to the idea owner (usernames compared case-insensitively, the
//! same rule the web client applies). Updates replace the whole editable
//! object; `rose_count` and `created_at` are never touched here - the rose
//! counter belongs to the ledger.

use crate::{
    entities::{Idea, idea, idea::SdgList},
    errors::{Error, Result},
};
use chrono::{DateTime, Utc};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Retrieves all ideas, newest first.
///
/// The original client assumes no particular order; newest-first is this
/// service's documented, guaranteed order.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_ideas(db: &DatabaseConnection) -> Result<Vec<idea::Model>> {
    Idea::find()
        .order_by_desc(idea::Column::CreatedAt)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific idea by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_idea_by_id(db: &DatabaseConnection, idea_id: i64) -> Result<Option<idea::Model>> {
    Idea::find_by_id(idea_id).one(db).await.map_err(Into::into)
}

/// Creates a new idea owned by `owner`, performing input validation.
///
/// The creation timestamp is supplied by the caller (the client sends it),
/// matching the original wire contract. The rose counter starts at zero.
///
/// # Errors
/// Returns an error if the title or description is empty, an SDG id is
/// outside 1..=17, or the insert fails.
pub async fn create_idea(
    db: &DatabaseConnection,
    owner: String,
    title: String,
    description: String,
    created_at: DateTime<Utc>,
    sdgs: Vec<i32>,
) -> Result<idea::Model> {
    validate_idea_fields(&title, &description, &sdgs)?;

    let idea = idea::ActiveModel {
        title: Set(title.trim().to_string()),
        description: Set(description.trim().to_string()),
        created_at: Set(created_at),
        idea_owner: Set(owner),
        sdgs: Set(canonical_sdgs(sdgs)),
        rose_count: Set(0),
        ..Default::default()
    };

    idea.insert(db).await.map_err(Into::into)
}

/// Replaces an idea's title, description, and SDG tags.
///
/// Only the owner may update an idea; ownership is checked against
/// `username` case-insensitively.
///
/// # Errors
/// Returns an error if the idea does not exist, `username` is not the owner,
/// validation fails, or the update fails.
pub async fn update_idea(
    db: &DatabaseConnection,
    idea_id: i64,
    username: &str,
    title: String,
    description: String,
    sdgs: Vec<i32>,
) -> Result<idea::Model> {
    validate_idea_fields(&title, &description, &sdgs)?;

    let existing = get_idea_by_id(db, idea_id)
        .await?
        .ok_or(Error::IdeaNotFound { id: idea_id })?;
    ensure_owner(&existing, username)?;

    let mut idea: idea::ActiveModel = existing.into();
    idea.title = Set(title.trim().to_string());
    idea.description = Set(description.trim().to_string());
    idea.sdgs = Set(canonical_sdgs(sdgs));

    idea.update(db).await.map_err(Into::into)
}

/// Deletes an idea. Only the owner may delete it.
///
/// # Errors
/// Returns an error if the idea does not exist, `username` is not the owner,
/// or the delete fails.
pub async fn delete_idea(db: &DatabaseConnection, idea_id: i64, username: &str) -> Result<()> {
    let existing = get_idea_by_id(db, idea_id)
        .await?
        .ok_or(Error::IdeaNotFound { id: idea_id })?;
    ensure_owner(&existing, username)?;

    existing.delete(db).await?;
    Ok(())
}

fn ensure_owner(idea: &idea::Model, username: &str) -> Result<()> {
    if idea.idea_owner.eq_ignore_ascii_case(username) {
        Ok(())
    } else {
        Err(Error::Forbidden {
            message: "Only the idea owner can modify this idea".to_string(),
        })
    }
}

fn validate_idea_fields(title: &str, description: &str, sdgs: &[i32]) -> Result<()> {
    if title.trim().is_empty() {
        return Err(Error::Validation {
            message: "Idea title cannot be empty".to_string(),
        });
    }

    if description.trim().is_empty() {
        return Err(Error::Validation {
            message: "Idea description cannot be empty".to_string(),
        });
    }

    if let Some(bad) = sdgs.iter().find(|sdg| !(1..=17).contains(*sdg)) {
        return Err(Error::Validation {
            message: format!("Invalid SDG id {bad}: must be between 1 and 17"),
        });
    }

    Ok(())
}

// SDGs are a set on the wire; store them sorted and deduplicated.
fn canonical_sdgs(mut sdgs: Vec<i32>) -> SdgList {
    sdgs.sort_unstable();
    sdgs.dedup();
    SdgList(sdgs)
}
