//! Marketplace item business logic.
//!
//! Provides the admin-side CRUD for marketplace stock. Stock quantities are
//! set here only when an item is created or edited by an administrator;
//! exchange-driven decrements live in the ledger. Item names are unique so
//! exchange history can refer to items by name.

use crate::{
    entities::{MarketplaceItem, marketplace_item},
    errors::{Error, Result},
};
use sea_orm::{QueryOrder, Set, prelude::*};

/// Editable fields of a marketplace item, as submitted by the admin form.
///
/// `image` is `None` when the form did not include a new upload; updates then
/// keep the stored image.
#[derive(Debug, Clone)]
pub struct ItemFields {
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: i64,
    pub category: String,
    pub image: Option<Vec<u8>>,
}

/// Retrieves all marketplace items, ordered alphabetically by name.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_all_items(db: &DatabaseConnection) -> Result<Vec<marketplace_item::Model>> {
    MarketplaceItem::find()
        .order_by_asc(marketplace_item::Column::Name)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Retrieves a specific item by its unique ID.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_item_by_id(
    db: &DatabaseConnection,
    item_id: i64,
) -> Result<Option<marketplace_item::Model>> {
    MarketplaceItem::find_by_id(item_id)
        .one(db)
        .await
        .map_err(Into::into)
}

/// Creates a new marketplace item, performing input validation.
///
/// # Errors
/// Returns an error if validation fails, an item with the same name already
/// exists, or the insert fails.
pub async fn create_item(
    db: &DatabaseConnection,
    fields: ItemFields,
) -> Result<marketplace_item::Model> {
    validate_item_fields(&fields)?;
    ensure_name_available(db, fields.name.trim(), None).await?;

    let item = marketplace_item::ActiveModel {
        name: Set(fields.name.trim().to_string()),
        description: Set(fields.description.trim().to_string()),
        quantity: Set(fields.quantity),
        price: Set(fields.price),
        category: Set(fields.category.trim().to_string()),
        image: Set(fields.image),
        ..Default::default()
    };

    item.insert(db).await.map_err(Into::into)
}

/// Replaces an item's fields wholesale.
///
/// The stored image is kept when `fields.image` is `None` (the admin form
/// only sends an image part when a new file was picked).
///
/// # Errors
/// Returns an error if the item does not exist, validation fails, the new
/// name collides with another item, or the update fails.
pub async fn update_item(
    db: &DatabaseConnection,
    item_id: i64,
    fields: ItemFields,
) -> Result<marketplace_item::Model> {
    validate_item_fields(&fields)?;

    let existing = get_item_by_id(db, item_id)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;
    ensure_name_available(db, fields.name.trim(), Some(item_id)).await?;

    let mut item: marketplace_item::ActiveModel = existing.into();
    item.name = Set(fields.name.trim().to_string());
    item.description = Set(fields.description.trim().to_string());
    item.quantity = Set(fields.quantity);
    item.price = Set(fields.price);
    item.category = Set(fields.category.trim().to_string());
    if let Some(image) = fields.image {
        item.image = Set(Some(image));
    }

    item.update(db).await.map_err(Into::into)
}

/// Deletes an item. Exchange history referencing it is kept (records store
/// the item name, not a foreign key).
///
/// # Errors
/// Returns an error if the item does not exist or the delete fails.
pub async fn delete_item(db: &DatabaseConnection, item_id: i64) -> Result<()> {
    let existing = get_item_by_id(db, item_id)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    existing.delete(db).await?;
    Ok(())
}

async fn ensure_name_available(
    db: &DatabaseConnection,
    name: &str,
    exclude_id: Option<i64>,
) -> Result<()> {
    let existing = MarketplaceItem::find()
        .filter(marketplace_item::Column::Name.eq(name))
        .one(db)
        .await?;

    match existing {
        Some(item) if Some(item.id) != exclude_id => Err(Error::Validation {
            message: format!("An item named '{name}' already exists"),
        }),
        _ => Ok(()),
    }
}

fn validate_item_fields(fields: &ItemFields) -> Result<()> {
    if fields.name.trim().is_empty() {
        return Err(Error::Validation {
            message: "Item name cannot be empty".to_string(),
        });
    }

    if fields.description.trim().is_empty() {
        return Err(Error::Validation {
            message: "Item description cannot be empty".to_string(),
        });
    }

    if fields.category.trim().is_empty() {
        return Err(Error::Validation {
            message: "Item category cannot be empty".to_string(),
        });
    }

    if fields.quantity < 0 {
        return Err(Error::InvalidAmount {
            amount: fields.quantity,
        });
    }

    if fields.price < 0 {
        return Err(Error::InvalidAmount {
            amount: fields.price,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::test_utils::*;

    fn seed_pack_fields() -> ItemFields {
        ItemFields {
            name: "Seed Pack".to_string(),
            description: "Heirloom tomato seeds".to_string(),
            quantity: 5,
            price: 10,
            category: "Gardening".to_string(),
            image: None,
        }
    }

    #[tokio::test]
    async fn test_create_item_validation() -> Result<()> {
        let db = setup_test_db().await?;

        let result = create_item(
            &db,
            ItemFields {
                name: "  ".to_string(),
                ..seed_pack_fields()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::Validation { message: _ }
        ));

        let result = create_item(
            &db,
            ItemFields {
                quantity: -1,
                ..seed_pack_fields()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -1 }
        ));

        let result = create_item(
            &db,
            ItemFields {
                price: -10,
                ..seed_pack_fields()
            },
        )
        .await;
        assert!(matches!(
            result.unwrap_err(),
            Error::InvalidAmount { amount: -10 }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_create_item_integration() -> Result<()> {
        let db = setup_test_db().await?;

        let item = create_item(&db, seed_pack_fields()).await?;
        assert_eq!(item.name, "Seed Pack");
        assert_eq!(item.quantity, 5);
        assert_eq!(item.price, 10);
        assert!(item.image.is_none());

        let duplicate = create_item(&db, seed_pack_fields()).await;
        assert!(matches!(
            duplicate.unwrap_err(),
            Error::Validation { message: _ }
        ));

        Ok(())
    }

    #[tokio::test]
    async fn test_list_items_alphabetical() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_item(&db, "Water Bottle", 3, 25).await?;
        create_test_item(&db, "Bamboo Cutlery", 10, 15).await?;

        let items = get_all_items(&db).await?;
        assert_eq!(items.len(), 2);
        assert_eq!(items[0].name, "Bamboo Cutlery");
        assert_eq!(items[1].name, "Water Bottle");

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_keeps_image_when_absent() -> Result<()> {
        let db = setup_test_db().await?;

        let item = create_item(
            &db,
            ItemFields {
                image: Some(vec![0xFF, 0xD8, 0xFF]),
                ..seed_pack_fields()
            },
        )
        .await?;

        let updated = update_item(
            &db,
            item.id,
            ItemFields {
                quantity: 7,
                image: None,
                ..seed_pack_fields()
            },
        )
        .await?;
        assert_eq!(updated.quantity, 7);
        assert_eq!(updated.image.as_deref(), Some(&[0xFF, 0xD8, 0xFF][..]));

        let replaced = update_item(
            &db,
            item.id,
            ItemFields {
                image: Some(vec![0x89, 0x50]),
                ..seed_pack_fields()
            },
        )
        .await?;
        assert_eq!(replaced.image.as_deref(), Some(&[0x89, 0x50][..]));

        Ok(())
    }

    #[tokio::test]
    async fn test_update_item_name_collision() -> Result<()> {
        let db = setup_test_db().await?;

        create_test_item(&db, "Tote Bag", 5, 20).await?;
        let item = create_test_item(&db, "Mug", 5, 30).await?;

        let collision = update_item(
            &db,
            item.id,
            ItemFields {
                name: "Tote Bag".to_string(),
                ..seed_pack_fields()
            },
        )
        .await;
        assert!(matches!(
            collision.unwrap_err(),
            Error::Validation { message: _ }
        ));

        // Re-saving with its own name is fine
        let kept = update_item(
            &db,
            item.id,
            ItemFields {
                name: "Mug".to_string(),
                ..seed_pack_fields()
            },
        )
        .await?;
        assert_eq!(kept.name, "Mug");

        Ok(())
    }

    #[tokio::test]
    async fn test_delete_item() -> Result<()> {
        let db = setup_test_db().await?;
        let item = create_test_item(&db, "Tote Bag", 5, 20).await?;

        delete_item(&db, item.id).await?;
        assert!(get_all_items(&db).await?.is_empty());

        let gone = delete_item(&db, item.id).await;
        assert!(matches!(gone.unwrap_err(), Error::ItemNotFound { id: _ }));

        Ok(())
    }
}
