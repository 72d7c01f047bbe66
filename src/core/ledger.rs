//! The rose ledger - every rose-balance movement in the portal goes through
//! this module.
//!
//! Two operations spend roses: gifting them to an idea and exchanging them
//! for marketplace stock. Both run as a single database transaction and are
//! all-or-nothing: a failed balance or stock check rolls back every effect.
//! The checks themselves are guarded `UPDATE ... WHERE` statements (balance
//! and stock are compared and decremented in one statement), so concurrent
//! transactions against the same balance or the same item's stock can never
//! overdraw a user or oversell an item.

use crate::{
    entities::{Idea, MarketplaceItem, User, exchange_record, idea, marketplace_item, user},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::sea_query::Expr;
use sea_orm::{QueryOrder, Set, TransactionTrait, prelude::*};
use tracing::{info, instrument};

/// Gifts `roses` from `from_username` to the idea's rose counter.
///
/// Atomically debits the giver's balance and credits the idea's `rose_count`.
/// The gifted roses become accumulated support on the idea; they are not
/// transferred to the owner's spendable balance. Each call is a fresh
/// transaction - repeated identical calls gift repeatedly.
///
/// # Errors
/// * [`Error::InvalidAmount`] if `roses` is not positive
/// * [`Error::IdeaNotFound`] if the idea does not exist
/// * [`Error::SelfGift`] if the giver owns the idea (checked case-insensitively)
/// * [`Error::UserNotFound`] if the giver does not exist
/// * [`Error::InsufficientBalance`] if the giver cannot cover the gift; no
///   state changes in that case
#[instrument(skip(db))]
pub async fn give_roses(
    db: &DatabaseConnection,
    idea_id: i64,
    from_username: &str,
    roses: i64,
) -> Result<idea::Model> {
    if roses <= 0 {
        return Err(Error::InvalidAmount { amount: roses });
    }

    let txn = db.begin().await?;

    let idea = Idea::find_by_id(idea_id)
        .one(&txn)
        .await?
        .ok_or(Error::IdeaNotFound { id: idea_id })?;

    if idea.idea_owner.eq_ignore_ascii_case(from_username) {
        return Err(Error::SelfGift);
    }

    let giver = User::find()
        .filter(user::Column::Username.eq(from_username))
        .one(&txn)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            username: from_username.to_string(),
        })?;

    debit_roses(&txn, from_username, roses, giver.rose_balance).await?;

    Idea::update_many()
        .col_expr(
            idea::Column::RoseCount,
            Expr::col(idea::Column::RoseCount).add(roses),
        )
        .filter(idea::Column::Id.eq(idea_id))
        .exec(&txn)
        .await?;

    txn.commit().await?;
    info!(
        "User '{}' gave {} roses to idea {} ('{}')",
        from_username, roses, idea_id, idea.title
    );

    Idea::find_by_id(idea_id)
        .one(db)
        .await?
        .ok_or(Error::IdeaNotFound { id: idea_id })
}

/// Exchanges `quantity` units of a marketplace item for roses.
///
/// Computes `total = price * quantity`, then atomically decrements the item's
/// stock, debits the user's balance, and appends an exchange-history record.
/// The three effects commit together or not at all.
///
/// # Errors
/// * [`Error::InvalidAmount`] if `quantity` is not positive
/// * [`Error::ItemNotFound`] if the item does not exist
/// * [`Error::UserNotFound`] if the user does not exist
/// * [`Error::InsufficientStock`] if fewer than `quantity` units remain
/// * [`Error::InsufficientBalance`] if the user cannot cover the total
///
/// On any failure no state changes.
#[instrument(skip(db))]
pub async fn exchange_item(
    db: &DatabaseConnection,
    item_id: i64,
    username: &str,
    quantity: i64,
) -> Result<exchange_record::Model> {
    if quantity <= 0 {
        return Err(Error::InvalidAmount { amount: quantity });
    }

    let txn = db.begin().await?;

    let item = MarketplaceItem::find_by_id(item_id)
        .one(&txn)
        .await?
        .ok_or(Error::ItemNotFound { id: item_id })?;

    let user = User::find()
        .filter(user::Column::Username.eq(username))
        .one(&txn)
        .await?
        .ok_or_else(|| Error::UserNotFound {
            username: username.to_string(),
        })?;

    let total = item
        .price
        .checked_mul(quantity)
        .ok_or_else(|| Error::Validation {
            message: format!("Exchange total overflows for quantity {quantity}"),
        })?;

    // Stock check and decrement in one guarded statement
    let decremented = MarketplaceItem::update_many()
        .col_expr(
            marketplace_item::Column::Quantity,
            Expr::col(marketplace_item::Column::Quantity).sub(quantity),
        )
        .filter(marketplace_item::Column::Id.eq(item_id))
        .filter(marketplace_item::Column::Quantity.gte(quantity))
        .exec(&txn)
        .await?;
    if decremented.rows_affected == 0 {
        return Err(Error::InsufficientStock {
            available: item.quantity,
            requested: quantity,
        });
    }

    debit_roses(&txn, username, total, user.rose_balance).await?;

    let record = exchange_record::ActiveModel {
        username: Set(username.to_string()),
        item_name: Set(item.name.clone()),
        quantity_exchanged: Set(quantity),
        total_roses_spent: Set(total),
        exchange_date: Set(Utc::now()),
        ..Default::default()
    }
    .insert(&txn)
    .await?;

    txn.commit().await?;
    info!(
        "User '{}' exchanged {} x '{}' for {} roses",
        username, quantity, item.name, total
    );

    Ok(record)
}

/// Returns the user's exchange history, newest first.
///
/// Reverse-chronological order is guaranteed, not incidental - clients may
/// rely on it.
///
/// # Errors
/// Returns an error if the database query fails.
pub async fn get_exchange_history(
    db: &DatabaseConnection,
    username: &str,
) -> Result<Vec<exchange_record::Model>> {
    crate::entities::ExchangeRecord::find()
        .filter(exchange_record::Column::Username.eq(username))
        .order_by_desc(exchange_record::Column::ExchangeDate)
        .order_by_desc(exchange_record::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Debits `amount` roses from a user's balance.
///
/// The balance check and the debit are one guarded statement
/// (`SET rose_balance = rose_balance - n WHERE ... AND rose_balance >= n`),
/// so the balance can never go negative even under concurrent debits.
/// `current_balance` is only used to report the shortfall.
async fn debit_roses<C>(db: &C, username: &str, amount: i64, current_balance: i64) -> Result<()>
where
    C: ConnectionTrait,
{
    let debited = User::update_many()
        .col_expr(
            user::Column::RoseBalance,
            Expr::col(user::Column::RoseBalance).sub(amount),
        )
        .filter(user::Column::Username.eq(username))
        .filter(user::Column::RoseBalance.gte(amount))
        .exec(db)
        .await?;

    if debited.rows_affected == 0 {
        return Err(Error::InsufficientBalance {
            balance: current_balance,
            required: amount,
        });
    }

    Ok(())
}
