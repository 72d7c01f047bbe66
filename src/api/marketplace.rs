//! Marketplace HTTP handlers.
//!
//! Item management (create/update/delete) is admin-only and arrives as
//! multipart form data - the same shape the admin UI submits (scalar fields
//! plus an optional `image` file part). Exchanging and reading history
//! require the authenticated user to act as themselves.

use crate::{
    api::{
        AppState,
        auth::AuthUser,
        dto::{ExchangeHistoryDto, ExchangeParams, MarketplaceItemDto, UsernameParam},
    },
    core::{ledger, marketplace, marketplace::ItemFields},
    errors::{Error, Result},
};
use axum::{
    Json, Router,
    extract::{Multipart, Path, Query, State, multipart::MultipartError},
    http::StatusCode,
    routing::{get, post, put},
};

/// Routes mounted under `/api/student-portal/marketplace`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items))
        .route("/item", post(create_item))
        .route("/item/:id", put(update_item).delete(delete_item))
        .route("/item/:id/exchange", post(exchange_item))
        .route("/exchange-history", get(exchange_history))
}

/// `GET /items` - all items, alphabetical.
async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<MarketplaceItemDto>>> {
    let items = marketplace::get_all_items(&state.database).await?;
    Ok(Json(items.into_iter().map(MarketplaceItemDto::from).collect()))
}

/// `POST /item` - create an item (admin only).
async fn create_item(
    State(state): State<AppState>,
    auth: AuthUser,
    multipart: Multipart,
) -> Result<(StatusCode, Json<MarketplaceItemDto>)> {
    auth.require_admin()?;
    let fields = read_item_form(multipart).await?;
    let created = marketplace::create_item(&state.database, fields).await?;
    Ok((StatusCode::CREATED, Json(MarketplaceItemDto::from(created))))
}

/// `PUT /item/:id` - replace an item's fields (admin only). A missing image
/// part keeps the stored image.
async fn update_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    multipart: Multipart,
) -> Result<Json<MarketplaceItemDto>> {
    auth.require_admin()?;
    let fields = read_item_form(multipart).await?;
    let updated = marketplace::update_item(&state.database, id, fields).await?;
    Ok(Json(MarketplaceItemDto::from(updated)))
}

/// `DELETE /item/:id` - remove an item (admin only).
async fn delete_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
) -> Result<StatusCode> {
    auth.require_admin()?;
    marketplace::delete_item(&state.database, id).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /item/:id/exchange` - spend roses on item stock.
async fn exchange_item(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Query(params): Query<ExchangeParams>,
) -> Result<Json<ExchangeHistoryDto>> {
    auth.ensure_acting_as(&params.username)?;
    let record =
        ledger::exchange_item(&state.database, id, &params.username, params.quantity).await?;
    Ok(Json(ExchangeHistoryDto::from(record)))
}

/// `GET /exchange-history` - the authenticated user's exchanges, newest first.
async fn exchange_history(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(params): Query<UsernameParam>,
) -> Result<Json<Vec<ExchangeHistoryDto>>> {
    auth.ensure_acting_as(&params.username)?;
    let records = ledger::get_exchange_history(&state.database, &params.username).await?;
    Ok(Json(
        records.into_iter().map(ExchangeHistoryDto::from).collect(),
    ))
}

/// Collects the admin item form out of a multipart body.
///
/// Expected parts: `name`, `description`, `quantity`, `price`, `category`,
/// and optionally `image` (raw file bytes). Unknown parts are ignored; an
/// empty image part counts as absent.
async fn read_item_form(mut multipart: Multipart) -> Result<ItemFields> {
    let mut name = None;
    let mut description = None;
    let mut quantity = None;
    let mut price = None;
    let mut category = None;
    let mut image = None;

    while let Some(field) = multipart.next_field().await.map_err(malformed_form)? {
        let Some(field_name) = field.name().map(ToOwned::to_owned) else {
            continue;
        };

        match field_name.as_str() {
            "name" => name = Some(field.text().await.map_err(malformed_form)?),
            "description" => description = Some(field.text().await.map_err(malformed_form)?),
            "quantity" => {
                quantity = Some(parse_number(&field.text().await.map_err(malformed_form)?, "quantity")?);
            }
            "price" => {
                price = Some(parse_number(&field.text().await.map_err(malformed_form)?, "price")?);
            }
            "category" => category = Some(field.text().await.map_err(malformed_form)?),
            "image" => {
                let bytes = field.bytes().await.map_err(malformed_form)?;
                if !bytes.is_empty() {
                    image = Some(bytes.to_vec());
                }
            }
            _ => {}
        }
    }

    Ok(ItemFields {
        name: require_part(name, "name")?,
        description: require_part(description, "description")?,
        quantity: require_part(quantity, "quantity")?,
        price: require_part(price, "price")?,
        category: require_part(category, "category")?,
        image,
    })
}

fn require_part<T>(value: Option<T>, part: &str) -> Result<T> {
    value.ok_or_else(|| Error::Validation {
        message: format!("Missing form field '{part}'"),
    })
}

fn parse_number(value: &str, part: &str) -> Result<i64> {
    value.trim().parse().map_err(|_| Error::Validation {
        message: format!("Invalid {part}: '{value}'"),
    })
}

fn malformed_form(err: MultipartError) -> Error {
    Error::Validation {
        message: format!("Malformed multipart form: {err}"),
    }
}
