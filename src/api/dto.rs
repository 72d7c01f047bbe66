//! Wire-format data transfer objects.
//!
//! Field names are camelCase to match the payloads the web client already
//! sends and expects (`idea.dto.ts` / `marketplace.dto.ts` shapes). Entities
//! never cross the HTTP boundary directly: responses go through these DTOs,
//! which notably keep `rose_balance`, passwords, and raw image bytes out of
//! payloads (images are served base64-encoded).

use crate::entities::{exchange_record, idea, marketplace_item};
use base64::{Engine as _, engine::general_purpose::STANDARD};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// An idea as served to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IdeaDto {
    pub id: i64,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub idea_owner: String,
    pub rose_count: i64,
    pub sdgs: Vec<i32>,
}

impl From<idea::Model> for IdeaDto {
    fn from(model: idea::Model) -> Self {
        Self {
            id: model.id,
            title: model.title,
            description: model.description,
            created_at: model.created_at,
            idea_owner: model.idea_owner,
            rose_count: model.rose_count,
            sdgs: model.sdgs.0,
        }
    }
}

/// Body of `POST /idea/create`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateIdeaRequest {
    pub username: String,
    pub title: String,
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub sdgs: Vec<i32>,
}

/// Body of `PUT /idea/{id}`.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateIdeaRequest {
    pub username: String,
    pub title: String,
    pub description: String,
    pub sdgs: Vec<i32>,
}

/// A marketplace item as served to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketplaceItemDto {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub quantity: i64,
    pub price: i64,
    pub category: String,
    pub image_base64: Option<String>,
}

impl From<marketplace_item::Model> for MarketplaceItemDto {
    fn from(model: marketplace_item::Model) -> Self {
        Self {
            id: model.id,
            name: model.name,
            description: model.description,
            quantity: model.quantity,
            price: model.price,
            category: model.category,
            image_base64: model.image.map(|bytes| STANDARD.encode(bytes)),
        }
    }
}

/// One exchange-history entry as served to clients.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExchangeHistoryDto {
    pub id: i64,
    pub item_name: String,
    pub quantity_exchanged: i64,
    pub total_roses_spent: i64,
    pub exchange_date: DateTime<Utc>,
}

impl From<exchange_record::Model> for ExchangeHistoryDto {
    fn from(model: exchange_record::Model) -> Self {
        Self {
            id: model.id,
            item_name: model.item_name,
            quantity_exchanged: model.quantity_exchanged,
            total_roses_spent: model.total_roses_spent,
            exchange_date: model.exchange_date,
        }
    }
}

/// Query parameters of `POST /idea/{id}/give-rose`.
#[derive(Debug, Deserialize)]
pub struct GiveRoseParams {
    pub username: String,
    pub roses: i64,
}

/// Query parameters of `POST /marketplace/item/{id}/exchange`.
#[derive(Debug, Deserialize)]
pub struct ExchangeParams {
    pub username: String,
    pub quantity: i64,
}

/// Query parameter carrying just an acting username.
#[derive(Debug, Deserialize)]
pub struct UsernameParam {
    pub username: String,
}
