//! Idea board HTTP handlers.
//!
//! Read endpoints are public; every mutation requires Basic auth and must act
//! as the authenticated user. Route shapes mirror the paths the web client
//! already calls.

use crate::{
    api::{
        AppState,
        auth::AuthUser,
        dto::{CreateIdeaRequest, GiveRoseParams, IdeaDto, UpdateIdeaRequest, UsernameParam},
    },
    core::{idea, ledger},
    errors::Result,
};
use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::{get, post, put},
};

/// Routes mounted under `/api/student-portal/idea`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/all", get(list_ideas))
        .route("/create", post(create_idea))
        .route("/:id", put(update_idea).delete(delete_idea))
        .route("/:id/give-rose", post(give_rose))
}

/// `GET /all` - every idea, newest first.
async fn list_ideas(State(state): State<AppState>) -> Result<Json<Vec<IdeaDto>>> {
    let ideas = idea::get_all_ideas(&state.database).await?;
    Ok(Json(ideas.into_iter().map(IdeaDto::from).collect()))
}

/// `POST /create` - plant a new idea owned by the authenticated user.
async fn create_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(request): Json<CreateIdeaRequest>,
) -> Result<(StatusCode, Json<IdeaDto>)> {
    auth.ensure_acting_as(&request.username)?;

    let created = idea::create_idea(
        &state.database,
        request.username,
        request.title,
        request.description,
        request.created_at,
        request.sdgs,
    )
    .await?;

    Ok((StatusCode::CREATED, Json(IdeaDto::from(created))))
}

/// `PUT /:id` - replace title, description, and SDG tags (owner only).
async fn update_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Json(request): Json<UpdateIdeaRequest>,
) -> Result<Json<IdeaDto>> {
    auth.ensure_acting_as(&request.username)?;

    let updated = idea::update_idea(
        &state.database,
        id,
        &request.username,
        request.title,
        request.description,
        request.sdgs,
    )
    .await?;

    Ok(Json(IdeaDto::from(updated)))
}

/// `DELETE /:id` - remove an idea (owner only).
async fn delete_idea(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Query(params): Query<UsernameParam>,
) -> Result<StatusCode> {
    auth.ensure_acting_as(&params.username)?;
    idea::delete_idea(&state.database, id, &params.username).await?;
    Ok(StatusCode::NO_CONTENT)
}

/// `POST /:id/give-rose` - gift roses to someone else's idea.
async fn give_rose(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<i64>,
    Query(params): Query<GiveRoseParams>,
) -> Result<Json<IdeaDto>> {
    auth.ensure_acting_as(&params.username)?;
    let updated = ledger::give_roses(&state.database, id, &params.username, params.roses).await?;
    Ok(Json(IdeaDto::from(updated)))
}
