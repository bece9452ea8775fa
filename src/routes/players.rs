use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::postgres::PgPool;
use crate::db;
use crate::error::ApiError;
use crate::extract::{ResourceId, ValidJson};
use crate::models::{DeleteResponse, Player, PlayerPayload};

const RESOURCE: &str = "Player";

// GET /players - List all players
pub async fn get_players(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::players::get_all_players(&pool).await?;
    Ok(Json(players))
}

// GET /players/:id - Get player by ID
pub async fn get_player_by_id(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
) -> Result<Json<Player>, ApiError> {
    let player = db::players::get_player_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;

    Ok(Json(player))
}

// POST /players - Create a player
pub async fn create_player(
    State(pool): State<PgPool>,
    ValidJson(payload): ValidJson<PlayerPayload>,
) -> Result<(StatusCode, Json<Player>), ApiError> {
    let player = db::players::create_player(&pool, &payload).await?;
    tracing::info!(id = player.id, "player created");

    Ok((StatusCode::CREATED, Json(player)))
}

// PUT /players/:id - Replace a player
pub async fn update_player(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<PlayerPayload>,
) -> Result<Json<Player>, ApiError> {
    let player = db::players::update_player(&pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;

    Ok(Json(player))
}

// DELETE /players/:id - Delete a player along with their scores
pub async fn delete_player(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = db::players::delete_player(&pool, id)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    tracing::info!(id, "player deleted");

    Ok(Json(DeleteResponse {
        message: "Player deleted successfully".to_string(),
        id,
    }))
}
