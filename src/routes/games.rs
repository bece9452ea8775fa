use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::postgres::PgPool;
use crate::db;
use crate::error::ApiError;
use crate::extract::{ResourceId, ValidJson};
use crate::models::{DeleteResponse, Game, GamePayload};

const RESOURCE: &str = "Game";

// GET /games - List all games
pub async fn get_games(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Game>>, ApiError> {
    let games = db::games::get_all_games(&pool).await?;
    Ok(Json(games))
}

// GET /games/:id - Get game by ID
pub async fn get_game_by_id(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
) -> Result<Json<Game>, ApiError> {
    let game = db::games::get_game_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;

    Ok(Json(game))
}

// POST /games - Create a game
pub async fn create_game(
    State(pool): State<PgPool>,
    ValidJson(payload): ValidJson<GamePayload>,
) -> Result<(StatusCode, Json<Game>), ApiError> {
    let game = db::games::create_game(&pool, &payload).await?;
    tracing::info!(id = game.id, "game created");

    Ok((StatusCode::CREATED, Json(game)))
}

// PUT /games/:id - Replace a game
pub async fn update_game(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<GamePayload>,
) -> Result<Json<Game>, ApiError> {
    let game = db::games::update_game(&pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;

    Ok(Json(game))
}

// DELETE /games/:id - Delete a game
pub async fn delete_game(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = db::games::delete_game(&pool, id)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    tracing::info!(id, "game deleted");

    Ok(Json(DeleteResponse {
        message: "Game deleted successfully".to_string(),
        id,
    }))
}
