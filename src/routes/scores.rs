use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::postgres::PgPool;
use crate::db;
use crate::error::ApiError;
use crate::extract::{ResourceId, ValidJson};
use crate::models::{DeleteResponse, Score, ScorePayload};

const RESOURCE: &str = "Score";

// GET /scores - List all scores
pub async fn get_scores(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Score>>, ApiError> {
    let scores = db::scores::get_all_scores(&pool).await?;
    Ok(Json(scores))
}

// GET /scores/:id - Get score by ID
pub async fn get_score_by_id(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
) -> Result<Json<Score>, ApiError> {
    let score = db::scores::get_score_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;

    Ok(Json(score))
}

// POST /scores - Record a score
// A player_id or game_id that does not exist surfaces as a 500 (foreign key violation)
pub async fn create_score(
    State(pool): State<PgPool>,
    ValidJson(payload): ValidJson<ScorePayload>,
) -> Result<(StatusCode, Json<Score>), ApiError> {
    let score = db::scores::create_score(&pool, &payload).await?;
    tracing::info!(id = score.id, "score created");

    Ok((StatusCode::CREATED, Json(score)))
}

// PUT /scores/:id - Replace a score
pub async fn update_score(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<ScorePayload>,
) -> Result<Json<Score>, ApiError> {
    let score = db::scores::update_score(&pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;

    Ok(Json(score))
}

// DELETE /scores/:id - Delete a score
pub async fn delete_score(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = db::scores::delete_score(&pool, id)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    tracing::info!(id, "score deleted");

    Ok(Json(DeleteResponse {
        message: "Score deleted successfully".to_string(),
        id,
    }))
}
