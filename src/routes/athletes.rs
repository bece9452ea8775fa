use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
};
use sqlx::postgres::PgPool;
use crate::db;
use crate::error::ApiError;
use crate::extract::{ResourceId, ValidJson};
use crate::models::{Athlete, AthletePayload, DeleteResponse};

const RESOURCE: &str = "Athlete";

// GET / and GET /athletes - List all athletes
pub async fn get_athletes(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Athlete>>, ApiError> {
    let athletes = db::athletes::get_all_athletes(&pool).await?;
    Ok(Json(athletes))
}

// GET /athletes/:id - Get athlete by ID
pub async fn get_athlete_by_id(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
) -> Result<Json<Athlete>, ApiError> {
    let athlete = db::athletes::get_athlete_by_id(&pool, id)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;

    Ok(Json(athlete))
}

// POST /athletes - Create an athlete
pub async fn create_athlete(
    State(pool): State<PgPool>,
    ValidJson(payload): ValidJson<AthletePayload>,
) -> Result<(StatusCode, Json<Athlete>), ApiError> {
    let athlete = db::athletes::create_athlete(&pool, &payload).await?;
    tracing::info!(id = athlete.id, "athlete created");

    Ok((StatusCode::CREATED, Json(athlete)))
}

// PUT /athletes/:id - Replace an athlete
pub async fn update_athlete(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
    ValidJson(payload): ValidJson<AthletePayload>,
) -> Result<Json<Athlete>, ApiError> {
    let athlete = db::athletes::update_athlete(&pool, id, &payload)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;

    Ok(Json(athlete))
}

// DELETE /athletes/:id - Delete an athlete
pub async fn delete_athlete(
    State(pool): State<PgPool>,
    ResourceId(id): ResourceId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let id = db::athletes::delete_athlete(&pool, id)
        .await?
        .ok_or(ApiError::NotFound(RESOURCE))?;
    tracing::info!(id, "athlete deleted");

    Ok(Json(DeleteResponse {
        message: "Athlete deleted successfully".to_string(),
        id,
    }))
}
