use axum::{
    extract::State,
    response::Json,
};
use serde::Deserialize;
use sqlx::postgres::PgPool;
use crate::db;
use crate::error::ApiError;
use crate::extract::ApiQuery;
use crate::models::{FavoriteGame, GenrePopularity, Player, TopScorer};

const MAX_TOP_SCORERS: i64 = 50;
const MAX_RECENT_DAYS: i32 = 3650;

// Query parameters for top scorers
#[derive(Deserialize)]
pub struct TopScorersQuery {
    /// Number of players to return (default: 3, max: 50)
    #[serde(default = "default_top_limit")]
    limit: i64,
}

fn default_top_limit() -> i64 {
    3
}

// Query parameters for recent joiners
#[derive(Deserialize)]
pub struct RecentPlayersQuery {
    /// How far back to look, in days (default: 30)
    #[serde(default = "default_recent_days")]
    days: i32,
}

fn default_recent_days() -> i32 {
    30
}

fn clamp_top_limit(limit: i64) -> i64 {
    limit.clamp(1, MAX_TOP_SCORERS)
}

fn clamp_recent_days(days: i32) -> i32 {
    days.clamp(0, MAX_RECENT_DAYS)
}

// GET /analytics/top-scorers?limit=3 - Players with the highest total score
pub async fn get_top_scorers(
    State(pool): State<PgPool>,
    ApiQuery(params): ApiQuery<TopScorersQuery>,
) -> Result<Json<Vec<TopScorer>>, ApiError> {
    let scorers = db::analytics::get_top_scorers(&pool, clamp_top_limit(params.limit)).await?;
    Ok(Json(scorers))
}

// GET /analytics/inactive-players - Players who never recorded a score
pub async fn get_inactive_players(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::analytics::get_inactive_players(&pool).await?;
    Ok(Json(players))
}

// GET /analytics/popular-genres - Genres ranked by number of plays
pub async fn get_popular_genres(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<GenrePopularity>>, ApiError> {
    let genres = db::analytics::get_popular_genres(&pool).await?;
    Ok(Json(genres))
}

// GET /analytics/recent-players?days=30 - Players who joined recently
pub async fn get_recent_players(
    State(pool): State<PgPool>,
    ApiQuery(params): ApiQuery<RecentPlayersQuery>,
) -> Result<Json<Vec<Player>>, ApiError> {
    let players = db::analytics::get_recent_players(&pool, clamp_recent_days(params.days)).await?;
    Ok(Json(players))
}

// GET /analytics/favorite-games - Each player's most played game
pub async fn get_favorite_games(
    State(pool): State<PgPool>,
) -> Result<Json<Vec<FavoriteGame>>, ApiError> {
    let favorites = db::analytics::get_favorite_games(&pool).await?;
    Ok(Json(favorites))
}
