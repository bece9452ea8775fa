use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Athlete row from the athletes table
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Athlete {
    pub id: i32,
    pub name: String,
    pub sport: String,
    pub age: i32,
}

/// Body for creating or replacing an athlete
#[derive(Debug, Deserialize, Validate)]
pub struct AthletePayload {
    #[validate(length(min = 1, max = 100))]
    pub name: String,
    #[validate(length(min = 1, max = 50))]
    pub sport: String,
    #[validate(range(min = 0, max = 150))]
    pub age: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Player {
    pub id: i32,
    pub name: String,
    pub join_date: NaiveDate,
}

/// Body for creating or replacing a player.
///
/// A missing `join_date` means today on create and "keep the stored date" on update.
#[derive(Debug, Deserialize, Validate)]
pub struct PlayerPayload {
    #[validate(length(min = 1, max = 50))]
    pub name: String,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Game {
    pub id: i32,
    pub title: String,
    pub genre: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct GamePayload {
    #[validate(length(min = 1, max = 100))]
    pub title: String,
    #[validate(length(min = 1, max = 50))]
    pub genre: String,
}

/// One play of a game by a player
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Score {
    pub id: i32,
    pub player_id: i32,
    pub game_id: i32,
    pub score: i32,
    pub date_played: NaiveDate,
}

#[derive(Debug, Deserialize, Validate)]
pub struct ScorePayload {
    #[validate(range(min = 1))]
    pub player_id: i32,
    #[validate(range(min = 1))]
    pub game_id: i32,
    #[validate(range(min = 0, max = 1_000_000))]
    pub score: i32,
    #[serde(default)]
    pub date_played: Option<NaiveDate>,
}

/// Returned by every DELETE route
#[derive(Debug, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub message: String,
    pub id: i32,
}

// Analytical rows

/// Player ranked by the sum of all their scores
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct TopScorer {
    pub id: i32,
    pub name: String,
    pub total_score: i64,
}

/// Number of recorded plays per game genre
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct GenrePopularity {
    pub genre: String,
    pub play_count: i64,
}

/// The game a player has the most score rows for
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow)]
pub struct FavoriteGame {
    pub player_id: i32,
    pub player_name: String,
    pub game_id: i32,
    pub title: String,
    pub play_count: i64,
}
