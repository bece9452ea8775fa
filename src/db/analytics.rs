//! Fixed analytical read queries over players, games and scores.
//!
//! The ORDER BY of each query is part of the API contract.

use sqlx::postgres::PgPool;
use crate::models::{FavoriteGame, GenrePopularity, Player, TopScorer};

/// Players ranked by the sum of their scores, highest first
pub async fn get_top_scorers(pool: &PgPool, limit: i64) -> Result<Vec<TopScorer>, sqlx::Error> {
    sqlx::query_as::<_, TopScorer>(
        r#"SELECT p.id, p.name, SUM(s.score)::BIGINT AS total_score
           FROM players p
           JOIN scores s ON s.player_id = p.id
           GROUP BY p.id, p.name
           ORDER BY total_score DESC, p.id
           LIMIT $1"#
    )
    .bind(limit)
    .fetch_all(pool)
    .await
}

/// Players with no recorded scores
pub async fn get_inactive_players(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT p.id, p.name, p.join_date
           FROM players p
           LEFT JOIN scores s ON s.player_id = p.id
           WHERE s.id IS NULL
           ORDER BY p.id"#
    )
    .fetch_all(pool)
    .await
}

/// Genres by number of score rows; genres never played are left out
pub async fn get_popular_genres(pool: &PgPool) -> Result<Vec<GenrePopularity>, sqlx::Error> {
    sqlx::query_as::<_, GenrePopularity>(
        r#"SELECT g.genre, COUNT(s.id) AS play_count
           FROM games g
           JOIN scores s ON s.game_id = g.id
           GROUP BY g.genre
           ORDER BY play_count DESC, g.genre"#
    )
    .fetch_all(pool)
    .await
}

/// Players whose join date falls within the last `days` days, newest first
pub async fn get_recent_players(pool: &PgPool, days: i32) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, name, join_date
           FROM players
           WHERE join_date >= CURRENT_DATE - $1::INT
           ORDER BY join_date DESC, id"#
    )
    .bind(days)
    .fetch_all(pool)
    .await
}

/// Each player's most played game. Ties go to the lowest game id.
pub async fn get_favorite_games(pool: &PgPool) -> Result<Vec<FavoriteGame>, sqlx::Error> {
    sqlx::query_as::<_, FavoriteGame>(
        r#"SELECT DISTINCT ON (p.id)
               p.id AS player_id,
               p.name AS player_name,
               g.id AS game_id,
               g.title,
               COUNT(s.id) AS play_count
           FROM players p
           JOIN scores s ON s.player_id = p.id
           JOIN games g ON g.id = s.game_id
           GROUP BY p.id, p.name, g.id, g.title
           ORDER BY p.id, play_count DESC, g.id"#
    )
    .fetch_all(pool)
    .await
}
