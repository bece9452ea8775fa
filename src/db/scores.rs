use sqlx::postgres::PgPool;
use crate::models::{Score, ScorePayload};

// Most recent plays first
pub async fn get_all_scores(pool: &PgPool) -> Result<Vec<Score>, sqlx::Error> {
    sqlx::query_as::<_, Score>(
        r#"SELECT id, player_id, game_id, score, date_played
           FROM scores
           ORDER BY date_played DESC, id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_score_by_id(pool: &PgPool, id: i32) -> Result<Option<Score>, sqlx::Error> {
    sqlx::query_as::<_, Score>(
        r#"SELECT id, player_id, game_id, score, date_played FROM scores WHERE id = $1"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Fails with a foreign key violation if the player or game does not exist
pub async fn create_score(pool: &PgPool, score: &ScorePayload) -> Result<Score, sqlx::Error> {
    sqlx::query_as::<_, Score>(
        r#"INSERT INTO scores (player_id, game_id, score, date_played)
           VALUES ($1, $2, $3, COALESCE($4, CURRENT_DATE))
           RETURNING id, player_id, game_id, score, date_played"#
    )
    .bind(score.player_id)
    .bind(score.game_id)
    .bind(score.score)
    .bind(score.date_played)
    .fetch_one(pool)
    .await
}

pub async fn update_score(
    pool: &PgPool,
    id: i32,
    score: &ScorePayload,
) -> Result<Option<Score>, sqlx::Error> {
    sqlx::query_as::<_, Score>(
        r#"UPDATE scores
           SET player_id = $1, game_id = $2, score = $3,
               date_played = COALESCE($4, date_played)
           WHERE id = $5
           RETURNING id, player_id, game_id, score, date_played"#
    )
    .bind(score.player_id)
    .bind(score.game_id)
    .bind(score.score)
    .bind(score.date_played)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_score(pool: &PgPool, id: i32) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"DELETE FROM scores WHERE id = $1 RETURNING id"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
