use sqlx::postgres::PgPool;
use crate::models::{Player, PlayerPayload};

pub async fn get_all_players(pool: &PgPool) -> Result<Vec<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, name, join_date FROM players ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_player_by_id(pool: &PgPool, id: i32) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"SELECT id, name, join_date FROM players WHERE id = $1"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// A missing join date defaults to today
pub async fn create_player(pool: &PgPool, player: &PlayerPayload) -> Result<Player, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"INSERT INTO players (name, join_date)
           VALUES ($1, COALESCE($2, CURRENT_DATE))
           RETURNING id, name, join_date"#
    )
    .bind(&player.name)
    .bind(player.join_date)
    .fetch_one(pool)
    .await
}

/// A missing join date leaves the stored one untouched
pub async fn update_player(
    pool: &PgPool,
    id: i32,
    player: &PlayerPayload,
) -> Result<Option<Player>, sqlx::Error> {
    sqlx::query_as::<_, Player>(
        r#"UPDATE players SET name = $1, join_date = COALESCE($2, join_date)
           WHERE id = $3
           RETURNING id, name, join_date"#
    )
    .bind(&player.name)
    .bind(player.join_date)
    .bind(id)
    .fetch_optional(pool)
    .await
}

/// Scores for the player go with it (ON DELETE CASCADE)
pub async fn delete_player(pool: &PgPool, id: i32) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"DELETE FROM players WHERE id = $1 RETURNING id"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
