use sqlx::postgres::PgPool;
use crate::models::{Game, GamePayload};

pub async fn get_all_games(pool: &PgPool) -> Result<Vec<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT id, title, genre FROM games ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_game_by_id(pool: &PgPool, id: i32) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"SELECT id, title, genre FROM games WHERE id = $1"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_game(pool: &PgPool, game: &GamePayload) -> Result<Game, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"INSERT INTO games (title, genre)
           VALUES ($1, $2)
           RETURNING id, title, genre"#
    )
    .bind(&game.title)
    .bind(&game.genre)
    .fetch_one(pool)
    .await
}

pub async fn update_game(
    pool: &PgPool,
    id: i32,
    game: &GamePayload,
) -> Result<Option<Game>, sqlx::Error> {
    sqlx::query_as::<_, Game>(
        r#"UPDATE games SET title = $1, genre = $2
           WHERE id = $3
           RETURNING id, title, genre"#
    )
    .bind(&game.title)
    .bind(&game.genre)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_game(pool: &PgPool, id: i32) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"DELETE FROM games WHERE id = $1 RETURNING id"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
