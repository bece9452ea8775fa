//! Schema creation. Every statement is idempotent so this runs on each startup.

use sqlx::postgres::PgPool;

pub async fn run(pool: &PgPool) -> Result<(), sqlx::Error> {
    tracing::info!("Running migrations...");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS athletes (
            id SERIAL PRIMARY KEY,
            name VARCHAR(100) NOT NULL,
            sport VARCHAR(50) NOT NULL,
            age INT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS players (
            id SERIAL PRIMARY KEY,
            name VARCHAR(50) NOT NULL,
            join_date DATE NOT NULL DEFAULT CURRENT_DATE
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS games (
            id SERIAL PRIMARY KEY,
            title VARCHAR(100) NOT NULL,
            genre VARCHAR(50) NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS scores (
            id SERIAL PRIMARY KEY,
            player_id INT NOT NULL REFERENCES players(id) ON DELETE CASCADE,
            game_id INT NOT NULL REFERENCES games(id) ON DELETE CASCADE,
            score INT NOT NULL,
            date_played DATE NOT NULL DEFAULT CURRENT_DATE
        )
        "#,
    )
    .execute(pool)
    .await?;

    // Analytical queries join and group on these
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_scores_player_id ON scores(player_id)")
        .execute(pool)
        .await?;
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_scores_game_id ON scores(game_id)")
        .execute(pool)
        .await?;

    tracing::info!("Migrations complete.");
    Ok(())
}
