use sqlx::postgres::PgPool;
use crate::models::{Athlete, AthletePayload};

pub async fn get_all_athletes(pool: &PgPool) -> Result<Vec<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"SELECT id, name, sport, age FROM athletes ORDER BY id"#
    )
    .fetch_all(pool)
    .await
}

pub async fn get_athlete_by_id(pool: &PgPool, id: i32) -> Result<Option<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"SELECT id, name, sport, age FROM athletes WHERE id = $1"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn create_athlete(pool: &PgPool, athlete: &AthletePayload) -> Result<Athlete, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"INSERT INTO athletes (name, sport, age)
           VALUES ($1, $2, $3)
           RETURNING id, name, sport, age"#
    )
    .bind(&athlete.name)
    .bind(&athlete.sport)
    .bind(athlete.age)
    .fetch_one(pool)
    .await
}

/// Returns `None` when no athlete has this id
pub async fn update_athlete(
    pool: &PgPool,
    id: i32,
    athlete: &AthletePayload,
) -> Result<Option<Athlete>, sqlx::Error> {
    sqlx::query_as::<_, Athlete>(
        r#"UPDATE athletes SET name = $1, sport = $2, age = $3
           WHERE id = $4
           RETURNING id, name, sport, age"#
    )
    .bind(&athlete.name)
    .bind(&athlete.sport)
    .bind(athlete.age)
    .bind(id)
    .fetch_optional(pool)
    .await
}

pub async fn delete_athlete(pool: &PgPool, id: i32) -> Result<Option<i32>, sqlx::Error> {
    sqlx::query_scalar::<_, i32>(
        r#"DELETE FROM athletes WHERE id = $1 RETURNING id"#
    )
    .bind(id)
    .fetch_optional(pool)
    .await
}
