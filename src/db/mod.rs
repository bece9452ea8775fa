use sqlx::postgres::{PgPool, PgPoolOptions};

use crate::config::Config;

pub mod analytics;
pub mod athletes;
pub mod games;
pub mod migrations;
pub mod players;
pub mod scores;

/// Open the connection pool described by `config`.
pub async fn connect(config: &Config) -> Result<PgPool, sqlx::Error> {
    PgPoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(config.connect_options()?)
        .await
}

/// Round-trip a trivial query; used by the health check.
pub async fn ping(pool: &PgPool) -> Result<(), sqlx::Error> {
    sqlx::query_scalar::<_, i32>("SELECT 1")
        .fetch_one(pool)
        .await
        .map(|_| ())
}
