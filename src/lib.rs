use axum::{routing::get, Router};
use sqlx::postgres::PgPool;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;
pub mod routes;

/// Build the full router over a shared connection pool.
pub fn app(pool: PgPool) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        // Root and health
        .route("/", get(routes::athletes::get_athletes))
        .route("/health", get(routes::health::health_check))

        // Athlete endpoints
        .route(
            "/athletes",
            get(routes::athletes::get_athletes).post(routes::athletes::create_athlete),
        )
        .route(
            "/athletes/{id}",
            get(routes::athletes::get_athlete_by_id)
                .put(routes::athletes::update_athlete)
                .delete(routes::athletes::delete_athlete),
        )

        // Player endpoints
        .route(
            "/players",
            get(routes::players::get_players).post(routes::players::create_player),
        )
        .route(
            "/players/{id}",
            get(routes::players::get_player_by_id)
                .put(routes::players::update_player)
                .delete(routes::players::delete_player),
        )

        // Game endpoints
        .route(
            "/games",
            get(routes::games::get_games).post(routes::games::create_game),
        )
        .route(
            "/games/{id}",
            get(routes::games::get_game_by_id)
                .put(routes::games::update_game)
                .delete(routes::games::delete_game),
        )

        // Score endpoints
        .route(
            "/scores",
            get(routes::scores::get_scores).post(routes::scores::create_score),
        )
        .route(
            "/scores/{id}",
            get(routes::scores::get_score_by_id)
                .put(routes::scores::update_score)
                .delete(routes::scores::delete_score),
        )

        // Analytics endpoints
        .route("/analytics/top-scorers", get(routes::analytics::get_top_scorers))
        .route("/analytics/inactive-players", get(routes::analytics::get_inactive_players))
        .route("/analytics/popular-genres", get(routes::analytics::get_popular_genres))
        .route("/analytics/recent-players", get(routes::analytics::get_recent_players))
        .route("/analytics/favorite-games", get(routes::analytics::get_favorite_games))

        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(pool)
}
