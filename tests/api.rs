//! End-to-end tests against a real PostgreSQL.
//!
//! Run with: DATABASE_URL=postgres://... cargo test -- --ignored
//! Every test truncates the tables, so they hold a shared lock.

mod common;

use axum::{http::StatusCode, Router};
use scoreboard_api::{app, db};
use serde_json::{json, Value};
use sqlx::postgres::{PgPool, PgPoolOptions};
use tokio::sync::{Mutex, MutexGuard};

use common::send;

static DB_LOCK: Mutex<()> = Mutex::const_new(());

async fn fresh_app() -> (Router, PgPool, MutexGuard<'static, ()>) {
    let guard = DB_LOCK.lock().await;

    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
    let pool = PgPoolOptions::new()
        .max_connections(2)
        .connect(&url)
        .await
        .expect("pool creation failed");

    db::migrations::run(&pool).await.expect("migrations failed");
    sqlx::query("TRUNCATE athletes, scores, players, games RESTART IDENTITY CASCADE")
        .execute(&pool)
        .await
        .expect("truncate failed");

    (app(pool.clone()), pool, guard)
}

async fn create(app: &Router, uri: &str, payload: Value) -> Value {
    let (status, body) = send(app, "POST", uri, Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED, "POST {uri}: {body}");
    body
}

async fn count(pool: &PgPool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

#[tokio::test]
#[ignore = "requires database"]
async fn athlete_crud_round_trip() {
    let (app, _pool, _guard) = fresh_app().await;

    let created = create(
        &app,
        "/athletes",
        json!({"name": "Usain Bolt", "sport": "Sprint", "age": 37}),
    )
    .await;
    let id = created["id"].as_i64().unwrap();

    let (status, fetched) = send(&app, "GET", &format!("/athletes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(fetched["name"], "Usain Bolt");
    assert_eq!(fetched["sport"], "Sprint");
    assert_eq!(fetched["age"], 37);

    let (status, listed) = send(&app, "GET", "/", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(listed, json!([created]));

    let (status, updated) = send(
        &app,
        "PUT",
        &format!("/athletes/{id}"),
        Some(json!({"name": "Usain Bolt", "sport": "Football", "age": 38})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(updated["sport"], "Football");
    assert_eq!(updated["age"], 38);

    let (status, deleted) = send(&app, "DELETE", &format!("/athletes/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(deleted["message"], "Athlete deleted successfully");
    assert_eq!(deleted["id"], id);

    let (status, _) = send(&app, "GET", &format!("/athletes/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
#[ignore = "requires database"]
async fn player_defaults_and_keeps_join_date() {
    let (app, pool, _guard) = fresh_app().await;

    let dated = create(&app, "/players", json!({"name": "Ana", "join_date": "2024-02-29"})).await;
    assert_eq!(dated["join_date"], "2024-02-29");

    let id = dated["id"].as_i64().unwrap();
    let (status, renamed) = send(
        &app,
        "PUT",
        &format!("/players/{id}"),
        Some(json!({"name": "Ana Maria"})),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(renamed["name"], "Ana Maria");
    assert_eq!(renamed["join_date"], "2024-02-29");

    let undated = create(&app, "/players", json!({"name": "Ben"})).await;
    let today: chrono::NaiveDate = sqlx::query_scalar("SELECT CURRENT_DATE")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(undated["join_date"], today.to_string());
}

#[tokio::test]
#[ignore = "requires database"]
async fn missing_ids_are_404_for_every_resource() {
    let (app, _pool, _guard) = fresh_app().await;

    let updates = [
        ("/athletes/4242", json!({"name": "Nobody", "sport": "None", "age": 20})),
        ("/players/4242", json!({"name": "Nobody"})),
        ("/games/4242", json!({"title": "Nothing", "genre": "Void"})),
        ("/scores/4242", json!({"player_id": 1, "game_id": 1, "score": 10})),
    ];

    for (uri, payload) in updates {
        let (status, body) = send(&app, "PUT", uri, Some(payload)).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "PUT {uri}");
        assert!(body["message"].as_str().unwrap().ends_with("not found"));

        let (status, _) = send(&app, "DELETE", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "DELETE {uri}");

        let (status, _) = send(&app, "GET", uri, None).await;
        assert_eq!(status, StatusCode::NOT_FOUND, "GET {uri}");
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn invalid_payload_writes_nothing() {
    let (app, pool, _guard) = fresh_app().await;

    let player = create(&app, "/players", json!({"name": "Cleo"})).await;
    let game = create(&app, "/games", json!({"title": "Chess", "genre": "Strategy"})).await;
    let payload = json!({
        "player_id": player["id"],
        "game_id": game["id"],
        "score": 1_000_001,
    });

    let (status, _) = send(&app, "POST", "/scores", Some(payload)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(count(&pool, "scores").await, 0);

    let (status, _) = send(
        &app,
        "POST",
        "/athletes",
        Some(json!({"name": "Too Old", "sport": "Chess", "age": 200})),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(count(&pool, "athletes").await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn score_for_missing_player_is_a_server_error() {
    let (app, pool, _guard) = fresh_app().await;

    let game = create(&app, "/games", json!({"title": "Go", "genre": "Strategy"})).await;
    let (status, body) = send(
        &app,
        "POST",
        "/scores",
        Some(json!({"player_id": 999, "game_id": game["id"], "score": 5})),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["message"].as_str().unwrap().contains("foreign key"));
    assert_eq!(count(&pool, "scores").await, 0);
}

#[tokio::test]
#[ignore = "requires database"]
async fn deleting_a_player_drops_their_scores() {
    let (app, pool, _guard) = fresh_app().await;

    let player = create(&app, "/players", json!({"name": "Dov"})).await;
    let game = create(&app, "/games", json!({"title": "Doom", "genre": "Shooter"})).await;
    create(
        &app,
        "/scores",
        json!({"player_id": player["id"], "game_id": game["id"], "score": 77}),
    )
    .await;

    let (status, _) = send(&app, "DELETE", &format!("/players/{}", player["id"]), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(count(&pool, "scores").await, 0);
}

struct League {
    players: Vec<i64>,
    games: Vec<i64>,
}

/// Five players, three games, scores for the first four players only.
async fn seed_league(app: &Router) -> League {
    let mut players = Vec::new();
    for (name, joined) in [
        ("Ana", "2020-01-01"),
        ("Ben", "2021-06-15"),
        ("Cleo", "2022-03-10"),
        ("Dov", "2023-11-30"),
        ("Eve", "2019-05-05"),
    ] {
        let body = create(app, "/players", json!({"name": name, "join_date": joined})).await;
        players.push(body["id"].as_i64().unwrap());
    }

    let mut games = Vec::new();
    for (title, genre) in [("Tetris", "Puzzle"), ("Doom", "Shooter"), ("Portal", "Puzzle")] {
        let body = create(app, "/games", json!({"title": title, "genre": genre})).await;
        games.push(body["id"].as_i64().unwrap());
    }

    // (player index, game index, score)
    let plays = [
        (0, 0, 100),
        (0, 0, 50),
        (0, 1, 10),
        (1, 1, 400),
        (2, 2, 90),
        (2, 2, 80),
        (2, 0, 5),
        (3, 1, 30),
        (3, 0, 30),
    ];
    for (p, g, score) in plays {
        create(
            app,
            "/scores",
            json!({"player_id": players[p], "game_id": games[g], "score": score}),
        )
        .await;
    }

    League { players, games }
}

#[tokio::test]
#[ignore = "requires database"]
async fn top_scorers_are_ranked_by_total_descending() {
    let (app, _pool, _guard) = fresh_app().await;
    let league = seed_league(&app).await;

    let (status, body) = send(&app, "GET", "/analytics/top-scorers", None).await;
    assert_eq!(status, StatusCode::OK);

    // Ben 400, Ana 160, Cleo 175 -> Ben, Cleo, Ana
    let ranked: Vec<(i64, i64)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| (row["id"].as_i64().unwrap(), row["total_score"].as_i64().unwrap()))
        .collect();
    assert_eq!(
        ranked,
        vec![
            (league.players[1], 400),
            (league.players[2], 175),
            (league.players[0], 160),
        ]
    );

    let (_, body) = send(&app, "GET", "/analytics/top-scorers?limit=10", None).await;
    assert_eq!(body.as_array().unwrap().len(), 4);
}

#[tokio::test]
#[ignore = "requires database"]
async fn inactive_players_have_no_scores() {
    let (app, _pool, _guard) = fresh_app().await;
    let league = seed_league(&app).await;

    let (status, body) = send(&app, "GET", "/analytics/inactive-players", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| row["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![league.players[4]]);
}

#[tokio::test]
#[ignore = "requires database"]
async fn popular_genres_count_plays() {
    let (app, _pool, _guard) = fresh_app().await;
    seed_league(&app).await;

    let (status, body) = send(&app, "GET", "/analytics/popular-genres", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        json!([
            {"genre": "Puzzle", "play_count": 6},
            {"genre": "Shooter", "play_count": 3},
        ])
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn recent_players_are_newest_first() {
    let (app, pool, _guard) = fresh_app().await;
    seed_league(&app).await;

    // The query compares against the database's CURRENT_DATE, not the test host's clock
    let today: chrono::NaiveDate = sqlx::query_scalar("SELECT CURRENT_DATE")
        .fetch_one(&pool)
        .await
        .unwrap();
    let yesterday = today - chrono::Duration::days(1);
    let last_week = today - chrono::Duration::days(7);
    let long_ago = today - chrono::Duration::days(400);

    let week = create(&app, "/players", json!({"name": "Week", "join_date": last_week})).await;
    let yday = create(&app, "/players", json!({"name": "Yday", "join_date": yesterday})).await;
    create(&app, "/players", json!({"name": "Old", "join_date": long_ago})).await;

    let (status, body) = send(&app, "GET", "/analytics/recent-players", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<&Value> = body.as_array().unwrap().iter().map(|row| &row["id"]).collect();
    assert_eq!(ids, vec![&yday["id"], &week["id"]]);

    let (_, body) = send(&app, "GET", "/analytics/recent-players?days=3", None).await;
    assert_eq!(body.as_array().unwrap().len(), 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn favorite_game_is_most_played_per_player() {
    let (app, _pool, _guard) = fresh_app().await;
    let league = seed_league(&app).await;

    let (status, body) = send(&app, "GET", "/analytics/favorite-games", None).await;
    assert_eq!(status, StatusCode::OK);

    let favorites: Vec<(i64, i64, i64)> = body
        .as_array()
        .unwrap()
        .iter()
        .map(|row| {
            (
                row["player_id"].as_i64().unwrap(),
                row["game_id"].as_i64().unwrap(),
                row["play_count"].as_i64().unwrap(),
            )
        })
        .collect();

    // Dov played Doom and Tetris once each; the lower game id wins
    assert_eq!(
        favorites,
        vec![
            (league.players[0], league.games[0], 2),
            (league.players[1], league.games[1], 1),
            (league.players[2], league.games[2], 2),
            (league.players[3], league.games[0], 1),
        ]
    );
}

#[tokio::test]
#[ignore = "requires database"]
async fn health_is_ok_with_database() {
    let (app, _pool, _guard) = fresh_app().await;

    let (status, body) = send(&app, "GET", "/health", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
    assert_eq!(body["database"], "ok");
}
