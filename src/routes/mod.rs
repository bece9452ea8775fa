pub mod analytics;
pub mod athletes;
pub mod games;
pub mod health;
pub mod players;
pub mod scores;
