//! Elimination-round scoreboard web app: library with models and business logic.

pub mod logic;
pub mod models;

pub use logic::{advance_round, advancing_count, standings, RoundOutcome, TeamStanding};
pub use models::{
    Scoreboard, ScoreboardError, ScoreboardId, Team, TeamId, DEFAULT_ADVANCE_COUNT,
};
