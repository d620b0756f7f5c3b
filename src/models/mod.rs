//! Data structures for the scoreboard: teams and tournament state.

mod scoreboard;
mod team;

pub use scoreboard::{Scoreboard, ScoreboardError, ScoreboardId, DEFAULT_ADVANCE_COUNT};
pub use team::{Team, TeamId};
