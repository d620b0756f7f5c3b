//! Team data structure.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a team (used in score updates and lookups).
pub type TeamId = Uuid;

/// A team on the scoreboard.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    pub name: String,
    pub score: u32,
}

impl Team {
    /// Create a new team with the given name and a score of 0.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            score: 0,
        }
    }

    /// Apply a signed delta to the score, saturating at 0.
    pub fn adjust_score(&mut self, delta: i32) {
        self.score = self.score.saturating_add_signed(delta);
    }

    /// Set the score back to 0 (round advance).
    pub fn reset_score(&mut self) {
        self.score = 0;
    }
}
