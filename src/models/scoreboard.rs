//! Scoreboard state and roster operations.

use crate::models::team::{Team, TeamId};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Errors that can occur during scoreboard operations.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum ScoreboardError {
    /// Team name is empty after trimming.
    EmptyTeamName,
    /// A team with this name already exists (names are unique, case-insensitive).
    DuplicateTeamName,
    /// Team not found on this scoreboard.
    TeamNotFound(TeamId),
    /// No teams to advance.
    NoTeams,
    /// Advance count is larger than the number of teams.
    AdvanceCountExceedsTeams {
        advance_count: usize,
        team_count: usize,
    },
}

impl std::fmt::Display for ScoreboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ScoreboardError::EmptyTeamName => write!(f, "Team name cannot be empty"),
            ScoreboardError::DuplicateTeamName => write!(f, "Team name already exists"),
            ScoreboardError::TeamNotFound(_) => write!(f, "Team not found"),
            ScoreboardError::NoTeams => write!(f, "No teams to advance"),
            ScoreboardError::AdvanceCountExceedsTeams {
                advance_count,
                team_count,
            } => write!(
                f,
                "Cannot advance {} teams when only {} teams exist",
                advance_count, team_count
            ),
        }
    }
}

/// Unique identifier for a scoreboard.
pub type ScoreboardId = Uuid;

/// Default number of teams that survive a round until the operator changes it.
pub const DEFAULT_ADVANCE_COUNT: usize = 2;

/// Full scoreboard state: teams, current round, and the configured advance count.
///
/// `teams` is kept in insertion order; that order is the canonical display
/// order. Ranking is a derived view (see `logic::standings`) and never
/// reorders this list. The one exception is `advance_round`, which replaces
/// the list wholesale with the surviving teams in rank order.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scoreboard {
    pub id: ScoreboardId,
    pub teams: Vec<Team>,
    /// Current round, starting at 1.
    pub current_round: u32,
    /// How many top-scoring teams survive a round advance. Always >= 1.
    pub advance_count: usize,
}

impl Scoreboard {
    /// Create an empty scoreboard at round 1 with the given advance count (clamped to >= 1).
    pub fn new(advance_count: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            teams: Vec::new(),
            current_round: 1,
            advance_count: advance_count.max(1),
        }
    }

    /// Create a scoreboard with initial teams (e.g. for tests).
    pub fn with_teams(teams: Vec<Team>, advance_count: usize) -> Self {
        Self {
            teams,
            ..Self::new(advance_count)
        }
    }

    /// Reference to a team by id.
    pub fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.iter().find(|t| t.id == id)
    }

    /// Mutable reference to a team by id.
    pub fn team_mut(&mut self, id: TeamId) -> Option<&mut Team> {
        self.teams.iter_mut().find(|t| t.id == id)
    }

    /// Add a team. Names must be non-empty after trimming and unique (case-insensitive).
    /// Returns the new team so the caller can report its name and id.
    pub fn add_team(&mut self, name: impl Into<String>) -> Result<&Team, ScoreboardError> {
        let name = name.into();
        let name_trimmed = name.trim();
        if name_trimmed.is_empty() {
            return Err(ScoreboardError::EmptyTeamName);
        }
        let is_duplicate = self
            .teams
            .iter()
            .any(|t| t.name.eq_ignore_ascii_case(name_trimmed));
        if is_duplicate {
            return Err(ScoreboardError::DuplicateTeamName);
        }
        self.teams.push(Team::new(name_trimmed));
        Ok(self.teams.last().expect("team was just pushed"))
    }

    /// Remove a team by id. Remaining teams keep their relative order.
    /// Returns the removed team so the caller can report its name.
    pub fn remove_team(&mut self, team_id: TeamId) -> Result<Team, ScoreboardError> {
        let idx = self
            .teams
            .iter()
            .position(|t| t.id == team_id)
            .ok_or(ScoreboardError::TeamNotFound(team_id))?;
        Ok(self.teams.remove(idx))
    }

    /// Apply a signed delta to one team's score, saturating at 0.
    /// Unknown ids are ignored.
    pub fn adjust_score(&mut self, team_id: TeamId, delta: i32) {
        if let Some(team) = self.team_mut(team_id) {
            team.adjust_score(delta);
        }
    }

    /// Set how many top-scoring teams survive a round advance (clamped to >= 1).
    pub fn set_advance_count(&mut self, count: usize) {
        self.advance_count = count.max(1);
    }

    /// Reset the tournament: clear all teams, back to round 1.
    /// The configured advance count is kept.
    pub fn reset(&mut self) {
        self.teams.clear();
        self.current_round = 1;
    }
}
