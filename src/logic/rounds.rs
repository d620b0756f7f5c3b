//! Round advance: prune the field to the top scorers and start the next round.

use crate::models::{Scoreboard, ScoreboardError};

/// Result of a successful round advance (for reporting to the user).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct RoundOutcome {
    /// How many teams advanced.
    pub advanced: usize,
    /// The round that just finished.
    pub completed_round: u32,
    /// The round now in progress.
    pub next_round: u32,
}

/// Advance to the next round: keep the top `advance_count` teams by score,
/// reset their scores to 0, and increment the round.
///
/// The surviving teams end up in rank order. The sort is stable, so teams
/// with equal scores keep their previous display order relative to each
/// other. On error, nothing changes.
pub fn advance_round(board: &mut Scoreboard) -> Result<RoundOutcome, ScoreboardError> {
    if board.teams.is_empty() {
        return Err(ScoreboardError::NoTeams);
    }
    if board.advance_count > board.teams.len() {
        return Err(ScoreboardError::AdvanceCountExceedsTeams {
            advance_count: board.advance_count,
            team_count: board.teams.len(),
        });
    }

    let mut survivors = board.teams.clone();
    survivors.sort_by(|a, b| b.score.cmp(&a.score));
    survivors.truncate(board.advance_count);
    for team in &mut survivors {
        team.reset_score();
    }

    let completed_round = board.current_round;
    board.teams = survivors;
    board.current_round += 1;

    Ok(RoundOutcome {
        advanced: board.teams.len(),
        completed_round,
        next_round: board.current_round,
    })
}
