//! Derived ranking view: standings over the current roster.

use crate::models::{Scoreboard, TeamId};
use serde::{Deserialize, Serialize};

/// Ranking view of one team (for API / display).
///
/// Entries are produced in display order; `rank` is the team's 0-based
/// position in a stable score-descending sort, so equal scores keep their
/// display order relative to each other.
#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub struct TeamStanding {
    pub id: TeamId,
    pub name: String,
    pub score: u32,
    /// 0-based rank by score, highest first.
    pub rank: usize,
    /// Whether this team would survive a round advance right now.
    pub advancing: bool,
}

/// Compute standings for every team, in display order.
///
/// Recomputed from scratch on every call; the roster itself is never
/// reordered. Works on a sorted copy, exactly like the round advance does.
pub fn standings(board: &Scoreboard) -> Vec<TeamStanding> {
    let mut by_score: Vec<usize> = (0..board.teams.len()).collect();
    // Stable sort: equal scores keep display order.
    by_score.sort_by(|&a, &b| board.teams[b].score.cmp(&board.teams[a].score));

    let mut ranks = vec![0usize; board.teams.len()];
    for (rank, &idx) in by_score.iter().enumerate() {
        ranks[idx] = rank;
    }

    board
        .teams
        .iter()
        .zip(ranks)
        .map(|(team, rank)| TeamStanding {
            id: team.id,
            name: team.name.clone(),
            score: team.score,
            rank,
            advancing: rank < board.advance_count,
        })
        .collect()
}

/// How many teams would actually advance right now: the configured advance
/// count, clamped to the roster size. Display-only; `advance_round` itself
/// rejects an advance count larger than the roster.
pub fn advancing_count(board: &Scoreboard) -> usize {
    board.advance_count.min(board.teams.len())
}
