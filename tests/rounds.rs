//! Integration tests for round advance, reset, and the derived standings.

use scoreboard_web::{
    advance_round, advancing_count, standings, Scoreboard, ScoreboardError, Team,
};

fn board_with_scores(entries: &[(&str, u32)], advance_count: usize) -> Scoreboard {
    let teams: Vec<Team> = entries
        .iter()
        .map(|(name, score)| {
            let mut t = Team::new(*name);
            t.score = *score;
            t
        })
        .collect();
    Scoreboard::with_teams(teams, advance_count)
}

#[test]
fn advance_keeps_top_teams_in_rank_order_and_resets_scores() {
    let mut s = board_with_scores(&[("A", 5), ("B", 5), ("C", 3), ("D", 1)], 2);
    let outcome = advance_round(&mut s).unwrap();

    // A and B tie at 5: stable sort keeps A before B.
    let names: Vec<&str> = s.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "B"]);
    assert!(s.teams.iter().all(|t| t.score == 0));
    assert_eq!(s.current_round, 2);

    assert_eq!(outcome.advanced, 2);
    assert_eq!(outcome.completed_round, 1);
    assert_eq!(outcome.next_round, 2);
}

#[test]
fn advance_orders_survivors_by_rank_not_insertion() {
    let mut s = board_with_scores(&[("A", 1), ("B", 9), ("C", 4)], 2);
    advance_round(&mut s).unwrap();
    let names: Vec<&str> = s.teams.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["B", "C"]);
}

#[test]
fn advance_with_no_teams_fails() {
    let mut s = Scoreboard::new(2);
    assert!(matches!(
        advance_round(&mut s),
        Err(ScoreboardError::NoTeams)
    ));
    assert_eq!(s.current_round, 1);
}

#[test]
fn advance_count_larger_than_roster_fails_and_changes_nothing() {
    let mut s = board_with_scores(&[("A", 5), ("B", 3), ("C", 1)], 5);
    let before = s.teams.clone();
    assert!(matches!(
        advance_round(&mut s),
        Err(ScoreboardError::AdvanceCountExceedsTeams {
            advance_count: 5,
            team_count: 3,
        })
    ));
    assert_eq!(s.teams, before);
    assert_eq!(s.current_round, 1);
}

#[test]
fn reset_clears_teams_and_round_but_keeps_advance_count() {
    let mut s = board_with_scores(&[("A", 5), ("B", 3), ("C", 1)], 3);
    advance_round(&mut s).unwrap();
    s.reset();
    assert!(s.teams.is_empty());
    assert_eq!(s.current_round, 1);
    assert_eq!(s.advance_count, 3);
}

#[test]
fn reset_is_idempotent() {
    let mut s = board_with_scores(&[("A", 5), ("B", 3)], 2);
    s.reset();
    let once = s.clone();
    s.reset();
    assert_eq!(s.teams, once.teams);
    assert_eq!(s.current_round, once.current_round);
    assert_eq!(s.advance_count, once.advance_count);
}

#[test]
fn standings_keep_display_order_and_rank_by_score() {
    let s = board_with_scores(&[("A", 1), ("B", 9), ("C", 4)], 2);
    let standings = standings(&s);

    // Display order is insertion order, untouched by ranking.
    let names: Vec<&str> = standings.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, ["A", "B", "C"]);

    let ranks: Vec<usize> = standings.iter().map(|t| t.rank).collect();
    assert_eq!(ranks, [2, 0, 1]);

    let advancing: Vec<bool> = standings.iter().map(|t| t.advancing).collect();
    assert_eq!(advancing, [false, true, true]);
}

#[test]
fn standings_break_ties_by_display_order() {
    let s = board_with_scores(&[("A", 5), ("B", 5), ("C", 5)], 2);
    let standings = standings(&s);
    let ranks: Vec<usize> = standings.iter().map(|t| t.rank).collect();
    assert_eq!(ranks, [0, 1, 2]);
    assert!(standings[0].advancing);
    assert!(standings[1].advancing);
    assert!(!standings[2].advancing);
}

#[test]
fn advancing_set_size_is_clamped_to_roster() {
    let s = board_with_scores(&[("A", 5), ("B", 3)], 4);
    // advance_count exceeds the roster: every team shows as advancing,
    // and the stats readout clamps to the roster size.
    assert_eq!(advancing_count(&s), 2);
    assert_eq!(standings(&s).iter().filter(|t| t.advancing).count(), 2);

    let s = board_with_scores(&[("A", 5), ("B", 3), ("C", 1)], 2);
    assert_eq!(advancing_count(&s), 2);
    assert_eq!(standings(&s).iter().filter(|t| t.advancing).count(), 2);
}
