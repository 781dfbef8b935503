use armada::{
    default_attempts, Board, GameSession, Orientation, Outcome, SessionError, SessionStatus,
    ShotOutcome,
};

fn board_with_single_cell_ship(n: usize, at: (usize, usize)) -> Board {
    let mut board = Board::new(n);
    board.place(at, 1, Orientation::Horizontal).unwrap();
    board
}

#[test]
fn test_default_attempt_budget() {
    assert_eq!(default_attempts(3), 7); // ⌊0.8·9⌋
    assert_eq!(default_attempts(10), 80);
}

#[test]
fn test_solo_loss_when_attempts_run_out() {
    let board = board_with_single_cell_ship(3, (0, 0));
    let mut session = GameSession::solo(board, 7);
    assert_eq!(session.status(), SessionStatus::Active);

    // seven distinct shots that all miss the (0, 0) ship
    let misses = [(0, 1), (0, 2), (1, 0), (1, 1), (1, 2), (2, 0), (2, 1)];
    for (i, &(r, c)) in misses.iter().enumerate() {
        let report = session.fire(r, c).unwrap();
        assert_eq!(report.outcome, ShotOutcome::Miss);
        assert_eq!(report.attempts_left, Some(7 - i - 1));
    }
    assert_eq!(session.status(), SessionStatus::Over(Outcome::Loss));
    // the fleet is untouched
    assert_eq!(session.unsunk_ships(0), 1);
}

#[test]
fn test_solo_win_on_final_attempt_takes_precedence() {
    let board = board_with_single_cell_ship(3, (1, 1));
    let mut session = GameSession::solo(board, 1);
    let report = session.fire(1, 1).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Sunk(0));
    assert_eq!(report.attempts_left, Some(0));
    assert_eq!(session.status(), SessionStatus::Over(Outcome::Win));
}

#[test]
fn test_solo_duplicate_consumes_attempt() {
    let board = board_with_single_cell_ship(3, (0, 0));
    let mut session = GameSession::solo(board, 3);
    session.fire(1, 1).unwrap();
    let report = session.fire(1, 1).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Duplicate);
    assert_eq!(report.attempts_left, Some(1));
    // history only grew once
    assert_eq!(session.shots_against(0).len(), 1);
}

#[test]
fn test_duel_first_hit_wins_without_turn_flip() {
    let first = board_with_single_cell_ship(1, (0, 0));
    let second = board_with_single_cell_ship(1, (0, 0));
    let mut session = GameSession::duel(first, second);
    assert_eq!(session.turn(), Some(0));

    let report = session.fire(0, 0).unwrap();
    assert_eq!(report.shooter, 0);
    assert_eq!(report.outcome, ShotOutcome::Sunk(0));
    assert_eq!(session.status(), SessionStatus::Over(Outcome::Winner(0)));
    // turn owner did not flip on the winning shot
    assert_eq!(session.turn(), Some(0));
}

#[test]
fn test_duel_alternates_turns() {
    let first = board_with_single_cell_ship(2, (0, 0));
    let second = board_with_single_cell_ship(2, (0, 0));
    let mut session = GameSession::duel(first, second);

    // player 0 misses, turn passes
    let report = session.fire(1, 1).unwrap();
    assert_eq!(report.shooter, 0);
    assert_eq!(report.outcome, ShotOutcome::Miss);
    assert_eq!(session.turn(), Some(1));

    // player 1 sinks player 0's only ship
    let report = session.fire(0, 0).unwrap();
    assert_eq!(report.shooter, 1);
    assert_eq!(session.status(), SessionStatus::Over(Outcome::Winner(1)));
}

#[test]
fn test_duel_duplicate_still_passes_the_turn() {
    let first = board_with_single_cell_ship(2, (0, 0));
    let second = board_with_single_cell_ship(2, (0, 0));
    let mut session = GameSession::duel(first, second);

    // player 0 misses at (1, 1); player 1 misses somewhere else
    session.fire(1, 1).unwrap();
    session.fire(1, 0).unwrap();
    assert_eq!(session.turn(), Some(0));

    // player 0 repeats the same coordinate: a resolved turn, so it passes
    let report = session.fire(1, 1).unwrap();
    assert_eq!(report.outcome, ShotOutcome::Duplicate);
    assert_eq!(session.status(), SessionStatus::Active);
    assert_eq!(session.turn(), Some(1));
    // opponent's history did not grow
    assert_eq!(session.shots_against(1).len(), 1);
}

#[test]
fn test_terminal_state_is_absorbing() {
    let board = board_with_single_cell_ship(2, (0, 0));
    let mut session = GameSession::solo(board, 1);
    session.fire(1, 1).unwrap();
    assert_eq!(session.status(), SessionStatus::Over(Outcome::Loss));
    assert_eq!(session.fire(0, 0).unwrap_err(), SessionError::GameOver);
    // state is frozen where termination left it
    assert_eq!(session.shots_against(0).len(), 1);
    assert_eq!(session.attempts_left(), Some(0));
}

#[test]
fn test_sunk_flags_follow_shot_history() {
    let mut board = Board::new(4);
    board.place((0, 0), 2, Orientation::Horizontal).unwrap();
    board.place((2, 0), 1, Orientation::Vertical).unwrap();
    let mut session = GameSession::solo(board, 10);

    assert_eq!(session.sunk_flags(0), vec![false, false]);
    session.fire(0, 0).unwrap();
    session.fire(0, 1).unwrap();
    assert_eq!(session.sunk_flags(0), vec![true, false]);
    assert_eq!(session.unsunk_ships(0), 1);
}
