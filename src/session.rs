//! Game session state machine: solo play against an attempt budget, or a
//! two-player duel that alternates turns until one fleet is gone.

use alloc::vec::Vec;

use crate::board::Board;
use crate::common::{SessionError, ShotOutcome};
use crate::shot::{self, ShotHistory};

/// Default solo attempt budget for a board of side `n`: ⌊0.8·n²⌋.
pub fn default_attempts(n: usize) -> usize {
    n * n * 4 / 5
}

/// How a finished session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Solo: the fleet was cleared within the attempt budget.
    Win,
    /// Solo: attempts ran out with ships still afloat.
    Loss,
    /// Duel: the indexed player sank the opposing fleet.
    Winner(usize),
}

/// Current state of a session. `Over` is absorbing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Over(Outcome),
}

/// Everything the presentation layer needs after one shot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TurnReport {
    /// Player who fired.
    pub shooter: usize,
    /// Classification of the shot.
    pub outcome: ShotOutcome,
    /// Remaining attempts after this shot (solo only).
    pub attempts_left: Option<usize>,
    /// Un-sunk ships left on the targeted board.
    pub unsunk: usize,
    /// Session state after termination evaluation.
    pub status: SessionStatus,
}

/// One player's half of a session: their board and the shots it has taken.
struct Side {
    board: Board,
    shots: ShotHistory,
}

impl Side {
    fn new(board: Board) -> Self {
        let n = board.size();
        Side {
            board,
            shots: ShotHistory::new(n),
        }
    }

    fn unsunk(&self) -> usize {
        self.board
            .ships()
            .iter()
            .filter(|s| !s.is_sunk(self.shots.fired()))
            .count()
    }
}

enum Mode {
    Solo { attempts_left: usize },
    Duel { turn: usize },
}

/// A running game. Owns its boards and shot histories exclusively; all
/// mutation goes through [`GameSession::fire`].
pub struct GameSession {
    sides: Vec<Side>,
    mode: Mode,
    status: SessionStatus,
}

impl GameSession {
    /// Solo session: one board, a fixed attempt budget.
    pub fn solo(board: Board, attempts: usize) -> Self {
        GameSession {
            sides: [Side::new(board)].into_iter().collect(),
            mode: Mode::Solo {
                attempts_left: attempts,
            },
            status: SessionStatus::Active,
        }
    }

    /// Solo session with the default budget for the board's size.
    pub fn solo_default(board: Board) -> Self {
        let attempts = default_attempts(board.size());
        Self::solo(board, attempts)
    }

    /// Duel session: two boards, player 0 fires first, no attempt budget.
    pub fn duel(first: Board, second: Board) -> Self {
        GameSession {
            sides: [Side::new(first), Side::new(second)].into_iter().collect(),
            mode: Mode::Duel { turn: 0 },
            status: SessionStatus::Active,
        }
    }

    /// Current session status.
    pub fn status(&self) -> SessionStatus {
        self.status
    }

    /// Number of players (1 or 2).
    pub fn players(&self) -> usize {
        self.sides.len()
    }

    /// Player whose turn it is (duel only).
    pub fn turn(&self) -> Option<usize> {
        match self.mode {
            Mode::Duel { turn } => Some(turn),
            Mode::Solo { .. } => None,
        }
    }

    /// Remaining attempts (solo only).
    pub fn attempts_left(&self) -> Option<usize> {
        match self.mode {
            Mode::Solo { attempts_left } => Some(attempts_left),
            Mode::Duel { .. } => None,
        }
    }

    /// Board belonging to `side`. Panics if `side` is not a player index.
    pub fn board(&self, side: usize) -> &Board {
        &self.sides[side].board
    }

    /// Shots fired so far at `side`'s board, in chronological order.
    pub fn shots_against(&self, side: usize) -> &ShotHistory {
        &self.sides[side].shots
    }

    /// Count of un-sunk ships on `side`'s board.
    pub fn unsunk_ships(&self, side: usize) -> usize {
        self.sides[side].unsunk()
    }

    /// Derived per-ship sunk status for `side`'s fleet, in placement order.
    pub fn sunk_flags(&self, side: usize) -> Vec<bool> {
        let side = &self.sides[side];
        side.board
            .ships()
            .iter()
            .map(|s| s.is_sunk(side.shots.fired()))
            .collect()
    }

    /// Fire the current player's shot at (row, col).
    ///
    /// Solo: every shot consumes an attempt, duplicates included; the session
    /// ends with `Win` when the fleet is cleared or `Loss` when the budget
    /// runs out, win taking precedence on the final attempt. Duel: the shot
    /// resolves against the opponent's board; clearing it ends the session
    /// with `Winner(shooter)` and no turn flip, anything else passes the
    /// turn. Once terminal, further calls return `SessionError::GameOver`.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<TurnReport, SessionError> {
        if let SessionStatus::Over(_) = self.status {
            return Err(SessionError::GameOver);
        }
        match self.mode {
            Mode::Solo {
                ref mut attempts_left,
            } => {
                let side = &mut self.sides[0];
                let outcome = shot::resolve(&side.board, &mut side.shots, row, col)?;
                *attempts_left = attempts_left.saturating_sub(1);
                let left = *attempts_left;
                let unsunk = side.unsunk();
                let status = if unsunk == 0 {
                    SessionStatus::Over(Outcome::Win)
                } else if left == 0 {
                    SessionStatus::Over(Outcome::Loss)
                } else {
                    SessionStatus::Active
                };
                if let SessionStatus::Over(end) = status {
                    log::debug!("solo session over: {:?}", end);
                }
                self.status = status;
                Ok(TurnReport {
                    shooter: 0,
                    outcome,
                    attempts_left: Some(left),
                    unsunk,
                    status,
                })
            }
            Mode::Duel { ref mut turn } => {
                let shooter = *turn;
                let target = shooter ^ 1;
                let side = &mut self.sides[target];
                let outcome = shot::resolve(&side.board, &mut side.shots, row, col)?;
                let unsunk = side.unsunk();
                let status = if unsunk == 0 {
                    log::debug!("duel over: player {} wins", shooter);
                    SessionStatus::Over(Outcome::Winner(shooter))
                } else {
                    *turn = target;
                    SessionStatus::Active
                };
                self.status = status;
                Ok(TurnReport {
                    shooter,
                    outcome,
                    attempts_left: None,
                    unsunk,
                    status,
                })
            }
        }
    }
}
