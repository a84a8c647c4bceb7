use serde::{Deserialize, Serialize};

/// Mark placed by a player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    fn other(self) -> Self {
        match self {
            Self::X => Self::O,
            Self::O => Self::X,
        }
    }
}

/// The 3×3 board and whose turn it is. Cells are indexed row-major, 0..9.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub board: [Option<Mark>; 9],
    pub turn: Mark,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [None; 9],
            turn: Mark::X,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Place the current player's mark in a cell.
    Place(usize),
}

const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// The winning mark, if any line is complete.
pub fn winner(state: &GameState) -> Option<Mark> {
    LINES.iter().find_map(|line| {
        let first = state.board[line[0]]?;
        line[1..]
            .iter()
            .all(|&cell| state.board[cell] == Some(first))
            .then_some(first)
    })
}

/// Draft-mutating reducer for the tic-tac-toe demo. Placing on an occupied
/// or out-of-bounds cell, or after the game is decided, leaves the draft
/// untouched.
pub fn reduce(state: &mut GameState, action: GameAction) {
    let GameAction::Place(cell) = action;
    if winner(state).is_some() {
        return;
    }
    let Some(slot) = state.board.get_mut(cell) else {
        return;
    };
    if slot.is_some() {
        return;
    }
    *slot = Some(state.turn);
    state.turn = state.turn.other();
}
