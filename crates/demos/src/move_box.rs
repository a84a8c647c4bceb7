use serde::{Deserialize, Serialize};

/// Largest coordinate on either axis; positions clamp to `0..=GRID_MAX`.
pub const GRID_MAX: i32 = 9;

/// Position of the box on the 10×10 grid.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoxState {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoxAction {
    /// Move by a delta; the result clamps to the grid.
    Move { dx: i32, dy: i32 },
    /// Jump back to the origin. Unlike the history manager's reset, this
    /// is an ordinary application action and is itself undoable.
    Reset,
}

/// Draft-mutating reducer for the box demo. Moving against a wall that
/// changes nothing leaves the draft untouched, so the history manager
/// records no step for it.
pub fn reduce(state: &mut BoxState, action: BoxAction) {
    match action {
        BoxAction::Move { dx, dy } => {
            state.x = (state.x + dx).clamp(0, GRID_MAX);
            state.y = (state.y + dy).clamp(0, GRID_MAX);
        }
        BoxAction::Reset => *state = BoxState::default(),
    }
}
