//! Small, self-contained demo reducers.
//!
//! Each module is an independent illustration with its own state and action
//! types — there is deliberately no shared architecture between them. All
//! reducers use the draft-mutation style expected by
//! `rewind_core::TimeTravel`: mutate the draft for a recognized action,
//! leave it alone otherwise.

pub mod counter;
pub mod move_box;
pub mod tic_tac_toe;
