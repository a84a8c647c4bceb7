use crate::timeline::Timeline;

/// Control-plane actions for the history manager.
///
/// Application actions travel through `Apply`; undo/redo/reset are
/// distinguished at the type level so they can never collide with an
/// application action, and everything dispatches through one entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryAction<A> {
    /// Run the wrapped application reducer with this action.
    Apply(A),
    /// Step back to the previous state, if any.
    Undo,
    /// Step forward to the next undone state, if any.
    Redo,
    /// Rewind to the oldest recorded state, keeping everything redoable.
    Reset,
}

/// Wraps an application reducer so that every state change it produces is
/// recorded on a [`Timeline`], and exposes undo/redo/reset navigation over
/// that record.
///
/// The reducer receives a draft copy of the current state and mutates it in
/// place (wholesale replacement via `*draft = ...` included). After the
/// reducer runs, the draft is committed only if it differs from the present
/// — a reducer that doesn't recognize an action and leaves its draft alone
/// is a no-op by policy, never an error. Panics from the reducer are not
/// caught and propagate to the caller.
///
/// No I/O, no async: every operation runs synchronously to completion on
/// the single owning instance.
pub struct TimeTravel<S, A> {
    timeline: Timeline<S>,
    reducer: Box<dyn FnMut(&mut S, A)>,
}

impl<S, A> TimeTravel<S, A>
where
    S: Clone + PartialEq,
{
    /// Create a manager with an initial state and empty history.
    pub fn new(reducer: impl FnMut(&mut S, A) + 'static, initial_state: S) -> Self {
        Self::from_timeline(reducer, Timeline::new(initial_state))
    }

    /// Create a manager over an existing timeline (e.g. one restored from
    /// a snapshot).
    pub fn from_timeline(reducer: impl FnMut(&mut S, A) + 'static, timeline: Timeline<S>) -> Self {
        Self {
            timeline,
            reducer: Box::new(reducer),
        }
    }

    /// The current application state.
    pub fn state(&self) -> &S {
        self.timeline.present()
    }

    /// The full record, for history/debug views.
    pub fn timeline(&self) -> &Timeline<S> {
        &self.timeline
    }

    /// Single entry point for both application and control actions.
    pub fn dispatch(&mut self, action: HistoryAction<A>) {
        match action {
            HistoryAction::Apply(action) => self.apply(action),
            HistoryAction::Undo => {
                self.undo();
            }
            HistoryAction::Redo => {
                self.redo();
            }
            HistoryAction::Reset => {
                self.reset();
            }
        }
    }

    /// Run the wrapped reducer against a draft of the present and commit
    /// the draft if it changed.
    pub fn apply(&mut self, action: A) {
        let mut draft = self.timeline.present().clone();
        (self.reducer)(&mut draft, action);
        if draft != *self.timeline.present() {
            self.timeline.commit(draft);
        }
    }

    /// Step back one state. Returns whether anything changed.
    pub fn undo(&mut self) -> bool {
        self.timeline.undo()
    }

    /// Step forward one undone state. Returns whether anything changed.
    pub fn redo(&mut self) -> bool {
        self.timeline.redo()
    }

    /// Rewind to the oldest recorded state (see [`Timeline::rewind`]).
    /// Returns whether anything changed.
    pub fn reset(&mut self) -> bool {
        self.timeline.rewind()
    }
}
