use serde::{Deserialize, Serialize};

/// The three-part undo/redo record: committed history, the live state,
/// and states that were undone.
///
/// `past` is ordered oldest first; `future` is ordered most-recently-undone
/// first. Together with `present` they form one total, linear history —
/// there is no branching. Snapshots are immutable once recorded: the
/// timeline owns them and never hands out mutable access.
///
/// Every transition either fully replaces the relevant parts of the record
/// or leaves it untouched; with exclusive ownership this makes each
/// operation atomic from the caller's point of view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Timeline<S> {
    past: Vec<S>,
    present: S,
    future: Vec<S>,
}

impl<S> Timeline<S> {
    /// Create a timeline with an initial present and empty history.
    pub fn new(present: S) -> Self {
        Self {
            past: Vec::new(),
            present,
            future: Vec::new(),
        }
    }

    /// The current state.
    pub fn present(&self) -> &S {
        &self.present
    }

    /// Committed snapshots, oldest first.
    pub fn past(&self) -> &[S] {
        &self.past
    }

    /// Undone snapshots, most recently undone first.
    pub fn future(&self) -> &[S] {
        &self.future
    }

    /// Whether there is anything to undo.
    pub fn can_undo(&self) -> bool {
        !self.past.is_empty()
    }

    /// Whether there is anything to redo.
    pub fn can_redo(&self) -> bool {
        !self.future.is_empty()
    }

    /// Record a new present. The old present joins `past` and the redo
    /// history is invalidated.
    pub fn commit(&mut self, new_present: S) {
        let old = std::mem::replace(&mut self.present, new_present);
        self.past.push(old);
        self.future.clear();
    }

    /// Step back to the most recently committed snapshot; the old present
    /// becomes the first redo candidate. Returns `false` (leaving the
    /// timeline untouched) when `past` is empty.
    pub fn undo(&mut self) -> bool {
        let Some(new_present) = self.past.pop() else {
            return false;
        };
        let old = std::mem::replace(&mut self.present, new_present);
        self.future.insert(0, old);
        true
    }

    /// Step forward to the most recently undone snapshot; the old present
    /// rejoins `past`. Returns `false` when `future` is empty.
    pub fn redo(&mut self) -> bool {
        if self.future.is_empty() {
            return false;
        }
        let new_present = self.future.remove(0);
        let old = std::mem::replace(&mut self.present, new_present);
        self.past.push(old);
        true
    }

    /// Rewind to the oldest committed snapshot while keeping the whole
    /// history redoable: `future` becomes the remaining `past` entries (in
    /// order), then the old present, then the old `future`. Returns `false`
    /// when `past` is empty.
    pub fn rewind(&mut self) -> bool {
        if self.past.is_empty() {
            return false;
        }
        let new_present = self.past.remove(0);
        let old_present = std::mem::replace(&mut self.present, new_present);
        let mut future = std::mem::take(&mut self.past);
        future.push(old_present);
        future.append(&mut self.future);
        self.future = future;
        true
    }
}

impl<S: Default> Default for Timeline<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn commit_pushes_old_present_and_clears_future() {
        let mut tl = Timeline::new(0);
        tl.commit(1);
        tl.commit(2);
        assert!(tl.undo());
        assert_eq!(tl.future(), &[2]);

        tl.commit(7);
        assert_eq!(tl.present(), &7);
        assert_eq!(tl.past(), &[0, 1]);
        assert!(tl.future().is_empty());
    }

    #[test]
    fn undo_redo_walk() {
        let mut tl = Timeline::new("a");
        tl.commit("b");
        tl.commit("c");
        assert!(tl.can_undo());
        assert!(!tl.can_redo());

        assert!(tl.undo());
        assert!(tl.can_redo());
        assert_eq!(tl.present(), &"b");
        assert_eq!(tl.past(), &["a"]);
        assert_eq!(tl.future(), &["c"]);

        assert!(tl.undo());
        assert_eq!(tl.present(), &"a");
        assert!(tl.past().is_empty());
        assert_eq!(tl.future(), &["b", "c"]);

        assert!(tl.redo());
        assert_eq!(tl.present(), &"b");
        assert_eq!(tl.past(), &["a"]);
        assert_eq!(tl.future(), &["c"]);
    }

    #[test]
    fn undo_on_empty_past_is_noop() {
        let mut tl = Timeline::new(1);
        let before = tl.clone();
        assert!(!tl.undo());
        assert_eq!(tl, before);
    }

    #[test]
    fn redo_on_empty_future_is_noop() {
        let mut tl = Timeline::new(1);
        tl.commit(2);
        let before = tl.clone();
        assert!(!tl.redo());
        assert_eq!(tl, before);
    }

    #[test]
    fn rewind_moves_everything_into_future() {
        // past=[A,B,C], present=D, future=[E]
        let mut tl = Timeline::new('A');
        tl.commit('B');
        tl.commit('C');
        tl.commit('D');
        tl.commit('E');
        assert!(tl.undo());
        assert_eq!(tl.past(), &['A', 'B', 'C']);
        assert_eq!(tl.present(), &'D');
        assert_eq!(tl.future(), &['E']);

        assert!(tl.rewind());
        assert_eq!(tl.present(), &'A');
        assert!(tl.past().is_empty());
        assert_eq!(tl.future(), &['B', 'C', 'D', 'E']);
    }

    #[test]
    fn rewind_on_empty_past_is_noop() {
        let mut tl = Timeline::new(9);
        let before = tl.clone();
        assert!(!tl.rewind());
        assert_eq!(tl, before);
    }

    #[test]
    fn rewound_history_is_fully_redoable() {
        let mut tl = Timeline::new(0);
        for i in 1..=4 {
            tl.commit(i);
        }
        tl.rewind();
        while tl.redo() {}
        assert_eq!(tl.present(), &4);
        assert_eq!(tl.past(), &[0, 1, 2, 3]);
        assert!(tl.future().is_empty());
    }
}
