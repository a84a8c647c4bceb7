use serde::{Deserialize, Serialize};

/// A counter plus an editable text field, in one store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    pub count: i64,
    pub text: String,
}

impl Default for CounterState {
    fn default() -> Self {
        Self {
            count: 0,
            text: "edit me".to_owned(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CounterAction {
    Inc,
    SetText(String),
}

/// Draft-mutating reducer for the counter demo.
pub fn reduce(state: &mut CounterState, action: CounterAction) {
    match action {
        CounterAction::Inc => state.count += 1,
        CounterAction::SetText(text) => state.text = text,
    }
}
