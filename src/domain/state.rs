use crate::domain::{board::Board, classify::classify, gesture::DragEnd, issue::Issue};
use serde::Serialize;

/// Board as seen by the view: nothing fetched yet, or a loaded snapshot
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "board", rename_all = "lowercase")]
pub enum BoardState {
    #[default]
    Unloaded,
    Loaded(Board),
}

impl BoardState {
    /// Classifies a fetched issue list into a new loaded board.
    ///
    /// Any previous board is replaced wholesale, never merged.
    pub fn load(issues: impl IntoIterator<Item = Issue>) -> Self {
        Self::Loaded(classify(issues))
    }

    /// True only before the first fetch has completed.
    ///
    /// A loaded board whose lanes are all empty is not empty.
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Unloaded)
    }

    pub fn board(&self) -> Option<&Board> {
        match self {
            Self::Unloaded => None,
            Self::Loaded(board) => Some(board),
        }
    }

    /// Applies a completed drag gesture and returns the next state.
    ///
    /// Gestures without a drop target, and any gesture while unloaded,
    /// leave the state unchanged.
    pub fn apply(&self, event: DragEnd) -> Self {
        match (self, event.into_move()) {
            (Self::Loaded(board), Some((source, destination))) => {
                Self::Loaded(board.move_issue(source, destination))
            }
            _ => self.clone(),
        }
    }
}
