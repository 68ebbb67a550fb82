use crate::domain::board::Position;
use serde::{Deserialize, Serialize};

/// Completed drag gesture as reported by the drag-and-drop layer.
///
/// `destination` is `None` when the item was dropped outside every lane.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DragEnd {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub draggable_id: Option<String>,
    pub source: Position,
    #[serde(default)]
    pub destination: Option<Position>,
}

impl DragEnd {
    pub fn new(source: Position, destination: Option<Position>) -> Self {
        Self {
            draggable_id: None,
            source,
            destination,
        }
    }

    /// Source and destination of the move, if the drop landed on a lane
    pub fn into_move(self) -> Option<(Position, Position)> {
        self.destination.map(|destination| (self.source, destination))
    }
}
