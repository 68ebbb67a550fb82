use crate::domain::{
    issue::{Issue, IssueId},
    stage::Stage,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Slot on the board: a stage and a zero-based index within it
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    #[serde(rename = "droppableId")]
    pub stage: Stage,
    pub index: usize,
}

impl Position {
    pub fn new(stage: Stage, index: usize) -> Self {
        Self { stage, index }
    }
}

/// Loaded board snapshot: one ordered lane per stage.
///
/// Every issue lives in exactly one lane exactly once. Order within a lane
/// is the user's arrangement and has no relation to the remote tracker.
/// Snapshots are never edited in place by moves; [`Board::move_issue`]
/// returns the next snapshot. Boards are only built by classification, so
/// they serialize for rendering but do not deserialize.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Board {
    to_do: Vec<Issue>,
    in_progress: Vec<Issue>,
    done: Vec<Issue>,
}

impl Board {
    /// Creates a board with three empty lanes
    pub fn new() -> Self {
        Self::default()
    }

    /// Issues in a stage, in board order
    pub fn lane(&self, stage: Stage) -> &[Issue] {
        match stage {
            Stage::ToDo => &self.to_do,
            Stage::InProgress => &self.in_progress,
            Stage::Done => &self.done,
        }
    }

    fn lane_mut(&mut self, stage: Stage) -> &mut Vec<Issue> {
        match stage {
            Stage::ToDo => &mut self.to_do,
            Stage::InProgress => &mut self.in_progress,
            Stage::Done => &mut self.done,
        }
    }

    /// Iterates lanes in stage order
    pub fn lanes(&self) -> impl Iterator<Item = (Stage, &[Issue])> + '_ {
        Stage::ALL
            .into_iter()
            .map(move |stage| (stage, self.lane(stage)))
    }

    /// Appends an issue to the end of a lane
    pub(crate) fn push(&mut self, stage: Stage, issue: Issue) {
        self.lane_mut(stage).push(issue);
    }

    /// Total number of issues across all lanes
    pub fn len(&self) -> usize {
        self.lanes().map(|(_, lane)| lane.len()).sum()
    }

    /// True when every lane is empty
    pub fn is_vacant(&self) -> bool {
        self.lanes().all(|(_, lane)| lane.is_empty())
    }

    pub fn issue_ids(&self, stage: Stage) -> Vec<IssueId> {
        self.lane(stage).iter().map(|issue| issue.id).collect()
    }

    /// Finds where an issue currently sits
    pub fn locate(&self, id: &IssueId) -> Option<Position> {
        self.lanes().find_map(|(stage, lane)| {
            lane.iter()
                .position(|issue| &issue.id == id)
                .map(|index| Position::new(stage, index))
        })
    }

    /// Moves the issue at `source` to `destination` and returns the result.
    ///
    /// The issue is removed first, so for a move inside one lane the
    /// destination index refers to the shortened lane. A destination index
    /// past the end is clamped to the end. When there is no issue at
    /// `source` the returned board equals `self`.
    pub fn move_issue(&self, source: Position, destination: Position) -> Self {
        let mut next = self.clone();

        let from = next.lane_mut(source.stage);
        if source.index >= from.len() {
            debug!(
                stage = %source.stage,
                index = source.index,
                len = from.len(),
                "No issue at drag source, ignoring move"
            );
            return next;
        }
        let issue = from.remove(source.index);
        let id = issue.id;

        let to = next.lane_mut(destination.stage);
        let index = destination.index.min(to.len());
        to.insert(index, issue);

        debug!(
            issue = %id,
            from = %source.stage,
            to = %destination.stage,
            index,
            "Moved issue"
        );
        next
    }
}
