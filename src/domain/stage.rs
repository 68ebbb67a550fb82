use crate::domain::issue::Issue;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Workflow stage (lane) of the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Stage {
    ToDo,
    InProgress,
    Done,
}

impl Stage {
    /// All stages in board order
    pub const ALL: [Stage; 3] = [Stage::ToDo, Stage::InProgress, Stage::Done];

    /// Stage an issue is placed in when a board is first classified.
    ///
    /// Anything that is not exactly `open` is done; open issues are in
    /// progress when somebody is assigned.
    pub fn for_issue(issue: &Issue) -> Self {
        match (issue.is_open(), issue.is_assigned()) {
            (true, true) => Stage::InProgress,
            (true, false) => Stage::ToDo,
            (false, _) => Stage::Done,
        }
    }

    /// Identifier used on the wire and by drop targets
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToDo => "toDo",
            Self::InProgress => "inProgress",
            Self::Done => "done",
        }
    }

    /// Human readable lane heading
    pub fn title(&self) -> &'static str {
        match self {
            Self::ToDo => "To Do",
            Self::InProgress => "In Progress",
            Self::Done => "Done",
        }
    }
}

impl FromStr for Stage {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" | "to-do" => Ok(Stage::ToDo),
            "inprogress" | "in-progress" => Ok(Stage::InProgress),
            "done" => Ok(Stage::Done),
            _ => Err(crate::error::BoardError::InvalidStage(s.to_string())),
        }
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::issue::IssueState;

    #[test]
    fn test_stage_for_issue() {
        let unassigned = Issue::new(1, "Unassigned");
        let assigned = Issue::new(2, "Assigned").with_assignee("bob");
        let closed = Issue::new(3, "Closed")
            .with_state(IssueState::Closed)
            .with_assignee("bob");

        assert_eq!(Stage::for_issue(&unassigned), Stage::ToDo);
        assert_eq!(Stage::for_issue(&assigned), Stage::InProgress);
        assert_eq!(Stage::for_issue(&closed), Stage::Done);
    }

    #[test]
    fn test_missing_or_unknown_state_is_done() {
        let mut missing = Issue::new(1, "No state");
        missing.state = None;
        let odd = Issue::new(2, "Odd").with_state(IssueState::Other("OPEN".to_string()));

        assert_eq!(Stage::for_issue(&missing), Stage::Done);
        assert_eq!(Stage::for_issue(&odd), Stage::Done);
    }

    #[test]
    fn test_stage_parsing() {
        assert_eq!("toDo".parse::<Stage>().unwrap(), Stage::ToDo);
        assert_eq!("TODO".parse::<Stage>().unwrap(), Stage::ToDo);
        assert_eq!("in-progress".parse::<Stage>().unwrap(), Stage::InProgress);
        assert_eq!("inProgress".parse::<Stage>().unwrap(), Stage::InProgress);
        assert_eq!("done".parse::<Stage>().unwrap(), Stage::Done);
        assert!("backlog".parse::<Stage>().is_err());
    }

    #[test]
    fn test_stage_wire_names() {
        for stage in Stage::ALL {
            let encoded = serde_json::to_value(stage).unwrap();
            assert_eq!(encoded, stage.as_str());
            assert_eq!(stage.to_string().parse::<Stage>().unwrap(), stage);
        }
    }

    #[test]
    fn test_stage_titles_follow_board_order() {
        let titles: Vec<&str> = Stage::ALL.iter().map(Stage::title).collect();
        assert_eq!(titles, vec!["To Do", "In Progress", "Done"]);
    }
}
