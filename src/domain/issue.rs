use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::{
    fmt,
    hash::{Hash, Hasher},
    str::FromStr,
};

/// Unique identifier of an issue as assigned by the remote tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct IssueId(u64);

impl IssueId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    pub fn get(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for IssueId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Remote state of an issue.
///
/// Only the exact `open` marker counts as open; any other value is kept
/// verbatim in `Other` so that it survives a serialization round trip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(into = "String")]
pub enum IssueState {
    Open,
    Closed,
    Other(String),
}

impl IssueState {
    pub fn is_open(&self) -> bool {
        matches!(self, Self::Open)
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::Open => "open",
            Self::Closed => "closed",
            Self::Other(raw) => raw.as_str(),
        }
    }
}

impl From<String> for IssueState {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "open" => Self::Open,
            "closed" => Self::Closed,
            _ => Self::Other(raw),
        }
    }
}

impl From<IssueState> for String {
    fn from(state: IssueState) -> Self {
        match state {
            IssueState::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for IssueState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// User an issue is assigned to
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Assignee {
    pub login: String,
}

impl Assignee {
    pub fn new(login: impl Into<String>) -> Self {
        Self {
            login: login.into(),
        }
    }

    /// Reads an assignee from a bare login or a tracker user object.
    ///
    /// Falsy values (`null`, `false`, `0`, `""`) mean nobody is assigned.
    fn from_json(value: Value) -> Option<Self> {
        match value {
            Value::Null | Value::Bool(false) => None,
            Value::String(login) if login.is_empty() => None,
            Value::String(login) => Some(Self { login }),
            Value::Number(n) if n.as_f64() == Some(0.0) => None,
            Value::Number(n) => Some(Self {
                login: n.to_string(),
            }),
            Value::Object(user) => Some(Self {
                login: user
                    .get("login")
                    .and_then(Value::as_str)
                    .unwrap_or_default()
                    .to_string(),
            }),
            Value::Bool(true) | Value::Array(_) => Some(Self {
                login: String::new(),
            }),
        }
    }
}

/// An issue record fetched from the remote tracker.
///
/// Only `id` is required on the wire. Every other field is read leniently:
/// a missing value or one of the wrong type decodes as absent, so a record
/// is never rejected for anything but its id. Two issues are equal when
/// their ids are equal, regardless of the other fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Issue {
    pub id: IssueId,
    #[serde(default, deserialize_with = "lenient_title")]
    pub title: String,
    #[serde(default, deserialize_with = "lenient_state")]
    pub state: Option<IssueState>,
    #[serde(default, deserialize_with = "lenient_assignee")]
    pub assignee: Option<Assignee>,
    #[serde(
        default,
        deserialize_with = "lenient_u64",
        skip_serializing_if = "Option::is_none"
    )]
    pub number: Option<u64>,
    #[serde(
        default,
        deserialize_with = "lenient_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub html_url: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "lenient_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub updated_at: Option<DateTime<Utc>>,
    /// Pull requests also come through the issues endpoint
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pull_request: Option<Value>,
}

fn lenient_title<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(title) => title,
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        _ => String::new(),
    })
}

fn lenient_state<'de, D>(deserializer: D) -> Result<Option<IssueState>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(raw) => Some(IssueState::from(raw)),
        _ => None,
    })
}

fn lenient_assignee<'de, D>(deserializer: D) -> Result<Option<Assignee>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Assignee::from_json(Value::deserialize(deserializer)?))
}

fn lenient_u64<'de, D>(deserializer: D) -> Result<Option<u64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Value::deserialize(deserializer)?.as_u64())
}

fn lenient_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_timestamp<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => s.parse::<DateTime<Utc>>().ok(),
        _ => None,
    })
}

impl Issue {
    /// Creates an open, unassigned issue
    pub fn new(id: u64, title: impl Into<String>) -> Self {
        Self {
            id: IssueId::new(id),
            title: title.into(),
            state: Some(IssueState::Open),
            assignee: None,
            number: None,
            html_url: None,
            created_at: None,
            updated_at: None,
            pull_request: None,
        }
    }

    pub fn with_state(mut self, state: IssueState) -> Self {
        self.state = Some(state);
        self
    }

    pub fn with_assignee(mut self, login: impl Into<String>) -> Self {
        self.assignee = Some(Assignee::new(login));
        self
    }

    /// True only when the state is exactly `open`
    pub fn is_open(&self) -> bool {
        self.state.as_ref().is_some_and(IssueState::is_open)
    }

    pub fn is_assigned(&self) -> bool {
        self.assignee.is_some()
    }

    pub fn is_pull_request(&self) -> bool {
        self.pull_request.is_some()
    }
}

impl PartialEq for Issue {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Issue {}

impl Hash for Issue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Repository identifier in `owner/name` form
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RepoId {
    owner: String,
    name: String,
}

impl RepoId {
    pub fn new(owner: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            owner: owner.into(),
            name: name.into(),
        }
    }

    pub fn owner(&self) -> &str {
        &self.owner
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl FromStr for RepoId {
    type Err = crate::error::BoardError;

    /// Parses `owner/name`, also accepting a repository URL such as
    /// `https://github.com/owner/name.git`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || crate::error::BoardError::InvalidRepository(s.to_string());

        let mut path = s.trim();
        for scheme in ["https://", "http://"] {
            if let Some(rest) = path.strip_prefix(scheme) {
                path = rest;
            }
        }
        path = path.strip_prefix("www.").unwrap_or(path);
        path = path.strip_prefix("github.com/").unwrap_or(path);
        path = path.trim_end_matches('/');
        path = path.strip_suffix(".git").unwrap_or(path);

        let (owner, name) = path.split_once('/').ok_or_else(invalid)?;
        if owner.is_empty() || name.is_empty() || name.contains('/') {
            return Err(invalid());
        }

        Ok(Self::new(owner, name))
    }
}

impl fmt::Display for RepoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.owner, self.name)
    }
}
