//! Core types for the ProductMind dashboard.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::error::ToolError;

/// Task priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(ToolError::invalid_value(
                "priority",
                format!("Unknown priority '{}' (expected low, medium or high)", other),
            )),
        }
    }
}

/// Task workflow status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Todo,
    Progress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [TaskStatus::Todo, TaskStatus::Progress, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::Progress => "progress",
            TaskStatus::Done => "done",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = ToolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "progress" => Ok(TaskStatus::Progress),
            "done" => Ok(TaskStatus::Done),
            other => Err(ToolError::invalid_value(
                "status",
                format!("Unknown status '{}' (expected todo, progress or done)", other),
            )),
        }
    }
}

/// A user-created unit of work, tracked in process memory only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    pub id: u64,
    pub title: String,
    pub priority: Priority,
    pub status: TaskStatus,
    pub created_at: DateTime<Local>,
    pub jira_id: Option<String>,
    pub jira_url: Option<String>,
}

/// Status stamped on every fabricated ticket.
pub const TICKET_STATUS: &str = "Created";

/// A locally fabricated issue-tracker entry linked to a task.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub task_id: u64,
    pub title: String,
    pub priority: Priority,
    pub project: String,
    pub assignee: String,
    pub epic: String,
    pub story_points: String,
    pub status: String,
    pub created_at: DateTime<Local>,
    pub url: String,
}

/// Fields supplied by the user when syncing a task to a ticket.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketRequest {
    pub project: String,
    pub assignee: String,
    pub epic: String,
    pub story_points: String,
}

/// Arguments passed to a tool, keyed by parameter name.
pub type ToolArgs = BTreeMap<String, String>;

/// One successful dispatch through the tool registry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ToolCallRecord {
    pub tool_name: String,
    pub input: ToolArgs,
    pub output: String,
    /// Local wall-clock time, `%H:%M:%S`.
    pub timestamp: String,
}

/// Summary counters reported by the registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RegistryStats {
    pub call_count: usize,
    pub tool_count: usize,
    /// Timestamp of the most recent call, or "None" before any call.
    pub last_call: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;

    #[test]
    fn priority_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<Priority>().unwrap(), Priority::High);
        assert_eq!(" low ".parse::<Priority>().unwrap(), Priority::Low);
        let err = "urgent".parse::<Priority>().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidFieldValue);
        assert_eq!(err.field.as_deref(), Some("priority"));
    }

    #[test]
    fn status_parses_known_values_only() {
        for status in TaskStatus::ALL {
            assert_eq!(status.as_str().parse::<TaskStatus>().unwrap(), status);
        }
        assert!("blocked".parse::<TaskStatus>().is_err());
    }

    #[test]
    fn enums_serialize_lowercase() {
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        assert_eq!(
            serde_json::to_string(&TaskStatus::Progress).unwrap(),
            "\"progress\""
        );
    }
}
