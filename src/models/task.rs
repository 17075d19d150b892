use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Task {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub status: TaskStatus,
    /// Date as sent by the backend, usually `YYYY-MM-DD`, sometimes with an
    /// RFC 3339 time suffix.
    pub deadline: Option<String>,
    #[serde(rename = "groupId")]
    pub group_id: Option<String>,
}

impl Task {
    pub fn is_personal(&self) -> bool {
        self.group_id.is_none()
    }

    /// Deadline trimmed to the date part, the form the edit endpoints expect.
    pub fn deadline_date(&self) -> Option<&str> {
        self.deadline
            .as_deref()
            .map(|d| d.split('T').next().unwrap_or(d))
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    Todo,
    InProgress,
    Done,
}

impl TaskStatus {
    /// Display order used when grouping task lists.
    pub const ORDERED: [TaskStatus; 3] = [TaskStatus::InProgress, TaskStatus::Todo, TaskStatus::Done];

    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "todo",
            TaskStatus::InProgress => "inprogress",
            TaskStatus::Done => "done",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TaskStatus::Todo => "Todo",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::Done => "Done",
        }
    }

    /// Next status in the todo -> inprogress -> done -> todo cycle.
    pub fn next(&self) -> TaskStatus {
        match self {
            TaskStatus::Todo => TaskStatus::InProgress,
            TaskStatus::InProgress => TaskStatus::Done,
            TaskStatus::Done => TaskStatus::Todo,
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Todo
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "todo" => Ok(TaskStatus::Todo),
            "inprogress" | "in-progress" | "in_progress" | "progress" => Ok(TaskStatus::InProgress),
            "done" => Ok(TaskStatus::Done),
            other => Err(format!(
                "Unknown status '{}'. Expected one of: todo, inprogress, done",
                other
            )),
        }
    }
}
