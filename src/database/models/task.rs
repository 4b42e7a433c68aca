use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub gid: String,
    pub name: String,
    pub completed: bool,
    pub completed_at: Option<DateTime<Utc>>,
    pub project_gid: String,
    // Copied from the parent project at creation so tasks filter by workspace
    pub workspace_gid: String,
    pub notes: Option<String>,
    pub due_on: Option<String>,
    pub created_at: DateTime<Utc>,
    pub modified_at: DateTime<Utc>,
}

impl Task {
    /// Flip completion, stamping or clearing `completed_at`.
    pub fn set_completed(&mut self, completed: bool, now: DateTime<Utc>) {
        if completed && !self.completed {
            self.completed_at = Some(now);
        } else if !completed {
            self.completed_at = None;
        }
        self.completed = completed;
    }
}

impl Entity for Task {
    const KIND: EntityKind = EntityKind::Task;

    fn gid(&self) -> &str {
        &self.gid
    }
}
