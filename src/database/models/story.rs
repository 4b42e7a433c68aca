use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

/// Comment or activity entry attached to a task.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Story {
    pub gid: String,
    pub text: String,
    pub task_gid: String,
    pub created_by_gid: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Story {
    const KIND: EntityKind = EntityKind::Story;

    fn gid(&self) -> &str {
        &self.gid
    }
}
