use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Goal {
    pub gid: String,
    pub name: String,
    pub workspace_gid: String,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Goal {
    const KIND: EntityKind = EntityKind::Goal;

    fn gid(&self) -> &str {
        &self.gid
    }
}
