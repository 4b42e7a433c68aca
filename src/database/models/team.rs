use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Team {
    pub gid: String,
    pub name: String,
    pub workspace_gid: String,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Team {
    const KIND: EntityKind = EntityKind::Team;

    fn gid(&self) -> &str {
        &self.gid
    }
}
