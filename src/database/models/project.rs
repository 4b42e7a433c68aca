use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub gid: String,
    pub name: String,
    pub workspace_gid: String,
    pub notes: Option<String>,
    pub color: Option<String>,
    #[serde(default)]
    pub archived: bool,
    pub created_at: DateTime<Utc>,
}

impl Entity for Project {
    const KIND: EntityKind = EntityKind::Project;

    fn gid(&self) -> &str {
        &self.gid
    }
}
