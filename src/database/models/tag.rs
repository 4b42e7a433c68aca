use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Tag {
    pub gid: String,
    pub name: String,
    pub workspace_gid: String,
    pub color: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Tag {
    const KIND: EntityKind = EntityKind::Tag;

    fn gid(&self) -> &str {
        &self.gid
    }
}
