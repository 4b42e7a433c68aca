use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Workspace {
    pub gid: String,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

impl Entity for Workspace {
    const KIND: EntityKind = EntityKind::Workspace;

    fn gid(&self) -> &str {
        &self.gid
    }
}
