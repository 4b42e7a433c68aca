use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub gid: String,
    pub name: String,
    pub project_gid: String,
    /// Display position within the project, ascending.
    pub order: i64,
    pub created_at: DateTime<Utc>,
}

impl Entity for Section {
    const KIND: EntityKind = EntityKind::Section;

    fn gid(&self) -> &str {
        &self.gid
    }
}
