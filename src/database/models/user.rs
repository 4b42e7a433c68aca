use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub gid: String,
    pub name: String,
    pub email: String,
    pub photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Entity for User {
    const KIND: EntityKind = EntityKind::User;

    fn gid(&self) -> &str {
        &self.gid
    }
}
