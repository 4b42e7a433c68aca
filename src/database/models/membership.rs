use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::database::{Entity, EntityKind};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MembershipRole {
    #[default]
    Member,
    Admin,
    Guest,
}

impl MembershipRole {
    pub const NAMES: &'static [&'static str] = &["member", "admin", "guest"];
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceMembership {
    pub gid: String,
    pub user_gid: String,
    pub workspace_gid: String,
    pub role: MembershipRole,
    pub created_at: DateTime<Utc>,
}

impl Entity for WorkspaceMembership {
    const KIND: EntityKind = EntityKind::WorkspaceMembership;

    fn gid(&self) -> &str {
        &self.gid
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TeamMembership {
    pub gid: String,
    pub user_gid: String,
    pub team_gid: String,
    pub role: MembershipRole,
    pub created_at: DateTime<Utc>,
}

impl Entity for TeamMembership {
    const KIND: EntityKind = EntityKind::TeamMembership;

    fn gid(&self) -> &str {
        &self.gid
    }
}
