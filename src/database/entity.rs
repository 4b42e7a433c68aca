use std::fmt;

use serde::{de::DeserializeOwned, Deserialize, Serialize};

/// Every record kind the API persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Workspace,
    Project,
    Task,
    User,
    Team,
    Tag,
    Section,
    Goal,
    Story,
    WorkspaceMembership,
    TeamMembership,
}

impl EntityKind {
    /// Storage key, stable across releases.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Workspace => "workspace",
            EntityKind::Project => "project",
            EntityKind::Task => "task",
            EntityKind::User => "user",
            EntityKind::Team => "team",
            EntityKind::Tag => "tag",
            EntityKind::Section => "section",
            EntityKind::Goal => "goal",
            EntityKind::Story => "story",
            EntityKind::WorkspaceMembership => "workspace_membership",
            EntityKind::TeamMembership => "team_membership",
        }
    }

    /// Name used in client-facing messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            EntityKind::Workspace => "Workspace",
            EntityKind::Project => "Project",
            EntityKind::Task => "Task",
            EntityKind::User => "User",
            EntityKind::Team => "Team",
            EntityKind::Tag => "Tag",
            EntityKind::Section => "Section",
            EntityKind::Goal => "Goal",
            EntityKind::Story => "Story",
            EntityKind::WorkspaceMembership => "WorkspaceMembership",
            EntityKind::TeamMembership => "TeamMembership",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A record type stored as a JSON document keyed by its gid.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const KIND: EntityKind;

    fn gid(&self) -> &str;
}
