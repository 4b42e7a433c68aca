//! Resource services.
//!
//! Each service validates its payload against a [`crate::validation::Schema`],
//! runs the parent-existence guard for every referenced entity, then delegates
//! to a typed [`Repository`](crate::database::Repository). Services never
//! build wire responses; failures surface as [`ServiceError`].

pub mod goal_service;
pub mod guard;
pub mod membership_service;
pub mod project_service;
pub mod section_service;
pub mod story_service;
pub mod tag_service;
pub mod task_service;
pub mod team_service;
pub mod user_service;
pub mod workspace_service;

use thiserror::Error;
use uuid::Uuid;

use crate::database::{EntityKind, Filter, StoreError};
use crate::validation::ValidationErrors;

pub use goal_service::GoalService;
pub use membership_service::{TeamMembershipService, WorkspaceMembershipService};
pub use project_service::ProjectService;
pub use section_service::SectionService;
pub use story_service::StoryService;
pub use tag_service::TagService;
pub use task_service::TaskService;
pub use team_service::TeamService;
pub use user_service::UserService;
pub use workspace_service::WorkspaceService;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// Payload failed its schema.
    #[error(transparent)]
    Validation(#[from] ValidationErrors),

    /// A referenced parent is absent at creation time.
    #[error("{kind} {gid} does not exist")]
    MissingReferent { kind: EntityKind, gid: String },

    /// The addressed entity itself is absent.
    #[error("{kind} with gid {gid} not found")]
    NotFound { kind: EntityKind, gid: String },

    #[error("{0}")]
    Rule(String),

    #[error(transparent)]
    Store(StoreError),
}

impl From<StoreError> for ServiceError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound { kind, gid } => ServiceError::NotFound { kind, gid },
            other => ServiceError::Store(other),
        }
    }
}

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Paging requested by a list call.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ListOptions {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl ListOptions {
    pub fn new(limit: Option<usize>, offset: Option<usize>) -> Self {
        Self { limit, offset }
    }

    pub fn apply(&self, filter: Filter) -> Filter {
        let filter = filter.offset(self.offset);
        match self.limit {
            Some(limit) => filter.limit(limit),
            None => filter,
        }
    }
}

/// Caller-supplied gid when present and non-blank, otherwise a fresh UUID.
pub fn resolve_gid(requested: Option<String>) -> String {
    requested
        .map(|gid| gid.trim().to_string())
        .filter(|gid| !gid.is_empty())
        .unwrap_or_else(|| Uuid::new_v4().simple().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_caller_gid() {
        assert_eq!(resolve_gid(Some("ws_101".into())), "ws_101");
        assert_eq!(resolve_gid(Some("  ws_101 ".into())), "ws_101");
    }

    #[test]
    fn generates_when_absent_or_blank() {
        let a = resolve_gid(None);
        let b = resolve_gid(Some("   ".into()));
        assert_eq!(a.len(), 32);
        assert_eq!(b.len(), 32);
        assert_ne!(a, b);
    }

    #[test]
    fn list_options_apply_paging() {
        let filter = ListOptions::new(Some(5), Some(10)).apply(Filter::new());
        assert_eq!(filter.limit, Some(5));
        assert_eq!(filter.offset, Some(10));
    }

    #[test]
    fn store_not_found_becomes_service_not_found() {
        let err: ServiceError = StoreError::not_found(EntityKind::Tag, "t").into();
        assert!(matches!(err, ServiceError::NotFound { kind: EntityKind::Tag, .. }));
    }
}
