//! Shared application state.

use std::sync::Arc;

use crate::config::AppConfig;
use crate::database::DocumentStore;
use crate::services::{
    GoalService, ListOptions, ProjectService, SectionService, StoryService, TagService,
    TaskService, TeamMembershipService, TeamService, UserService, WorkspaceMembershipService,
    WorkspaceService,
};

/// Handed to every handler through `State`. Cloning is two `Arc` bumps.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>, config: AppConfig) -> Self {
        Self {
            store,
            config: Arc::new(config),
        }
    }

    /// Paging for a list request, with the limit defaulted and clamped.
    pub fn list_options(&self, limit: Option<usize>, offset: Option<usize>) -> ListOptions {
        ListOptions::new(Some(self.config.page_limit(limit)), offset)
    }

    pub fn workspaces(&self) -> WorkspaceService {
        WorkspaceService::new(self.store.clone())
    }

    pub fn projects(&self) -> ProjectService {
        ProjectService::new(self.store.clone())
    }

    pub fn tasks(&self) -> TaskService {
        TaskService::new(self.store.clone())
    }

    pub fn users(&self) -> UserService {
        UserService::new(self.store.clone())
    }

    pub fn teams(&self) -> TeamService {
        TeamService::new(self.store.clone())
    }

    pub fn tags(&self) -> TagService {
        TagService::new(self.store.clone())
    }

    pub fn sections(&self) -> SectionService {
        SectionService::new(self.store.clone())
    }

    pub fn goals(&self) -> GoalService {
        GoalService::new(self.store.clone())
    }

    pub fn stories(&self) -> StoryService {
        StoryService::new(self.store.clone())
    }

    pub fn workspace_memberships(&self) -> WorkspaceMembershipService {
        WorkspaceMembershipService::new(self.store.clone())
    }

    pub fn team_memberships(&self) -> TeamMembershipService {
        TeamMembershipService::new(self.store.clone())
    }
}
