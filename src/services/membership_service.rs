//! Join entities linking users to workspaces and teams.
//!
//! A user holds at most one membership per parent; a second one is a rule
//! violation rather than a silent duplicate.

use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{guard, resolve_gid, ListOptions, ServiceError, ServiceResult};
use crate::database::models::{
    MembershipRole, Team, TeamMembership, User, Workspace, WorkspaceMembership,
};
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static WORKSPACE_MEMBERSHIP_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("userGid", FieldKind::String),
        FieldSpec::required("workspaceGid", FieldKind::String),
        FieldSpec::optional("role", FieldKind::String)
            .one_of(MembershipRole::NAMES)
            .default(json!("member")),
    ])
});

static TEAM_MEMBERSHIP_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("userGid", FieldKind::String),
        FieldSpec::required("teamGid", FieldKind::String),
        FieldSpec::optional("role", FieldKind::String)
            .one_of(MembershipRole::NAMES)
            .default(json!("member")),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateWorkspaceMembership {
    gid: Option<String>,
    user_gid: String,
    workspace_gid: String,
    role: MembershipRole,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTeamMembership {
    gid: Option<String>,
    user_gid: String,
    team_gid: String,
    role: MembershipRole,
}

pub struct WorkspaceMembershipService {
    memberships: Repository<WorkspaceMembership>,
    users: Repository<User>,
    workspaces: Repository<Workspace>,
}

impl WorkspaceMembershipService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            memberships: Repository::new(store.clone()),
            users: Repository::new(store.clone()),
            workspaces: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<WorkspaceMembership> {
        let input: CreateWorkspaceMembership = WORKSPACE_MEMBERSHIP_SCHEMA.parse(payload)?;
        let user = guard::require(&self.users, &input.user_gid).await?;
        let workspace = guard::require(&self.workspaces, &input.workspace_gid).await?;

        // Check then insert. Postgres also enforces the pair with a unique index;
        // the memory store relies on this check alone.
        let existing = self
            .memberships
            .select_any(
                &Filter::new()
                    .eq("userGid", user.gid.as_str())
                    .eq("workspaceGid", workspace.gid.as_str())
                    .limit(1),
            )
            .await?;
        if !existing.is_empty() {
            return Err(ServiceError::Rule(format!(
                "User {} is already a member of workspace {}",
                user.gid, workspace.gid
            )));
        }

        let membership = self
            .memberships
            .insert(WorkspaceMembership {
                gid: resolve_gid(input.gid),
                user_gid: user.gid,
                workspace_gid: workspace.gid,
                role: input.role,
                created_at: Utc::now(),
            })
            .await?;

        info!(
            "Added user {} to workspace {} as {:?}",
            membership.user_gid, membership.workspace_gid, membership.role
        );
        Ok(membership)
    }

    pub async fn list(
        &self,
        workspace_gid: Option<String>,
        user_gid: Option<String>,
        options: ListOptions,
    ) -> ServiceResult<Vec<WorkspaceMembership>> {
        let filter = Filter::new()
            .eq_opt("workspaceGid", workspace_gid)
            .eq_opt("userGid", user_gid);
        Ok(self.memberships.select_any(&options.apply(filter)).await?)
    }

    pub async fn list_for_workspace(
        &self,
        workspace_gid: &str,
        options: ListOptions,
    ) -> ServiceResult<Vec<WorkspaceMembership>> {
        guard::require_path(&self.workspaces, workspace_gid).await?;
        self.list(Some(workspace_gid.to_string()), None, options).await
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<WorkspaceMembership> {
        Ok(self.memberships.select_404(gid).await?)
    }
}

pub struct TeamMembershipService {
    memberships: Repository<TeamMembership>,
    users: Repository<User>,
    teams: Repository<Team>,
}

impl TeamMembershipService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            memberships: Repository::new(store.clone()),
            users: Repository::new(store.clone()),
            teams: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<TeamMembership> {
        let input: CreateTeamMembership = TEAM_MEMBERSHIP_SCHEMA.parse(payload)?;
        let user = guard::require(&self.users, &input.user_gid).await?;
        let team = guard::require(&self.teams, &input.team_gid).await?;

        // Check then insert. Postgres also enforces the pair with a unique index;
        // the memory store relies on this check alone.
        let existing = self
            .memberships
            .select_any(
                &Filter::new()
                    .eq("userGid", user.gid.as_str())
                    .eq("teamGid", team.gid.as_str())
                    .limit(1),
            )
            .await?;
        if !existing.is_empty() {
            return Err(ServiceError::Rule(format!(
                "User {} is already a member of team {}",
                user.gid, team.gid
            )));
        }

        let membership = self
            .memberships
            .insert(TeamMembership {
                gid: resolve_gid(input.gid),
                user_gid: user.gid,
                team_gid: team.gid,
                role: input.role,
                created_at: Utc::now(),
            })
            .await?;

        info!("Added user {} to team {}", membership.user_gid, membership.team_gid);
        Ok(membership)
    }

    pub async fn list(
        &self,
        team_gid: Option<String>,
        user_gid: Option<String>,
        options: ListOptions,
    ) -> ServiceResult<Vec<TeamMembership>> {
        let filter = Filter::new()
            .eq_opt("teamGid", team_gid)
            .eq_opt("userGid", user_gid);
        Ok(self.memberships.select_any(&options.apply(filter)).await?)
    }

    pub async fn list_for_team(
        &self,
        team_gid: &str,
        options: ListOptions,
    ) -> ServiceResult<Vec<TeamMembership>> {
        guard::require_path(&self.teams, team_gid).await?;
        self.list(Some(team_gid.to_string()), None, options).await
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<TeamMembership> {
        Ok(self.memberships.select_404(gid).await?)
    }
}
