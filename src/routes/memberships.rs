// routes/memberships.rs - /workspace-memberships and /team-memberships
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::api::JsonBody;
use crate::database::models::{TeamMembership, WorkspaceMembership};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct WorkspaceMembershipQuery {
    #[serde(alias = "workspaceGid")]
    pub workspace: Option<String>,
    #[serde(alias = "userGid")]
    pub user: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(Debug, Deserialize)]
pub struct TeamMembershipQuery {
    #[serde(alias = "teamGid")]
    pub team: Option<String>,
    #[serde(alias = "userGid")]
    pub user: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn list_workspace_memberships(
    State(state): State<AppState>,
    Query(query): Query<WorkspaceMembershipQuery>,
) -> ApiResult<Vec<WorkspaceMembership>> {
    let options = state.list_options(query.limit, query.offset);
    let memberships = state
        .workspace_memberships()
        .list(query.workspace, query.user, options)
        .await?;
    Ok(ApiResponse::success(memberships))
}

pub async fn create_workspace_membership(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<WorkspaceMembership> {
    Ok(ApiResponse::created(state.workspace_memberships().create(&body).await?))
}

pub async fn get_workspace_membership(
    State(state): State<AppState>,
    Path(gid): Path<String>,
) -> ApiResult<WorkspaceMembership> {
    Ok(ApiResponse::success(state.workspace_memberships().get(&gid).await?))
}

pub async fn list_team_memberships(
    State(state): State<AppState>,
    Query(query): Query<TeamMembershipQuery>,
) -> ApiResult<Vec<TeamMembership>> {
    let options = state.list_options(query.limit, query.offset);
    let memberships = state
        .team_memberships()
        .list(query.team, query.user, options)
        .await?;
    Ok(ApiResponse::success(memberships))
}

pub async fn create_team_membership(
    State(state): State<AppState>,
    JsonBody(body): JsonBody,
) -> ApiResult<TeamMembership> {
    Ok(ApiResponse::created(state.team_memberships().create(&body).await?))
}

pub async fn get_team_membership(
    State(state): State<AppState>,
    Path(gid): Path<String>,
) -> ApiResult<TeamMembership> {
    Ok(ApiResponse::success(state.team_memberships().get(&gid).await?))
}
