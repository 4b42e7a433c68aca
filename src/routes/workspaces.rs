// routes/workspaces.rs - /workspaces and the workspace-scoped lists
use axum::extract::{Path, Query, State};

use super::PageQuery;
use crate::api::JsonBody;
use crate::database::models::{Goal, Project, Tag, Team, Workspace, WorkspaceMembership};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

/// GET /workspaces
pub async fn list(
    State(state): State<AppState>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<Workspace>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.workspaces().list(options).await?))
}

/// POST /workspaces
pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<Workspace> {
    Ok(ApiResponse::created(state.workspaces().create(&body).await?))
}

/// GET /workspaces/:gid
pub async fn get(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<Workspace> {
    Ok(ApiResponse::success(state.workspaces().get(&gid).await?))
}

/// GET /workspaces/:gid/projects
pub async fn projects(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<Project>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.projects().list_for_workspace(&gid, options).await?))
}

/// GET /workspaces/:gid/teams
pub async fn teams(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<Team>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.teams().list_for_workspace(&gid, options).await?))
}

/// GET /workspaces/:gid/tags
pub async fn tags(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<Tag>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.tags().list_for_workspace(&gid, options).await?))
}

/// GET /workspaces/:gid/goals
pub async fn goals(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<Goal>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.goals().list_for_workspace(&gid, options).await?))
}

/// GET /workspaces/:gid/workspace-memberships
pub async fn memberships(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<WorkspaceMembership>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(
        state.workspace_memberships().list_for_workspace(&gid, options).await?,
    ))
}
