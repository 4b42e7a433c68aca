// routes/teams.rs - /teams and /teams/:gid/team-memberships
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use super::PageQuery;
use crate::api::JsonBody;
use crate::database::models::{Team, TeamMembership};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TeamQuery {
    #[serde(alias = "workspaceGid")]
    pub workspace: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn list(State(state): State<AppState>, Query(query): Query<TeamQuery>) -> ApiResult<Vec<Team>> {
    let options = state.list_options(query.limit, query.offset);
    Ok(ApiResponse::success(state.teams().list(query.workspace, options).await?))
}

pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<Team> {
    Ok(ApiResponse::created(state.teams().create(&body).await?))
}

pub async fn get(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<Team> {
    Ok(ApiResponse::success(state.teams().get(&gid).await?))
}

/// GET /teams/:gid/team-memberships
pub async fn memberships(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<TeamMembership>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.team_memberships().list_for_team(&gid, options).await?))
}
