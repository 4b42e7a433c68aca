// routes/goals.rs - /goals
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::api::JsonBody;
use crate::database::models::Goal;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct GoalQuery {
    #[serde(alias = "workspaceGid")]
    pub workspace: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn list(State(state): State<AppState>, Query(query): Query<GoalQuery>) -> ApiResult<Vec<Goal>> {
    let options = state.list_options(query.limit, query.offset);
    Ok(ApiResponse::success(state.goals().list(query.workspace, options).await?))
}

pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<Goal> {
    Ok(ApiResponse::created(state.goals().create(&body).await?))
}

pub async fn get(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<Goal> {
    Ok(ApiResponse::success(state.goals().get(&gid).await?))
}
