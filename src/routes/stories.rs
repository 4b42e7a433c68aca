// routes/stories.rs - /stories
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::api::JsonBody;
use crate::database::models::Story;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct StoryQuery {
    #[serde(alias = "taskGid")]
    pub task: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn list(State(state): State<AppState>, Query(query): Query<StoryQuery>) -> ApiResult<Vec<Story>> {
    let options = state.list_options(query.limit, query.offset);
    Ok(ApiResponse::success(state.stories().list(query.task, options).await?))
}

pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<Story> {
    Ok(ApiResponse::created(state.stories().create(&body).await?))
}

pub async fn get(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<Story> {
    Ok(ApiResponse::success(state.stories().get(&gid).await?))
}
