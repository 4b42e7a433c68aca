// routes/tags.rs - /tags
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::api::JsonBody;
use crate::database::models::Tag;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TagQuery {
    #[serde(alias = "workspaceGid")]
    pub workspace: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn list(State(state): State<AppState>, Query(query): Query<TagQuery>) -> ApiResult<Vec<Tag>> {
    let options = state.list_options(query.limit, query.offset);
    Ok(ApiResponse::success(state.tags().list(query.workspace, options).await?))
}

pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<Tag> {
    Ok(ApiResponse::created(state.tags().create(&body).await?))
}

pub async fn get(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<Tag> {
    Ok(ApiResponse::success(state.tags().get(&gid).await?))
}
