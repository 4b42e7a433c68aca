// routes/sections.rs - /sections
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use crate::api::JsonBody;
use crate::database::models::Section;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct SectionQuery {
    #[serde(alias = "projectGid")]
    pub project: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<SectionQuery>,
) -> ApiResult<Vec<Section>> {
    let options = state.list_options(query.limit, query.offset);
    Ok(ApiResponse::success(state.sections().list(query.project, options).await?))
}

pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<Section> {
    Ok(ApiResponse::created(state.sections().create(&body).await?))
}

pub async fn get(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<Section> {
    Ok(ApiResponse::success(state.sections().get(&gid).await?))
}
