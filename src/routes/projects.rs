// routes/projects.rs - /projects and its nested task/section lists
use axum::extract::{Path, Query, State};
use serde::Deserialize;

use super::PageQuery;
use crate::api::JsonBody;
use crate::database::models::{Project, Section, Task};
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct ProjectQuery {
    #[serde(alias = "workspaceGid")]
    pub workspace: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// GET /projects?workspace=
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<ProjectQuery>,
) -> ApiResult<Vec<Project>> {
    let options = state.list_options(query.limit, query.offset);
    Ok(ApiResponse::success(state.projects().list(query.workspace, options).await?))
}

/// POST /projects
pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<Project> {
    Ok(ApiResponse::created(state.projects().create(&body).await?))
}

/// GET /projects/:gid
pub async fn get(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<Project> {
    Ok(ApiResponse::success(state.projects().get(&gid).await?))
}

/// GET /projects/:gid/tasks
pub async fn tasks(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<Task>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.tasks().list_for_project(&gid, options).await?))
}

/// GET /projects/:gid/sections - ordered by `order`
pub async fn sections(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<Section>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.sections().list_for_project(&gid, options).await?))
}
