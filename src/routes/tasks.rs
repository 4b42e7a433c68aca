// routes/tasks.rs - /tasks, the only resource with PATCH and DELETE
use axum::extract::{Path, Query, State};
use serde::Deserialize;
use serde_json::{json, Value};

use super::PageQuery;
use crate::api::JsonBody;
use crate::database::models::{Story, Task};
use crate::middleware::{ApiResponse, ApiResult};
use crate::services::task_service::TaskQuery as TaskFilter;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct TaskQuery {
    #[serde(alias = "projectGid")]
    pub project: Option<String>,
    #[serde(alias = "workspaceGid")]
    pub workspace: Option<String>,
    pub completed: Option<bool>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

/// GET /tasks?project=&workspace=&completed=
pub async fn list(State(state): State<AppState>, Query(query): Query<TaskQuery>) -> ApiResult<Vec<Task>> {
    let options = state.list_options(query.limit, query.offset);
    let filter = TaskFilter {
        project_gid: query.project,
        workspace_gid: query.workspace,
        completed: query.completed,
    };
    Ok(ApiResponse::success(state.tasks().list(filter, options).await?))
}

/// POST /tasks
pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<Task> {
    Ok(ApiResponse::created(state.tasks().create(&body).await?))
}

/// GET /tasks/:gid
pub async fn get(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<Task> {
    Ok(ApiResponse::success(state.tasks().get(&gid).await?))
}

/// PATCH /tasks/:gid
pub async fn update(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    JsonBody(body): JsonBody,
) -> ApiResult<Task> {
    Ok(ApiResponse::success(state.tasks().update(&gid, &body).await?))
}

/// DELETE /tasks/:gid - responds with `{ "data": {} }`
pub async fn delete(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<Value> {
    state.tasks().delete(&gid).await?;
    Ok(ApiResponse::success(json!({})))
}

/// GET /tasks/:gid/stories
pub async fn stories(
    State(state): State<AppState>,
    Path(gid): Path<String>,
    Query(page): Query<PageQuery>,
) -> ApiResult<Vec<Story>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.stories().list_for_task(&gid, options).await?))
}
