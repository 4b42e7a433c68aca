// routes/users.rs - /users
use axum::extract::{Path, Query, State};

use super::PageQuery;
use crate::api::JsonBody;
use crate::database::models::User;
use crate::middleware::{ApiResponse, ApiResult};
use crate::state::AppState;

pub async fn list(State(state): State<AppState>, Query(page): Query<PageQuery>) -> ApiResult<Vec<User>> {
    let options = state.list_options(page.limit, page.offset);
    Ok(ApiResponse::success(state.users().list(options).await?))
}

pub async fn create(State(state): State<AppState>, JsonBody(body): JsonBody) -> ApiResult<User> {
    Ok(ApiResponse::created(state.users().create(&body).await?))
}

pub async fn get(State(state): State<AppState>, Path(gid): Path<String>) -> ApiResult<User> {
    Ok(ApiResponse::success(state.users().get(&gid).await?))
}
