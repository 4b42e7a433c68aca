use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{resolve_gid, ListOptions, ServiceResult};
use crate::database::models::Workspace;
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static CREATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateWorkspace {
    gid: Option<String>,
    name: String,
}

pub struct WorkspaceService {
    workspaces: Repository<Workspace>,
}

impl WorkspaceService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            workspaces: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<Workspace> {
        let input: CreateWorkspace = CREATE_SCHEMA.parse(payload)?;

        let workspace = self
            .workspaces
            .insert(Workspace {
                gid: resolve_gid(input.gid),
                name: input.name,
                created_at: Utc::now(),
            })
            .await?;

        info!("Created workspace {}", workspace.gid);
        Ok(workspace)
    }

    pub async fn list(&self, options: ListOptions) -> ServiceResult<Vec<Workspace>> {
        Ok(self.workspaces.select_any(&options.apply(Filter::new())).await?)
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<Workspace> {
        Ok(self.workspaces.select_404(gid).await?)
    }
}
