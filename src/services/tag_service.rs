use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{guard, resolve_gid, ListOptions, ServiceResult};
use crate::database::models::{Tag, Workspace};
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static CREATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("workspaceGid", FieldKind::String),
        FieldSpec::optional("color", FieldKind::String),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTag {
    gid: Option<String>,
    name: String,
    workspace_gid: String,
    color: Option<String>,
}

pub struct TagService {
    tags: Repository<Tag>,
    workspaces: Repository<Workspace>,
}

impl TagService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            tags: Repository::new(store.clone()),
            workspaces: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<Tag> {
        let input: CreateTag = CREATE_SCHEMA.parse(payload)?;
        let workspace = guard::require(&self.workspaces, &input.workspace_gid).await?;

        let tag = self
            .tags
            .insert(Tag {
                gid: resolve_gid(input.gid),
                name: input.name,
                workspace_gid: workspace.gid,
                color: input.color,
                created_at: Utc::now(),
            })
            .await?;

        info!("Created tag {}", tag.gid);
        Ok(tag)
    }

    pub async fn list(
        &self,
        workspace_gid: Option<String>,
        options: ListOptions,
    ) -> ServiceResult<Vec<Tag>> {
        let filter = Filter::new().eq_opt("workspaceGid", workspace_gid);
        Ok(self.tags.select_any(&options.apply(filter)).await?)
    }

    pub async fn list_for_workspace(
        &self,
        workspace_gid: &str,
        options: ListOptions,
    ) -> ServiceResult<Vec<Tag>> {
        guard::require_path(&self.workspaces, workspace_gid).await?;
        self.list(Some(workspace_gid.to_string()), options).await
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<Tag> {
        Ok(self.tags.select_404(gid).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::services::{ServiceError, WorkspaceService};
    use serde_json::json;

    #[tokio::test]
    async fn tags_are_scoped_to_workspace() {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let workspaces = WorkspaceService::new(store.clone());
        workspaces.create(&json!({ "name": "A", "gid": "ws_a" })).await.unwrap();
        workspaces.create(&json!({ "name": "B", "gid": "ws_b" })).await.unwrap();
        let svc = TagService::new(store);

        svc.create(&json!({ "name": "urgent", "workspaceGid": "ws_a", "color": "red" })).await.unwrap();
        svc.create(&json!({ "name": "later", "workspaceGid": "ws_b" })).await.unwrap();

        let a = svc.list(Some("ws_a".into()), ListOptions::default()).await.unwrap();
        assert_eq!(a.len(), 1);
        assert_eq!(a[0].color.as_deref(), Some("red"));

        let err = svc.create(&json!({ "name": "bad", "workspaceGid": "ws_a", "color": 3 })).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));
    }
}
