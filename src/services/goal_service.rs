use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{guard, resolve_gid, ListOptions, ServiceResult};
use crate::database::models::{Goal, Workspace};
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static CREATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("workspaceGid", FieldKind::String),
        FieldSpec::optional("notes", FieldKind::String),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateGoal {
    gid: Option<String>,
    name: String,
    workspace_gid: String,
    notes: Option<String>,
}

pub struct GoalService {
    goals: Repository<Goal>,
    workspaces: Repository<Workspace>,
}

impl GoalService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            goals: Repository::new(store.clone()),
            workspaces: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<Goal> {
        let input: CreateGoal = CREATE_SCHEMA.parse(payload)?;
        let workspace = guard::require(&self.workspaces, &input.workspace_gid).await?;

        let goal = self
            .goals
            .insert(Goal {
                gid: resolve_gid(input.gid),
                name: input.name,
                workspace_gid: workspace.gid,
                notes: input.notes,
                created_at: Utc::now(),
            })
            .await?;

        info!("Created goal {} in workspace {}", goal.gid, goal.workspace_gid);
        Ok(goal)
    }

    pub async fn list(
        &self,
        workspace_gid: Option<String>,
        options: ListOptions,
    ) -> ServiceResult<Vec<Goal>> {
        let filter = Filter::new().eq_opt("workspaceGid", workspace_gid);
        Ok(self.goals.select_any(&options.apply(filter)).await?)
    }

    pub async fn list_for_workspace(
        &self,
        workspace_gid: &str,
        options: ListOptions,
    ) -> ServiceResult<Vec<Goal>> {
        guard::require_path(&self.workspaces, workspace_gid).await?;
        self.list(Some(workspace_gid.to_string()), options).await
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<Goal> {
        Ok(self.goals.select_404(gid).await?)
    }
}
