use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{guard, resolve_gid, ListOptions, ServiceResult};
use crate::database::models::{Team, Workspace};
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static CREATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("workspaceGid", FieldKind::String),
        FieldSpec::optional("description", FieldKind::String),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTeam {
    gid: Option<String>,
    name: String,
    workspace_gid: String,
    description: Option<String>,
}

pub struct TeamService {
    teams: Repository<Team>,
    workspaces: Repository<Workspace>,
}

impl TeamService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            teams: Repository::new(store.clone()),
            workspaces: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<Team> {
        let input: CreateTeam = CREATE_SCHEMA.parse(payload)?;
        let workspace = guard::require(&self.workspaces, &input.workspace_gid).await?;

        let team = self
            .teams
            .insert(Team {
                gid: resolve_gid(input.gid),
                name: input.name,
                workspace_gid: workspace.gid,
                description: input.description,
                created_at: Utc::now(),
            })
            .await?;

        info!("Created team {} in workspace {}", team.gid, team.workspace_gid);
        Ok(team)
    }

    pub async fn list(
        &self,
        workspace_gid: Option<String>,
        options: ListOptions,
    ) -> ServiceResult<Vec<Team>> {
        let filter = Filter::new().eq_opt("workspaceGid", workspace_gid);
        Ok(self.teams.select_any(&options.apply(filter)).await?)
    }

    pub async fn list_for_workspace(
        &self,
        workspace_gid: &str,
        options: ListOptions,
    ) -> ServiceResult<Vec<Team>> {
        guard::require_path(&self.workspaces, workspace_gid).await?;
        self.list(Some(workspace_gid.to_string()), options).await
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<Team> {
        Ok(self.teams.select_404(gid).await?)
    }
}
