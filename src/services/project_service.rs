use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{guard, resolve_gid, ListOptions, ServiceResult};
use crate::database::models::{Project, Workspace};
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static CREATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("workspaceGid", FieldKind::String),
        FieldSpec::optional("notes", FieldKind::String),
        FieldSpec::optional("color", FieldKind::String),
        FieldSpec::optional("archived", FieldKind::Boolean)
            .coerce()
            .default(json!(false)),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateProject {
    gid: Option<String>,
    name: String,
    workspace_gid: String,
    notes: Option<String>,
    color: Option<String>,
    archived: bool,
}

pub struct ProjectService {
    projects: Repository<Project>,
    workspaces: Repository<Workspace>,
}

impl ProjectService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            projects: Repository::new(store.clone()),
            workspaces: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<Project> {
        let input: CreateProject = CREATE_SCHEMA.parse(payload)?;
        let workspace = guard::require(&self.workspaces, &input.workspace_gid).await?;

        let project = self
            .projects
            .insert(Project {
                gid: resolve_gid(input.gid),
                name: input.name,
                workspace_gid: workspace.gid,
                notes: input.notes,
                color: input.color,
                archived: input.archived,
                created_at: Utc::now(),
            })
            .await?;

        info!("Created project {} in workspace {}", project.gid, project.workspace_gid);
        Ok(project)
    }

    pub async fn list(
        &self,
        workspace_gid: Option<String>,
        options: ListOptions,
    ) -> ServiceResult<Vec<Project>> {
        let filter = Filter::new().eq_opt("workspaceGid", workspace_gid);
        Ok(self.projects.select_any(&options.apply(filter)).await?)
    }

    /// Projects of one workspace; 404 when the workspace is unknown.
    pub async fn list_for_workspace(
        &self,
        workspace_gid: &str,
        options: ListOptions,
    ) -> ServiceResult<Vec<Project>> {
        guard::require_path(&self.workspaces, workspace_gid).await?;
        self.list(Some(workspace_gid.to_string()), options).await
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<Project> {
        Ok(self.projects.select_404(gid).await?)
    }
}
