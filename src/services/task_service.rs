use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::{json, Value};
use tracing::info;

use super::{guard, resolve_gid, ListOptions, ServiceError, ServiceResult};
use crate::database::models::{Project, Task};
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static CREATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("projectGid", FieldKind::String),
        FieldSpec::optional("workspaceGid", FieldKind::String),
        FieldSpec::optional("notes", FieldKind::String),
        FieldSpec::optional("completed", FieldKind::Boolean)
            .coerce()
            .default(json!(false)),
        FieldSpec::optional("dueOn", FieldKind::Date),
    ])
});

static UPDATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("name", FieldKind::String).non_empty(),
        FieldSpec::optional("projectGid", FieldKind::String),
        FieldSpec::optional("notes", FieldKind::String),
        FieldSpec::optional("completed", FieldKind::Boolean).coerce(),
        FieldSpec::optional("dueOn", FieldKind::Date),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateTask {
    gid: Option<String>,
    name: String,
    project_gid: String,
    workspace_gid: Option<String>,
    notes: Option<String>,
    completed: bool,
    due_on: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct UpdateTask {
    name: Option<String>,
    project_gid: Option<String>,
    notes: Option<String>,
    completed: Option<bool>,
    due_on: Option<String>,
}

/// Optional filters for the task collection.
#[derive(Debug, Clone, Default)]
pub struct TaskQuery {
    pub project_gid: Option<String>,
    pub workspace_gid: Option<String>,
    pub completed: Option<bool>,
}

pub struct TaskService {
    tasks: Repository<Task>,
    projects: Repository<Project>,
}

impl TaskService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            tasks: Repository::new(store.clone()),
            projects: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<Task> {
        let input: CreateTask = CREATE_SCHEMA.parse(payload)?;
        let project = guard::require(&self.projects, &input.project_gid).await?;

        if let Some(workspace_gid) = &input.workspace_gid {
            if *workspace_gid != project.workspace_gid {
                return Err(ServiceError::Rule(format!(
                    "workspaceGid {} does not match workspace {} of project {}",
                    workspace_gid, project.workspace_gid, project.gid
                )));
            }
        }

        let now = Utc::now();
        let task = self
            .tasks
            .insert(Task {
                gid: resolve_gid(input.gid),
                name: input.name,
                completed: input.completed,
                completed_at: input.completed.then_some(now),
                project_gid: project.gid,
                workspace_gid: project.workspace_gid,
                notes: input.notes,
                due_on: input.due_on,
                created_at: now,
                modified_at: now,
            })
            .await?;

        info!("Created task {} in project {}", task.gid, task.project_gid);
        Ok(task)
    }

    /// Partial update. Moving a task to another project re-runs the guard and
    /// re-copies the workspace. An explicit `null` clears `notes` or `dueOn`;
    /// on any other field it leaves the value untouched.
    pub async fn update(&self, gid: &str, payload: &Value) -> ServiceResult<Task> {
        let input: UpdateTask = UPDATE_SCHEMA.parse(payload)?;
        let mut task = self.tasks.select_404(gid).await?;
        let now = Utc::now();

        if let Some(name) = input.name {
            task.name = name;
        }
        if let Some(project_gid) = input.project_gid {
            if project_gid != task.project_gid {
                let project = guard::require(&self.projects, &project_gid).await?;
                task.project_gid = project.gid;
                task.workspace_gid = project.workspace_gid;
            }
        }
        if input.notes.is_some() || is_null(payload, "notes") {
            task.notes = input.notes;
        }
        if let Some(completed) = input.completed {
            task.set_completed(completed, now);
        }
        if input.due_on.is_some() || is_null(payload, "dueOn") {
            task.due_on = input.due_on;
        }
        task.modified_at = now;

        let task = self.tasks.update(task).await?;
        info!("Updated task {}", task.gid);
        Ok(task)
    }

    pub async fn delete(&self, gid: &str) -> ServiceResult<()> {
        self.tasks.select_404(gid).await?;
        self.tasks.delete(gid).await?;
        info!("Deleted task {}", gid);
        Ok(())
    }

    pub async fn list(&self, query: TaskQuery, options: ListOptions) -> ServiceResult<Vec<Task>> {
        let filter = Filter::new()
            .eq_opt("projectGid", query.project_gid)
            .eq_opt("workspaceGid", query.workspace_gid)
            .eq_opt("completed", query.completed);
        Ok(self.tasks.select_any(&options.apply(filter)).await?)
    }

    /// Tasks of one project; 404 when the project is unknown.
    pub async fn list_for_project(
        &self,
        project_gid: &str,
        options: ListOptions,
    ) -> ServiceResult<Vec<Task>> {
        guard::require_path(&self.projects, project_gid).await?;
        let query = TaskQuery {
            project_gid: Some(project_gid.to_string()),
            ..Default::default()
        };
        self.list(query, options).await
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<Task> {
        Ok(self.tasks.select_404(gid).await?)
    }
}

fn is_null(payload: &Value, field: &str) -> bool {
    payload.get(field).is_some_and(Value::is_null)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::database::MemoryStore;
    use crate::services::{ProjectService, WorkspaceService};

    async fn setup() -> TaskService {
        let store: Arc<dyn DocumentStore> = Arc::new(MemoryStore::new());
        let workspaces = WorkspaceService::new(store.clone());
        workspaces.create(&json!({ "name": "Main", "gid": "ws_1" })).await.unwrap();
        workspaces.create(&json!({ "name": "Other", "gid": "ws_2" })).await.unwrap();

        let projects = ProjectService::new(store.clone());
        projects
            .create(&json!({ "name": "Site", "gid": "p_1", "workspaceGid": "ws_1" }))
            .await
            .unwrap();
        projects
            .create(&json!({ "name": "App", "gid": "p_2", "workspaceGid": "ws_2" }))
            .await
            .unwrap();

        TaskService::new(store)
    }

    #[tokio::test]
    async fn copies_workspace_from_project() {
        let svc = setup().await;
        let task = svc
            .create(&json!({ "name": "Design", "projectGid": "p_1", "notes": "brand colors" }))
            .await
            .unwrap();
        assert_eq!(task.workspace_gid, "ws_1");
        assert!(!task.completed);
        assert!(task.completed_at.is_none());
    }

    #[tokio::test]
    async fn orphan_task_is_not_persisted() {
        let svc = setup().await;
        let err = svc
            .create(&json!({ "name": "Orphan", "gid": "task_orphan", "projectGid": "does_not_exist" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::MissingReferent { .. }));
        assert!(matches!(svc.get("task_orphan").await.unwrap_err(), ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn mismatched_workspace_is_rejected() {
        let svc = setup().await;
        let err = svc
            .create(&json!({ "name": "x", "projectGid": "p_1", "workspaceGid": "ws_2" }))
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Rule(_)));
    }

    #[tokio::test]
    async fn patch_updates_completion_and_moves_projects() {
        let svc = setup().await;
        svc.create(&json!({ "name": "t", "gid": "t_1", "projectGid": "p_1" })).await.unwrap();

        let done = svc.update("t_1", &json!({ "completed": true })).await.unwrap();
        assert!(done.completed);
        assert!(done.completed_at.is_some());
        assert_eq!(done.name, "t");

        let moved = svc.update("t_1", &json!({ "projectGid": "p_2" })).await.unwrap();
        assert_eq!(moved.workspace_gid, "ws_2");

        let err = svc.update("t_1", &json!({ "projectGid": "nope" })).await.unwrap_err();
        assert!(matches!(err, ServiceError::MissingReferent { .. }));

        let err = svc.update("t_1", &json!({ "name": "" })).await.unwrap_err();
        assert!(matches!(err, ServiceError::Validation(_)));

        let err = svc.update("t_404", &json!({ "completed": true })).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn patch_reports_blank_name_with_other_violations() {
        let svc = setup().await;
        svc.create(&json!({ "name": "t", "gid": "t_1", "projectGid": "p_1" })).await.unwrap();

        let err = svc
            .update("t_1", &json!({ "name": "", "completed": "maybe" }))
            .await
            .unwrap_err();
        match err {
            ServiceError::Validation(errors) => assert_eq!(
                errors.messages(),
                vec![
                    "name should not be empty".to_string(),
                    "completed must be a boolean value".to_string(),
                ]
            ),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(svc.get("t_1").await.unwrap().name, "t");
    }

    #[tokio::test]
    async fn patch_null_clears_notes_and_due_date_only() {
        let svc = setup().await;
        svc.create(&json!({
            "name": "t",
            "gid": "t_1",
            "projectGid": "p_1",
            "notes": "draft",
            "dueOn": "2026-11-01"
        }))
        .await
        .unwrap();

        let kept = svc.update("t_1", &json!({ "completed": true })).await.unwrap();
        assert_eq!(kept.notes.as_deref(), Some("draft"));
        assert_eq!(kept.due_on.as_deref(), Some("2026-11-01"));

        let cleared = svc
            .update("t_1", &json!({ "notes": null, "dueOn": null, "name": null }))
            .await
            .unwrap();
        assert!(cleared.notes.is_none());
        assert!(cleared.due_on.is_none());
        assert_eq!(cleared.name, "t");
        assert!(cleared.completed);
    }

    #[tokio::test]
    async fn delete_then_get_is_not_found() {
        let svc = setup().await;
        svc.create(&json!({ "name": "t", "gid": "t_1", "projectGid": "p_1" })).await.unwrap();
        svc.delete("t_1").await.unwrap();
        assert!(matches!(svc.get("t_1").await.unwrap_err(), ServiceError::NotFound { .. }));
        assert!(matches!(svc.delete("t_1").await.unwrap_err(), ServiceError::NotFound { .. }));
    }

    #[tokio::test]
    async fn lists_by_project_and_completion() {
        let svc = setup().await;
        svc.create(&json!({ "name": "a", "projectGid": "p_1" })).await.unwrap();
        svc.create(&json!({ "name": "b", "projectGid": "p_1", "completed": true })).await.unwrap();
        svc.create(&json!({ "name": "c", "projectGid": "p_2" })).await.unwrap();

        let p1 = svc.list_for_project("p_1", ListOptions::default()).await.unwrap();
        assert_eq!(p1.len(), 2);
        assert!(p1.iter().all(|t| t.project_gid == "p_1"));

        let open = svc
            .list(
                TaskQuery {
                    completed: Some(false),
                    ..Default::default()
                },
                ListOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(open.len(), 2);

        let ws2 = svc
            .list(
                TaskQuery {
                    workspace_gid: Some("ws_2".into()),
                    ..Default::default()
                },
                ListOptions::default(),
            )
            .await
            .unwrap();
        assert_eq!(ws2.len(), 1);
    }
}
