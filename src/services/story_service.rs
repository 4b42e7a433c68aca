use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{guard, resolve_gid, ListOptions, ServiceResult};
use crate::database::models::{Story, Task, User};
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static CREATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("text", FieldKind::String),
        FieldSpec::required("taskGid", FieldKind::String),
        FieldSpec::optional("createdByGid", FieldKind::String),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateStory {
    gid: Option<String>,
    text: String,
    task_gid: String,
    created_by_gid: Option<String>,
}

pub struct StoryService {
    stories: Repository<Story>,
    tasks: Repository<Task>,
    users: Repository<User>,
}

impl StoryService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            stories: Repository::new(store.clone()),
            tasks: Repository::new(store.clone()),
            users: Repository::new(store),
        }
    }

    /// Both the task and, when given, the author must exist.
    pub async fn create(&self, payload: &Value) -> ServiceResult<Story> {
        let input: CreateStory = CREATE_SCHEMA.parse(payload)?;
        let task = guard::require(&self.tasks, &input.task_gid).await?;
        let author = match input.created_by_gid {
            Some(user_gid) => Some(guard::require(&self.users, &user_gid).await?.gid),
            None => None,
        };

        let story = self
            .stories
            .insert(Story {
                gid: resolve_gid(input.gid),
                text: input.text,
                task_gid: task.gid,
                created_by_gid: author,
                created_at: Utc::now(),
            })
            .await?;

        info!("Created story {} on task {}", story.gid, story.task_gid);
        Ok(story)
    }

    pub async fn list(
        &self,
        task_gid: Option<String>,
        options: ListOptions,
    ) -> ServiceResult<Vec<Story>> {
        let filter = Filter::new().eq_opt("taskGid", task_gid);
        Ok(self.stories.select_any(&options.apply(filter)).await?)
    }

    pub async fn list_for_task(
        &self,
        task_gid: &str,
        options: ListOptions,
    ) -> ServiceResult<Vec<Story>> {
        guard::require_path(&self.tasks, task_gid).await?;
        self.list(Some(task_gid.to_string()), options).await
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<Story> {
        Ok(self.stories.select_404(gid).await?)
    }
}
