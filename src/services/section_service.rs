use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{guard, resolve_gid, ListOptions, ServiceError, ServiceResult};
use crate::database::models::{Project, Section};
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static CREATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("projectGid", FieldKind::String),
        FieldSpec::optional("order", FieldKind::Integer).coerce(),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateSection {
    gid: Option<String>,
    name: String,
    project_gid: String,
    order: Option<i64>,
}

pub struct SectionService {
    sections: Repository<Section>,
    projects: Repository<Project>,
}

impl SectionService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            sections: Repository::new(store.clone()),
            projects: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<Section> {
        let input: CreateSection = CREATE_SCHEMA.parse(payload)?;
        let project = guard::require(&self.projects, &input.project_gid).await?;

        let order = match input.order {
            Some(order) => order,
            None => self.next_order(&project.gid).await?,
        };

        let section = self
            .sections
            .insert(Section {
                gid: resolve_gid(input.gid),
                name: input.name,
                project_gid: project.gid,
                order,
                created_at: Utc::now(),
            })
            .await?;

        info!(
            "Created section {} at order {} in project {}",
            section.gid, section.order, section.project_gid
        );
        Ok(section)
    }

    // One past the highest order in the project, 0 for an empty project.
    // Read then insert: two concurrent creates may pick the same order.
    async fn next_order(&self, project_gid: &str) -> ServiceResult<i64> {
        let existing = self
            .sections
            .select_any(&Filter::new().eq("projectGid", project_gid))
            .await?;
        match existing.iter().map(|s| s.order).max() {
            None => Ok(0),
            Some(max) => max.checked_add(1).ok_or_else(|| {
                ServiceError::Rule(format!(
                    "section order exhausted for project {}",
                    project_gid
                ))
            }),
        }
    }

    /// Sections sorted by `order`; paging applies after sorting.
    pub async fn list(
        &self,
        project_gid: Option<String>,
        options: ListOptions,
    ) -> ServiceResult<Vec<Section>> {
        let mut sections = self
            .sections
            .select_any(&Filter::new().eq_opt("projectGid", project_gid))
            .await?;
        sections.sort_by_key(|s| s.order);
        Ok(options.apply(Filter::new()).paginate(sections))
    }

    pub async fn list_for_project(
        &self,
        project_gid: &str,
        options: ListOptions,
    ) -> ServiceResult<Vec<Section>> {
        guard::require_path(&self.projects, project_gid).await?;
        self.list(Some(project_gid.to_string()), options).await
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<Section> {
        Ok(self.sections.select_404(gid).await?)
    }
}
