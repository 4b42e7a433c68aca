use std::sync::Arc;

use chrono::Utc;
use once_cell::sync::Lazy;
use serde::Deserialize;
use serde_json::Value;
use tracing::info;

use super::{resolve_gid, ListOptions, ServiceResult};
use crate::database::models::User;
use crate::database::{DocumentStore, Filter, Repository};
use crate::validation::{FieldKind, FieldSpec, Schema};

static CREATE_SCHEMA: Lazy<Schema> = Lazy::new(|| {
    Schema::new(vec![
        FieldSpec::optional("gid", FieldKind::String),
        FieldSpec::required("name", FieldKind::String),
        FieldSpec::required("email", FieldKind::Email),
        FieldSpec::optional("photoUrl", FieldKind::String),
    ])
});

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CreateUser {
    gid: Option<String>,
    name: String,
    email: String,
    photo_url: Option<String>,
}

pub struct UserService {
    users: Repository<User>,
}

impl UserService {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            users: Repository::new(store),
        }
    }

    pub async fn create(&self, payload: &Value) -> ServiceResult<User> {
        let input: CreateUser = CREATE_SCHEMA.parse(payload)?;

        let user = self
            .users
            .insert(User {
                gid: resolve_gid(input.gid),
                name: input.name,
                email: input.email,
                photo_url: input.photo_url,
                created_at: Utc::now(),
            })
            .await?;

        info!("Created user {}", user.gid);
        Ok(user)
    }

    pub async fn list(&self, options: ListOptions) -> ServiceResult<Vec<User>> {
        Ok(self.users.select_any(&options.apply(Filter::new())).await?)
    }

    pub async fn get(&self, gid: &str) -> ServiceResult<User> {
        Ok(self.users.select_404(gid).await?)
    }
}
