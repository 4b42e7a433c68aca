use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use sqlx::{postgres::PgPoolOptions, types::Json, PgPool, Postgres, QueryBuilder};
use tracing::info;

use super::entity::EntityKind;
use super::filter::Filter;
use super::store::{DocumentStore, StoreError, StoreResult};
use crate::config::{redact_database_url, StoreConfig};

const UNIQUE_VIOLATION: &str = "23505";
const PRIMARY_KEY: &str = "records_pkey";

// One membership per (user, parent). The services check first; these catch
// concurrent creates that slip past the check.
const MEMBERSHIP_INDEXES: [(&str, &str, &str); 2] = [
    ("records_workspace_membership_pair", "workspace_membership", "workspaceGid"),
    ("records_team_membership_pair", "team_membership", "teamGid"),
];

/// Postgres-backed store. All kinds share one `records` table with the
/// document in a JSONB column; `gid` is the primary key.
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    /// Connect using the store section of the config and ensure the schema exists.
    pub async fn connect(config: &StoreConfig) -> StoreResult<Self> {
        let url = config
            .database_url
            .as_deref()
            .ok_or(StoreError::ConfigMissing("DATABASE_URL"))?;

        let pool = PgPoolOptions::new()
            .max_connections(config.max_connections)
            .acquire_timeout(Duration::from_secs(config.connection_timeout))
            .connect(url)
            .await?;

        info!("Connected to Postgres at {}", redact_database_url(url));

        let store = Self::from_pool(pool);
        store.ensure_schema().await?;
        Ok(store)
    }

    pub fn from_pool(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn ensure_schema(&self) -> StoreResult<()> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS records (
                gid TEXT PRIMARY KEY,
                kind TEXT NOT NULL,
                seq BIGSERIAL NOT NULL,
                body JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT now(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT now()
            )
            "#,
        )
        .execute(&self.pool)
        .await?;

        sqlx::query("CREATE INDEX IF NOT EXISTS records_kind_seq_idx ON records (kind, seq)")
            .execute(&self.pool)
            .await?;

        for (index, kind, parent) in MEMBERSHIP_INDEXES {
            sqlx::query(&format!(
                "CREATE UNIQUE INDEX IF NOT EXISTS {index} ON records \
                 ((body ->> 'userGid'), (body ->> '{parent}')) WHERE kind = '{kind}'"
            ))
            .execute(&self.pool)
            .await?;
        }

        Ok(())
    }
}

/// Name of the violated unique index, if `err` is a unique violation.
fn unique_violation(err: &sqlx::Error) -> Option<String> {
    match err {
        sqlx::Error::Database(db_err) if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) => {
            Some(db_err.constraint().unwrap_or(PRIMARY_KEY).to_string())
        }
        _ => None,
    }
}

// LIMIT and OFFSET are BIGINT; anything larger matches nothing anyway.
fn sql_count(n: usize) -> i64 {
    i64::try_from(n).unwrap_or(i64::MAX)
}

#[async_trait]
impl DocumentStore for PgStore {
    fn backend_name(&self) -> &'static str {
        "postgres"
    }

    async fn find_unique(&self, kind: EntityKind, gid: &str) -> StoreResult<Option<Value>> {
        let body = sqlx::query_scalar::<_, Value>(
            "SELECT body FROM records WHERE gid = $1 AND kind = $2",
        )
        .bind(gid)
        .bind(kind.as_str())
        .fetch_optional(&self.pool)
        .await?;
        Ok(body)
    }

    async fn find_many(&self, kind: EntityKind, filter: &Filter) -> StoreResult<Vec<Value>> {
        let mut qb: QueryBuilder<Postgres> = QueryBuilder::new("SELECT body FROM records WHERE kind = ");
        qb.push_bind(kind.as_str());

        for (field, value) in &filter.equals {
            qb.push(" AND body -> ");
            qb.push_bind(field.clone());
            qb.push(" = ");
            qb.push_bind(Json(value.clone()));
        }

        qb.push(" ORDER BY seq");
        if let Some(limit) = filter.limit {
            qb.push(" LIMIT ");
            qb.push_bind(sql_count(limit));
        }
        if let Some(offset) = filter.offset {
            qb.push(" OFFSET ");
            qb.push_bind(sql_count(offset));
        }

        let rows = qb
            .build_query_scalar::<Value>()
            .fetch_all(&self.pool)
            .await?;
        Ok(rows)
    }

    async fn create(&self, kind: EntityKind, gid: &str, doc: Value) -> StoreResult<Value> {
        let result = sqlx::query_scalar::<_, Value>(
            "INSERT INTO records (gid, kind, body) VALUES ($1, $2, $3) RETURNING body",
        )
        .bind(gid)
        .bind(kind.as_str())
        .bind(Json(&doc))
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(body) => Ok(body),
            Err(e) => match unique_violation(&e) {
                Some(index) if index == PRIMARY_KEY => Err(StoreError::already_exists(kind, gid)),
                Some(index) => Err(StoreError::Conflict { kind, index }),
                None => Err(e.into()),
            },
        }
    }

    async fn update(&self, kind: EntityKind, gid: &str, doc: Value) -> StoreResult<Value> {
        sqlx::query_scalar::<_, Value>(
            "UPDATE records SET body = $3, updated_at = now() WHERE gid = $1 AND kind = $2 RETURNING body",
        )
        .bind(gid)
        .bind(kind.as_str())
        .bind(Json(&doc))
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| StoreError::not_found(kind, gid))
    }

    async fn delete(&self, kind: EntityKind, gid: &str) -> StoreResult<bool> {
        let result = sqlx::query("DELETE FROM records WHERE gid = $1 AND kind = $2")
            .bind(gid)
            .bind(kind.as_str())
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn health_check(&self) -> StoreResult<()> {
        sqlx::query("SELECT 1").execute(&self.pool).await?;
        Ok(())
    }
}
