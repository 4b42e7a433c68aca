#![allow(dead_code)]

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use reqwest::{Response, StatusCode};
use serde_json::Value;

use asana_replica_api::{app, config::AppConfig, database::MemoryStore, AppState};

/// Router served in-process on a free port, backed by a fresh memory store.
pub struct TestServer {
    pub port: u16,
    pub base_url: String,
    client: reqwest::Client,
}

impl TestServer {
    pub async fn start() -> Result<Self> {
        Self::start_with(AppConfig::development()).await
    }

    pub async fn start_with(config: AppConfig) -> Result<Self> {
        // Pick an unused port for isolation
        let port = portpicker::pick_unused_port().context("failed to pick free port")?;
        let base_url = format!("http://127.0.0.1:{}", port);

        let listener = tokio::net::TcpListener::bind(("127.0.0.1", port))
            .await
            .context("failed to bind test listener")?;
        let router = app(AppState::new(Arc::new(MemoryStore::new()), config));
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });

        let server = Self {
            port,
            base_url,
            client: reqwest::Client::new(),
        };
        server.wait_ready(Duration::from_secs(5)).await?;
        Ok(server)
    }

    async fn wait_ready(&self, timeout: Duration) -> Result<()> {
        let deadline = Instant::now() + timeout;
        while Instant::now() < deadline {
            if let Ok(resp) = self.client.get(self.url("/health")).send().await {
                if resp.status() == StatusCode::OK {
                    return Ok(());
                }
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        anyhow::bail!("server did not become ready on {} within {:?}", self.base_url, timeout)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub async fn get(&self, path: &str) -> Result<(StatusCode, Value)> {
        read(self.client.get(self.url(path)).send().await?).await
    }

    pub async fn post(&self, path: &str, body: Value) -> Result<(StatusCode, Value)> {
        read(self.client.post(self.url(path)).json(&body).send().await?).await
    }

    pub async fn patch(&self, path: &str, body: Value) -> Result<(StatusCode, Value)> {
        read(self.client.patch(self.url(path)).json(&body).send().await?).await
    }

    pub async fn delete(&self, path: &str) -> Result<(StatusCode, Value)> {
        read(self.client.delete(self.url(path)).send().await?).await
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// POST that must succeed with 201; returns `data`.
    pub async fn create(&self, path: &str, body: Value) -> Result<Value> {
        let (status, body) = self.post(path, body).await?;
        anyhow::ensure!(status == StatusCode::CREATED, "POST {} returned {}: {}", path, status, body);
        Ok(body["data"].clone())
    }

    /// Workspace `ws_1` with project `p_1`, the starting point of most tests.
    pub async fn seed_project(&self) -> Result<()> {
        self.create("/workspaces", serde_json::json!({ "gid": "ws_1", "name": "Main Office" })).await?;
        self.create(
            "/projects",
            serde_json::json!({ "gid": "p_1", "name": "Website Redesign", "workspaceGid": "ws_1" }),
        )
        .await?;
        Ok(())
    }
}

pub async fn read(resp: Response) -> Result<(StatusCode, Value)> {
    let status = resp.status();
    let body = resp.json::<Value>().await.context("response body was not JSON")?;
    Ok((status, body))
}

/// Messages from an error envelope; fails when the shape is wrong.
pub fn error_messages(body: &Value) -> Vec<String> {
    let errors = body["data"]["errors"]
        .as_array()
        .unwrap_or_else(|| panic!("not an error envelope: {}", body));
    assert!(!errors.is_empty(), "error envelope has no errors: {}", body);
    errors
        .iter()
        .map(|e| {
            e["message"]
                .as_str()
                .unwrap_or_else(|| panic!("error without string message: {}", body))
                .to_string()
        })
        .collect()
}
