mod common;

use anyhow::Result;
use asana_replica_api::config::AppConfig;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn enveloped_and_bare_bodies_are_equivalent() -> Result<()> {
    let server = common::TestServer::start().await?;

    let bare = server.create("/workspaces", json!({ "name": "Bare" })).await?;
    let wrapped = server.create("/workspaces", json!({ "data": { "name": "Wrapped" } })).await?;
    assert_eq!(bare["name"], "Bare");
    assert_eq!(wrapped["name"], "Wrapped");
    Ok(())
}

#[tokio::test]
async fn unknown_fields_are_rejected() -> Result<()> {
    let server = common::TestServer::start().await?;
    let (status, body) = server
        .post("/workspaces", json!({ "name": "Main", "owner": "me" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::error_messages(&body), vec!["property owner should not exist"]);
    Ok(())
}

#[tokio::test]
async fn non_object_body_is_rejected_once() -> Result<()> {
    let server = common::TestServer::start().await?;
    let (status, body) = server.post("/workspaces", json!(["Main"])).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::error_messages(&body), vec!["request body must be a JSON object"]);
    Ok(())
}

#[tokio::test]
async fn framework_rejections_keep_status_and_shape() -> Result<()> {
    let server = common::TestServer::start().await?;

    let resp = server
        .client()
        .post(server.url("/workspaces"))
        .header("content-type", "application/json")
        .body("{ broken")
        .send()
        .await?;
    let (status, body) = common::read(resp).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    common::error_messages(&body);

    let resp = server
        .client()
        .post(server.url("/workspaces"))
        .body(r#"{"name":"x"}"#)
        .send()
        .await?;
    let (status, body) = common::read(resp).await?;
    assert_eq!(status, StatusCode::UNSUPPORTED_MEDIA_TYPE);
    common::error_messages(&body);

    let (status, body) = server.delete("/workspaces").await?;
    assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    common::error_messages(&body);

    let (status, body) = server.get("/workspaces?offset=-1").await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    common::error_messages(&body);
    Ok(())
}

#[tokio::test]
async fn oversized_body_is_413_envelope() -> Result<()> {
    let mut config = AppConfig::development();
    config.api.max_request_size_bytes = 64;
    let server = common::TestServer::start_with(config).await?;

    let (status, body) = server
        .post("/workspaces", json!({ "name": "x".repeat(256) }))
        .await?;
    assert_eq!(status, StatusCode::PAYLOAD_TOO_LARGE);
    common::error_messages(&body);
    Ok(())
}

#[tokio::test]
async fn page_limit_is_clamped() -> Result<()> {
    let mut config = AppConfig::development();
    config.api.max_page_limit = 2;
    let server = common::TestServer::start_with(config).await?;
    for name in ["a", "b", "c"] {
        server.create("/workspaces", json!({ "name": name })).await?;
    }

    let (_, body) = server.get("/workspaces?limit=50").await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(2));
    Ok(())
}
