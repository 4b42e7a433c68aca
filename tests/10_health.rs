mod common;

use anyhow::Result;
use reqwest::StatusCode;

#[tokio::test]
async fn root_describes_api() -> Result<()> {
    let server = common::TestServer::start().await?;
    let (status, body) = server.get("/").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["name"], "Asana Replica API");
    assert!(body["data"]["resources"].is_array());
    Ok(())
}

#[tokio::test]
async fn health_is_enveloped_once() -> Result<()> {
    let server = common::TestServer::start().await?;
    let (status, body) = server.get("/health").await?;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["status"], "ok");
    assert!(body["data"].get("data").is_none(), "double wrapped: {}", body);
    Ok(())
}

#[tokio::test]
async fn unknown_route_uses_error_envelope() -> Result<()> {
    let server = common::TestServer::start().await?;
    let (status, body) = server.get("/portfolios").await?;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(common::error_messages(&body), vec!["Route GET /portfolios not found"]);
    Ok(())
}
