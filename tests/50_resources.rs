mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn workspace_scoped_resources() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.create("/workspaces", json!({ "gid": "ws_1", "name": "Main" })).await?;

    let team = server
        .create("/teams", json!({ "gid": "team_1", "name": "Design", "workspaceGid": "ws_1" }))
        .await?;
    assert_eq!(team["workspaceGid"], "ws_1");
    let tag = server
        .create("/tags", json!({ "name": "urgent", "workspaceGid": "ws_1", "color": "red" }))
        .await?;
    assert_eq!(tag["color"], "red");
    server
        .create("/goals", json!({ "name": "Ship v2", "workspaceGid": "ws_1" }))
        .await?;

    for path in ["/workspaces/ws_1/teams", "/workspaces/ws_1/tags", "/workspaces/ws_1/goals"] {
        let (status, body) = server.get(path).await?;
        assert_eq!(status, StatusCode::OK, "{}", path);
        assert_eq!(body["data"].as_array().map(Vec::len), Some(1), "{}", path);
    }

    for path in ["/teams", "/tags", "/goals"] {
        let (status, body) = server
            .post(path, json!({ "name": "Nope", "workspaceGid": "ws_404" }))
            .await?;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{}", path);
        assert_eq!(common::error_messages(&body), vec!["Workspace ws_404 does not exist"]);
    }

    let (status, _) = server.get("/workspaces/ws_404/goals").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn users_require_valid_email() -> Result<()> {
    let server = common::TestServer::start().await?;

    let (status, body) = server.post("/users", json!({ "name": "Ada", "email": "ada" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::error_messages(&body), vec!["email must be an email"]);

    let (status, body) = server.post("/users", json!({ "email": "not-an-address" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        common::error_messages(&body),
        vec!["name is required", "email must be an email"]
    );

    let user = server
        .create("/users", json!({ "name": "Ada", "email": "ada@example.com" }))
        .await?;
    let gid = user["gid"].as_str().unwrap_or_default().to_string();
    assert_eq!(gid.len(), 32);

    let (status, body) = server.get(&format!("/users/{}", gid)).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["email"], "ada@example.com");
    Ok(())
}

#[tokio::test]
async fn memberships_link_users() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.create("/workspaces", json!({ "gid": "ws_1", "name": "Main" })).await?;
    server
        .create("/teams", json!({ "gid": "team_1", "name": "Core", "workspaceGid": "ws_1" }))
        .await?;
    server
        .create("/users", json!({ "gid": "u_1", "name": "Ada", "email": "ada@example.com" }))
        .await?;

    let wm = server
        .create("/workspace-memberships", json!({ "userGid": "u_1", "workspaceGid": "ws_1" }))
        .await?;
    assert_eq!(wm["role"], "member");

    let (status, body) = server
        .post("/workspace-memberships", json!({ "userGid": "u_1", "workspaceGid": "ws_1" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(common::error_messages(&body)[0].contains("already a member"));

    let tm = server
        .create(
            "/team-memberships",
            json!({ "userGid": "u_1", "teamGid": "team_1", "role": "admin" }),
        )
        .await?;
    assert_eq!(tm["role"], "admin");

    let (status, body) = server
        .post("/team-memberships", json!({ "userGid": "u_1", "teamGid": "team_1", "role": "owner" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::error_messages(&body), vec!["role must be one of: member, admin, guest"]);

    let (_, body) = server.get("/workspaces/ws_1/workspace-memberships").await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    let (_, body) = server.get("/teams/team_1/team-memberships").await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    let (_, body) = server.get("/team-memberships?user=u_1").await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    let (status, _) = server
        .get(&format!("/workspace-memberships/{}", wm["gid"].as_str().unwrap_or_default()))
        .await?;
    assert_eq!(status, StatusCode::OK);
    Ok(())
}
