mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn orphan_task_is_rejected_and_not_stored() -> Result<()> {
    let server = common::TestServer::start().await?;
    let (status, body) = server
        .post(
            "/tasks",
            json!({ "gid": "task_orphan", "name": "Orphan", "projectGid": "does_not_exist" }),
        )
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::error_messages(&body), vec!["Project does_not_exist does not exist"]);

    let (status, body) = server.get("/tasks/task_orphan").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    common::error_messages(&body);
    Ok(())
}

#[tokio::test]
async fn task_copies_workspace_and_defaults() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.seed_project().await?;

    let task = server
        .create(
            "/tasks",
            json!({ "name": "Design homepage", "projectGid": "p_1", "dueOn": "2026-11-01" }),
        )
        .await?;
    assert_eq!(task["workspaceGid"], "ws_1");
    assert_eq!(task["completed"], false);
    assert_eq!(task["completedAt"], json!(null));
    assert_eq!(task["dueOn"], "2026-11-01");
    Ok(())
}

#[tokio::test]
async fn task_validation_reports_every_problem() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.seed_project().await?;

    let (status, body) = server
        .post("/tasks", json!({ "completed": "maybe", "dueOn": "tomorrow", "priority": 1 }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    let messages = common::error_messages(&body);
    assert_eq!(
        messages,
        vec![
            "property priority should not exist",
            "name is required",
            "projectGid is required",
            "completed must be a boolean value",
            "dueOn must be a valid date (YYYY-MM-DD)",
        ]
    );
    Ok(())
}

#[tokio::test]
async fn mismatched_workspace_is_rejected() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.seed_project().await?;
    server.create("/workspaces", json!({ "gid": "ws_2", "name": "Other" })).await?;

    let (status, body) = server
        .post("/tasks", json!({ "name": "x", "projectGid": "p_1", "workspaceGid": "ws_2" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(common::error_messages(&body)[0].contains("does not match"));
    Ok(())
}

#[tokio::test]
async fn patch_completes_and_delete_removes() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.seed_project().await?;
    server
        .create("/tasks", json!({ "gid": "t_1", "name": "Write copy", "projectGid": "p_1" }))
        .await?;

    let (status, body) = server
        .patch("/tasks/t_1", json!({ "data": { "completed": "true", "notes": "done early" } }))
        .await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["completed"], true);
    assert!(body["data"]["completedAt"].is_string());
    assert_eq!(body["data"]["notes"], "done early");
    assert_eq!(body["data"]["name"], "Write copy");

    let (status, body) = server.patch("/tasks/t_1", json!({ "gid": "t_2" })).await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::error_messages(&body), vec!["property gid should not exist"]);

    let (status, body) = server.delete("/tasks/t_1").await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "data": {} }));

    let (status, _) = server.get("/tasks/t_1").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server.delete("/tasks/t_1").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = server.patch("/tasks/t_1", json!({ "completed": false })).await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn patch_null_clears_notes_and_reports_all_problems() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.seed_project().await?;
    server
        .create(
            "/tasks",
            json!({ "gid": "t_1", "name": "Write copy", "projectGid": "p_1", "notes": "draft" }),
        )
        .await?;

    let (status, body) = server
        .patch("/tasks/t_1", json!({ "name": "", "completed": "maybe" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        common::error_messages(&body),
        vec!["name should not be empty", "completed must be a boolean value"]
    );

    let (status, body) = server.patch("/tasks/t_1", json!({ "notes": null })).await?;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["notes"], json!(null));
    assert_eq!(body["data"]["name"], "Write copy");
    Ok(())
}

#[tokio::test]
async fn task_filters() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.seed_project().await?;
    server
        .create("/projects", json!({ "gid": "p_2", "name": "Launch", "workspaceGid": "ws_1" }))
        .await?;
    server.create("/tasks", json!({ "name": "a", "projectGid": "p_1" })).await?;
    server
        .create("/tasks", json!({ "name": "b", "projectGid": "p_1", "completed": true }))
        .await?;
    server.create("/tasks", json!({ "name": "c", "projectGid": "p_2" })).await?;

    let count = |body: &serde_json::Value| body["data"].as_array().map(Vec::len);

    let (_, body) = server.get("/tasks?project=p_1").await?;
    assert_eq!(count(&body), Some(2));
    let (_, body) = server.get("/tasks?projectGid=p_2").await?;
    assert_eq!(count(&body), Some(1));
    let (_, body) = server.get("/tasks?workspace=ws_1&completed=true").await?;
    assert_eq!(count(&body), Some(1));
    let (_, body) = server.get("/projects/p_1/tasks").await?;
    assert_eq!(count(&body), Some(2));

    let (status, _) = server.get("/projects/p_404/tasks").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}

#[tokio::test]
async fn stories_on_a_task() -> Result<()> {
    let server = common::TestServer::start().await?;
    server.seed_project().await?;
    server
        .create("/tasks", json!({ "gid": "t_1", "name": "Review", "projectGid": "p_1" }))
        .await?;
    server
        .create("/users", json!({ "gid": "u_1", "name": "Ada", "email": "ada@example.com" }))
        .await?;

    let story = server
        .create("/stories", json!({ "text": "Looks good", "taskGid": "t_1", "createdByGid": "u_1" }))
        .await?;
    assert_eq!(story["createdByGid"], "u_1");

    let (status, body) = server
        .post("/stories", json!({ "text": "?", "taskGid": "t_1", "createdByGid": "u_9" }))
        .await?;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(common::error_messages(&body), vec!["User u_9 does not exist"]);

    let (_, body) = server.get("/tasks/t_1/stories").await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));
    let (_, body) = server.get("/stories?taskGid=t_1").await?;
    assert_eq!(body["data"].as_array().map(Vec::len), Some(1));

    // Stories outlive their task
    server.delete("/tasks/t_1").await?;
    let (status, _) = server.get(&format!("/stories/{}", story["gid"].as_str().unwrap())).await?;
    assert_eq!(status, StatusCode::OK);
    let (status, _) = server.get("/tasks/t_1/stories").await?;
    assert_eq!(status, StatusCode::NOT_FOUND);
    Ok(())
}
