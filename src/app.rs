//! Router assembly.

use axum::{
    extract::DefaultBodyLimit,
    http::HeaderValue,
    middleware,
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

use crate::config::SecurityConfig;
use crate::middleware::{normalize_errors, route_not_found};
use crate::routes::{
    goals, memberships, projects, sections, stories, system, tags, tasks, teams, users, workspaces,
};
use crate::state::AppState;

/// Build the full application with its middleware stack.
pub fn app(state: AppState) -> Router {
    let body_limit = state.config.api.max_request_size_bytes;
    let cors = cors_layer(&state.config.security);

    let router = Router::new()
        .route("/", get(system::root))
        .route("/health", get(system::health))
        .merge(workspace_routes())
        .merge(project_routes())
        .merge(task_routes())
        .merge(resource_routes())
        .merge(membership_routes())
        .fallback(route_not_found)
        .with_state(state)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(normalize_errors))
        .layer(TraceLayer::new_for_http());

    match cors {
        Some(cors) => router.layer(cors),
        None => router,
    }
}

fn workspace_routes() -> Router<AppState> {
    Router::new()
        .route("/workspaces", get(workspaces::list).post(workspaces::create))
        .route("/workspaces/:gid", get(workspaces::get))
        .route("/workspaces/:gid/projects", get(workspaces::projects))
        .route("/workspaces/:gid/teams", get(workspaces::teams))
        .route("/workspaces/:gid/tags", get(workspaces::tags))
        .route("/workspaces/:gid/goals", get(workspaces::goals))
        .route("/workspaces/:gid/workspace-memberships", get(workspaces::memberships))
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/projects", get(projects::list).post(projects::create))
        .route("/projects/:gid", get(projects::get))
        .route("/projects/:gid/tasks", get(projects::tasks))
        .route("/projects/:gid/sections", get(projects::sections))
}

fn task_routes() -> Router<AppState> {
    Router::new()
        .route("/tasks", get(tasks::list).post(tasks::create))
        .route(
            "/tasks/:gid",
            get(tasks::get).patch(tasks::update).delete(tasks::delete),
        )
        .route("/tasks/:gid/stories", get(tasks::stories))
}

fn resource_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(users::list).post(users::create))
        .route("/users/:gid", get(users::get))
        .route("/teams", get(teams::list).post(teams::create))
        .route("/teams/:gid", get(teams::get))
        .route("/teams/:gid/team-memberships", get(teams::memberships))
        .route("/tags", get(tags::list).post(tags::create))
        .route("/tags/:gid", get(tags::get))
        .route("/sections", get(sections::list).post(sections::create))
        .route("/sections/:gid", get(sections::get))
        .route("/goals", get(goals::list).post(goals::create))
        .route("/goals/:gid", get(goals::get))
        .route("/stories", get(stories::list).post(stories::create))
        .route("/stories/:gid", get(stories::get))
}

fn membership_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/workspace-memberships",
            get(memberships::list_workspace_memberships)
                .post(memberships::create_workspace_membership),
        )
        .route(
            "/workspace-memberships/:gid",
            get(memberships::get_workspace_membership),
        )
        .route(
            "/team-memberships",
            get(memberships::list_team_memberships).post(memberships::create_team_membership),
        )
        .route("/team-memberships/:gid", get(memberships::get_team_membership))
}

/// `None` when CORS is disabled. An empty origin list allows any origin.
fn cors_layer(security: &SecurityConfig) -> Option<CorsLayer> {
    if !security.enable_cors {
        return None;
    }
    if security.cors_origins.is_empty() {
        return Some(CorsLayer::permissive());
    }

    let origins: Vec<HeaderValue> = security
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    Some(
        CorsLayer::permissive().allow_origin(AllowOrigin::list(origins)),
    )
}
