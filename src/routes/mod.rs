// routes/mod.rs - one module per resource, mounted by `app::router`
//
// Handlers only extract, call a service, and wrap the result. Validation and
// parent checks live in `services`.

pub mod goals;
pub mod memberships;
pub mod projects;
pub mod sections;
pub mod stories;
pub mod system;
pub mod tags;
pub mod tasks;
pub mod teams;
pub mod users;
pub mod workspaces;

use serde::Deserialize;

/// `?limit=&offset=` accepted by every list endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}
