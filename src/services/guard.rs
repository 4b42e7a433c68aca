use tracing::{debug, warn};

use super::{ServiceError, ServiceResult};
use crate::database::{Entity, Repository};

/// Resolve a referenced parent before a dependent entity is created.
///
/// Returns the parent so callers can copy fields from it. Absence is a
/// business-rule failure (`MissingReferent`), not a lookup miss.
pub async fn require<T: Entity>(repo: &Repository<T>, gid: &str) -> ServiceResult<T> {
    match repo.select_one(gid).await? {
        Some(parent) => {
            debug!("Referent {} {} found", T::KIND, gid);
            Ok(parent)
        }
        None => {
            warn!("Referent {} {} does not exist", T::KIND, gid);
            Err(ServiceError::MissingReferent {
                kind: T::KIND,
                gid: gid.to_string(),
            })
        }
    }
}

/// Resolve the parent addressed by a nested route (`/projects/:gid/tasks`).
///
/// Here a miss is a 404 on the path, not a creation failure.
pub async fn require_path<T: Entity>(repo: &Repository<T>, gid: &str) -> ServiceResult<T> {
    Ok(repo.select_404(gid).await?)
}
