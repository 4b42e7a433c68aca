pub mod errors;
pub mod response;

pub use errors::{normalize_errors, route_not_found};
pub use response::{ApiResponse, ApiResult};
