pub mod envelope;
pub mod extract;

pub use envelope::{unwrap_request, Envelope, Payload};
pub use extract::JsonBody;
