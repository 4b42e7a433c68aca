//! Request payload validation.
//!
//! Every write endpoint declares a [`Schema`] describing which fields it
//! accepts. A payload is checked against the schema before any service code
//! runs: unknown fields are rejected, required fields must be present, and
//! present fields are type-checked (optionally coerced from strings). The
//! validated object holds only declared fields with defaults filled in.

pub mod error;
pub mod schema;

pub use error::{ValidationErrors, ValidationIssue};
pub use schema::{FieldKind, FieldSpec, Schema};
