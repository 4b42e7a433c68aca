//! The `{ "data": ... }` wire envelope.
//!
//! Success bodies go through [`Payload::into_envelope`]. Whether a body is
//! already enveloped is carried by the [`Payload`] variant, never guessed from
//! the JSON shape, so an entity that happens to own a `data` field is still
//! wrapped exactly once.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Wire container for every response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub data: T,
}

impl<T> Envelope<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A handler result on its way to the wire.
#[derive(Debug, Clone, PartialEq)]
pub enum Payload {
    /// Bare result that still needs wrapping.
    Plain(Value),
    /// Contents of an envelope the handler already built.
    Enveloped(Value),
}

impl Payload {
    /// Wrap plain results, pass enveloped ones through untouched.
    pub fn into_envelope(self) -> Envelope<Value> {
        match self {
            Payload::Plain(value) => Envelope::new(value),
            Payload::Enveloped(data) => Envelope::new(data),
        }
    }
}

impl From<Envelope<Value>> for Payload {
    fn from(envelope: Envelope<Value>) -> Self {
        Payload::Enveloped(envelope.data)
    }
}

/// Strip the request-side envelope the vendor contract uses.
///
/// Only an object whose single key is `data` holding an object is unwrapped;
/// anything else is returned as-is for the validator to judge.
pub fn unwrap_request(body: Value) -> Value {
    match body {
        Value::Object(mut map) if map.len() == 1 && map.get("data").is_some_and(Value::is_object) => {
            map.remove("data").unwrap_or(Value::Null)
        }
        other => other,
    }
}
