//! Event Sink Implementations
//!
//! - JsonEventSink: NDJSON output for scripting
//! - The console sink lives with the binary's UI code

mod json;

pub use json::{event_to_json, JsonEventSink};
