//! Client-side request errors
//!
//! These are failures of the call itself (transport, server crash, a thrown
//! value), distinct from business failures which arrive as a `Failure`
//! envelope inside a successful response.

use serde_json::Value;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum RequestError {
    /// Connection refused, DNS failure, TLS failure, ...
    #[error("Transport error: {0}")]
    Transport(String),
    /// Request timed out waiting for response
    #[error("Request timed out")]
    Timeout,
    /// The server function threw; `value` is whatever it threw
    #[error("Server function failed with status {status}")]
    Thrown { status: u16, value: Value },
    /// Response body was not valid JSON
    #[error("Failed to decode response: {0}")]
    Decode(String),
    /// Failed to serialize request
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl RequestError {
    /// Message of an error-shaped failure.
    ///
    /// Thrown values count as error-shaped only when they are objects with a
    /// string `message`; anything else (plain strings, `null`, numbers)
    /// yields `None` so callers fall back to a generic message.
    pub fn error_message(&self) -> Option<String> {
        match self {
            RequestError::Thrown { value, .. } => value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_string),
            other => Some(other.to_string()),
        }
    }
}
