//! HTTP transport for server functions (native targets)
//!
//! Each call is a `POST {server_url}/_serverFn/{function}` with body
//! `{"data": ...}`. A 2xx body is returned as JSON (empty means `null`);
//! any other status is a thrown value, carried in [`RequestError::Thrown`].

use async_trait::async_trait;
use reqwest::Client;
use serde_json::{json, Value};

use quizdeck_shared::{RequestError, ServerFnRequest};

use crate::infrastructure::config::PlayerConfig;
use crate::ports::outbound::ServerFnPort;

/// Path segment under which server functions are mounted
pub const SERVER_FN_PREFIX: &str = "_serverFn";

#[derive(Clone)]
pub struct ServerFnClient {
    client: Client,
    base_url: String,
}

impl ServerFnClient {
    pub fn new(config: &PlayerConfig) -> Self {
        let client = Client::builder()
            .timeout(config.request_timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            base_url: config.server_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn endpoint(&self, function: &str) -> String {
        format!("{}/{}/{}", self.base_url, SERVER_FN_PREFIX, function)
    }
}

fn map_send_error(e: reqwest::Error) -> RequestError {
    if e.is_timeout() {
        RequestError::Timeout
    } else {
        RequestError::Transport(e.to_string())
    }
}

/// Parse a 2xx body. Functions returning nothing answer with an empty body.
pub fn decode_body(text: &str) -> Result<Value, RequestError> {
    if text.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(text).map_err(|e| RequestError::Decode(e.to_string()))
}

/// Turn a non-2xx response into the value the server function threw.
///
/// JSON bodies are kept as-is. Plain text is wrapped as `{ "message": text }`
/// so it still reads as an error; an empty body throws `null`.
pub fn classify_failure(status: u16, text: &str) -> RequestError {
    let trimmed = text.trim();
    let value = if trimmed.is_empty() {
        Value::Null
    } else {
        serde_json::from_str(trimmed).unwrap_or_else(|_| json!({ "message": trimmed }))
    };
    RequestError::Thrown { status, value }
}

#[async_trait]
impl ServerFnPort for ServerFnClient {
    async fn call(&self, request: ServerFnRequest) -> Result<Value, RequestError> {
        let function = request.function_name();
        let data = request
            .data()
            .map_err(|e| RequestError::Serialization(e.to_string()))?;

        tracing::debug!(function, "Calling server function");

        let response = self
            .client
            .post(self.endpoint(function))
            .json(&json!({ "data": data }))
            .send()
            .await
            .map_err(map_send_error)?;

        let status = response.status();
        let text = response.text().await.map_err(map_send_error)?;

        if !status.is_success() {
            tracing::warn!(function, status = status.as_u16(), "Server function threw");
            return Err(classify_failure(status.as_u16(), &text));
        }

        decode_body(&text)
    }
}
