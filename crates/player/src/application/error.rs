//! Adapter error handling
//!
//! Server functions answer in one of two protocols:
//! - **explicit-result**: the body is a [`WireResult`] envelope; business
//!   failures arrive as `Failure` and are passed through unchanged
//! - **exception-style**: the body is the bare payload; any failure is a
//!   thrown value surfacing as a [`RequestError`]
//!
//! Either way an adapter never hands a raw error to its caller. Whatever goes
//! wrong inside it becomes an [`AdapterError`], and [`catch`] normalizes that
//! into a `Failure` carrying the feature's `FETCH_ERROR` code.

use serde_json::Value;
use thiserror::Error;

use quizdeck_domain::{decode, SchemaDecode, SchemaViolations};
use quizdeck_shared::{ErrorVocabulary, RequestError, WireError, WireResult};

/// Failure inside an adapter, before normalization
#[derive(Debug, Clone, Error)]
pub enum AdapterError {
    #[error(transparent)]
    Request(#[from] RequestError),
    #[error(transparent)]
    Schema(#[from] SchemaViolations),
    /// Body claimed to be an envelope but was not one
    #[error("Malformed response envelope: {0}")]
    MalformedEnvelope(String),
    /// Exception-style wrapper around an envelope that came back `Failure`
    #[error("{0}")]
    RemoteFailure(String),
}

impl AdapterError {
    /// Message to surface in the normalized error, `None` when the failure
    /// was not error-shaped.
    pub fn message(&self) -> Option<String> {
        match self {
            AdapterError::Request(e) => e.error_message(),
            other => Some(other.to_string()),
        }
    }
}

/// Normalize an adapter outcome into the wire envelope.
pub fn catch<T, C: ErrorVocabulary>(outcome: Result<T, AdapterError>) -> WireResult<T, WireError<C>> {
    match outcome {
        Ok(value) => WireResult::success(value),
        Err(err) => {
            tracing::warn!(error = %err, "Server function call failed");
            WireResult::failure(WireError::fetch_error(err.message()))
        }
    }
}

/// Pull one field out of a JSON object payload.
pub fn take_field(mut value: Value, field: &str) -> Result<Value, AdapterError> {
    value
        .get_mut(field)
        .map(Value::take)
        .ok_or_else(|| AdapterError::MalformedEnvelope(format!("missing `{field}` in payload")))
}

fn split_envelope<C: ErrorVocabulary>(
    body: Value,
) -> Result<WireResult<Value, WireError<C>>, AdapterError> {
    serde_json::from_value(body).map_err(|e| AdapterError::MalformedEnvelope(e.to_string()))
}

/// Helper trait for turning a server-function response into typed data
pub trait ParseEnvelope {
    /// Explicit-result protocol: decode the `Success` value, pass a
    /// `Failure` through unchanged.
    fn into_envelope<T: SchemaDecode, C: ErrorVocabulary>(self) -> WireResult<T, WireError<C>>;

    /// Explicit-result protocol for operations whose success carries no data.
    fn into_empty_envelope<C: ErrorVocabulary>(self) -> WireResult<(), WireError<C>>;

    /// Exception-style protocol: the body is the payload itself.
    fn into_payload<T: SchemaDecode, C: ErrorVocabulary>(self) -> WireResult<T, WireError<C>>;

    /// Exception-style protocol where `null` means "nothing there".
    fn into_optional_payload<T: SchemaDecode, C: ErrorVocabulary>(
        self,
    ) -> WireResult<Option<T>, WireError<C>>;

    /// Exception-style wrapper over an envelope: `Success` unwraps to its
    /// value, `Failure` is raised as a generic [`AdapterError::RemoteFailure`]
    /// carrying `context`, to be normalized later by [`catch`].
    fn unwrap_envelope<C: ErrorVocabulary>(self, context: &str) -> Result<Value, AdapterError>;
}

impl ParseEnvelope for Result<Value, RequestError> {
    fn into_envelope<T: SchemaDecode, C: ErrorVocabulary>(self) -> WireResult<T, WireError<C>> {
        let envelope = self
            .map_err(AdapterError::from)
            .and_then(split_envelope::<C>);

        match envelope {
            Ok(WireResult::Success { value }) => catch(decode::<T>(value).map_err(Into::into)),
            Ok(WireResult::Failure { error }) => {
                tracing::debug!(code = %error.code.as_str(), message = %error.message, "Server function returned failure");
                WireResult::failure(error)
            }
            Err(err) => catch(Err(err)),
        }
    }

    fn into_empty_envelope<C: ErrorVocabulary>(self) -> WireResult<(), WireError<C>> {
        let envelope = self
            .map_err(AdapterError::from)
            .and_then(split_envelope::<C>);

        match envelope {
            Ok(WireResult::Success { .. }) => WireResult::success(()),
            Ok(WireResult::Failure { error }) => WireResult::failure(error),
            Err(err) => catch(Err(err)),
        }
    }

    fn into_payload<T: SchemaDecode, C: ErrorVocabulary>(self) -> WireResult<T, WireError<C>> {
        catch(
            self.map_err(AdapterError::from)
                .and_then(|body| decode::<T>(body).map_err(Into::into)),
        )
    }

    fn into_optional_payload<T: SchemaDecode, C: ErrorVocabulary>(
        self,
    ) -> WireResult<Option<T>, WireError<C>> {
        catch(self.map_err(AdapterError::from).and_then(|body| match body {
            Value::Null => Ok(None),
            body => decode::<T>(body).map(Some).map_err(Into::into),
        }))
    }

    fn unwrap_envelope<C: ErrorVocabulary>(self, context: &str) -> Result<Value, AdapterError> {
        match split_envelope::<C>(self?)? {
            WireResult::Success { value } => Ok(value),
            WireResult::Failure { error } => {
                tracing::debug!(code = %error.code.as_str(), message = %error.message, "Discarding remote failure");
                Err(AdapterError::RemoteFailure(context.to_string()))
            }
        }
    }
}
