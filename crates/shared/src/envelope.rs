//! Wire envelope returned by every server function
//!
//! Failures are plain tagged data rather than exceptions so they survive a
//! serialization round-trip unchanged:
//!
//! ```json
//! {"_tag": "Success", "value": {...}}
//! {"_tag": "Failure", "error": {"code": "invalid_token", "message": "..."}}
//! ```

use serde::{Deserialize, Serialize};

/// Result of a server-function call in its serializable form
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "_tag")]
pub enum WireResult<T, E> {
    Success { value: T },
    Failure { error: E },
}

impl<T, E> WireResult<T, E> {
    pub fn success(value: T) -> Self {
        WireResult::Success { value }
    }

    pub fn failure(error: E) -> Self {
        WireResult::Failure { error }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, WireResult::Success { .. })
    }

    pub fn is_failure(&self) -> bool {
        matches!(self, WireResult::Failure { .. })
    }

    pub fn as_ref(&self) -> WireResult<&T, &E> {
        match self {
            WireResult::Success { value } => WireResult::Success { value },
            WireResult::Failure { error } => WireResult::Failure { error },
        }
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> WireResult<U, E> {
        match self {
            WireResult::Success { value } => WireResult::Success { value: f(value) },
            WireResult::Failure { error } => WireResult::Failure { error },
        }
    }

    pub fn map_error<F>(self, f: impl FnOnce(E) -> F) -> WireResult<T, F> {
        match self {
            WireResult::Success { value } => WireResult::Success { value },
            WireResult::Failure { error } => WireResult::Failure { error: f(error) },
        }
    }

    pub fn into_result(self) -> Result<T, E> {
        self.into()
    }
}

impl<T, E> From<Result<T, E>> for WireResult<T, E> {
    fn from(result: Result<T, E>) -> Self {
        match result {
            Ok(value) => WireResult::Success { value },
            Err(error) => WireResult::Failure { error },
        }
    }
}

impl<T, E> From<WireResult<T, E>> for Result<T, E> {
    fn from(result: WireResult<T, E>) -> Self {
        match result {
            WireResult::Success { value } => Ok(value),
            WireResult::Failure { error } => Err(error),
        }
    }
}
