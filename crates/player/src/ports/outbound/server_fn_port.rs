//! Server Function Port - the remote operation boundary
//!
//! Every adapter calls exactly one named server function with a single
//! `data` object. The port returns the raw JSON body on success; whether that
//! body is a bare payload or a tagged envelope is decided by the adapter.
//!
//! This port uses the shared wire types directly because they are the
//! contract both sides of the boundary agree on.
//!
//! Note: The async method uses `async_trait` instead of returning
//! `Pin<Box<dyn Future>>` for better mockall compatibility.

use async_trait::async_trait;
use serde_json::Value;

use quizdeck_shared::{RequestError, ServerFnRequest};

/// Port for calling server functions
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ServerFnPort: Send + Sync {
    /// Invoke the server function named by `request` and await its body.
    ///
    /// # Returns
    /// * `Ok(Value)` - The decoded JSON body of a successful call
    /// * `Err(RequestError)` - The call failed or the function threw
    async fn call(&self, request: ServerFnRequest) -> Result<Value, RequestError>;
}
