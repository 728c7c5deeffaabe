//! Application layer - adapters, interaction hooks, and query keys

pub mod error;
pub mod interactions;
pub mod query_keys;
pub mod services;

pub use error::{catch, AdapterError, ParseEnvelope};
pub use interactions::{invalidate_on_success, Interactions};
pub use query_keys::QueryKey;
