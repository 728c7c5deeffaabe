//! Outbound ports - Interfaces for external services
//!
//! These ports define the contracts that infrastructure adapters must implement,
//! allowing application services to call server functions and touch the query
//! cache without depending on concrete implementations.

pub mod query_cache_port;
pub mod server_fn_port;

pub use query_cache_port::{CacheError, QueryCachePort};
pub use server_fn_port::ServerFnPort;

#[cfg(any(test, feature = "testing"))]
pub use query_cache_port::MockQueryCachePort;
#[cfg(any(test, feature = "testing"))]
pub use server_fn_port::MockServerFnPort;
