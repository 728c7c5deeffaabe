//! Infrastructure adapters - concrete implementations of the outbound ports
//! plus process setup (configuration, logging).

pub mod config;
#[cfg(not(target_arch = "wasm32"))]
pub mod http_client;
pub mod logging;
pub mod query_cache;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use config::{load_dotenv, ConfigError, PlayerConfig};
#[cfg(not(target_arch = "wasm32"))]
pub use http_client::ServerFnClient;
pub use logging::init_tracing;
pub use query_cache::{CacheEntry, InMemoryQueryCache};
