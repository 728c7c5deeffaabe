//! Tracing setup for the host binary

use std::fmt;

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_LOG_FILTER: &str = "quizdeck_player=debug,dioxus=info";

/// Install the global subscriber. Safe to call more than once; later calls
/// are ignored.
#[cfg(not(target_arch = "wasm32"))]
pub fn init_tracing() {
    use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

    let result = tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| DEFAULT_LOG_FILTER.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .try_init();

    installed(result);
}

#[cfg(target_arch = "wasm32")]
pub fn init_tracing() {
    console_error_panic_hook::set_once();
    installed(tracing_wasm::try_set_as_global_default());
}

/// Whether this call installed the subscriber; a refused install is logged.
fn installed<E: fmt::Display>(result: Result<(), E>) -> bool {
    match result {
        Ok(()) => true,
        Err(error) => {
            tracing::debug!(%error, "Tracing subscriber already installed");
            false
        }
    }
}
