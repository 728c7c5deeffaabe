use std::sync::Arc;

use crate::ports::outbound::{QueryCachePort, ServerFnPort};
use crate::ui::Services;

pub struct RunnerDeps {
    pub server: Arc<dyn ServerFnPort>,
    pub cache: Arc<dyn QueryCachePort>,
}

impl RunnerDeps {
    pub fn into_services(self) -> Services {
        Services::new(self.server, self.cache)
    }
}

/// Launch the UI with the chosen renderer.
#[cfg(any(feature = "desktop", feature = "web"))]
pub fn run(deps: RunnerDeps) {
    dioxus::LaunchBuilder::new()
        .with_context(deps.into_services())
        .launch(crate::ui::app);
}
