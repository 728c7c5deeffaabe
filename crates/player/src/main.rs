//! Quizdeck Player - composition root binary.

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;

use quizdeck_player::infrastructure::{
    init_tracing, load_dotenv, InMemoryQueryCache, PlayerConfig, ServerFnClient,
};
use quizdeck_player::runner::{run, RunnerDeps};

fn main() -> anyhow::Result<()> {
    let repo_root = Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..");
    let env_files = load_dotenv(&repo_root);

    init_tracing();
    tracing::info!(env_files = env_files.len(), "Starting Quizdeck Player");

    let config = PlayerConfig::from_env().context("invalid player configuration")?;
    tracing::info!(server_url = %config.server_url, "Using server");

    run(RunnerDeps {
        server: Arc::new(ServerFnClient::new(&config)),
        cache: Arc::new(InMemoryQueryCache::new()),
    });

    Ok(())
}
