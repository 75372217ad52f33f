use anyhow::Result;
use std::path::Path;
use vane_core::config::Settings;
use vane_server::state::AppState;

/// Start the badge HTTP server for the registry under `root`.
pub fn run(root: &Path, port: u16) -> Result<()> {
    // Surface a clear error before binding when the root was never
    // initialized. Per-request reads still fail closed after startup.
    Settings::load(root)?;

    let state = AppState::from_root(root);
    let rt = tokio::runtime::Runtime::new()?;

    rt.block_on(async move {
        tokio::select! {
            res = vane_server::serve(state, port) => res,
            _ = tokio::signal::ctrl_c() => Ok(()),
        }
    })
}
