use anyhow::Result;
use std::path::Path;
use vane_core::config::Settings;
use vane_core::registry::Registry;
use vane_core::{io, paths};

/// Scaffold `.vane/` with a default config and an empty registry.
/// Idempotent: existing files are left untouched.
pub fn run(root: &Path) -> Result<()> {
    io::ensure_dir(&paths::vane_dir(root))?;

    if !paths::config_path(root).exists() {
        Settings::default().save(root)?;
    }
    if !paths::apps_path(root).exists() {
        Registry::default().save(root)?;
    }

    println!("initialized {}", paths::VANE_DIR);
    println!(
        "badge emission is off by default; set badge.enabled in {}",
        paths::CONFIG_FILE
    );
    Ok(())
}
