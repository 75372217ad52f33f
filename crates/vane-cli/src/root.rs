use std::path::{Path, PathBuf};
use vane_core::paths;

/// Walk upward from `from` to the first ancestor containing `marker`.
fn ascend(from: &Path, marker: &str) -> Option<PathBuf> {
    let mut dir = from.to_path_buf();
    loop {
        if dir.join(marker).is_dir() {
            return Some(dir);
        }
        dir = dir.parent()?.to_path_buf();
    }
}

/// Resolve the vane installation root.
///
/// Priority: the `--root` flag / `VANE_ROOT` env var, then the nearest
/// ancestor with a `.vane/` directory, then the nearest ancestor with
/// `.git/`, and finally the current directory itself.
pub fn resolve_root(explicit: Option<&Path>) -> PathBuf {
    if let Some(p) = explicit {
        return p.to_path_buf();
    }

    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    ascend(&cwd, paths::VANE_DIR)
        .or_else(|| ascend(&cwd, ".git"))
        .unwrap_or(cwd)
}
