use anyhow::Result;
use std::path::Path;
use vane_core::badge;
use vane_server::routes::badge::{badge_spec, BadgeParams};
use vane_server::state::AppState;

/// Render a badge through the same pipeline the server uses and print the
/// SVG to stdout. A disabled feature or an unknown application prints the
/// Unknown badge, exactly as the endpoint would serve it.
pub fn run(root: &Path, name: Option<&str>, project: Option<&str>, revision: bool) -> Result<()> {
    let state = AppState::from_root(root);
    let params = BadgeParams {
        name: name.map(str::to_string),
        project: project.map(str::to_string),
        revision: revision.then(|| "true".to_string()),
    };

    let spec = badge_spec(&state, &params);
    print!("{}", badge::render(&spec));
    Ok(())
}
