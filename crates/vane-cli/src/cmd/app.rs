use crate::output::{print_apps, print_json};
use anyhow::Result;
use clap::Subcommand;
use std::path::Path;
use vane_core::registry::Registry;
use vane_core::types::{Application, SyncResult};
use vane_core::{paths, VaneError};

// ---------------------------------------------------------------------------
// Subcommand definition
// ---------------------------------------------------------------------------

#[derive(Subcommand, Debug)]
pub enum AppSubcommand {
    /// Track a new application
    Add {
        name: String,
        /// Project label used for aggregate badges
        #[arg(long, default_value = "default")]
        project: String,
    },
    /// List tracked applications
    List,
    /// Record an application's observed status
    Set {
        name: String,
        /// healthy | progressing | degraded | suspended | missing | unknown
        #[arg(long)]
        health: Option<String>,
        /// synced | out_of_sync | unknown
        #[arg(long)]
        sync: Option<String>,
        /// Revision applied by the last sync
        #[arg(long)]
        revision: Option<String>,
    },
    /// Stop tracking an application
    Remove { name: String },
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn run(root: &Path, subcommand: AppSubcommand, json: bool) -> Result<()> {
    match subcommand {
        AppSubcommand::Add { name, project } => run_add(root, &name, &project, json),
        AppSubcommand::List => run_list(root, json),
        AppSubcommand::Set {
            name,
            health,
            sync,
            revision,
        } => run_set(
            root,
            &name,
            health.as_deref(),
            sync.as_deref(),
            revision,
            json,
        ),
        AppSubcommand::Remove { name } => run_remove(root, &name),
    }
}

// ---------------------------------------------------------------------------
// add
// ---------------------------------------------------------------------------

fn run_add(root: &Path, name: &str, project: &str, json: bool) -> Result<()> {
    paths::validate_name(name)?;
    paths::validate_name(project)?;

    let mut registry = Registry::load(root)?;
    if registry.get(name).is_some() {
        return Err(VaneError::AppExists(name.to_string()).into());
    }
    let app = Application::new(name, project);
    registry.applications.push(app.clone());
    registry.save(root)?;

    if json {
        print_json(&app)?;
    } else {
        println!("added {name} (project {project})");
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

fn run_list(root: &Path, json: bool) -> Result<()> {
    let registry = Registry::load(root)?;

    if json {
        return print_json(&registry.applications);
    }

    print_apps(&registry.applications);
    Ok(())
}

// ---------------------------------------------------------------------------
// set
// ---------------------------------------------------------------------------

fn run_set(
    root: &Path,
    name: &str,
    health: Option<&str>,
    sync: Option<&str>,
    revision: Option<String>,
    json: bool,
) -> Result<()> {
    let mut registry = Registry::load(root)?;
    let app = registry
        .get_mut(name)
        .ok_or_else(|| VaneError::AppNotFound(name.to_string()))?;

    if let Some(health) = health {
        app.health = health.parse()?;
    }
    if let Some(sync) = sync {
        app.sync = sync.parse()?;
    }
    if let Some(revision) = revision {
        app.last_sync = Some(SyncResult { revision });
    }

    let updated = app.clone();
    registry.save(root)?;

    if json {
        print_json(&updated)?;
    } else {
        println!(
            "{}: {} / {}{}",
            updated.name,
            updated.health,
            updated.sync,
            updated
                .revision()
                .map(|r| format!(" ({r})"))
                .unwrap_or_default()
        );
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// remove
// ---------------------------------------------------------------------------

fn run_remove(root: &Path, name: &str) -> Result<()> {
    let mut registry = Registry::load(root)?;
    let before = registry.applications.len();
    registry.applications.retain(|a| a.name != name);
    if registry.applications.len() == before {
        return Err(VaneError::AppNotFound(name.to_string()).into());
    }
    registry.save(root)?;
    println!("removed {name}");
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
