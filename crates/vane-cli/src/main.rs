mod cmd;
mod output;
mod root;

use clap::{Parser, Subcommand};
use cmd::app::AppSubcommand;
use std::path::PathBuf;

#[derive(Parser)]
#[command(
    name = "vane",
    about = "GitOps status badges: track application health and serve it as SVG",
    version,
    propagate_version = true
)]
struct Cli {
    /// Installation root (default: auto-detect from .vane/ or .git/)
    #[arg(long, global = true, env = "VANE_ROOT")]
    root: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize a badge registry in the current directory
    Init,

    /// Manage tracked applications
    App {
        #[command(subcommand)]
        subcommand: AppSubcommand,
    },

    /// Render a badge to stdout
    Render {
        /// Application name
        #[arg(long, conflicts_with = "project")]
        name: Option<String>,

        /// Project label (aggregates all matching applications)
        #[arg(long)]
        project: Option<String>,

        /// Append the short-revision suffix (subject to badge.revision)
        #[arg(long)]
        revision: bool,
    },

    /// Start the badge HTTP server
    Serve {
        /// Port to listen on (0 = OS-assigned)
        #[arg(long, default_value = "8080")]
        port: u16,
    },
}

fn main() {
    let cli = Cli::parse();

    let default_level = match &cli.command {
        Commands::Serve { .. } => tracing::Level::INFO,
        _ => tracing::Level::WARN,
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(default_level.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    let result = match cli.command {
        Commands::Init => cmd::init::run(&root),
        Commands::App { subcommand } => cmd::app::run(&root, subcommand, cli.json),
        Commands::Render {
            name,
            project,
            revision,
        } => cmd::render::run(&root, name.as_deref(), project.as_deref(), revision),
        Commands::Serve { port } => cmd::serve::run(&root, port),
    };

    if let Err(e) = result {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}
