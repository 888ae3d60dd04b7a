mod cmd;
mod output;
mod root;

use anyhow::Context;
use clap::{Parser, Subcommand};
use skillsync_core::config::Config;
use skillsync_core::paths;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "skills",
    about = "Manage symlinks between a skills repository and the assistant's skill directory",
    version,
    propagate_version = true
)]
struct Cli {
    /// Repository root (default: auto-detect from skillsync.yaml or skills/)
    #[arg(long, global = true, env = "SKILLS_ROOT")]
    root: Option<PathBuf>,

    /// Directory the assistant scans for installed skills (default: ~/.claude/skills)
    #[arg(long, global = true, env = "SKILLS_TARGET")]
    target: Option<PathBuf>,

    /// Output as JSON
    #[arg(long, global = true, short = 'j')]
    json: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show link status for every skill
    #[command(alias = "ls")]
    List,

    /// Link one skill into the target directory
    Link { name: String },

    /// Remove one skill's symlink from the target directory
    Unlink { name: String },

    /// Toggle links for all skills at once (the default when no subcommand is given)
    #[command(alias = "i")]
    Interactive,

    /// Scaffold a skills repository in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_target(false)
        .init();

    let root = root::resolve_root(cli.root.as_deref());

    if let Err(e) = dispatch(&root, cli) {
        // Print the full error chain (anyhow's alternate Display)
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn dispatch(root: &Path, cli: Cli) -> anyhow::Result<()> {
    let command = cli.command.unwrap_or(Commands::Interactive);

    if let Commands::Init = command {
        return cmd::init::run(root);
    }

    let config = Config::load(root).context("failed to load skillsync.yaml")?;
    let skills_root = paths::skills_root(root);
    let target = config
        .resolve_target(root, cli.target.as_deref())
        .context("failed to resolve target directory")?;

    match command {
        Commands::List => cmd::list::run(&skills_root, &target, cli.json),
        Commands::Link { name } => cmd::link::run(&skills_root, &target, &name, cli.json),
        Commands::Unlink { name } => cmd::unlink::run(&target, &name, cli.json),
        Commands::Interactive => cmd::interactive::run(&skills_root, &target),
        Commands::Init => unreachable!("handled above"),
    }
}
