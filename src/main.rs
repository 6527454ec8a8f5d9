use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use futures::{StreamExt, pin_mut};
use tracing_subscriber::EnvFilter;

use rimlink::linker::Linker;
use rimlink::workshop::UnindexedWorkshop;

#[derive(Parser)]
#[command(name = "rimlink")]
#[command(version, about = "Build support tool for RimWorld mod projects")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Check declared NuGet packages and mod dependencies for updates
    Update {
        /// Path to the mod root directory
        #[arg(default_value = ".")]
        root: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Update { root } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run_update(&root)),
    }
}

async fn run_update(root: &Path) -> anyhow::Result<()> {
    let linker = Linker::from_mod_root(root)?;

    let updates = linker.update_packages();
    pin_mut!(updates);

    while let Some(update) = updates.next().await {
        let update = update?;
        println!("{}: {} -> {}", update.id, update.declared, update.discovered);
    }

    // Workshop indexing is supplied by the environment; without it the
    // dependency scan can only report inert results, so skip those.
    for update in linker.update_dependencies(&UnindexedWorkshop) {
        if !update.is_unchanged() {
            println!("{}: {} -> {}", update.id, update.declared, update.discovered);
        }
    }

    Ok(())
}
