use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use version_switcher::config::{PageContext, SwitcherConfig};
use version_switcher::switcher::probe::HttpProbe;
use version_switcher::switcher::segment::SegmentExtractor;
use version_switcher::switcher::select::build_version_select;
use version_switcher::switcher::widget::VersionSwitcher;

#[derive(Parser)]
#[command(name = "version-switcher")]
#[command(version, about = "Documentation version selector and switch resolver")]
struct Cli {
    /// Path to a JSON config file with the version registry
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the <select> markup for the version dropdown
    Render {
        /// Version identifier of the current page
        #[arg(long)]
        version: String,
        /// Release string shown for the current version
        #[arg(long)]
        release: String,
    },
    /// Resolve and print the destination URL for a version switch
    Switch {
        /// URL of the current page
        #[arg(long)]
        url: String,
        /// Version identifier to switch to
        #[arg(long)]
        to: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => SwitcherConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => SwitcherConfig::default(),
    };

    match cli.command {
        Command::Render { version, release } => {
            println!(
                "{}",
                build_version_select(&config.registry(), &version, &release)
            );
            Ok(())
        }
        Command::Switch { url, to } => tokio::runtime::Builder::new_multi_thread()
            .enable_all()
            .build()?
            .block_on(run_switch(config, url, to)),
    }
}

async fn run_switch(config: SwitcherConfig, url: String, to: String) -> anyhow::Result<()> {
    // The current page's version is the one embedded in its URL
    let current_version = SegmentExtractor::new()
        .extract(&url)
        .map(|segment| segment.trim_end_matches('/').to_string())
        .unwrap_or_default();

    let context = PageContext {
        version: current_version.clone(),
        release: current_version,
        url,
    };
    let probe = HttpProbe::new(config.probe.timeout_ms)?;
    let switcher = VersionSwitcher::new(config.registry(), Arc::new(probe), context);

    match switcher.switch(&to).await? {
        Some(destination) => println!("{destination}"),
        None => info!("Already on version {}; nothing to do", to),
    }
    Ok(())
}
