use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing::error;

use go_versions_sync::config::SyncConfig;
use go_versions_sync::logging;
use go_versions_sync::release::go_dev::GoDevIndex;
use go_versions_sync::sync;

#[derive(Parser)]
#[command(name = "go-versions-sync")]
#[command(version, about = "Record source digests of stable Go releases")]
struct Cli {
    /// JSON config file; flags below override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Release index URL
    #[arg(long)]
    index_url: Option<String>,

    /// Version map to read and overwrite
    #[arg(long)]
    versions_file: Option<PathBuf>,

    /// Where to write the latest stable version
    #[arg(long, conflicts_with = "no_latest")]
    latest_file: Option<PathBuf>,

    /// Do not write the latest stable version file
    #[arg(long)]
    no_latest: bool,

    /// Also write JSON logs to this file
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Log at debug level unless RUST_LOG is set
    #[arg(short, long)]
    verbose: bool,
}

impl Cli {
    fn into_config(self) -> anyhow::Result<SyncConfig> {
        let mut config = match &self.config {
            Some(path) => SyncConfig::from_file(path)?,
            None => SyncConfig::default(),
        };

        if let Some(index_url) = self.index_url {
            config.index_url = index_url;
        }
        if let Some(versions_file) = self.versions_file {
            config.versions_file = versions_file;
        }
        if let Some(latest_file) = self.latest_file {
            config.latest_file = Some(latest_file);
        }
        if self.no_latest {
            config.latest_file = None;
        }

        Ok(config)
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let _guard = match logging::init(cli.verbose, cli.log_file.as_deref()) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Error: {}", fatal_message(&e));
            return ExitCode::FAILURE;
        }
    };

    match cli.into_config().and_then(block_on_run) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", fatal_message(&e));
            ExitCode::FAILURE
        }
    }
}

/// The whole error chain on a single line
fn fatal_message(error: &anyhow::Error) -> String {
    format!("{:#}", error).replace('\n', " ")
}

fn block_on_run(config: SyncConfig) -> anyhow::Result<()> {
    tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?
        .block_on(run(config))
}

async fn run(config: SyncConfig) -> anyhow::Result<()> {
    let index = GoDevIndex::new(&config.index_url)?;
    let mut stdout = std::io::stdout().lock();
    sync::run(&config, &index, &mut stdout)
        .await
        .context("Synchronization failed")?;
    Ok(())
}
