use anyhow::{Context, Result};
use clap::Parser;
use env_logger::Builder as LogBuilder;
use file_manager::config::FileManagerConfig;
use file_manager::FileManager;
use log::LevelFilter;
use std::io;
use std::path::PathBuf;

/// Interactive file manager. Type `help` at the prompt for commands.
#[derive(Debug, Parser)]
#[command(name = "file-manager", version, about)]
struct Cli {
    /// Name shown in the welcome and goodbye banners
    #[arg(long)]
    username: Option<String>,

    /// JSON config file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Start here instead of the home directory
    #[arg(long, value_name = "DIR")]
    start_dir: Option<PathBuf>,

    /// More log output on stderr (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = match cli.verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    // RUST_LOG still wins when set
    LogBuilder::new().filter_level(level).parse_default_env().init();

    let mut config = match &cli.config {
        Some(path) => FileManagerConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => FileManagerConfig::default(),
    };
    if cli.username.is_some() {
        config.username = cli.username;
    }
    if cli.start_dir.is_some() {
        config.start_dir = cli.start_dir;
    }

    let mut manager = FileManager::new(&config).context("starting file manager session")?;
    log::info!("file-manager {} starting in {}", env!("CARGO_PKG_VERSION"), manager.context().cwd.display());

    let stdin = io::stdin();
    manager
        .run(stdin.lock(), io::stdout().lock())
        .context("terminal I/O failed")?;
    Ok(())
}
