use clap::Parser;
use clt_demo::{App, init_logging};
use clt_demo_core::{DemoConfig, DemoController};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "clt_demo")]
#[command(about = "An interactive terminal demonstration of the Central Limit Theorem")]
struct Args {
    /// Directory for the log file (default: ~/.clt_demo/)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,

    /// Seed for a reproducible random stream
    #[arg(short, long)]
    seed: Option<u64>,
}

fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".clt_demo")
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let log_dir = args.log_dir.unwrap_or_else(default_log_dir);

    init_logging(&log_dir, &args.log_level)?;

    let config = DemoConfig::default();
    let controller = match args.seed {
        Some(seed) => DemoController::with_seed(config, seed)?,
        None => DemoController::new(config)?,
    };
    tracing::info!(seed = ?args.seed, "Initial snapshot ready");

    let mut app = App::new(controller);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
