use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use std::env;
use std::path::PathBuf;

mod download;
mod process;
mod segmenter;
mod stats;
mod telemetry;
mod util;

#[derive(Parser)]
#[command(name = "protprep", about = "UniProtKB dataset prep CLI")]
struct Cli {
    /// Root data directory (falls back to PROTPREP_DATA_DIR)
    #[arg(global = true, long)]
    data_dir: Option<PathBuf>,
    /// Emit a single JSON envelope to stdout; logs go to stderr
    #[arg(global = true, long, default_value_t = false)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    Download(download::DownloadCmd),
    Process(process::ProcessCmd),
    Segment(segmenter::SegmentCmd),
    Stats(stats::StatsCmd),
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();
    let Cli { data_dir, json, command } = Cli::parse();
    telemetry::config::set_json_mode(json);

    // initialize logging/tracing (stderr). Respect RUST_LOG and PROTPREP_LOG_FORMAT
    telemetry::config::init_tracing();

    let data_dir = move || -> Result<PathBuf> {
        data_dir
            .clone()
            .or_else(|| env::var("PROTPREP_DATA_DIR").ok().map(PathBuf::from))
            .context("provide --data-dir or set PROTPREP_DATA_DIR in .env")
    };

    match command {
        Commands::Download(args) => download::run(&data_dir()?, args).await?,
        Commands::Process(args) => process::run(&data_dir()?, args).await?,
        Commands::Segment(args) => segmenter::run(args)?,
        Commands::Stats(args) => stats::run(&data_dir()?, args).await?,
    }

    Ok(())
}
