use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

use gox_data::{
    download::{download_day, download_month, download_range, download_year},
    error::DownloadError,
    model::trade::Currency,
    shared::tid::TradeId,
};

/*----- */
// CLI
/*----- */
#[derive(Parser)]
#[command(name = "gox-downloader", about = "Download MtGox trade history to CSV")]
struct Cli {
    /// Quote currency of the BTC pair, e.g. USD
    #[arg(long, default_value = "USD")]
    currency: String,

    /// Path of the CSV file to write
    #[arg(long)]
    out: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Download all trades for a year
    Year { year: i32 },
    /// Download all trades for a month
    Month { year: i32, month: u32 },
    /// Download all trades for a day
    Day { year: i32, month: u32, day: u32 },
    /// Download all trades in a raw [begin, end) trade id range
    Range { begin: TradeId, end: TradeId },
}

/*----- */
// Main
/*----- */
fn main() -> Result<(), DownloadError> {
    init_logging();

    let cli = Cli::parse();
    let currency = Currency::from_code(&cli.currency);

    match cli.command {
        Command::Year { year } => download_year(&currency, year, &cli.out)?,
        Command::Month { year, month } => download_month(&currency, year, month, &cli.out)?,
        Command::Day { year, month, day } => download_day(&currency, year, month, day, &cli.out)?,
        Command::Range { begin, end } => download_range(&currency, begin, end, &cli.out)?,
    }

    info!(csv = %cli.out.display(), "download complete");
    Ok(())
}

/*----- */
// Logging config
/*----- */
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::filter::EnvFilter::builder()
                .with_default_directive(tracing_subscriber::filter::LevelFilter::INFO.into())
                .from_env_lossy(),
        )
        // Disable colours on release builds
        .with_ansi(cfg!(debug_assertions))
        // Enable Json formatting
        .json()
        // Install this Tracing subscriber as global default
        .init()
}
