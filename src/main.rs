use chrono::Utc;
use clap::{Parser, Subcommand};
use opendota_api::ApiClient;
use tracing::{error, info, warn};

use collector::{BatchThrottle, Throttle, Unthrottled, collect};
use config::Config;
use error::Result;
use storage::{MatchTable, WeeklyFiles};
use week::TimeWindow;
use whitelist::TournamentWhitelist;

mod collector;
mod config;
mod discovery;
mod error;
mod logging;
mod normalizer;
mod storage;
mod week;
mod whitelist;

#[cfg(test)]
mod fake_api;

#[derive(Parser)]
#[command(name = "dotaweek")]
#[command(about = "Weekly professional Dota 2 match collector backed by OpenDota", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find last week's whitelisted pro matches and store their ids
    Discover,
    /// Fetch and normalize every stored match of an ISO week
    Collect {
        /// ISO week number of the stored id list
        #[arg(value_parser = clap::value_parser!(u32).range(1..=53))]
        week: u32,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{e}");
        std::process::exit(1);
    }

    info!("🐙 Starting...");

    if let Err(e) = run(cli.command, &cfg).await {
        error!("❌ {e}");
        std::process::exit(1);
    }
}

async fn run(command: Commands, cfg: &Config) -> Result<()> {
    let api = ApiClient::new(
        cfg.api_url.clone(),
        cfg.api_key.clone(),
        cfg.rate_limit_per_minute,
    );

    match command {
        Commands::Discover => discover_last_week(cfg, &api).await?,
        Commands::Collect { week } => collect_week(cfg, &api, week).await?,
    }

    api.metrics.log_summary();
    Ok(())
}

async fn discover_last_week(cfg: &Config, api: &ApiClient) -> Result<()> {
    let whitelist = TournamentWhitelist::load(&cfg.whitelist_path)?;
    if whitelist.is_empty() {
        warn!("📋 Whitelist is empty, no match can be selected");
    }

    let window = TimeWindow::last_week(Utc::now());
    info!(
        week = window.iso_week(),
        start = window.start(),
        end = window.end(),
        "🔎 Discovering matches"
    );

    let ids = discovery::discover(api, &whitelist, &window).await?;

    let files = WeeklyFiles::new(&cfg.data_dir, window.iso_week());
    storage::write_match_ids(&files.ids_path(), &ids)?;

    println!(
        "{} matches discovered for week {} ({})",
        ids.len(),
        window.iso_week(),
        files.ids_path().display()
    );
    Ok(())
}

async fn collect_week(cfg: &Config, api: &ApiClient, week: u32) -> Result<()> {
    let files = WeeklyFiles::new(&cfg.data_dir, week);
    let ids = storage::read_match_ids(&files.ids_path())?;
    if ids.is_empty() {
        warn!(week, "📦 Id list is empty, nothing to collect");
    }

    let mut table = MatchTable::open(&files.table_path())?;
    let throttle: Box<dyn Throttle> = if cfg.batch_pause.is_zero() {
        Box::new(Unthrottled)
    } else {
        Box::new(BatchThrottle::new(cfg.batch_size, cfg.batch_pause))
    };

    let metrics_task = api.start_metrics_logging();
    let report = collect(api, throttle.as_ref(), &ids, &mut table).await;
    metrics_task.abort();

    let report = report?;
    report.log();

    println!(
        "{} rows written, {} matches skipped ({})",
        report.written,
        report.skipped.len(),
        files.table_path().display()
    );
    Ok(())
}
