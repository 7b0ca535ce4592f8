mod report;

use chrono::{Local, NaiveDate};
use clap::{CommandFactory, Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use ytops_core::config::{MAX_ITEMS_RANGE, SHORT_THRESHOLD_RANGE};
use ytops_youtube::{NoCache, YoutubeClient};

use crate::report::ReportOptions;

#[derive(Debug, Parser)]
#[command(name = "ytops")]
#[command(about = "Upload KPIs for a YouTube channel")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print the canonical channel ID for a handle, username, URL, or ID
    Resolve {
        /// `@handle`, legacy username, channel URL, or `UC…` ID
        channel: String,
    },
    /// Load recent uploads and print today / this month / custom-range KPIs
    Report {
        /// `@handle`, legacy username, channel URL, or `UC…` ID
        channel: String,
        /// Most recent uploads to scan (50-1000; default from `YTOPS_MAX_ITEMS`)
        #[arg(long, value_parser = parse_max_items)]
        max_items: Option<usize>,
        /// Shorts cut-off in seconds (15-180; default from `YTOPS_SHORT_THRESHOLD_SECS`)
        #[arg(long, value_parser = parse_short_threshold)]
        short_threshold: Option<u64>,
        /// First day of the custom range, `YYYY-MM-DD` (default: 1st of this month)
        #[arg(long)]
        from: Option<NaiveDate>,
        /// Last day of the custom range, inclusive (default: today)
        #[arg(long)]
        to: Option<NaiveDate>,
        /// Only count uploads whose title contains this keyword
        #[arg(long)]
        search: Option<String>,
    },
}

fn parse_max_items(raw: &str) -> Result<usize, String> {
    let n: usize = raw.parse().map_err(|e| format!("{e}"))?;
    if MAX_ITEMS_RANGE.contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "must be between {} and {}",
            MAX_ITEMS_RANGE.start(),
            MAX_ITEMS_RANGE.end()
        ))
    }
}

fn parse_short_threshold(raw: &str) -> Result<u64, String> {
    let n: u64 = raw.parse().map_err(|e| format!("{e}"))?;
    if SHORT_THRESHOLD_RANGE.contains(&n) {
        Ok(n)
    } else {
        Err(format!(
            "must be between {} and {}",
            SHORT_THRESHOLD_RANGE.start(),
            SHORT_THRESHOLD_RANGE.end()
        ))
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let Some(command) = cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let config = ytops_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let client = YoutubeClient::from_config(&config)?;

    match command {
        Commands::Resolve { channel } => {
            let id = client.resolve_channel_id(&channel).await?;
            println!("{id}");
        }
        Commands::Report {
            channel,
            max_items,
            short_threshold,
            from,
            to,
            search,
        } => {
            let max_items = max_items.unwrap_or(config.default_max_items);
            let options = ReportOptions {
                short_threshold_secs: short_threshold
                    .unwrap_or(config.default_short_threshold_secs),
                from,
                to,
                search,
            };

            let channel_id = client.resolve_channel_id(&channel).await?;
            // One fetch per process; a TtlCache could never hit here.
            let videos = client
                .load_channel_videos(&NoCache, &channel_id, max_items)
                .await?;

            let rendered = report::render(&channel_id, &videos, &Local::now(), &options)?;
            print!("{rendered}");
        }
    }

    Ok(())
}
