//! CLI binary for fakeseek.

use clap::{Parser, ValueEnum};
use fakeseek::output::{render, render_summary};
use fakeseek::{AppConfig, OutputFormat, DEMO_NAMES};
use fakeseek_scan::{GoogleClient, Scanner};
use std::path::PathBuf;
use tokio_util::sync::CancellationToken;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// FakeSeek: scan web search results for deepfakes of a person.
///
/// With no names, runs demonstration scans over a few sample names.
#[derive(Parser)]
#[command(name = "fakeseek", version, about)]
struct Cli {
    /// First name of the person to scan.
    first_name: Option<String>,

    /// Last name of the person to scan.
    last_name: Option<String>,

    /// Path to TOML configuration file.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Report format (overrides the config file).
    #[arg(short, long, value_enum)]
    format: Option<Format>,

    /// Count each link once across all queries.
    #[arg(long)]
    dedup_by_link: bool,

    /// Confidence threshold above which a result is flagged.
    #[arg(long)]
    threshold: Option<f64>,

    /// Write the default configuration to the config path and exit.
    #[arg(long)]
    init_config: bool,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

impl From<Format> for OutputFormat {
    fn from(format: Format) -> Self {
        match format {
            Format::Json => Self::Json,
            Format::Text => Self::Text,
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so stdout stays a clean report channel.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("fakeseek=info,fakeseek_scan=info")),
        )
        .init();

    let cli = Cli::parse();

    if cli.init_config {
        let path = cli
            .config
            .clone()
            .unwrap_or_else(AppConfig::default_config_path);
        AppConfig::default().save_to_file(&path)?;
        println!("Wrote default configuration to {}", path.display());
        return Ok(());
    }

    let mut config = AppConfig::load(cli.config.as_deref())?;
    if cli.dedup_by_link {
        config.scan.dedup_by_link = true;
    }
    if let Some(threshold) = cli.threshold {
        config.scan.confidence_threshold = threshold;
    }
    if let Some(format) = cli.format {
        config.output.format = format.into();
    }

    let client = GoogleClient::new(config.scan.client.clone())?;
    let scanner = Scanner::new(client, config.scan.clone())?;

    let cancel = CancellationToken::new();
    let cancel_clone = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            info!("received Ctrl+C, cancelling scan...");
            cancel_clone.cancel();
        }
    });

    match (cli.first_name, cli.last_name) {
        (Some(first), Some(last)) => {
            let report = scanner.scan_with_cancel(&first, &last, &cancel).await?;
            println!("{}", render(&report, &config.output)?);
        }
        (None, None) => {
            info!(names = DEMO_NAMES.len(), "no names given, running demo scans");
            for (first, last) in DEMO_NAMES {
                let report = scanner.scan_with_cancel(first, last, &cancel).await?;
                println!("{}", render_summary(&report));
            }
        }
        _ => anyhow::bail!("both a first name and a last name are required"),
    }

    Ok(())
}
