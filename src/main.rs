//! AquaScore - water quality scoring service
//!
//! Scores per-location water samples with a Water Quality Index (WQI) and a
//! Heavy-metal Pollution Index (HPI), assigns a risk tier and serves the
//! results to the dashboard.
//!
//! # Usage
//!
//! ```bash
//! # Run the HTTP API (default command)
//! aquascore serve --addr 0.0.0.0:8000
//!
//! # Score a local batch and print the report
//! aquascore analyze --input samples.json --pretty
//! aquascore analyze --csv samples.csv
//! cat samples.json | aquascore analyze
//!
//! # Print or check configuration
//! aquascore config
//! aquascore config --check aquascore.toml
//! ```
//!
//! # Environment Variables
//!
//! - `AQUASCORE_CONFIG`: Path to TOML config (default: ./aquascore.toml)
//! - `AQUASCORE_SERVER_ADDR`: HTTP bind address override
//! - `RUST_LOG`: Logging level (default: info)

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use aquascore::acquisition::{self, CsvFileSource, SampleSource, StdinSource};
use aquascore::api::{create_app, ApiState};
use aquascore::config::AppConfig;
use aquascore::types::AnalysisReport;

// ============================================================================
// CLI Arguments
// ============================================================================

#[derive(Parser, Debug)]
#[command(name = "aquascore")]
#[command(about = "Water Quality Index and Heavy-metal Pollution Index scoring")]
#[command(version)]
struct CliArgs {
    /// Path to a TOML config file (takes precedence over AQUASCORE_CONFIG
    /// and ./aquascore.toml)
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    log_json: bool,

    #[command(subcommand)]
    command: Option<SubCommand>,
}

#[derive(clap::Subcommand, Debug)]
enum SubCommand {
    /// Run the HTTP API server (default)
    Serve {
        /// Override the server address (default: "0.0.0.0:8000")
        #[arg(short, long, env = "AQUASCORE_SERVER_ADDR", value_name = "HOST:PORT")]
        addr: Option<String>,
    },

    /// Score a batch of samples and print the report as JSON
    Analyze {
        /// JSON (or .csv) file with sample records; stdin when omitted
        #[arg(long, value_name = "PATH", conflicts_with = "csv")]
        input: Option<PathBuf>,

        /// CSV file with a header row
        #[arg(long, value_name = "PATH")]
        csv: Option<PathBuf>,

        /// Pretty-print the JSON report
        #[arg(long)]
        pretty: bool,
    },

    /// Print the active configuration as TOML, or check a config file
    Config {
        /// Validate this file instead of printing the active config
        #[arg(long, value_name = "PATH")]
        check: Option<PathBuf>,
    },
}

// ============================================================================
// Startup
// ============================================================================

/// Logs go to stderr so `analyze` output on stdout stays machine-readable.
fn init_tracing(json: bool) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    if json {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
    }
}

/// An explicit `--config` path must load; otherwise use the search order.
/// Either way an invalid file aborts startup.
fn load_config(path: Option<&Path>) -> Result<AppConfig> {
    match path {
        Some(p) => AppConfig::load_from_file(p)
            .with_context(|| format!("Failed to load config from {}", p.display())),
        None => AppConfig::load().context("Failed to load configuration"),
    }
}

// ============================================================================
// Commands
// ============================================================================

async fn run_server(mut config: AppConfig, addr: Option<String>) -> Result<()> {
    if let Some(addr) = addr {
        config.server.addr = addr;
    }

    let source = acquisition::source_from_config(&config.source)
        .context("Failed to build sample source")?;
    match &source {
        Some(s) => info!(source = %s.source_name(), "Sample source configured"),
        None => info!("No sample source configured; /api/fetch-from-source disabled"),
    }

    let config = Arc::new(config);
    let app = create_app(ApiState::new(Arc::clone(&config), source));

    let server_addr = config.server.addr.as_str();
    let listener = tokio::net::TcpListener::bind(server_addr)
        .await
        .with_context(|| format!("Failed to bind to {server_addr}"))?;
    info!(addr = %server_addr, "HTTP server listening");

    // Graceful shutdown via Ctrl+C
    let cancel_token = CancellationToken::new();
    let shutdown_token = cancel_token.clone();
    tokio::spawn(async move {
        if let Err(e) = tokio::signal::ctrl_c().await {
            warn!(error = %e, "Failed to listen for Ctrl+C");
            return;
        }
        info!("Received Ctrl+C, initiating shutdown...");
        shutdown_token.cancel();
    });

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            cancel_token.cancelled().await;
        })
        .await
        .context("HTTP server error")?;

    info!("AquaScore shutdown complete");
    Ok(())
}

async fn run_analyze(
    config: &AppConfig,
    input: Option<PathBuf>,
    csv: Option<PathBuf>,
    pretty: bool,
) -> Result<()> {
    let source: Arc<dyn SampleSource> = match (input, csv) {
        (_, Some(path)) => Arc::new(CsvFileSource::new(path)),
        (Some(path), None) => acquisition::file_source(&path),
        (None, None) => Arc::new(StdinSource),
    };

    let samples = source
        .fetch_batch()
        .await
        .with_context(|| format!("Failed to read samples from {}", source.source_name()))?;

    let report = AnalysisReport::new(aquascore::analyze(&samples, &config.standards));
    let json = if pretty {
        serde_json::to_string_pretty(&report)?
    } else {
        serde_json::to_string(&report)?
    };
    println!("{json}");
    Ok(())
}

fn run_config(config: &AppConfig, check: Option<PathBuf>) -> Result<()> {
    let Some(path) = check else {
        print!("{}", config.to_toml()?);
        return Ok(());
    };

    let contents = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    // Unknown-key and range warnings are logged to stderr while parsing
    AppConfig::from_toml_str(&contents, &path)?;
    println!("{} is valid", path.display());
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(args.log_json);

    let config = load_config(args.config.as_deref())?;

    match args.command {
        None => {
            let addr = std::env::var("AQUASCORE_SERVER_ADDR").ok();
            run_server(config, addr).await
        }
        Some(SubCommand::Serve { addr }) => run_server(config, addr).await,
        Some(SubCommand::Analyze { input, csv, pretty }) => {
            run_analyze(&config, input, csv, pretty).await
        }
        Some(SubCommand::Config { check }) => run_config(&config, check),
    }
}
