//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `phishing_detector` library that handles:
//! - Command-line argument parsing
//! - Environment variable loading (.env file)
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::path::PathBuf;
use std::process;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use phishing_detector::config::{
    DEFAULT_BIND_HOST, DEFAULT_FEATURE_COLUMNS_PATH, DEFAULT_MODEL_PATH, DEFAULT_PORT,
    DEFAULT_TLD_MAPPING_PATH, DEFAULT_USER_AGENT,
};
use phishing_detector::error_handling::{log_statistics, ProcessingStats};
use phishing_detector::initialization::{init_client, init_logger};
use phishing_detector::{extract_features, server, Config, LogFormat, LogLevel};
use phishing_detector::{PageFetcher, PhishingDetector};

#[derive(Debug, Parser)]
#[command(name = "phishing_detector", version, about = "Classify URLs as legitimate or phishing")]
struct Cli {
    #[arg(long, value_enum, default_value_t = LogLevel::Info, global = true)]
    log_level: LogLevel,

    #[arg(long, value_enum, default_value_t = LogFormat::Plain, global = true)]
    log_format: LogFormat,

    /// User-Agent sent when fetching pages
    #[arg(long, default_value = DEFAULT_USER_AGENT, global = true)]
    user_agent: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Score one or more URLs, printing one JSON line per URL
    Classify {
        #[arg(required = true)]
        urls: Vec<String>,

        #[command(flatten)]
        artifacts: ArtifactArgs,
    },
    /// Print the raw feature record for a URL (no model needed)
    Features { url: String },
    /// Serve POST /predict over HTTP
    Serve {
        #[arg(long, default_value = DEFAULT_BIND_HOST)]
        host: String,

        #[arg(long, default_value_t = DEFAULT_PORT)]
        port: u16,

        #[command(flatten)]
        artifacts: ArtifactArgs,
    },
}

#[derive(Debug, Args)]
struct ArtifactArgs {
    /// Trained classifier (JSON)
    #[arg(long, env = "PHISHING_MODEL", default_value = DEFAULT_MODEL_PATH)]
    model: PathBuf,

    /// Ordered feature columns the classifier expects (JSON array)
    #[arg(long, env = "PHISHING_FEATURE_COLUMNS", default_value = DEFAULT_FEATURE_COLUMNS_PATH)]
    feature_columns: PathBuf,

    /// TLD frequency mapping (JSON object); unreadable files mean an empty table
    #[arg(long, env = "PHISHING_TLD_MAPPING", default_value = DEFAULT_TLD_MAPPING_PATH)]
    tld_mapping: PathBuf,

    /// Skip the TLD frequency mapping entirely
    #[arg(long)]
    no_tld_mapping: bool,
}

impl Cli {
    fn base_config(&self) -> Config {
        Config {
            log_level: self.log_level.clone(),
            log_format: self.log_format.clone(),
            user_agent: self.user_agent.clone(),
            ..Default::default()
        }
    }
}

impl ArtifactArgs {
    fn apply(&self, config: &mut Config) {
        config.model_path = self.model.clone();
        config.feature_columns_path = self.feature_columns.clone();
        config.tld_mapping_path = if self.no_tld_mapping {
            None
        } else {
            Some(self.tld_mapping.clone())
        };
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Artifact paths may come from a .env file next to the working directory
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();
    let mut config = cli.base_config();
    init_logger(&config).context("Failed to initialize logger")?;

    let exit_code = match cli.command {
        Command::Classify { urls, artifacts } => {
            artifacts.apply(&mut config);
            run_classify(&config, &urls).await?
        }
        Command::Features { url } => {
            run_features(&config, &url).await?;
            0
        }
        Command::Serve {
            host,
            port,
            artifacts,
        } => {
            artifacts.apply(&mut config);
            config.host = host;
            config.port = port;
            let detector = PhishingDetector::from_config(&config)
                .context("Failed to initialize detector")?;
            server::start_server(&config.host, config.port, detector).await?;
            0
        }
    };

    if exit_code != 0 {
        process::exit(exit_code);
    }
    Ok(())
}

async fn run_classify(config: &Config, urls: &[String]) -> Result<i32> {
    let detector = PhishingDetector::from_config(config).context("Failed to initialize detector")?;
    let mut failed = 0usize;

    for url in urls {
        if url.is_empty() {
            print_json(&serde_json::json!({ "url": url, "error": "No URL provided" }))?;
            failed += 1;
            continue;
        }

        match detector.classify(url).await {
            Ok(scored) => print_json(&scored)?,
            Err(e) if e.is_fatal() => {
                log_statistics(detector.stats());
                eprintln!("phishing_detector error: {e}");
                return Ok(1);
            }
            Err(e) => {
                print_json(&serde_json::json!({ "url": url, "error": e.to_string() }))?;
                failed += 1;
            }
        }
    }

    log_statistics(detector.stats());
    Ok(if failed > 0 { 1 } else { 0 })
}

async fn run_features(config: &Config, url: &str) -> Result<()> {
    anyhow::ensure!(!url.is_empty(), "No URL provided");
    let client = init_client(config).context("Failed to initialize HTTP client")?;
    let fetcher = PageFetcher::new(client, Arc::new(ProcessingStats::new()));
    let record = extract_features(&fetcher, url).await;
    print_json(&record)
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    println!(
        "{}",
        serde_json::to_string(value).context("Failed to serialize output")?
    );
    Ok(())
}
