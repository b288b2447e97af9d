use anyhow::{Context, Result};
use clap::Parser;
use marketpulse::models::config::MarketpulseConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "marketpulse", about = "Competitive intelligence report generator")]
struct Cli {
    /// Target company to analyze competitors for
    #[arg(short = 'n', long)]
    company: String,

    /// Industry label the competitor set is drawn from
    #[arg(short, long, default_value = "")]
    industry: String,

    /// Path to a TOML configuration file; defaults apply when omitted
    #[arg(short, long)]
    config: Option<String>,

    /// Emit compact JSON instead of the pretty-printed report
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (respects RUST_LOG env var)
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let config_str = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config: {path}"))?;
            toml::from_str::<MarketpulseConfig>(&config_str)
                .with_context(|| "Failed to parse config")?
        }
        None => MarketpulseConfig::default(),
    };

    let orchestrator =
        marketpulse::build_orchestrator(&config).context("Failed to build orchestrator")?;

    let report = marketpulse::run(&orchestrator, &cli.company, &cli.industry)
        .await
        .map_err(|e| anyhow::anyhow!("Pipeline failed: {e}"))?;

    // Output report as JSON to stdout
    let output = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        report.to_json_pretty()?
    };
    println!("{output}");

    Ok(())
}
