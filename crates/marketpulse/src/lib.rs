//! MarketPulse - competitive intelligence pipeline.
//!
//! Turns a company/industry query into a structured report through three
//! stages: data acquisition, positioning analysis, and report synthesis.
//!
//! # Library Usage
//!
//! ```rust,no_run
//! use marketpulse::models::CompetitorReport;
//! use marketpulse::pipeline::{Orchestrator, SampleDataProvider};
//! use marketpulse::models::config::MarketpulseConfig;
//! ```

pub use marketpulse_models as models;
pub use marketpulse_pipeline as pipeline;

use std::sync::Arc;

use marketpulse_models::config::MarketpulseConfig;
use marketpulse_models::CompetitorReport;
use marketpulse_pipeline::{MarketDataProvider, Orchestrator, PipelineError, SampleDataProvider};

/// Static service identity, reported by whatever transport hosts the
/// pipeline (e.g., a liveness probe).
pub const SERVICE_NAME: &str = "marketpulse-api";
pub const SERVICE_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build an Orchestrator from configuration.
pub fn build_orchestrator(config: &MarketpulseConfig) -> Result<Orchestrator, anyhow::Error> {
    let provider: Arc<dyn MarketDataProvider> = match config.provider.name.as_str() {
        "sample" => Arc::new(SampleDataProvider),
        other => anyhow::bail!("unknown market data provider: {other}"),
    };

    Ok(Orchestrator::new(provider))
}

/// Run the full pipeline for one query using the given orchestrator.
pub async fn run(
    orchestrator: &Orchestrator,
    company_name: &str,
    industry: &str,
) -> Result<CompetitorReport, PipelineError> {
    orchestrator.run(company_name, industry).await
}
