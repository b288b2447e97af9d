use std::sync::Arc;
use std::time::Instant;

use marketpulse_models::CompetitorReport;
use tokio_util::sync::CancellationToken;
use tracing::info;

use crate::analyzer::analyze;
use crate::error::{PipelineError, Stage};
use crate::provider::MarketDataProvider;
use crate::synthesizer::synthesize;

/// Sequences the three pipeline stages: acquire → analyze → synthesize.
///
/// Holds no per-invocation state, so a single instance can serve concurrent
/// callers without locking.
pub struct Orchestrator {
    provider: Arc<dyn MarketDataProvider>,
}

impl std::fmt::Debug for Orchestrator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Orchestrator").finish_non_exhaustive()
    }
}

impl Orchestrator {
    pub fn new(provider: Arc<dyn MarketDataProvider>) -> Self {
        Self { provider }
    }

    /// Run the full pipeline for one query. The first stage failure aborts
    /// the invocation; later stages are not invoked.
    pub async fn run(
        &self,
        company_name: &str,
        industry: &str,
    ) -> Result<CompetitorReport, PipelineError> {
        self.run_with_cancel(company_name, industry, &CancellationToken::new())
            .await
    }

    /// Like [`run`](Self::run), but checks `cancel` before each stage and
    /// aborts with [`PipelineError::Cancelled`]. No partial report is
    /// returned on cancellation.
    pub async fn run_with_cancel(
        &self,
        company_name: &str,
        industry: &str,
        cancel: &CancellationToken,
    ) -> Result<CompetitorReport, PipelineError> {
        let start = Instant::now();
        info!(company = %company_name, industry = %industry, provider = %self.provider.name(), "Starting pipeline");

        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled(Stage::Acquisition));
        }
        let records = self.provider.acquire(company_name, industry).await?;
        info!(records = records.len(), "Acquisition complete");

        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled(Stage::Analysis));
        }
        let analyses = analyze(&records);

        if cancel.is_cancelled() {
            return Err(PipelineError::Cancelled(Stage::Synthesis));
        }
        let report = synthesize(company_name, analyses);

        info!(
            company = %company_name,
            competitors = report.competitors.len(),
            elapsed_ms = start.elapsed().as_millis(),
            "Pipeline complete"
        );

        Ok(report)
    }
}
