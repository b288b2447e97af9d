use thiserror::Error;

/// One of the three pipeline stages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Acquisition,
    Analysis,
    Synthesis,
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Stage::Acquisition => "acquisition",
            Stage::Analysis => "analysis",
            Stage::Synthesis => "synthesis",
        };
        f.write_str(label)
    }
}

/// Failure modes a market data provider can surface. The sample provider
/// never fails; network-backed providers map external-source failures here.
#[derive(Error, Debug)]
pub enum ProviderError {
    #[error("data source timed out after {0} seconds")]
    Timeout(u64),

    #[error("data source rate limited: {0}")]
    RateLimited(String),

    #[error("no competitor data found for: {0}")]
    NotFound(String),

    #[error("data source error: {0}")]
    Source(String),
}

/// A pipeline failure, tagged with the stage it originated from. Failures
/// are terminal for the invocation; the orchestrator never retries.
#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("market research failed: {0}")]
    MarketResearch(#[from] ProviderError),

    /// Reserved for analyzers with a real failure path; the built-in
    /// analyzer is total over its input.
    #[error("analysis failed: {0}")]
    Analysis(String),

    /// Reserved for synthesizers with a real failure path; the built-in
    /// synthesizer is total over its input.
    #[error("report generation failed: {0}")]
    ReportGeneration(String),

    #[error("pipeline cancelled before {0} stage")]
    Cancelled(Stage),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl PipelineError {
    /// The stage this failure is attributed to, if any.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineError::MarketResearch(_) => Some(Stage::Acquisition),
            PipelineError::Analysis(_) => Some(Stage::Analysis),
            PipelineError::ReportGeneration(_) => Some(Stage::Synthesis),
            PipelineError::Cancelled(stage) => Some(*stage),
            PipelineError::Json(_) => None,
        }
    }
}
