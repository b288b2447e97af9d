pub mod analyzer;
pub mod error;
pub mod orchestrator;
pub mod provider;
pub mod synthesizer;

pub mod test_support;

pub use error::{PipelineError, ProviderError, Stage};
pub use orchestrator::Orchestrator;
pub use provider::{MarketDataProvider, SampleDataProvider};
