pub mod analysis;
pub mod competitor;
pub mod config;
pub mod report;

pub use analysis::{CompetitorAnalysis, Positioning, ThreatLevel};
pub use competitor::CompetitorRecord;
pub use config::{MarketpulseConfig, ProviderConfig};
pub use report::CompetitorReport;
