use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::analysis::CompetitorAnalysis;

/// The final intelligence report for one pipeline invocation.
///
/// Constructed once per request, immutable thereafter; carries no identity
/// beyond the single response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitorReport {
    /// Captured when the report is synthesized.
    pub generated_at: DateTime<Utc>,
    /// Echoes the queried company name, empty string included.
    pub target_company: String,
    /// Same count and order as the acquired records.
    pub competitors: Vec<CompetitorAnalysis>,
    pub market_insights: String,
    pub recommendations: Vec<String>,
}

impl CompetitorReport {
    /// Serialize the report for transport, two-space indented.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
