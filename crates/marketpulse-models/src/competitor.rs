use serde::{Deserialize, Serialize};

/// Raw information about a single competitor, as returned by a market data
/// provider. Field names match the wire format of the acquisition layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitorRecord {
    pub name: String,
    pub website: String,
    /// Echoes the industry label the caller queried with.
    pub industry: String,
    pub products: Vec<String>,
    /// Pricing tier label (e.g., "Premium", "Mid-range", "Enterprise").
    pub pricing: String,
    /// Market share as a percentage, non-negative.
    pub market_share: f64,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
}
