use serde::{Deserialize, Serialize};

/// How much competitive pressure a peer exerts, derived solely from its
/// market-share percentage.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum ThreatLevel {
    High,
    Medium,
    Low,
}

impl ThreatLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ThreatLevel::High => "High",
            ThreatLevel::Medium => "Medium",
            ThreatLevel::Low => "Low",
        }
    }
}

impl std::fmt::Display for ThreatLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A peer's competitive stance, derived solely from its pricing tier label.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Positioning {
    #[serde(rename = "Premium market leader")]
    PremiumMarketLeader,
    #[serde(rename = "Value-focused challenger")]
    ValueFocusedChallenger,
    #[serde(rename = "Enterprise specialist")]
    EnterpriseSpecialist,
    #[serde(rename = "Undifferentiated")]
    Undifferentiated,
}

impl Positioning {
    pub fn as_str(&self) -> &'static str {
        match self {
            Positioning::PremiumMarketLeader => "Premium market leader",
            Positioning::ValueFocusedChallenger => "Value-focused challenger",
            Positioning::EnterpriseSpecialist => "Enterprise specialist",
            Positioning::Undifferentiated => "Undifferentiated",
        }
    }
}

impl std::fmt::Display for Positioning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One peer's classified positioning, produced 1:1 from a CompetitorRecord.
///
/// Invariant: `opportunities` tracks the source weaknesses 1:1 and `risks`
/// tracks the source strengths 1:1, in original order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CompetitorAnalysis {
    pub competitor_name: String,
    pub threat_level: ThreatLevel,
    pub positioning: Positioning,
    /// The source record's strengths, copied verbatim and in order.
    pub key_differentiators: Vec<String>,
    pub opportunities: Vec<String>,
    pub risks: Vec<String>,
}
