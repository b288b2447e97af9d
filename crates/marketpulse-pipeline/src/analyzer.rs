use marketpulse_models::{CompetitorAnalysis, CompetitorRecord, Positioning, ThreatLevel};

/// Classify competitive pressure from a market-share percentage.
/// Boundary values belong to the lower tier (20.0 is Medium, 10.0 is Low).
pub fn threat_level(market_share: f64) -> ThreatLevel {
    if market_share > 20.0 {
        ThreatLevel::High
    } else if market_share > 10.0 {
        ThreatLevel::Medium
    } else {
        ThreatLevel::Low
    }
}

/// Classify competitive stance from a pricing tier label. Exact match only;
/// unrecognized labels (empty string included) are Undifferentiated.
pub fn positioning(pricing: &str) -> Positioning {
    match pricing {
        "Premium" => Positioning::PremiumMarketLeader,
        "Mid-range" => Positioning::ValueFocusedChallenger,
        "Enterprise" => Positioning::EnterpriseSpecialist,
        _ => Positioning::Undifferentiated,
    }
}

/// Classify each record into a `CompetitorAnalysis`, 1:1 and in input order.
/// An empty input yields an empty result.
pub fn analyze(records: &[CompetitorRecord]) -> Vec<CompetitorAnalysis> {
    records.iter().map(analyze_record).collect()
}

fn analyze_record(record: &CompetitorRecord) -> CompetitorAnalysis {
    let opportunities = record
        .weaknesses
        .iter()
        .map(|weakness| format!("Capitalize on {weakness} weakness"))
        .collect();

    let risks = record
        .strengths
        .iter()
        .map(|strength| format!("Competitor's {strength} advantage"))
        .collect();

    CompetitorAnalysis {
        competitor_name: record.name.clone(),
        threat_level: threat_level(record.market_share),
        positioning: positioning(&record.pricing),
        key_differentiators: record.strengths.clone(),
        opportunities,
        risks,
    }
}
