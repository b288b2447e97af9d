use chrono::Utc;
use marketpulse_models::{CompetitorAnalysis, CompetitorReport};

/// Strategic recommendations emitted with every report.
///
/// Deliberately input-independent for compatibility with the existing report
/// contract; a real system would derive these from the threat levels and
/// positioning distribution of the analyzed set.
const RECOMMENDATIONS: [&str; 5] = [
    "Focus on differentiation in areas where competitors are weak",
    "Target mid-market segment with competitive pricing",
    "Invest in customer support to outperform competitors",
    "Develop integrations to match competitor ecosystems",
    "Monitor competitor pricing and adjust strategy quarterly",
];

/// Assemble the final report from the analyzed set. `generated_at` is
/// captured here, at synthesis time.
pub fn synthesize(target_company: &str, analyses: Vec<CompetitorAnalysis>) -> CompetitorReport {
    let market_insights = format!(
        "The competitive landscape shows {} major players. \
         High-threat competitors control significant market share. \
         Opportunities exist in underserved segments.",
        analyses.len()
    );

    CompetitorReport {
        generated_at: Utc::now(),
        target_company: target_company.to_string(),
        competitors: analyses,
        market_insights,
        recommendations: RECOMMENDATIONS.iter().map(|r| r.to_string()).collect(),
    }
}
