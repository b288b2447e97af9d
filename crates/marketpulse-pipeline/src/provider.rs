use async_trait::async_trait;
use marketpulse_models::CompetitorRecord;
use tracing::debug;

use crate::error::ProviderError;

/// Trait for market data providers backing the acquisition stage.
/// Mockable for testing; a production implementation would call external
/// data sources (Crunchbase, LinkedIn, industry databases) and map their
/// failures to `ProviderError`.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    fn name(&self) -> &str;

    /// Produce a bounded set of competitor records for the given query.
    /// Both inputs are arbitrary strings, empty included; each returned
    /// record's `industry` echoes the input verbatim.
    async fn acquire(
        &self,
        company_name: &str,
        industry: &str,
    ) -> Result<Vec<CompetitorRecord>, ProviderError>;
}

/// Fixture data source: always succeeds with the same three competitors.
#[derive(Debug, Clone, Default)]
pub struct SampleDataProvider;

#[async_trait]
impl MarketDataProvider for SampleDataProvider {
    fn name(&self) -> &str {
        "sample"
    }

    async fn acquire(
        &self,
        company_name: &str,
        industry: &str,
    ) -> Result<Vec<CompetitorRecord>, ProviderError> {
        debug!(company = %company_name, industry = %industry, "Serving sample competitor data");

        let owned = |items: &[&str]| items.iter().map(|s| s.to_string()).collect::<Vec<_>>();

        Ok(vec![
            CompetitorRecord {
                name: "Competitor A".to_string(),
                website: "https://competitor-a.com".to_string(),
                industry: industry.to_string(),
                products: owned(&["Product 1", "Product 2", "Product 3"]),
                pricing: "Premium".to_string(),
                market_share: 25.5,
                strengths: owned(&["Strong brand", "Large customer base", "Innovation"]),
                weaknesses: owned(&["High prices", "Slow support", "Limited features"]),
            },
            CompetitorRecord {
                name: "Competitor B".to_string(),
                website: "https://competitor-b.com".to_string(),
                industry: industry.to_string(),
                products: owned(&["Product X", "Product Y"]),
                pricing: "Mid-range".to_string(),
                market_share: 18.2,
                strengths: owned(&["Affordable", "Good UX", "Fast growth"]),
                weaknesses: owned(&[
                    "Limited market presence",
                    "Newer player",
                    "Fewer integrations",
                ]),
            },
            CompetitorRecord {
                name: "Competitor C".to_string(),
                website: "https://competitor-c.com".to_string(),
                industry: industry.to_string(),
                products: owned(&["Enterprise Suite"]),
                pricing: "Enterprise".to_string(),
                market_share: 12.8,
                strengths: owned(&["Enterprise features", "Security", "Compliance"]),
                weaknesses: owned(&["Expensive", "Complex setup", "Steep learning curve"]),
            },
        ])
    }
}
