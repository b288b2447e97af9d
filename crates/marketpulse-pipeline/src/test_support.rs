//! Mock providers shared by unit and integration tests.

use async_trait::async_trait;
use marketpulse_models::CompetitorRecord;

use crate::error::ProviderError;
use crate::provider::MarketDataProvider;

/// Provider that returns a caller-supplied record set verbatim.
pub struct StaticProvider {
    records: Vec<CompetitorRecord>,
}

impl StaticProvider {
    pub fn new(records: Vec<CompetitorRecord>) -> Self {
        Self { records }
    }
}

#[async_trait]
impl MarketDataProvider for StaticProvider {
    fn name(&self) -> &str {
        "static"
    }

    async fn acquire(
        &self,
        _company_name: &str,
        _industry: &str,
    ) -> Result<Vec<CompetitorRecord>, ProviderError> {
        Ok(self.records.clone())
    }
}

/// Provider that fails every acquisition with the configured error.
pub struct FailingProvider {
    error: ProviderError,
}

impl FailingProvider {
    pub fn new(error: ProviderError) -> Self {
        Self { error }
    }
}

#[async_trait]
impl MarketDataProvider for FailingProvider {
    fn name(&self) -> &str {
        "failing"
    }

    async fn acquire(
        &self,
        _company_name: &str,
        _industry: &str,
    ) -> Result<Vec<CompetitorRecord>, ProviderError> {
        Err(match &self.error {
            ProviderError::Timeout(secs) => ProviderError::Timeout(*secs),
            ProviderError::RateLimited(msg) => ProviderError::RateLimited(msg.clone()),
            ProviderError::NotFound(msg) => ProviderError::NotFound(msg.clone()),
            ProviderError::Source(msg) => ProviderError::Source(msg.clone()),
        })
    }
}

/// A record with the given classification inputs and placeholder metadata.
pub fn make_record(name: &str, pricing: &str, market_share: f64) -> CompetitorRecord {
    CompetitorRecord {
        name: name.to_string(),
        website: format!("https://{}.example.com", name.to_lowercase().replace(' ', "-")),
        industry: "SaaS".to_string(),
        products: vec!["Product 1".to_string()],
        pricing: pricing.to_string(),
        market_share,
        strengths: vec!["Strong brand".to_string(), "Innovation".to_string()],
        weaknesses: vec!["High prices".to_string(), "Slow support".to_string()],
    }
}
