use serde::{Deserialize, Serialize};

/// Top-level configuration for MarketPulse.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct MarketpulseConfig {
    pub provider: ProviderConfig,
}

/// Configuration for the market data provider layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProviderConfig {
    /// Which provider backs the acquisition stage ("sample" is the fixture
    /// data source; network-backed providers register their own names).
    pub name: String,
    /// Acquisition timeout in seconds. The sample provider ignores it; a
    /// network-backed provider must map an elapsed timeout to a failure.
    pub timeout_seconds: u64,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            name: "sample".to_string(),
            timeout_seconds: 30,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roundtrip_config() {
        let config = MarketpulseConfig::default();
        let json = serde_json::to_string(&config).unwrap();
        let deserialized: MarketpulseConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn default_provider_is_sample() {
        let config = MarketpulseConfig::default();
        assert_eq!(config.provider.name, "sample");
        assert_eq!(config.provider.timeout_seconds, 30);
    }

    #[test]
    fn config_from_toml() {
        let toml_str = r#"
[provider]
name = "sample"
timeout_seconds = 10
"#;

        let config: MarketpulseConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.provider.name, "sample");
        assert_eq!(config.provider.timeout_seconds, 10);
    }
}
