//! End-to-end pipeline scenarios.
//!
//! Each test builds an orchestrator around a provider (the sample fixture or
//! a mock), runs the full acquire → analyze → synthesize pipeline, and
//! asserts on the resulting report.

use std::sync::Arc;

use chrono::Utc;
use marketpulse_models::{CompetitorReport, Positioning, ThreatLevel};
use marketpulse_pipeline::test_support::{make_record, FailingProvider, StaticProvider};
use marketpulse_pipeline::{Orchestrator, ProviderError, SampleDataProvider, Stage};

fn sample_orchestrator() -> Orchestrator {
    Orchestrator::new(Arc::new(SampleDataProvider))
}

#[tokio::test]
async fn tech_startup_scenario() {
    let report = sample_orchestrator().run("TechStartup", "SaaS").await.unwrap();

    assert_eq!(report.target_company, "TechStartup");
    assert_eq!(report.competitors.len(), 3);
    assert!(report.market_insights.contains("competitive landscape"));

    assert_eq!(report.recommendations.len(), 5);
    for expected in [
        "Focus on differentiation",
        "Target mid-market segment",
        "Invest in customer support",
        "Develop integrations",
        "Monitor competitor pricing",
    ] {
        assert!(
            report.recommendations.iter().any(|r| r.contains(expected)),
            "no recommendation contains: {expected}"
        );
    }
}

#[tokio::test]
async fn empty_query_scenario() {
    let report = sample_orchestrator().run("", "").await.unwrap();

    assert_eq!(report.target_company, "");
    assert_eq!(report.competitors.len(), 3);
    assert!(!report.market_insights.is_empty());
}

#[tokio::test]
async fn sample_competitors_are_fully_classified() {
    let report = sample_orchestrator().run("Acme", "SaaS").await.unwrap();

    let a = &report.competitors[0];
    assert_eq!(a.competitor_name, "Competitor A");
    assert_eq!(a.threat_level, ThreatLevel::High);
    assert_eq!(a.positioning, Positioning::PremiumMarketLeader);
    assert_eq!(a.key_differentiators.len(), 3);
    assert_eq!(a.opportunities[0], "Capitalize on High prices weakness");
    assert_eq!(a.risks[0], "Competitor's Strong brand advantage");

    let b = &report.competitors[1];
    assert_eq!(b.threat_level, ThreatLevel::Medium);
    assert_eq!(b.positioning, Positioning::ValueFocusedChallenger);

    let c = &report.competitors[2];
    assert_eq!(c.threat_level, ThreatLevel::Medium);
    assert_eq!(c.positioning, Positioning::EnterpriseSpecialist);
}

#[tokio::test]
async fn high_share_premium_competitor_scenario() {
    let orchestrator = Orchestrator::new(Arc::new(StaticProvider::new(vec![make_record(
        "Dominant", "Premium", 25.0,
    )])));

    let report = orchestrator.run("Acme", "SaaS").await.unwrap();
    assert_eq!(report.competitors.len(), 1);
    assert_eq!(report.competitors[0].threat_level, ThreatLevel::High);
    assert_eq!(
        report.competitors[0].positioning,
        Positioning::PremiumMarketLeader
    );
}

#[tokio::test]
async fn unknown_pricing_scenario() {
    let orchestrator = Orchestrator::new(Arc::new(StaticProvider::new(vec![
        make_record("Niche", "Freemium", 2.5),
        make_record("Boundary", "Premium", 20.0),
    ])));

    let report = orchestrator.run("Acme", "SaaS").await.unwrap();
    assert_eq!(report.competitors[0].positioning, Positioning::Undifferentiated);
    assert_eq!(report.competitors[0].threat_level, ThreatLevel::Low);
    // 20.0 sits on the boundary and belongs to the lower tier.
    assert_eq!(report.competitors[1].threat_level, ThreatLevel::Medium);
}

#[tokio::test]
async fn provider_failure_short_circuits() {
    let orchestrator = Orchestrator::new(Arc::new(FailingProvider::new(
        ProviderError::NotFound("obscure industry".to_string()),
    )));

    let err = orchestrator.run("Acme", "obscure industry").await.unwrap_err();
    assert_eq!(err.stage(), Some(Stage::Acquisition));
    assert!(err.to_string().contains("market research failed"));
    assert!(err.to_string().contains("obscure industry"));
}

#[tokio::test]
async fn report_round_trips_through_transport_json() {
    let report = sample_orchestrator().run("TechStartup", "SaaS").await.unwrap();

    let json = report.to_json_pretty().unwrap();
    let deserialized: CompetitorReport = serde_json::from_str(&json).unwrap();
    assert_eq!(report, deserialized);
}

#[tokio::test]
async fn generated_at_falls_within_invocation_window() {
    let before = Utc::now();
    let report = sample_orchestrator().run("Acme", "SaaS").await.unwrap();
    let after = Utc::now();

    assert!(report.generated_at >= before);
    assert!(report.generated_at <= after);
}

#[tokio::test]
async fn concurrent_invocations_share_one_orchestrator() {
    let orchestrator = Arc::new(sample_orchestrator());

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let orchestrator = Arc::clone(&orchestrator);
            tokio::spawn(async move {
                orchestrator
                    .run(&format!("Company {i}"), "SaaS")
                    .await
                    .unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let report = handle.await.unwrap();
        assert_eq!(report.target_company, format!("Company {i}"));
        assert_eq!(report.competitors.len(), 3);
    }
}
