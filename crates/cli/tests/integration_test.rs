use campaign_kit_content::{evaluate_metadata, score_subject};
use campaign_kit_core::config::AppConfig;
use campaign_kit_core::significance::{evaluate, ExperimentInput, Winner};
use campaign_kit_core::SignificanceError;
use campaign_kit_utm::{build_utm_url, UtmParams};

#[test]
fn experiment_flow_with_default_config() {
    let config = AppConfig::default();

    let result = evaluate(&ExperimentInput::new(1000.0, 50.0, 1000.0, 80.0))
        .expect("valid counts should evaluate");

    assert_eq!(result.winner, Winner::Treatment);
    assert!(result.is_significant(config.experiment.alpha));
    assert!((result.relative_lift - 0.6).abs() < 1e-9);
}

#[test]
fn experiment_error_carries_a_user_facing_message() {
    let err = evaluate(&ExperimentInput::new(1000.0, 1200.0, 1000.0, 50.0)).unwrap_err();
    assert_eq!(err, SignificanceError::ConversionsExceedVisitors);
    assert_eq!(err.to_string(), "conversions cannot exceed visitors");
}

#[test]
fn utm_flow_builds_a_preset_url_with_overrides() {
    let mut params = UtmParams::email_newsletter();
    params.campaign = Some("spring_launch".to_string());

    let url = build_utm_url("https://example.com/landing?ref=home", &params)
        .expect("base URL is valid");

    assert!(url.contains("ref=home"));
    assert!(url.contains("utm_source=newsletter"));
    assert!(url.contains("utm_medium=email"));
    assert!(url.contains("utm_campaign=spring_launch"));
}

#[test]
fn content_flow_uses_configured_limits_and_terms() {
    let config = AppConfig::default();

    let seo = evaluate_metadata(
        "How to Plan a Product Launch in 2026",
        "A practical checklist covering positioning, pricing, launch-day logistics, \
         and the follow-up experiments that tell you whether any of it worked.",
        &config.seo,
    );
    assert!(seo.title_in_range);
    assert!(seo.description_in_range);

    let scored = score_subject("Free cash!!! Act now!!!", &config.subject);
    assert_eq!(scored.score, 35);
    assert!(!scored.notes.is_empty());
}
