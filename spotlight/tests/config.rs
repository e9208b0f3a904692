use std::time::Duration;

use spotlight::{ConfigError, SpotlightConfig};

#[test]
fn test_defaults_match_stock_markup() {
    let config = SpotlightConfig::default();
    assert_eq!(config.control_id, "js-spotlight-input");
    assert_eq!(config.close_id, "js-spotlight-close");
    assert_eq!(config.content_id, "js-spotlight-supporting-content");
    assert_eq!(config.flip_class, "spotlight-flip-translate");
    assert_eq!(config.collapse_offset(), 190.0);
    assert_eq!(config.wait_timeout(), None);
    assert!(config.validate().is_ok());
}

#[test]
fn test_from_json_fills_missing_fields() {
    let config = SpotlightConfig::from_json(r#"{ "chrome_offset": 64, "wait_timeout_ms": 750 }"#)
        .unwrap();
    assert_eq!(config.chrome_offset, 64.0);
    assert_eq!(config.anchor_offset, 100.0);
    assert_eq!(config.control_id, "js-spotlight-input");
    assert_eq!(config.wait_timeout(), Some(Duration::from_millis(750)));
}

#[test]
fn test_from_json_empty_object_is_default() {
    assert_eq!(
        SpotlightConfig::from_json("{}").unwrap(),
        SpotlightConfig::default()
    );
}

#[test]
fn test_from_json_rejects_malformed_input() {
    let err = SpotlightConfig::from_json("{ not json").unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));

    let err = SpotlightConfig::from_json(r#"{ "anchor_offset": "far" }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_from_json_validates() {
    let err = SpotlightConfig::from_json(r#"{ "control_id": "" }"#).unwrap_err();
    assert_eq!(err, ConfigError::Empty("control_id"));
}

#[test]
fn test_validate_rejects_bad_numbers() {
    let err = SpotlightConfig::default()
        .with_rem_base(-1.0)
        .validate()
        .unwrap_err();
    assert_eq!(
        err,
        ConfigError::InvalidValue {
            field: "rem_base",
            value: -1.0
        }
    );

    let err = SpotlightConfig::default()
        .with_anchor_offset(f64::INFINITY)
        .validate()
        .unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "anchor_offset",
            ..
        }
    ));
}

#[test]
fn test_empty_close_id_is_allowed() {
    let config = SpotlightConfig::default().with_close_id("");
    assert!(config.validate().is_ok());
}

#[test]
fn test_builder() {
    let config = SpotlightConfig::new()
        .with_control_id("toggle")
        .with_content_id("panel")
        .with_body_id("page")
        .with_flip_class("flip")
        .with_wait_timeout(Duration::from_secs(2));
    assert_eq!(config.control_id, "toggle");
    assert_eq!(config.content_id, "panel");
    assert_eq!(config.body_id, "page");
    assert_eq!(config.flip_class, "flip");
    assert_eq!(config.wait_timeout_ms, Some(2000));
}

#[test]
fn test_wait_timeout_saturates() {
    let config = SpotlightConfig::default().with_wait_timeout(Duration::MAX);
    assert_eq!(config.wait_timeout_ms, Some(u64::MAX));
}
