use pitwall_core::errors::*;

#[test]
fn invalid_sigma_carries_entity_and_value() {
    let err = ConfigError::InvalidSigma {
        entity_id: "44".into(),
        sigma: -2.0,
    };
    let msg = err.to_string();
    assert!(msg.contains("44"));
    assert!(msg.contains("-2"));
}

#[test]
fn invalid_weight_carries_weight() {
    let err = PitwallError::InvalidWeight { weight: 0.0 };
    assert!(err.to_string().contains('0'));
    assert_eq!(err.error_code(), codes::INVALID_WEIGHT);
}

#[test]
fn unknown_entity_carries_id() {
    let err = PitwallError::UnknownEntity { id: "99".into() };
    assert!(err.to_string().contains("99"));
    assert_eq!(err.coded_string(), "[UNKNOWN_ENTITY] unknown entity: 99");
}

#[test]
fn rank_out_of_range_carries_bounds() {
    let err = PitwallError::RankOutOfRange {
        entity_id: "1".into(),
        rank: 25,
        scale: 20,
    };
    let msg = err.to_string();
    assert!(msg.contains("25"));
    assert!(msg.contains("1..=20"));
}

// --- From impls ---

#[test]
fn config_error_converts_to_pitwall_error() {
    let config_err = ConfigError::DuplicateEntity {
        entity_id: "4".into(),
    };
    let err: PitwallError = config_err.into();
    assert!(matches!(err, PitwallError::Configuration(_)));
    assert_eq!(err.error_code(), codes::CONFIG_ERROR);
}

#[test]
fn toml_error_converts_to_parse_error() {
    let toml_err = toml::from_str::<toml::Value>("= broken").unwrap_err();
    let err: ConfigError = toml_err.into();
    assert_eq!(err.error_code(), codes::CONFIG_PARSE_ERROR);
}

#[test]
fn serde_json_error_converts_to_pitwall_error() {
    let json_err = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
    let err: PitwallError = json_err.into();
    assert_eq!(err.error_code(), codes::SERIALIZATION_ERROR);
}
