use std::fs;

use selectbox::{
    load_options, parse_options, validate_options, Identity, OptionValue, SelectConfig,
    SelectError, SelectOption, SelectTheme,
};

// ============================================================================
// Builder
// ============================================================================

#[test]
fn test_config_defaults() {
    let config = SelectConfig::new(Vec::new());
    assert_eq!(config.id, None);
    assert_eq!(config.placeholder, None);
    assert_eq!(config.identity, Identity::ByValue);
    assert!(!config.disabled);
    assert_eq!(config.width, 20);
    assert_eq!(config.max_visible, 15);
    assert_eq!(config.theme, SelectTheme::default());
}

#[test]
fn test_config_builder() {
    let config = SelectConfig::new([SelectOption::new("One", 1)])
        .id("numbers")
        .placeholder("Pick a number")
        .identity(Identity::ByInstance)
        .disabled(true)
        .width(32)
        .max_visible(0);

    assert_eq!(config.id.as_deref(), Some("numbers"));
    assert_eq!(config.placeholder.as_deref(), Some("Pick a number"));
    assert_eq!(config.identity, Identity::ByInstance);
    assert!(config.disabled);
    assert_eq!(config.width, 32);
    // At least one row is always shown
    assert_eq!(config.max_visible, 1);
    assert_eq!(config.options.len(), 1);
}

// ============================================================================
// Option lists
// ============================================================================

#[test]
fn test_parse_options() {
    let options =
        parse_options(r#"[{"label": "One", "value": 1}, {"label": "Red", "value": "red"}]"#)
            .unwrap();

    assert_eq!(options.len(), 2);
    assert_eq!(options[0].label(), "One");
    assert_eq!(options[0].value(), &OptionValue::Int(1));
    assert_eq!(options[1].value(), &OptionValue::Text("red".into()));

    // Every parsed option is its own instance
    assert_ne!(options[0].key(), options[1].key());
}

#[test]
fn test_parse_float_values() {
    let options =
        parse_options(r#"[{"label": "Half", "value": 1.5}, {"label": "One", "value": 1.0}]"#)
            .unwrap();

    assert_eq!(options[0].value(), &OptionValue::from(1.5));
    assert_eq!(options[0].value().to_string(), "1.5");
    // A float value never equals the integer of the same magnitude
    assert_ne!(options[1].value(), &OptionValue::Int(1));
    assert!(matches!(options[1].value(), OptionValue::Float(_)));

    let dup = parse_options(r#"[{"label": "A", "value": 0.5}, {"label": "B", "value": 0.5}]"#);
    assert!(matches!(dup, Err(SelectError::DuplicateValue { .. })));
}

#[test]
fn test_float_value_conversion() {
    assert!(matches!(OptionValue::from(2.25), OptionValue::Float(_)));
    assert_eq!(OptionValue::from(f64::NAN), OptionValue::Text("NaN".into()));
}

#[test]
fn test_parse_rejects_duplicates() {
    let err = parse_options(r#"[{"label": "A", "value": 1}, {"label": "B", "value": 1}]"#)
        .unwrap_err();
    assert!(matches!(
        err,
        SelectError::DuplicateValue {
            value: OptionValue::Int(1)
        }
    ));
}

#[test]
fn test_parse_rejects_malformed_json() {
    let err = parse_options(r#"[{"label": "A"}]"#).unwrap_err();
    assert!(matches!(err, SelectError::Json(_)));
}

#[test]
fn test_validate_options() {
    let ok = [SelectOption::new("A", 1), SelectOption::new("B", "1")];
    assert!(validate_options(&ok).is_ok());

    let dup = [SelectOption::new("A", "x"), SelectOption::new("B", "x")];
    assert!(validate_options(&dup).is_err());
}

#[test]
fn test_load_options_from_file() {
    let path = std::env::temp_dir().join(format!("selectbox-options-{}.json", std::process::id()));
    fs::write(&path, r#"[{"label": "Apple", "value": "apple"}]"#).unwrap();

    let options = load_options(&path).unwrap();
    fs::remove_file(&path).unwrap();

    assert_eq!(options.len(), 1);
    assert_eq!(options[0].label(), "Apple");
}

#[test]
fn test_load_missing_file() {
    let err = load_options("/nonexistent/selectbox/options.json").unwrap_err();
    assert!(matches!(err, SelectError::Io(_)));
}

#[test]
fn test_error_messages() {
    let err = SelectError::DuplicateValue {
        value: OptionValue::Text("red".into()),
    };
    assert!(err.to_string().contains("red"));
}
