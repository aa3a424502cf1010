//! Tests for `--param` parsing.

use textcheck_cli::params::{parse_param, raw_parameters};

#[test]
fn splits_at_first_equals() {
    assert_eq!(
        parse_param("enabledRules=A,B").unwrap(),
        ("enabledRules".to_string(), "A,B".to_string())
    );
    assert_eq!(
        parse_param("motherTongue=a=b").unwrap(),
        ("motherTongue".to_string(), "a=b".to_string())
    );
}

#[test]
fn empty_value_is_kept() {
    let (key, value) = parse_param("language=").unwrap();
    assert_eq!(key, "language");
    assert!(value.is_empty());
}

#[test]
fn malformed_arguments_are_rejected() {
    insta::assert_snapshot!(
        parse_param("language").unwrap_err(),
        @"expected KEY=VALUE, got 'language'"
    );
    insta::assert_snapshot!(
        parse_param("=auto").unwrap_err(),
        @"missing parameter name in '=auto'"
    );
}

#[test]
fn repeated_keys_keep_last_value() {
    let pairs = vec![
        ("language".to_string(), "de".to_string()),
        ("language".to_string(), "auto".to_string()),
        ("preferredVariants".to_string(), "de-AT".to_string()),
    ];
    let raw = raw_parameters(&pairs);
    assert_eq!(raw.len(), 2);
    assert_eq!(raw.get("language"), Some("auto"));
}
