use pretty_assertions::assert_eq;
use tagrule::{FieldDescriptor, MessageOverrides, Validator, ValidatorConfig, ValidatorError};

const OVERRIDES_JSON: &str = r#"{
    "*": {
        "min": "The {{fieldName}} is under min value.",
        "max": "The {{fieldName}} is over max value {{ ruleValue }}."
    },
    "Age": {
        "max": "The {{ .fieldName }} can't be older than {{.ruleValue}}, got {{value}}."
    }
}"#;

fn record() -> Vec<FieldDescriptor> {
    vec![
        FieldDescriptor::of("ID", &1u32, "min:3|max:0"),
        FieldDescriptor::of("Age", &99u8, "max:60"),
        FieldDescriptor::of("Name", "", "required"),
    ]
}

#[test]
fn test_field_override_beats_wildcard_beats_native() {
    let overrides = MessageOverrides::from_json(OVERRIDES_JSON).unwrap();
    let violations = Validator::new().validate(&record(), &overrides).unwrap();
    assert_eq!(
        violations.messages(),
        vec![
            "The ID is under min value.",
            "The ID is over max value 0.",
            "The Age can't be older than 60, got 99.",
            r#"The Name cannot have length less than 1, the informed value was ""."#,
        ]
    );
}

#[test]
fn test_configured_wildcard_selector() {
    let config = ValidatorConfig {
        wildcard_selector: "__all__".to_owned(),
        ..ValidatorConfig::default()
    };
    let overrides = MessageOverrides::new()
        .with("*", "required", "ignored")
        .with("__all__", "required", "{{fieldName}} is mandatory.");
    let violations = Validator::with_config(config)
        .validate(&vec![FieldDescriptor::of("Name", "", "required")], &overrides)
        .unwrap();
    assert_eq!(violations.messages(), vec!["Name is mandatory."]);
}

#[test]
fn test_empty_override_falls_through() {
    let overrides = MessageOverrides::new().with("Name", "required", "");
    let violations = Validator::new()
        .validate(&vec![FieldDescriptor::of("Name", "", "required")], &overrides)
        .unwrap();
    assert_eq!(
        violations.messages(),
        vec![r#"The Name cannot have length less than 1, the informed value was ""."#]
    );
}

#[test]
fn test_malformed_override_is_fatal() {
    let overrides = MessageOverrides::new().with("*", "min", "The {{fieldName} is short.");
    let err = Validator::new()
        .validate(&vec![FieldDescriptor::of("ID", &1u8, "min:3")], &overrides)
        .unwrap_err();
    assert!(matches!(err, ValidatorError::Template { .. }));

    // Never rendered, never checked.
    let passing = Validator::new()
        .validate(&vec![FieldDescriptor::of("ID", &5u8, "min:3")], &overrides)
        .unwrap();
    assert!(passing.is_empty());
}

#[test]
fn test_config_from_json() {
    let config = ValidatorConfig::from_json(
        r#"{"wildcard_selector": "any", "length_mode": "bytes"}"#,
    )
    .unwrap();
    let validator = Validator::with_config(config);

    // "é" is one char but two bytes.
    let violations = validator
        .validate(
            &vec![FieldDescriptor::of("Name", "é", "max:1")],
            &MessageOverrides::new().with("any", "max", "too long"),
        )
        .unwrap();
    assert_eq!(violations.messages(), vec!["too long"]);

    let chars = Validator::new()
        .validate(&vec![FieldDescriptor::of("Name", "é", "max:1")], &MessageOverrides::new())
        .unwrap();
    assert!(chars.is_empty());
}
