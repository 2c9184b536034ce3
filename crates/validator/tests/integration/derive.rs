use pretty_assertions::assert_eq;
use tagrule::{MessageOverrides, Record, Validator, ValidatorError};

#[derive(Record)]
struct User {
    #[validate(rules = "min:3|max:20", name = "ID")]
    id: u32,

    #[validate(rules = "regex:^[0-9]*$|required", name = "Name", alias = "name")]
    name: String,

    #[validate(rules = "min:18|max:60", name = "Age")]
    age: u8,

    #[validate(rules = "email|required_without_all:Site,JSON", name = "Email")]
    email: String,

    #[validate(rules = "url", name = "Site")]
    site: String,

    #[validate(rules = "json", name = "JSON")]
    json: String,

    #[validate(rules = "ipv4", name = "IP")]
    ip: String,

    #[validate(rules = "alpha_num_space", name = "Nickname")]
    nickname: String,

    #[validate("min:1|distinct")]
    tags: Vec<String>,

    // Not part of the record.
    #[allow(dead_code)]
    session: u64,
}

fn invalid_user() -> User {
    User {
        id: 2,
        name: String::new(),
        age: 61,
        email: String::new(),
        site: String::new(),
        json: String::new(),
        ip: "1.2.3".to_owned(),
        nickname: "no_underscores".to_owned(),
        tags: vec!["a".to_owned(), "a".to_owned()],
        session: 7,
    }
}

fn valid_user() -> User {
    User {
        id: 5,
        name: "123".to_owned(),
        age: 30,
        email: "user@example.com".to_owned(),
        site: "https://example.com/home".to_owned(),
        json: r#"{"a":[1,2]}"#.to_owned(),
        ip: "192.168.0.1".to_owned(),
        nickname: "Jane Doe 2".to_owned(),
        tags: vec!["a".to_owned(), "b".to_owned()],
        session: 7,
    }
}

#[test]
fn test_derived_fields_follow_declaration_order() {
    let fields = invalid_user().fields().unwrap();
    let names: Vec<&str> = fields.iter().map(|f| f.name()).collect();
    assert_eq!(
        names,
        vec!["ID", "Name", "Age", "Email", "Site", "JSON", "IP", "Nickname", "tags"]
    );
    assert_eq!(fields[1].alias(), Some("name"));
    assert_eq!(fields[8].rules(), "min:1|distinct");
}

#[test]
fn test_end_to_end_messages() {
    let violations = Validator::new()
        .validate(&invalid_user(), &MessageOverrides::new())
        .unwrap();
    assert_eq!(
        violations.messages(),
        vec![
            "The ID cannot be less than 3, the value informed was 2.",
            r#"The Name cannot have length less than 1, the informed value was ""."#,
            "The Age cannot be greater than 60, the value informed was 61.",
            "The Email is not a valid required_without_all, because if all fields: (Site,JSON) are not filled, then Email needs to be filled.",
            r#"The IP is not a valid ipv4, the informed value was "1.2.3"."#,
            r#"The Nickname is not a valid alpha_num_space, the informed value was "no_underscores"."#,
            "The tags cannot have repeated elements, the informed value was [a, a].",
        ]
    );
}

#[test]
fn test_valid_record_has_no_violations() {
    let violations = tagrule::validate(&valid_user(), &MessageOverrides::new()).unwrap();
    assert!(violations.is_empty(), "{:?}", violations.messages());
    assert!(violations.into_result().is_ok());
}

#[test]
fn test_validation_is_idempotent() {
    let validator = Validator::new();
    let user = invalid_user();
    let first = validator.validate(&user, &MessageOverrides::new()).unwrap();
    let second = validator.validate(&user, &MessageOverrides::new()).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_validate_fields_selects_by_name_and_alias() {
    let user = invalid_user();
    let validator = Validator::new();

    let by_name = validator
        .validate_fields(&user, &["ID", "Age"], &MessageOverrides::new())
        .unwrap();
    assert_eq!(
        by_name.messages(),
        vec![
            "The ID cannot be less than 3, the value informed was 2.",
            "The Age cannot be greater than 60, the value informed was 61.",
        ]
    );

    let by_alias = validator
        .validate_fields(&user, &["name"], &MessageOverrides::new())
        .unwrap();
    assert_eq!(by_alias.len(), 1);
    assert_eq!(by_alias.as_slice()[0].field(), "Name");

    // Cross-field rules still see unselected siblings.
    let email = validator
        .validate_fields(&user, &["Email"], &MessageOverrides::new())
        .unwrap();
    assert_eq!(email.len(), 1);
    assert_eq!(email.as_slice()[0].rule(), "required_without_all");
}

#[test]
fn test_required_matches_min_one() {
    #[derive(Record)]
    struct Pair {
        #[validate(rules = "required", name = "Name")]
        a: String,
        #[validate(rules = "min:1", name = "Name")]
        b: String,
    }

    let pair = Pair {
        a: String::new(),
        b: String::new(),
    };
    let violations = tagrule::validate(&pair, &MessageOverrides::new()).unwrap();
    let messages = violations.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[0], messages[1]);
}

#[test]
fn test_absent_record_is_invalid_input() {
    let missing: Option<User> = None;
    let err = tagrule::validate(&missing, &MessageOverrides::new()).unwrap_err();
    assert!(matches!(err, ValidatorError::InvalidInput(_)));

    let present = Some(invalid_user());
    assert_eq!(
        tagrule::validate(&present, &MessageOverrides::new())
            .unwrap()
            .len(),
        7
    );
}

#[test]
fn test_unknown_rule_is_fatal() {
    #[derive(Record)]
    struct Broken {
        #[validate("min:1")]
        ok: u8,
        #[validate("min:1|shiny")]
        bad: String,
    }

    let err = tagrule::validate(&Broken { ok: 0, bad: String::new() }, &MessageOverrides::new())
        .unwrap_err();
    assert!(matches!(
        &err,
        ValidatorError::UnknownRule { category, rule } if category == "string" && rule == "shiny"
    ));
}

#[test]
fn test_bool_fields_are_skipped() {
    #[derive(Record)]
    struct Flags {
        #[validate("whatever|min:3")]
        enabled: bool,
    }

    let violations = tagrule::validate(&Flags { enabled: true }, &MessageOverrides::new()).unwrap();
    assert!(violations.is_empty());
}

#[test]
fn test_generic_record() {
    #[derive(Record)]
    struct Wrapper<T> {
        #[validate(rules = "max:3", name = "Inner")]
        inner: T,
    }

    let numbers = Wrapper { inner: 9i64 };
    assert_eq!(
        tagrule::validate(&numbers, &MessageOverrides::new())
            .unwrap()
            .messages(),
        vec!["The Inner cannot be greater than 3, the value informed was 9."]
    );

    let text = Wrapper { inner: "abcd".to_owned() };
    assert_eq!(
        tagrule::validate(&text, &MessageOverrides::new())
            .unwrap()
            .messages(),
        vec![r#"The Inner cannot have length greater than 3, the informed value was "abcd"."#]
    );
}
