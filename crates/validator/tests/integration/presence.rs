use pretty_assertions::assert_eq;
use rstest::rstest;
use tagrule::{MessageOverrides, Record, Validator};

#[derive(Record)]
struct Contact {
    #[validate(rules = "required_with:Phone", name = "Email")]
    email: String,
    #[validate(name = "Phone")]
    phone: String,
    #[validate(rules = "required_without:Email,Phone", name = "Address")]
    address: String,
    #[validate(rules = "required_with_all:Email,Phone", name = "Tags")]
    tags: Vec<String>,
}

fn contact(email: &str, phone: &str, address: &str, tags: usize) -> Contact {
    Contact {
        email: email.to_owned(),
        phone: phone.to_owned(),
        address: address.to_owned(),
        tags: vec!["t".to_owned(); tags],
    }
}

#[rstest]
#[case(contact("", "", "", 0), vec!["Address"])]
#[case(contact("", "555", "", 0), vec!["Email", "Address"])]
#[case(contact("a@b.c", "555", "", 0), vec!["Tags"])]
#[case(contact("a@b.c", "555", "home", 1), vec![])]
#[case(contact("a@b.c", "", "home", 0), vec![])]
fn presence_rules(#[case] input: Contact, #[case] failing: Vec<&str>) {
    let violations = Validator::new()
        .validate(&input, &MessageOverrides::new())
        .unwrap();
    let fields: Vec<&str> = violations.iter().map(|v| v.field()).collect();
    assert_eq!(fields, failing);
}

#[test]
fn test_presence_messages() {
    let violations = Validator::new()
        .validate(&contact("a@b.c", "555", "", 0), &MessageOverrides::new())
        .unwrap();
    assert_eq!(
        violations.messages(),
        vec![
            "The Tags is not a valid required_with_all, because if all fields: (Email,Phone) are filled, then Tags needs to be filled."
        ]
    );
}

#[test]
fn test_presence_uses_custom_required_semantics() {
    // A custom `required` on a custom category makes its fields evaluable.
    #[derive(Record)]
    struct Toggle {
        #[validate(name = "Flag")]
        flag: bool,
        #[validate(rules = "required_with:Flag", name = "Reason")]
        reason: String,
    }

    let validator = Validator::new();
    let input = Toggle {
        flag: true,
        reason: String::new(),
    };
    assert!(validator
        .validate(&input, &MessageOverrides::new())
        .unwrap()
        .is_empty());

    validator
        .add_custom_rule("bool", "required", |ctx| {
            if ctx.value() == &tagrule::FieldValue::Bool(false) {
                return ctx.violation();
            }
            Ok(None)
        })
        .unwrap();
    assert_eq!(
        validator
            .validate(&input, &MessageOverrides::new())
            .unwrap()
            .len(),
        1
    );
}
