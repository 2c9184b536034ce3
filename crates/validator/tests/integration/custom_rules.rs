use pretty_assertions::assert_eq;
use tagrule::{
    FieldDescriptor, FieldType, FieldValue, MessageOverrides, OpaqueValue, Record,
    RegistryError, TypeDescriptor, Validator,
};

#[test]
fn test_custom_string_rule_with_explicit_message() {
    let validator = Validator::new();
    validator
        .add_custom_rule("string", "name", |ctx| {
            if ctx.value().as_str() == Some("Bob") {
                return Ok(Some(ctx.violation_message("Invalid name.")));
            }
            Ok(None)
        })
        .unwrap();

    let bob = vec![FieldDescriptor::of("Name", "Bob", "name")];
    let alice = vec![FieldDescriptor::of("Name", "Alice", "name")];
    assert_eq!(
        validator
            .validate(&bob, &MessageOverrides::new())
            .unwrap()
            .messages(),
        vec!["Invalid name."]
    );
    assert!(validator
        .validate(&alice, &MessageOverrides::new())
        .unwrap()
        .is_empty());
}

#[test]
fn test_custom_rule_uses_generic_then_override_message() {
    let validator = Validator::new();
    validator
        .add_custom_rule("numeric", "even", |ctx| match ctx.value() {
            FieldValue::Int(n) if n % 2 != 0 => ctx.violation(),
            FieldValue::Uint(n) if n % 2 != 0 => ctx.violation(),
            _ => Ok(None),
        })
        .unwrap();

    let record = vec![FieldDescriptor::of("Count", &3u16, "even")];
    assert_eq!(
        validator
            .validate(&record, &MessageOverrides::new())
            .unwrap()
            .messages(),
        vec!["The Count failed the even rule."]
    );

    let overrides = MessageOverrides::new().with("Count", "even", "{{fieldName}}={{value}} is odd");
    assert_eq!(
        validator.validate(&record, &overrides).unwrap().messages(),
        vec!["Count=3 is odd"]
    );
}

#[test]
fn test_native_rule_cannot_be_replaced_or_removed() {
    let validator = Validator::new();
    let err = validator
        .add_custom_rule("numeric", "min", |_| Ok(None))
        .unwrap_err();
    assert!(matches!(err, RegistryError::NativeRuleConflict { .. }));
    assert!(validator.remove_custom_rule("string", "email").is_err());

    let record = vec![FieldDescriptor::of("ID", &1u8, "min:3")];
    assert_eq!(
        validator
            .validate(&record, &MessageOverrides::new())
            .unwrap()
            .messages(),
        vec!["The ID cannot be less than 3, the value informed was 1."]
    );
}

#[test]
fn test_removed_rule_becomes_unknown() {
    let validator = Validator::new();
    validator
        .add_custom_rule("string", "shout", |ctx| {
            if ctx.value().as_str().is_some_and(|s| s != s.to_uppercase()) {
                return ctx.violation();
            }
            Ok(None)
        })
        .unwrap();
    let record = vec![FieldDescriptor::of("Title", "quiet", "shout")];
    assert_eq!(validator.validate(&record, &MessageOverrides::new()).unwrap().len(), 1);

    validator.remove_custom_rule("string", "shout").unwrap();
    validator.remove_custom_rule("string", "shout").unwrap();
    assert!(validator.validate(&record, &MessageOverrides::new()).is_err());
}

#[test]
fn test_rule_names_are_checked() {
    let validator = Validator::new();
    for bad in ["", "a|b", "a:b", "a b"] {
        assert!(matches!(
            validator.add_custom_rule("string", bad, |_| Ok(None)),
            Err(RegistryError::InvalidRuleName { .. })
        ));
    }
}

// ----------------------------------------------------------------------------
// Custom category
// ----------------------------------------------------------------------------

#[derive(Debug, Clone)]
struct Address {
    street: String,
    city: String,
}

impl FieldType for Address {
    fn descriptor() -> TypeDescriptor {
        TypeDescriptor::named("Address")
    }

    fn to_field_value(&self) -> FieldValue {
        FieldValue::Opaque(OpaqueValue::new(
            self.clone(),
            format!("{}, {}", self.street, self.city),
        ))
    }
}

#[derive(Record)]
struct Order {
    #[validate(rules = "has_city", name = "Shipping")]
    shipping: Address,
    #[validate(rules = "has_city|min:3", name = "Billing")]
    billing: Address,
}

#[test]
fn test_custom_category() {
    let order = Order {
        shipping: Address {
            street: "1 Main St".to_owned(),
            city: "Springfield".to_owned(),
        },
        billing: Address {
            street: "2 Side St".to_owned(),
            city: String::new(),
        },
    };

    // Category not registered yet: fields are skipped, unknown rules included.
    let validator = Validator::new();
    assert!(validator
        .validate(&order, &MessageOverrides::new())
        .unwrap()
        .is_empty());

    validator
        .add_custom_rule("Address", "has_city", |ctx| {
            let address = ctx
                .value()
                .downcast_ref::<Address>()
                .ok_or_else(|| ctx.mismatch("an Address"))?;
            if address.city.is_empty() {
                return ctx.violation();
            }
            Ok(None)
        })
        .unwrap();
    validator
        .add_custom_rule("Address", "min", |_| Ok(None))
        .unwrap();
    assert_eq!(validator.registry().rules_of("Address"), vec!["has_city", "min"]);

    let overrides =
        MessageOverrides::new().with("*", "has_city", "The {{fieldName}} needs a city: {{value}}.");
    assert_eq!(
        validator.validate(&order, &overrides).unwrap().messages(),
        vec!["The Billing needs a city: 2 Side St, ."]
    );
}

#[test]
fn test_process_wide_registration() {
    // Unique name: the global validator is shared by every test in this binary.
    tagrule::add_custom_rule("string", "global_no_spaces", |ctx| {
        if ctx.value().as_str().is_some_and(|s| s.contains(' ')) {
            return ctx.violation();
        }
        Ok(None)
    })
    .unwrap();
    assert!(tagrule::global().registry().lookup("string", "global_no_spaces").is_some());

    let record = vec![FieldDescriptor::of("Slug", "a b", "global_no_spaces")];
    assert_eq!(
        tagrule::validate_fields(&record, &["Slug"], &MessageOverrides::new())
            .unwrap()
            .messages(),
        vec!["The Slug failed the global_no_spaces rule."]
    );

    tagrule::remove_custom_rule("string", "global_no_spaces").unwrap();
    assert!(tagrule::validate(&record, &MessageOverrides::new()).is_err());
}
