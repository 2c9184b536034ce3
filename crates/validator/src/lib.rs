//! # tagrule
//!
//! A declarative validation engine for structured records. Each field
//! carries a compact rule string; the engine picks the rule set for the
//! field's type, runs every rule and returns rendered messages for the ones
//! that fail.
//!
//! ## Quick Start
//!
//! ```rust
//! use tagrule::{MessageOverrides, Record};
//!
//! #[derive(Record)]
//! struct Signup {
//!     #[validate(rules = "min:3|max:20", name = "ID")]
//!     id: u32,
//!     #[validate("regex:^[0-9]*$|required")]
//!     name: String,
//! }
//!
//! let signup = Signup { id: 2, name: String::new() };
//! let violations = tagrule::validate(&signup, &MessageOverrides::new())?;
//! assert_eq!(violations.len(), 2);
//! assert_eq!(violations.messages()[0], "The ID cannot be less than 3, the value informed was 2.");
//! # Ok::<(), tagrule::ValidatorError>(())
//! ```
//!
//! ## Rule strings
//!
//! `rule1[:arg1]|rule2[:arg2]|...`, see [`parse_rules`]. The rules available
//! depend on the field's [`Category`]; every [`RuleRegistry`] starts with the
//! native rules of the four built-in categories.
//!
//! ## Messages
//!
//! Failed rules are rendered from templates with `{{fieldName}}`,
//! `{{ruleValue}}`, `{{value}}` and `{{ruleName}}` placeholders. A
//! [`MessageOverrides`] table replaces the native wording per field or for
//! every field.
//!
//! ## Custom rules
//!
//! ```rust
//! use tagrule::{FieldDescriptor, MessageOverrides, Validator};
//!
//! let validator = Validator::new();
//! validator.add_custom_rule("string", "name", |ctx| {
//!     if ctx.value().as_str() == Some("Bob") {
//!         return Ok(Some(ctx.violation_message("Invalid name.")));
//!     }
//!     Ok(None)
//! })?;
//!
//! let record = vec![FieldDescriptor::of("Name", "Bob", "name")];
//! let violations = validator.validate(&record, &MessageOverrides::new()).unwrap();
//! assert_eq!(violations.messages(), vec!["Invalid name."]);
//! # Ok::<(), tagrule::RegistryError>(())
//! ```

extern crate self as tagrule;

mod category;
mod config;
mod context;
mod engine;
mod error;
pub mod message;
mod parser;
pub mod patterns;
pub mod prelude;
mod record;
mod registry;
mod rules;
mod value;

pub use category::{Category, TypeDescriptor, classify};
pub use config::{Clock, LengthMode, ValidatorConfig};
pub use context::RuleContext;
pub use engine::Validator;
pub use error::{RegistryError, ValidatorError, Violation, Violations};
pub use message::{
    GENERIC_TEMPLATE, MessageArgs, MessageOverrides, Template, native_template, resolve,
};
pub use parser::{RuleSpec, parse_rules};
pub use record::{Field, FieldDescriptor, Record};
pub use registry::{RuleHandler, RuleOutcome, RuleRegistry, RuleTable};
pub use value::{FieldType, FieldValue, OpaqueValue};

/// `#[derive(Record)]`: enumerates the fields carrying a `#[validate]`
/// attribute, in declaration order.
#[cfg(feature = "derive")]
pub use tagrule_macros::Record;

use std::sync::LazyLock;

// ============================================================================
// PROCESS-WIDE VALIDATOR
// ============================================================================

static GLOBAL: LazyLock<Validator> = LazyLock::new(Validator::new);

/// The process-wide validator used by the free functions of this crate.
pub fn global() -> &'static Validator {
    &GLOBAL
}

/// Validates a record with the process-wide validator.
///
/// # Errors
///
/// See [`Validator::validate`].
pub fn validate<R: Record + ?Sized>(
    record: &R,
    overrides: &MessageOverrides,
) -> Result<Violations, ValidatorError> {
    GLOBAL.validate(record, overrides)
}

/// Validates selected fields with the process-wide validator.
///
/// # Errors
///
/// See [`Validator::validate_fields`].
pub fn validate_fields<R: Record + ?Sized>(
    record: &R,
    selectors: &[&str],
    overrides: &MessageOverrides,
) -> Result<Violations, ValidatorError> {
    GLOBAL.validate_fields(record, selectors, overrides)
}

/// Registers a custom rule with the process-wide validator.
///
/// # Errors
///
/// See [`Validator::add_custom_rule`].
pub fn add_custom_rule<F>(category: &str, rule: &str, handler: F) -> Result<(), RegistryError>
where
    F: Fn(&RuleContext<'_>) -> RuleOutcome + Send + Sync + 'static,
{
    GLOBAL.add_custom_rule(category, rule, handler)
}

/// Removes a custom rule from the process-wide validator.
///
/// # Errors
///
/// See [`Validator::remove_custom_rule`].
pub fn remove_custom_rule(category: &str, rule: &str) -> Result<(), RegistryError> {
    GLOBAL.remove_custom_rule(category, rule)
}
