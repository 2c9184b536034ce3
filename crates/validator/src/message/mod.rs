//! Message resolution
//!
//! A failed rule is rendered from the first template found in this order:
//!
//! 1. the override for the exact field name
//! 2. the override for the wildcard selector
//! 3. the native default for the field's category and the rule
//! 4. [`GENERIC_TEMPLATE`]
//!
//! Empty override templates are skipped.

mod defaults;
mod overrides;
mod template;

pub use defaults::{GENERIC_TEMPLATE, native_template};
pub use overrides::MessageOverrides;
pub use template::{MessageArgs, Placeholder, Template, TemplatePart};

use crate::category::Category;
use crate::error::ValidatorError;

/// Picks the template source for a failed rule.
pub fn select_template<'a>(
    overrides: &'a MessageOverrides,
    wildcard: &str,
    category: &Category,
    field_name: &str,
    rule_name: &str,
) -> &'a str {
    overrides
        .get(field_name, rule_name)
        .or_else(|| overrides.get(wildcard, rule_name))
        .or_else(|| native_template(category, rule_name))
        .unwrap_or(GENERIC_TEMPLATE)
}

/// Selects and renders the message for a failed rule.
///
/// # Errors
///
/// Returns [`ValidatorError::Template`] when the selected template is
/// malformed.
///
/// # Examples
///
/// ```
/// use tagrule::{Category, MessageArgs, MessageOverrides, resolve};
///
/// let args = MessageArgs { field_name: "ID", rule_name: "min", rule_value: "3", value: "2" };
/// let message = resolve(&MessageOverrides::new(), "*", &Category::Numeric, &args).unwrap();
/// assert_eq!(message, "The ID cannot be less than 3, the value informed was 2.");
/// ```
pub fn resolve(
    overrides: &MessageOverrides,
    wildcard: &str,
    category: &Category,
    args: &MessageArgs<'_>,
) -> Result<String, ValidatorError> {
    let source = select_template(overrides, wildcard, category, args.field_name, args.rule_name);
    Ok(Template::parse(source)?.render(args))
}
