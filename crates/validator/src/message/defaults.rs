//! Native default messages per (category, rule)

use crate::category::Category;

/// Used for rules that have no native message, such as custom rules.
pub const GENERIC_TEMPLATE: &str = "The {{fieldName}} failed the {{ruleName}} rule.";

const NUMERIC: &[(&str, &str)] = &[
    (
        "min",
        "The {{fieldName}} cannot be less than {{ruleValue}}, the value informed was {{value}}.",
    ),
    (
        "max",
        "The {{fieldName}} cannot be greater than {{ruleValue}}, the value informed was {{value}}.",
    ),
];

const STRING: &[(&str, &str)] = &[
    (
        "min",
        "The {{fieldName}} cannot have length less than {{ruleValue}}, the informed value was \"{{value}}\".",
    ),
    (
        "max",
        "The {{fieldName}} cannot have length greater than {{ruleValue}}, the informed value was \"{{value}}\".",
    ),
    (
        "length",
        "The {{fieldName}} must have length equal to {{ruleValue}}, the informed value was \"{{value}}\".",
    ),
    (
        "required",
        "The {{fieldName}} cannot have length less than {{ruleValue}}, the informed value was \"{{value}}\".",
    ),
    (
        "email",
        "The {{fieldName}} is not a valid email, the informed value was \"{{value}}\".",
    ),
    (
        "url",
        "The {{fieldName}} is not a valid url, the informed value was \"{{value}}\".",
    ),
    (
        "ipv4",
        "The {{fieldName}} is not a valid ipv4, the informed value was \"{{value}}\".",
    ),
    (
        "json",
        "The {{fieldName}} is not a valid json, the informed value was \"{{value}}\".",
    ),
    (
        "alpha",
        "The {{fieldName}} is not a valid alpha, the informed value was \"{{value}}\".",
    ),
    (
        "alpha_dash",
        "The {{fieldName}} is not a valid alpha_dash, the informed value was \"{{value}}\".",
    ),
    (
        "alpha_num",
        "The {{fieldName}} is not a valid alpha_num, the informed value was \"{{value}}\".",
    ),
    (
        "alpha_space",
        "The {{fieldName}} is not a valid alpha_space, the informed value was \"{{value}}\".",
    ),
    (
        "alpha_dash_space",
        "The {{fieldName}} is not a valid alpha_dash_space, the informed value was \"{{value}}\".",
    ),
    (
        "alpha_num_space",
        "The {{fieldName}} is not a valid alpha_num_space, the informed value was \"{{value}}\".",
    ),
    (
        "regex",
        "The {{fieldName}} does not match the pattern {{ruleValue}}, the informed value was \"{{value}}\".",
    ),
];

const TIMESTAMP: &[(&str, &str)] = &[
    (
        "equal",
        "The {{fieldName}} have to be equals to {{ruleValue}}, the timestamp informed was {{value}}.",
    ),
    (
        "after",
        "The {{fieldName}} have to be after {{ruleValue}}, the timestamp informed was {{value}}.",
    ),
    (
        "before",
        "The {{fieldName}} have to be before {{ruleValue}}, the timestamp informed was {{value}}.",
    ),
    (
        "equal_date",
        "The {{fieldName}} have to be equals to {{ruleValue}}, the date informed was {{value}}.",
    ),
    (
        "after_date",
        "The {{fieldName}} have to be after {{ruleValue}}, the date informed was {{value}}.",
    ),
    (
        "before_date",
        "The {{fieldName}} have to be before {{ruleValue}}, the date informed was {{value}}.",
    ),
    (
        "after_or_equal",
        "The {{fieldName}} have to be after or equals to {{ruleValue}}, the timestamp informed was {{value}}.",
    ),
    (
        "before_or_equal",
        "The {{fieldName}} have to be before or equals to {{ruleValue}}, the timestamp informed was {{value}}.",
    ),
    (
        "after_or_equal_date",
        "The {{fieldName}} have to be after or equals to {{ruleValue}}, the date informed was {{value}}.",
    ),
    (
        "before_or_equal_date",
        "The {{fieldName}} have to be before or equals to {{ruleValue}}, the date informed was {{value}}.",
    ),
];

const ARRAY: &[(&str, &str)] = &[
    (
        "min",
        "The {{fieldName}} cannot have less than {{ruleValue}} elements, the number of elements informed was {{value}}.",
    ),
    (
        "max",
        "The {{fieldName}} cannot have more than {{ruleValue}} elements, the number of elements informed was {{value}}.",
    ),
    (
        "required",
        "The {{fieldName}} cannot have less than {{ruleValue}} elements, the number of elements informed was {{value}}.",
    ),
    (
        "distinct",
        "The {{fieldName}} cannot have repeated elements, the informed value was {{value}}.",
    ),
];

// Shared by the string and array categories.
const CROSS_FIELD: &[(&str, &str)] = &[
    (
        "required_with",
        "The {{fieldName}} is not a valid required_with, because if any of the fields: ({{ruleValue}}) is filled, then {{fieldName}} needs to be filled.",
    ),
    (
        "required_with_all",
        "The {{fieldName}} is not a valid required_with_all, because if all fields: ({{ruleValue}}) are filled, then {{fieldName}} needs to be filled.",
    ),
    (
        "required_without",
        "The {{fieldName}} is not a valid required_without, because if any of the fields: ({{ruleValue}}) is not filled, then {{fieldName}} needs to be filled.",
    ),
    (
        "required_without_all",
        "The {{fieldName}} is not a valid required_without_all, because if all fields: ({{ruleValue}}) are not filled, then {{fieldName}} needs to be filled.",
    ),
];

/// The native default template for a (category, rule) pair.
///
/// Returns `None` for custom categories and for rules with no native
/// message.
pub fn native_template(category: &Category, rule: &str) -> Option<&'static str> {
    let tables: &[&[(&str, &str)]] = match category {
        Category::Numeric => &[NUMERIC],
        Category::String => &[STRING, CROSS_FIELD],
        Category::Timestamp => &[TIMESTAMP],
        Category::Array => &[ARRAY, CROSS_FIELD],
        Category::Custom(_) => return None,
    };
    tables
        .iter()
        .flat_map(|table| table.iter())
        .find(|(name, _)| *name == rule)
        .map(|(_, template)| *template)
}
