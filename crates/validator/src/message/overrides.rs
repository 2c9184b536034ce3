//! Caller-supplied message overrides

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Override table: selector → rule name → template.
///
/// The selector is either the wildcard (`"*"` unless configured otherwise)
/// or an exact field name.
///
/// # Examples
///
/// ```
/// use tagrule::MessageOverrides;
///
/// let from_code = MessageOverrides::new()
///     .with("*", "min", "The {{fieldName}} is under min value.")
///     .with("Age", "max", "The {{fieldName}} is over max value.");
///
/// let from_json = MessageOverrides::from_json(
///     r#"{"*":{"min":"The {{fieldName}} is under min value."},"Age":{"max":"The {{fieldName}} is over max value."}}"#,
/// )
/// .unwrap();
///
/// assert_eq!(from_code, from_json);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageOverrides {
    table: HashMap<String, HashMap<String, String>>,
}

impl MessageOverrides {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Loads a table from its JSON form.
    ///
    /// # Errors
    ///
    /// Returns the deserialization error when the JSON is not an object of
    /// objects of strings.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Adds a template, builder style.
    #[must_use = "builder methods must be chained or built"]
    pub fn with(
        mut self,
        selector: impl Into<String>,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) -> Self {
        self.insert(selector, rule, template);
        self
    }

    /// Adds or replaces a template.
    pub fn insert(
        &mut self,
        selector: impl Into<String>,
        rule: impl Into<String>,
        template: impl Into<String>,
    ) {
        self.table
            .entry(selector.into())
            .or_default()
            .insert(rule.into(), template.into());
    }

    /// The template for `selector`/`rule`. Empty templates count as absent.
    pub fn get(&self, selector: &str, rule: &str) -> Option<&str> {
        self.table
            .get(selector)
            .and_then(|rules| rules.get(rule))
            .map(String::as_str)
            .filter(|template| !template.is_empty())
    }

    /// Returns true when no template is set.
    pub fn is_empty(&self) -> bool {
        self.table.values().all(HashMap::is_empty)
    }
}
