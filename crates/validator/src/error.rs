//! Error types for the validation engine
//!
//! Three kinds of failure are kept apart:
//!
//! - [`Violation`] / [`Violations`]: a rule evaluated false against field data.
//!   These are ordinary results, collected and returned to the caller.
//! - [`ValidatorError`]: the rules themselves are broken (unknown rule name,
//!   malformed argument, malformed template, absent record). Any of these
//!   aborts the whole validation pass.
//! - [`RegistryError`]: a rejected registry mutation. Returned from
//!   `add_custom_rule` / `remove_custom_rule` and recoverable by the caller.

use std::borrow::Cow;
use std::fmt;

// ============================================================================
// VIOLATION
// ============================================================================

/// A rendered validation failure for one (field, rule) pair.
///
/// `Display` yields exactly the rendered message, so a `Violation` can be
/// shown to end users as-is.
///
/// # Examples
///
/// ```
/// use tagrule::Violation;
///
/// let v = Violation::new("Age", "max", "The Age is over max value.");
/// assert_eq!(v.to_string(), "The Age is over max value.");
/// assert_eq!(v.field(), "Age");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    field: Cow<'static, str>,
    rule: Cow<'static, str>,
    message: String,
}

impl Violation {
    /// Creates a violation from an already rendered message.
    pub fn new(
        field: impl Into<Cow<'static, str>>,
        rule: impl Into<Cow<'static, str>>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            field: field.into(),
            rule: rule.into(),
            message: message.into(),
        }
    }

    /// Name of the field that failed.
    pub fn field(&self) -> &str {
        &self.field
    }

    /// Name of the rule that failed.
    pub fn rule(&self) -> &str {
        &self.rule
    }

    /// The rendered, human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Consumes the violation and returns its message.
    pub fn into_message(self) -> String {
        self.message
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

impl std::error::Error for Violation {}

// ============================================================================
// VIOLATION COLLECTION
// ============================================================================

/// The ordered result of one validation pass.
///
/// Order is field-enumeration order, then rule order within the field.
/// An empty collection means the record is fully valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations {
    items: Vec<Violation>,
}

impl Violations {
    /// Creates an empty collection.
    #[must_use]
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Appends a violation.
    pub fn push(&mut self, violation: Violation) {
        self.items.push(violation);
    }

    /// Returns true when no rule failed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of failed rules.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// All violations, in evaluation order.
    #[must_use]
    pub fn as_slice(&self) -> &[Violation] {
        &self.items
    }

    /// Iterates over the violations in evaluation order.
    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.items.iter()
    }

    /// The rendered messages, in evaluation order.
    #[must_use]
    pub fn messages(&self) -> Vec<&str> {
        self.items.iter().map(Violation::message).collect()
    }

    /// Violations reported for one field.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.items.iter().filter(move |v| v.field() == field)
    }

    /// Converts to a `Result`, `Ok` when empty.
    pub fn into_result(self) -> Result<(), Violations> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<I: IntoIterator<Item = Violation>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
        }
    }
}

impl Extend<Violation> for Violations {
    fn extend<I: IntoIterator<Item = Violation>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.items.len())?;
        for (i, violation) in self.items.iter().enumerate() {
            writeln!(f, "  {}. {}", i + 1, violation)?;
        }
        Ok(())
    }
}

impl std::error::Error for Violations {}

// ============================================================================
// FATAL ERRORS
// ============================================================================

/// A configuration or programming error that aborts a validation pass.
///
/// These point at the rule strings, templates or registry contents, never at
/// the data being validated.
#[derive(Debug, thiserror::Error)]
pub enum ValidatorError {
    /// The record could not be enumerated (absent record, broken enumerator).
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A rule string references a rule that is not registered for the
    /// field's category.
    #[error("the rule `{rule}` does not exist in the {category} validator")]
    UnknownRule {
        /// Category key of the field.
        category: String,
        /// Rule name as written in the rule string.
        rule: String,
    },

    /// A rule that needs an argument was written without one.
    #[error("the rule `{rule}` cannot be empty, pass a value like `{rule}:value`")]
    MissingArgument {
        /// Rule name.
        rule: String,
    },

    /// A rule argument could not be interpreted.
    #[error("invalid argument `{argument}` for rule `{rule}`: {reason}")]
    InvalidArgument {
        /// Rule name.
        rule: String,
        /// The raw argument text.
        argument: String,
        /// Why it was rejected.
        reason: String,
    },

    /// A `regex:` argument is not a valid regular expression.
    #[error("invalid pattern `{pattern}`: {source}")]
    InvalidPattern {
        /// The pattern as written.
        pattern: String,
        /// Underlying regex error.
        #[source]
        source: regex::Error,
    },

    /// A message template is malformed.
    #[error("malformed message template `{template}` at offset {offset}: {reason}")]
    Template {
        /// The template source.
        template: String,
        /// Byte offset of the problem.
        offset: usize,
        /// What is wrong.
        reason: String,
    },

    /// A handler received a value that does not belong to its category.
    #[error("field `{field}` holds {actual}, expected {expected}")]
    TypeMismatch {
        /// Field name.
        field: String,
        /// Kind the handler expects.
        expected: &'static str,
        /// Kind actually found.
        actual: &'static str,
    },
}

impl ValidatorError {
    /// Creates an [`ValidatorError::InvalidArgument`].
    pub fn invalid_argument(
        rule: impl Into<String>,
        argument: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidArgument {
            rule: rule.into(),
            argument: argument.into(),
            reason: reason.into(),
        }
    }
}

// ============================================================================
// REGISTRY ERRORS
// ============================================================================

/// Errors returned by registry mutation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    /// The (category, rule) pair is native and cannot be replaced or removed.
    #[error("the rule `{rule}` is a native rule of the {category} category and cannot be changed")]
    NativeRuleConflict {
        /// Category key.
        category: String,
        /// Rule name.
        rule: String,
    },

    /// The name can never be referenced from a rule string.
    #[error("`{name}` is not a usable category or rule name")]
    InvalidRuleName {
        /// The rejected name.
        name: String,
    },
}
