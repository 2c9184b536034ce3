//! Rule-string parser
//!
//! Grammar: `rule1[:arg1]|rule2[:arg2]|...`
//!
//! - Rules are separated by `|` and kept in written order.
//! - A rule is split on its first `:`; everything after it is the argument,
//!   so `regex:^a:b$` has the argument `^a:b$`.
//! - Names and arguments are trimmed; empty segments are skipped.
//!
//! There is no escape for `|`. A pattern that needs an alternation has to be
//! registered as a custom rule instead.

// ============================================================================
// RULE SPEC
// ============================================================================

/// One parsed rule, borrowing from the rule string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleSpec<'a> {
    /// Rule name.
    pub name: &'a str,
    /// Rule argument, empty when none was written.
    pub argument: &'a str,
}

impl<'a> RuleSpec<'a> {
    /// Creates a rule spec.
    pub const fn new(name: &'a str, argument: &'a str) -> Self {
        Self { name, argument }
    }

    /// Returns true when an argument was written.
    pub fn has_argument(&self) -> bool {
        !self.argument.is_empty()
    }
}

// ============================================================================
// PARSER
// ============================================================================

/// Splits a rule string into its ordered rules.
///
/// # Examples
///
/// ```
/// use tagrule::{RuleSpec, parse_rules};
///
/// let rules = parse_rules("min:3 | max:20|required");
/// assert_eq!(
///     rules,
///     vec![
///         RuleSpec::new("min", "3"),
///         RuleSpec::new("max", "20"),
///         RuleSpec::new("required", ""),
///     ]
/// );
/// assert!(parse_rules("").is_empty());
/// ```
pub fn parse_rules(source: &str) -> Vec<RuleSpec<'_>> {
    source
        .split('|')
        .filter_map(|segment| {
            let (name, argument) = segment.split_once(':').unwrap_or((segment, ""));
            let name = name.trim();
            if name.is_empty() {
                return None;
            }
            Some(RuleSpec::new(name, argument.trim()))
        })
        .collect()
}
