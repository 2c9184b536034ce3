//! Evaluation context handed to rule handlers
//!
//! One [`RuleContext`] is built for every (field, rule) evaluation. It
//! borrows the state of the running pass: the classified record, the
//! registry snapshot, the message overrides and the instant the pass
//! started. Nothing in it can be mutated by a handler.

use crate::category::Category;
use crate::config::ValidatorConfig;
use crate::error::{ValidatorError, Violation};
use crate::message::{self, MessageArgs, MessageOverrides};
use crate::patterns::PatternCache;
use crate::record::Field;
use crate::registry::{RuleOutcome, RuleTable};
use crate::value::FieldValue;
use chrono::{DateTime, FixedOffset};
use regex::Regex;
use std::sync::Arc;

/// Name of the rule that decides whether a field is filled.
pub(crate) const PRESENCE_RULE: &str = "required";

/// State shared by every evaluation of one pass.
pub(crate) struct Pass<'a> {
    pub(crate) table: &'a RuleTable,
    pub(crate) overrides: &'a MessageOverrides,
    pub(crate) config: &'a ValidatorConfig,
    pub(crate) patterns: &'a PatternCache,
    pub(crate) record: &'a [Field],
    pub(crate) now: DateTime<FixedOffset>,
}

/// Everything a handler may look at while evaluating one rule on one field.
pub struct RuleContext<'a> {
    pass: &'a Pass<'a>,
    field: &'a Field,
    rule: &'a str,
    argument: &'a str,
    // Off while a `required` handler is run only to decide presence.
    render: bool,
}

impl<'a> RuleContext<'a> {
    pub(crate) fn new(pass: &'a Pass<'a>, field: &'a Field, rule: &'a str, argument: &'a str) -> Self {
        Self {
            pass,
            field,
            rule,
            argument,
            render: true,
        }
    }

    /// The field under evaluation.
    pub fn field(&self) -> &'a Field {
        self.field
    }

    /// Display name of the field.
    pub fn field_name(&self) -> &'a str {
        self.field.name()
    }

    /// Category of the field.
    pub fn category(&self) -> &'a Category {
        self.field.category()
    }

    /// Value of the field.
    pub fn value(&self) -> &'a FieldValue {
        self.field.value()
    }

    /// Name of the rule being evaluated.
    pub fn rule_name(&self) -> &'a str {
        self.rule
    }

    /// Rule argument, empty when none was written.
    pub fn argument(&self) -> &'a str {
        self.argument
    }

    /// Rule argument, failing when none was written.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::MissingArgument`] for an empty argument.
    pub fn require_argument(&self) -> Result<&'a str, ValidatorError> {
        if self.argument.is_empty() {
            return Err(ValidatorError::MissingArgument {
                rule: self.rule.to_owned(),
            });
        }
        Ok(self.argument)
    }

    /// Caller-supplied message overrides of this pass.
    pub fn overrides(&self) -> &'a MessageOverrides {
        self.pass.overrides
    }

    /// Engine configuration.
    pub fn config(&self) -> &'a ValidatorConfig {
        self.pass.config
    }

    /// Every field of the record, in enumeration order.
    pub fn record(&self) -> &'a [Field] {
        self.pass.record
    }

    /// A field of the same record, by name or alias.
    pub fn sibling(&self, name: &str) -> Option<&'a Field> {
        self.pass
            .record
            .iter()
            .find(|field| field.descriptor().matches(name))
    }

    /// The instant the pass started; the same for every rule of the pass.
    pub fn now(&self) -> DateTime<FixedOffset> {
        self.pass.now
    }

    /// Compiles (or fetches from cache) a whole-value user pattern.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::InvalidPattern`] for a pattern that does not compile.
    pub fn pattern(&self, source: &str) -> Result<Arc<Regex>, ValidatorError> {
        self.pass.patterns.get_or_compile(source)
    }

    // ------------------------------------------------------------------------
    // Presence
    // ------------------------------------------------------------------------

    /// Whether a sibling is filled, according to its category's `required`
    /// rule.
    ///
    /// `None` means the sibling cannot be evaluated: it does not exist, or
    /// its category has no `required` rule.
    ///
    /// # Errors
    ///
    /// Propagates a fatal error from the sibling's `required` handler.
    pub fn presence_of(&self, name: &str) -> Result<Option<bool>, ValidatorError> {
        match self.sibling(name) {
            Some(field) => self.presence(field),
            None => Ok(None),
        }
    }

    /// Whether the field under evaluation is filled. See
    /// [`RuleContext::presence_of`].
    ///
    /// # Errors
    ///
    /// Propagates a fatal error from the `required` handler.
    pub fn is_present(&self) -> Result<Option<bool>, ValidatorError> {
        self.presence(self.field)
    }

    fn presence(&self, field: &'a Field) -> Result<Option<bool>, ValidatorError> {
        let Some(handler) = self.pass.table.get(field.category().as_str(), PRESENCE_RULE) else {
            return Ok(None);
        };
        let ctx = RuleContext {
            render: false,
            ..RuleContext::new(self.pass, field, PRESENCE_RULE, "")
        };
        Ok(Some(handler(&ctx)?.is_none()))
    }

    // ------------------------------------------------------------------------
    // Violations
    // ------------------------------------------------------------------------

    /// Fails the rule, rendering the argument as `{{ruleValue}}` and the
    /// field value as `{{value}}`.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::Template`] when the selected template is malformed.
    pub fn violation(&self) -> RuleOutcome {
        let value = self.value().to_string();
        self.violation_with(self.argument, &value)
    }

    /// Fails the rule with explicit `{{ruleValue}}` and `{{value}}` text.
    ///
    /// While a `required` handler runs only to decide whether a field is
    /// filled, nothing is rendered and the message is empty.
    ///
    /// # Errors
    ///
    /// [`ValidatorError::Template`] when the selected template is malformed.
    pub fn violation_with(&self, rule_value: &str, value: &str) -> RuleOutcome {
        if !self.render {
            return Ok(Some(self.violation_message(String::new())));
        }
        let args = MessageArgs {
            field_name: self.field_name(),
            rule_name: self.rule,
            rule_value,
            value,
        };
        let rendered = message::resolve(
            self.pass.overrides,
            &self.pass.config.wildcard_selector,
            self.category(),
            &args,
        )?;
        Ok(Some(self.violation_message(rendered)))
    }

    /// Builds a violation with a fixed message, bypassing templates.
    pub fn violation_message(&self, message: impl Into<String>) -> Violation {
        Violation::new(self.field_name().to_owned(), self.rule.to_owned(), message)
    }

    /// A [`ValidatorError::TypeMismatch`] for the current field.
    pub fn mismatch(&self, expected: &'static str) -> ValidatorError {
        ValidatorError::TypeMismatch {
            field: self.field_name().to_owned(),
            expected,
            actual: self.value().kind(),
        }
    }
}

impl std::fmt::Debug for RuleContext<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RuleContext")
            .field("field", &self.field_name())
            .field("category", self.category())
            .field("rule", &self.rule)
            .field("argument", &self.argument)
            .finish_non_exhaustive()
    }
}
