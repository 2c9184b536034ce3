//! Validation orchestrator
//!
//! One pass over a record:
//!
//! 1. enumerate and classify every field (this snapshot is what cross-field
//!    rules read)
//! 2. pin the current registry table
//! 3. for every field in order, skip it when it has no rules or its
//!    category is not registered; otherwise parse its rule string
//! 4. for every rule in order, look up the handler (an unknown rule aborts
//!    the pass) and run it, collecting violations
//!
//! Every applicable rule of every field runs; nothing short-circuits on a
//! violation. A fatal [`ValidatorError`] aborts the pass and discards the
//! violations collected so far.

use crate::config::{Clock, ValidatorConfig};
use crate::context::{Pass, RuleContext};
use crate::error::{RegistryError, ValidatorError, Violations};
use crate::message::MessageOverrides;
use crate::parser::parse_rules;
use crate::patterns::PatternCache;
use crate::record::{Record, snapshot};
use crate::registry::{RuleOutcome, RuleRegistry};
use std::fmt;

/// The validation engine: a rule registry plus configuration.
///
/// # Examples
///
/// ```
/// use tagrule::{FieldDescriptor, MessageOverrides, Validator};
///
/// let record = vec![
///     FieldDescriptor::of("ID", &2u32, "min:3|max:20"),
///     FieldDescriptor::of("Name", "", "regex:^[0-9]*$|required"),
/// ];
/// let violations = Validator::new().validate(&record, &MessageOverrides::new())?;
/// assert_eq!(
///     violations.messages(),
///     vec![
///         "The ID cannot be less than 3, the value informed was 2.",
///         r#"The Name cannot have length less than 1, the informed value was ""."#,
///     ]
/// );
/// # Ok::<(), tagrule::ValidatorError>(())
/// ```
pub struct Validator {
    registry: RuleRegistry,
    config: ValidatorConfig,
    clock: Clock,
    patterns: PatternCache,
}

impl Validator {
    /// Creates a validator with the native rules and default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(ValidatorConfig::default())
    }

    /// Creates a validator with the given configuration.
    #[must_use]
    pub fn with_config(config: ValidatorConfig) -> Self {
        let patterns = PatternCache::new(config.cache_capacity());
        Self {
            registry: RuleRegistry::new(),
            config,
            clock: Clock::default(),
            patterns,
        }
    }

    /// Replaces the clock used by `today`-relative rules.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    /// The configuration.
    pub fn config(&self) -> &ValidatorConfig {
        &self.config
    }

    /// The rule registry.
    pub fn registry(&self) -> &RuleRegistry {
        &self.registry
    }

    /// Validates every field of a record.
    ///
    /// # Errors
    ///
    /// Any [`ValidatorError`]: an absent record, an unknown rule, a malformed
    /// argument or template, or a value of the wrong kind for its category.
    pub fn validate<R: Record + ?Sized>(
        &self,
        record: &R,
        overrides: &MessageOverrides,
    ) -> Result<Violations, ValidatorError> {
        self.run(record, None, overrides)
    }

    /// Validates only the fields whose name or alias is in `selectors`.
    ///
    /// Cross-field rules still see every field of the record.
    ///
    /// # Errors
    ///
    /// Same as [`Validator::validate`].
    pub fn validate_fields<R: Record + ?Sized>(
        &self,
        record: &R,
        selectors: &[&str],
        overrides: &MessageOverrides,
    ) -> Result<Violations, ValidatorError> {
        self.run(record, Some(selectors), overrides)
    }

    /// Registers a custom rule. See [`RuleRegistry::register`].
    ///
    /// # Errors
    ///
    /// [`RegistryError`] for a native pair or an unusable name.
    pub fn add_custom_rule<F>(
        &self,
        category: &str,
        rule: &str,
        handler: F,
    ) -> Result<(), RegistryError>
    where
        F: Fn(&RuleContext<'_>) -> RuleOutcome + Send + Sync + 'static,
    {
        self.registry.register(category, rule, handler)
    }

    /// Removes a custom rule. See [`RuleRegistry::unregister`].
    ///
    /// # Errors
    ///
    /// [`RegistryError::NativeRuleConflict`] for a native pair.
    pub fn remove_custom_rule(&self, category: &str, rule: &str) -> Result<(), RegistryError> {
        self.registry.unregister(category, rule)
    }

    fn run<R: Record + ?Sized>(
        &self,
        record: &R,
        selectors: Option<&[&str]>,
        overrides: &MessageOverrides,
    ) -> Result<Violations, ValidatorError> {
        let fields = snapshot(record)?;
        let table = self.registry.snapshot();
        let pass = Pass {
            table: &table,
            overrides,
            config: &self.config,
            patterns: &self.patterns,
            record: &fields,
            now: self.clock.now(),
        };

        tracing::debug!(
            fields = fields.len(),
            filtered = selectors.is_some(),
            "validation pass started"
        );

        let mut violations = Violations::new();
        for field in &fields {
            let selected = selectors
                .is_none_or(|selectors| selectors.iter().any(|s| field.descriptor().matches(s)));
            if !selected {
                continue;
            }
            if field.rules().trim().is_empty() {
                continue;
            }
            let category = field.category().as_str();
            if !table.contains_category(category) {
                tracing::trace!(
                    field = field.name(),
                    category,
                    "no rules for category, field skipped"
                );
                continue;
            }

            for spec in parse_rules(field.rules()) {
                let handler =
                    table
                        .get(category, spec.name)
                        .ok_or_else(|| ValidatorError::UnknownRule {
                            category: category.to_owned(),
                            rule: spec.name.to_owned(),
                        })?;
                tracing::trace!(
                    field = field.name(),
                    category,
                    rule = spec.name,
                    argument = spec.argument,
                    "evaluating rule"
                );
                let ctx = RuleContext::new(&pass, field, spec.name, spec.argument);
                if let Some(violation) = handler(&ctx)? {
                    violations.push(violation);
                }
            }
        }

        tracing::debug!(violations = violations.len(), "validation pass finished");
        Ok(violations)
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Validator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Validator")
            .field("registry", &self.registry)
            .field("config", &self.config)
            .field("patterns", &self.patterns)
            .finish_non_exhaustive()
    }
}
