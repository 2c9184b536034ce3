//! Rule registry
//!
//! Two-level mapping: category → rule name → handler. The registry is
//! seeded with the native rules on construction; native (category, rule)
//! pairs can never be replaced or removed. Custom rules can be added under
//! a new category or next to native ones under a new name, and removed
//! again. Removing the last rule of a category removes the category.
//!
//! Reads are lock-free: every validation pass loads one immutable
//! [`RuleTable`] snapshot and uses it to the end, so registry changes made
//! meanwhile only affect later passes. Writers are serialized and publish a
//! fresh table.

use crate::context::RuleContext;
use crate::error::{RegistryError, ValidatorError, Violation};
use crate::rules;
use arc_swap::ArcSwap;
use parking_lot::Mutex;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// What a handler returns: `Ok(None)` on success, `Ok(Some(_))` for a failed
/// rule, `Err(_)` when the rule itself is broken.
pub type RuleOutcome = Result<Option<Violation>, ValidatorError>;

/// Executable logic of one (category, rule) pair.
pub type RuleHandler = Arc<dyn Fn(&RuleContext<'_>) -> RuleOutcome + Send + Sync>;

// ============================================================================
// RULE TABLE
// ============================================================================

/// An immutable view of the registry.
#[derive(Clone, Default)]
pub struct RuleTable {
    categories: HashMap<String, HashMap<String, RuleHandler>>,
}

impl RuleTable {
    /// The handler for a (category, rule) pair.
    pub fn get(&self, category: &str, rule: &str) -> Option<&RuleHandler> {
        self.categories.get(category)?.get(rule)
    }

    /// Returns true when the category has at least one rule.
    pub fn contains_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    /// Category keys, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.categories.keys().cloned().collect();
        keys.sort_unstable();
        keys
    }

    /// Rule names of a category, sorted. Empty for unknown categories.
    pub fn rules_of(&self, category: &str) -> Vec<String> {
        let mut names: Vec<String> = self
            .categories
            .get(category)
            .map(|rules| rules.keys().cloned().collect())
            .unwrap_or_default();
        names.sort_unstable();
        names
    }

    pub(crate) fn insert(&mut self, category: &str, rule: &str, handler: RuleHandler) {
        self.categories
            .entry(category.to_owned())
            .or_default()
            .insert(rule.to_owned(), handler);
    }

    fn remove(&mut self, category: &str, rule: &str) -> bool {
        let Some(rules) = self.categories.get_mut(category) else {
            return false;
        };
        let removed = rules.remove(rule).is_some();
        if rules.is_empty() {
            self.categories.remove(category);
        }
        removed
    }
}

impl fmt::Debug for RuleTable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut map = f.debug_map();
        for category in self.categories() {
            map.entry(&category, &self.rules_of(&category));
        }
        map.finish()
    }
}

// ============================================================================
// RULE REGISTRY
// ============================================================================

/// Thread-safe registry of rule handlers.
///
/// # Examples
///
/// ```
/// use tagrule::{RegistryError, RuleRegistry};
///
/// let registry = RuleRegistry::new();
/// registry.register("string", "slug", |ctx| {
///     let ok = ctx.value().as_str().is_some_and(|s| !s.contains(' '));
///     if ok { Ok(None) } else { ctx.violation() }
/// })?;
/// assert!(registry.lookup("string", "slug").is_some());
///
/// let err = registry.register("numeric", "min", |_| Ok(None)).unwrap_err();
/// assert!(matches!(err, RegistryError::NativeRuleConflict { .. }));
/// # Ok::<(), RegistryError>(())
/// ```
pub struct RuleRegistry {
    table: ArcSwap<RuleTable>,
    writer: Mutex<()>,
}

impl RuleRegistry {
    /// Creates a registry holding the native rules.
    #[must_use]
    pub fn new() -> Self {
        let mut table = RuleTable::default();
        rules::install_native(&mut table);
        Self {
            table: ArcSwap::from_pointee(table),
            writer: Mutex::new(()),
        }
    }

    /// The current table. Later registry changes do not affect it.
    pub fn snapshot(&self) -> Arc<RuleTable> {
        self.table.load_full()
    }

    /// Registers a custom rule, replacing an earlier custom rule with the
    /// same name.
    ///
    /// # Errors
    ///
    /// - [`RegistryError::NativeRuleConflict`] for a native pair
    /// - [`RegistryError::InvalidRuleName`] for names a rule string cannot
    ///   reference
    pub fn register<F>(&self, category: &str, rule: &str, handler: F) -> Result<(), RegistryError>
    where
        F: Fn(&RuleContext<'_>) -> RuleOutcome + Send + Sync + 'static,
    {
        self.register_handler(category, rule, Arc::new(handler))
    }

    /// Registers an already shared handler. See [`RuleRegistry::register`].
    ///
    /// # Errors
    ///
    /// Same as [`RuleRegistry::register`].
    pub fn register_handler(
        &self,
        category: &str,
        rule: &str,
        handler: RuleHandler,
    ) -> Result<(), RegistryError> {
        check_names(category, rule)?;
        reject_native(category, rule)?;

        let _guard = self.writer.lock();
        let mut table = RuleTable::clone(&self.table.load());
        table.insert(category, rule, handler);
        self.table.store(Arc::new(table));

        tracing::info!(category, rule, "registered custom rule");
        Ok(())
    }

    /// Removes a custom rule. Removing a rule that is not registered is a
    /// no-op.
    ///
    /// # Errors
    ///
    /// [`RegistryError::NativeRuleConflict`] for a native pair.
    pub fn unregister(&self, category: &str, rule: &str) -> Result<(), RegistryError> {
        reject_native(category, rule)?;

        let _guard = self.writer.lock();
        let mut table = RuleTable::clone(&self.table.load());
        if table.remove(category, rule) {
            self.table.store(Arc::new(table));
            tracing::info!(category, rule, "removed custom rule");
        } else {
            tracing::debug!(category, rule, "custom rule not registered, nothing removed");
        }
        Ok(())
    }

    /// The handler for a (category, rule) pair.
    pub fn lookup(&self, category: &str, rule: &str) -> Option<RuleHandler> {
        self.table.load().get(category, rule).cloned()
    }

    /// Returns true when the category has at least one rule.
    pub fn contains_category(&self, category: &str) -> bool {
        self.table.load().contains_category(category)
    }

    /// Category keys, sorted.
    pub fn categories(&self) -> Vec<String> {
        self.table.load().categories()
    }

    /// Rule names of a category, sorted.
    pub fn rules_of(&self, category: &str) -> Vec<String> {
        self.table.load().rules_of(category)
    }

    /// Returns true for a native (category, rule) pair.
    pub fn is_native(&self, category: &str, rule: &str) -> bool {
        rules::is_native(category, rule)
    }
}

impl Default for RuleRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for RuleRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleRegistry")
            .field("table", &*self.table.load())
            .finish_non_exhaustive()
    }
}

fn reject_native(category: &str, rule: &str) -> Result<(), RegistryError> {
    if rules::is_native(category, rule) {
        tracing::warn!(category, rule, "refused to change a native rule");
        return Err(RegistryError::NativeRuleConflict {
            category: category.to_owned(),
            rule: rule.to_owned(),
        });
    }
    Ok(())
}

fn check_names(category: &str, rule: &str) -> Result<(), RegistryError> {
    if category.trim().is_empty() {
        return Err(RegistryError::InvalidRuleName {
            name: category.to_owned(),
        });
    }
    let unusable = rule.is_empty()
        || rule
            .chars()
            .any(|c| c == '|' || c == ':' || c.is_whitespace());
    if unusable {
        return Err(RegistryError::InvalidRuleName {
            name: rule.to_owned(),
        });
    }
    Ok(())
}
