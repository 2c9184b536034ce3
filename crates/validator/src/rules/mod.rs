//! Native rule handlers
//!
//! | Category    | Rules                                                              |
//! |-------------|--------------------------------------------------------------------|
//! | `numeric`   | `min`, `max`                                                       |
//! | `string`    | `min`, `max`, `length`, `required`, `email`, `url`, `ipv4`, `json`, `alpha`, `alpha_dash`, `alpha_num`, `alpha_space`, `alpha_dash_space`, `alpha_num_space`, `regex`, cross-field |
//! | `timestamp` | `equal`, `after`, `before`, their `_date` and `_or_equal` variants |
//! | `array`     | `min`, `max`, `required`, `distinct`, cross-field                  |
//!
//! Cross-field rules are `required_with`, `required_with_all`,
//! `required_without` and `required_without_all`.

mod array;
mod numeric;
mod presence;
mod string;
mod timestamp;

use crate::context::RuleContext;
use crate::registry::{RuleOutcome, RuleTable};
use std::sync::Arc;

type NativeHandler = fn(&RuleContext<'_>) -> RuleOutcome;
type NativeRule = (&'static str, NativeHandler);

// Keys match `Category::as_str` of the native categories.
const NATIVE: &[(&str, &[&[NativeRule]])] = &[
    ("numeric", &[numeric::RULES]),
    ("string", &[string::RULES, presence::RULES]),
    ("timestamp", &[timestamp::RULES]),
    ("array", &[array::RULES, presence::RULES]),
];

fn native_rules() -> impl Iterator<Item = (&'static str, &'static NativeRule)> {
    NATIVE.iter().flat_map(|(category, groups)| {
        groups
            .iter()
            .flat_map(|group| group.iter())
            .map(move |rule| (*category, rule))
    })
}

/// Seeds a table with every native rule.
pub(crate) fn install_native(table: &mut RuleTable) {
    for (category, (name, handler)) in native_rules() {
        table.insert(category, name, Arc::new(*handler));
    }
}

/// Returns true for a native (category, rule) pair.
pub(crate) fn is_native(category: &str, rule: &str) -> bool {
    native_rules().any(|(c, (name, _))| c == category && *name == rule)
}
