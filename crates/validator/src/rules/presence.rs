//! Cross-field presence rules, shared by `string` and `array`
//!
//! The argument is a comma-separated list of sibling names. A sibling is
//! "present" when its own category's `required` rule passes. Siblings that
//! do not exist or whose category has no `required` rule are skipped.
//!
//! | Rule                   | The field must be present when ... |
//! |------------------------|------------------------------------|
//! | `required_with`        | any named sibling is present       |
//! | `required_with_all`    | every named sibling is present     |
//! | `required_without`     | any named sibling is absent        |
//! | `required_without_all` | every named sibling is absent      |
//!
//! The `_all` rules never fire when no named sibling could be evaluated.

use super::NativeRule;
use crate::context::RuleContext;
use crate::error::ValidatorError;
use crate::registry::RuleOutcome;
use smallvec::SmallVec;

pub(super) const RULES: &[NativeRule] = &[
    ("required_with", |ctx| check(ctx, Trigger::AnyPresent)),
    ("required_with_all", |ctx| check(ctx, Trigger::AllPresent)),
    ("required_without", |ctx| check(ctx, Trigger::AnyAbsent)),
    ("required_without_all", |ctx| check(ctx, Trigger::AllAbsent)),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Trigger {
    AnyPresent,
    AllPresent,
    AnyAbsent,
    AllAbsent,
}

impl Trigger {
    fn fires(self, siblings: &[bool]) -> bool {
        match self {
            Self::AnyPresent => siblings.iter().any(|present| *present),
            Self::AllPresent => !siblings.is_empty() && siblings.iter().all(|present| *present),
            Self::AnyAbsent => siblings.iter().any(|present| !*present),
            Self::AllAbsent => !siblings.is_empty() && siblings.iter().all(|present| !*present),
        }
    }
}

fn check(ctx: &RuleContext<'_>, trigger: Trigger) -> RuleOutcome {
    let argument = ctx.require_argument()?;
    let names: SmallVec<[&str; 4]> = argument
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .collect();
    if names.is_empty() {
        return Err(ValidatorError::invalid_argument(
            ctx.rule_name(),
            argument,
            "expected a comma-separated list of field names",
        ));
    }

    let mut siblings: SmallVec<[bool; 4]> = SmallVec::new();
    for name in names {
        match ctx.presence_of(name)? {
            Some(present) => siblings.push(present),
            None => tracing::warn!(
                field = ctx.field_name(),
                rule = ctx.rule_name(),
                sibling = name,
                "sibling is missing or has no `required` rule, skipped"
            ),
        }
    }

    if !trigger.fires(&siblings) {
        return Ok(None);
    }
    // A field whose own category cannot say whether it is filled is treated
    // as filled.
    if ctx.is_present()?.unwrap_or(true) {
        return Ok(None);
    }
    ctx.violation()
}
