//! `timestamp` rules
//!
//! The argument is `today` or `today+N`, N a whole number of days added to
//! the instant the pass started. Anything else is a fatal
//! [`ValidatorError::InvalidArgument`].
//!
//! `_date` variants compare calendar days only. `_or_equal` variants pass
//! when either the strict comparison or equality holds. On failure the
//! message shows the computed instant, not the raw argument, formatted with
//! the date or date-time format of the configuration.

use super::NativeRule;
use crate::context::RuleContext;
use crate::error::ValidatorError;
use crate::registry::RuleOutcome;
use chrono::{DateTime, Days, FixedOffset};
use std::fmt::Write;

pub(super) const RULES: &[NativeRule] = &[
    ("equal", |ctx| check(ctx, Check::full(Relation::Equal))),
    ("after", |ctx| check(ctx, Check::full(Relation::After))),
    ("before", |ctx| check(ctx, Check::full(Relation::Before))),
    ("equal_date", |ctx| check(ctx, Check::date(Relation::Equal))),
    ("after_date", |ctx| check(ctx, Check::date(Relation::After))),
    ("before_date", |ctx| check(ctx, Check::date(Relation::Before))),
    ("after_or_equal", |ctx| check(ctx, Check::full(Relation::After).or_equal())),
    ("before_or_equal", |ctx| check(ctx, Check::full(Relation::Before).or_equal())),
    ("after_or_equal_date", |ctx| check(ctx, Check::date(Relation::After).or_equal())),
    ("before_or_equal_date", |ctx| check(ctx, Check::date(Relation::Before).or_equal())),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Relation {
    Equal,
    After,
    Before,
}

#[derive(Debug, Clone, Copy)]
struct Check {
    relation: Relation,
    or_equal: bool,
    date_only: bool,
}

impl Check {
    const fn full(relation: Relation) -> Self {
        Self {
            relation,
            or_equal: false,
            date_only: false,
        }
    }

    const fn date(relation: Relation) -> Self {
        Self {
            relation,
            or_equal: false,
            date_only: true,
        }
    }

    const fn or_equal(mut self) -> Self {
        self.or_equal = true;
        self
    }

    fn holds<T: Ord>(self, value: &T, bound: &T) -> bool {
        let strict = match self.relation {
            Relation::Equal => value == bound,
            Relation::After => value > bound,
            Relation::Before => value < bound,
        };
        strict || (self.or_equal && value == bound)
    }
}

fn check(ctx: &RuleContext<'_>, rule: Check) -> RuleOutcome {
    let argument = ctx.require_argument()?;
    let bound = rule_instant(ctx, argument)?;
    let value = ctx
        .value()
        .as_timestamp()
        .ok_or_else(|| ctx.mismatch("a timestamp"))?;

    let passed = if rule.date_only {
        rule.holds(&value.date_naive(), &bound.date_naive())
    } else {
        rule.holds(value, &bound)
    };
    if passed {
        return Ok(None);
    }

    let config = ctx.config();
    let layout = if rule.date_only {
        &config.date_format
    } else {
        &config.timestamp_format
    };
    ctx.violation_with(
        &render(ctx, &bound, layout)?,
        &render(ctx, value, layout)?,
    )
}

/// Resolves `today` / `today+N` against the pass clock.
fn rule_instant(
    ctx: &RuleContext<'_>,
    argument: &str,
) -> Result<DateTime<FixedOffset>, ValidatorError> {
    let invalid = || {
        ValidatorError::invalid_argument(
            ctx.rule_name(),
            argument,
            "expected `today` or `today+N` with N a whole number of days",
        )
    };

    let days = match argument.strip_prefix("today") {
        Some("") => 0,
        Some(offset) => offset
            .strip_prefix('+')
            .filter(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
            .and_then(|n| n.parse::<u32>().ok())
            .ok_or_else(invalid)?,
        None => return Err(invalid()),
    };

    ctx.now()
        .checked_add_days(Days::new(u64::from(days)))
        .ok_or_else(invalid)
}

fn render(
    ctx: &RuleContext<'_>,
    instant: &DateTime<FixedOffset>,
    layout: &str,
) -> Result<String, ValidatorError> {
    let mut out = String::new();
    write!(out, "{}", instant.format(layout)).map_err(|_| {
        ValidatorError::invalid_argument(ctx.rule_name(), layout, "invalid timestamp format")
    })?;
    Ok(out)
}
