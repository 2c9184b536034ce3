//! `numeric` rules
//!
//! The bound is compared as an integer when both the value and the bound
//! are integers, and as `f64` otherwise. A bound that is not a number at
//! all is a fatal [`ValidatorError::InvalidArgument`]. `NaN` never
//! satisfies a bound.

use super::NativeRule;
use crate::context::RuleContext;
use crate::error::ValidatorError;
use crate::registry::RuleOutcome;
use crate::value::FieldValue;
use std::cmp::Ordering;

pub(super) const RULES: &[NativeRule] = &[("min", min), ("max", max)];

fn min(ctx: &RuleContext<'_>) -> RuleOutcome {
    check_bound(ctx, Ordering::Less)
}

fn max(ctx: &RuleContext<'_>) -> RuleOutcome {
    check_bound(ctx, Ordering::Greater)
}

/// Fails when the value compares to the bound as `forbidden`.
fn check_bound(ctx: &RuleContext<'_>, forbidden: Ordering) -> RuleOutcome {
    let bound = ctx.require_argument()?;
    let ordering = compare(ctx, ctx.value(), bound)?;
    match ordering {
        Some(ordering) if ordering != forbidden => Ok(None),
        _ => ctx.violation(),
    }
}

#[allow(clippy::cast_precision_loss)]
fn compare(
    ctx: &RuleContext<'_>,
    value: &FieldValue,
    bound: &str,
) -> Result<Option<Ordering>, ValidatorError> {
    let ordering = match value {
        FieldValue::Int(v) => match bound.parse::<i128>() {
            Ok(b) => Some(v.cmp(&b)),
            Err(_) => (*v as f64).partial_cmp(&parse_float(ctx, bound)?),
        },
        FieldValue::Uint(v) => match bound.parse::<u128>() {
            Ok(b) => Some(v.cmp(&b)),
            Err(_) => (*v as f64).partial_cmp(&parse_float(ctx, bound)?),
        },
        FieldValue::Float(v) => v.partial_cmp(&parse_float(ctx, bound)?),
        _ => return Err(ctx.mismatch("a number")),
    };
    Ok(ordering)
}

fn parse_float(ctx: &RuleContext<'_>, bound: &str) -> Result<f64, ValidatorError> {
    bound
        .parse::<f64>()
        .map_err(|err| ValidatorError::invalid_argument(ctx.rule_name(), bound, err.to_string()))
}
