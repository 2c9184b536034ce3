//! `array` rules
//!
//! Arrays are validated as a whole regardless of element type. Count rules
//! render the element count as `{{value}}`. `distinct` counts two floats with
//! the same bit pattern as repeated, `NaN` included.

use super::NativeRule;
use crate::context::RuleContext;
use crate::error::ValidatorError;
use crate::registry::RuleOutcome;
use crate::value::FieldValue;

pub(super) const RULES: &[NativeRule] = &[
    ("min", min),
    ("max", max),
    ("required", required),
    ("distinct", distinct),
];

fn elements<'a>(ctx: &RuleContext<'a>) -> Result<&'a [FieldValue], ValidatorError> {
    ctx.value().as_array().ok_or_else(|| ctx.mismatch("an array"))
}

fn parse_count(ctx: &RuleContext<'_>) -> Result<usize, ValidatorError> {
    let argument = ctx.require_argument()?;
    argument
        .parse::<usize>()
        .map_err(|err| ValidatorError::invalid_argument(ctx.rule_name(), argument, err.to_string()))
}

fn min(ctx: &RuleContext<'_>) -> RuleOutcome {
    let count = elements(ctx)?.len();
    if count < parse_count(ctx)? {
        return ctx.violation_with(ctx.argument(), &count.to_string());
    }
    Ok(None)
}

fn max(ctx: &RuleContext<'_>) -> RuleOutcome {
    let count = elements(ctx)?.len();
    if count > parse_count(ctx)? {
        return ctx.violation_with(ctx.argument(), &count.to_string());
    }
    Ok(None)
}

fn required(ctx: &RuleContext<'_>) -> RuleOutcome {
    if elements(ctx)?.is_empty() {
        return ctx.violation_with("1", "0");
    }
    Ok(None)
}

fn distinct(ctx: &RuleContext<'_>) -> RuleOutcome {
    let items = elements(ctx)?;
    let repeated = items
        .iter()
        .enumerate()
        .any(|(i, a)| items[i + 1..].iter().any(|b| same_element(a, b)));
    if repeated {
        return ctx.violation();
    }
    Ok(None)
}

/// Element equality for `distinct`: like `==`, except that a float equals
/// another float with the same bit pattern, so `[NaN, NaN]` is repeated.
fn same_element(a: &FieldValue, b: &FieldValue) -> bool {
    match (a, b) {
        (FieldValue::Float(x), FieldValue::Float(y)) => x == y || x.to_bits() == y.to_bits(),
        (FieldValue::Array(xs), FieldValue::Array(ys)) => {
            xs.len() == ys.len() && xs.iter().zip(ys).all(|(x, y)| same_element(x, y))
        }
        _ => a == b,
    }
}
