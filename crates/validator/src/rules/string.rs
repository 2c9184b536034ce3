//! `string` rules
//!
//! Length rules count according to [`LengthMode`](crate::LengthMode).
//! `required` is `min:1` under its own name. Format checks (`email`, `url`,
//! `ipv4`, `json` and the `alpha` family) accept the empty string; use
//! `required` to reject it.

use super::NativeRule;
use crate::context::RuleContext;
use crate::error::ValidatorError;
use crate::patterns::Format;
use crate::registry::RuleOutcome;

pub(super) const RULES: &[NativeRule] = &[
    ("min", min),
    ("max", max),
    ("length", length),
    ("required", required),
    ("email", |ctx| check_format(ctx, Format::Email)),
    ("url", |ctx| check_format(ctx, Format::Url)),
    ("ipv4", |ctx| check_format(ctx, Format::Ipv4)),
    ("json", json),
    ("alpha", |ctx| check_format(ctx, Format::Alpha)),
    ("alpha_dash", |ctx| check_format(ctx, Format::AlphaDash)),
    ("alpha_num", |ctx| check_format(ctx, Format::AlphaNum)),
    ("alpha_space", |ctx| check_format(ctx, Format::AlphaSpace)),
    ("alpha_dash_space", |ctx| check_format(ctx, Format::AlphaDashSpace)),
    ("alpha_num_space", |ctx| check_format(ctx, Format::AlphaNumSpace)),
    ("regex", regex),
];

fn text<'a>(ctx: &RuleContext<'a>) -> Result<&'a str, ValidatorError> {
    ctx.value().as_str().ok_or_else(|| ctx.mismatch("a string"))
}

fn measure(ctx: &RuleContext<'_>) -> Result<usize, ValidatorError> {
    Ok(ctx.config().length_mode.measure(text(ctx)?))
}

fn parse_length(ctx: &RuleContext<'_>) -> Result<usize, ValidatorError> {
    let argument = ctx.require_argument()?;
    argument
        .parse::<usize>()
        .map_err(|err| ValidatorError::invalid_argument(ctx.rule_name(), argument, err.to_string()))
}

fn min(ctx: &RuleContext<'_>) -> RuleOutcome {
    if measure(ctx)? < parse_length(ctx)? {
        return ctx.violation();
    }
    Ok(None)
}

fn max(ctx: &RuleContext<'_>) -> RuleOutcome {
    if measure(ctx)? > parse_length(ctx)? {
        return ctx.violation();
    }
    Ok(None)
}

fn length(ctx: &RuleContext<'_>) -> RuleOutcome {
    if measure(ctx)? != parse_length(ctx)? {
        return ctx.violation();
    }
    Ok(None)
}

fn required(ctx: &RuleContext<'_>) -> RuleOutcome {
    if measure(ctx)? < 1 {
        return ctx.violation_with("1", text(ctx)?);
    }
    Ok(None)
}

fn check_format(ctx: &RuleContext<'_>, format: Format) -> RuleOutcome {
    if format.matches(text(ctx)?)? {
        Ok(None)
    } else {
        ctx.violation()
    }
}

fn json(ctx: &RuleContext<'_>) -> RuleOutcome {
    let input = text(ctx)?;
    if input.is_empty() || serde_json::from_str::<serde_json::Value>(input).is_ok() {
        return Ok(None);
    }
    ctx.violation()
}

fn regex(ctx: &RuleContext<'_>) -> RuleOutcome {
    let pattern = ctx.pattern(ctx.require_argument()?)?;
    if pattern.is_match(text(ctx)?) {
        return Ok(None);
    }
    ctx.violation()
}
