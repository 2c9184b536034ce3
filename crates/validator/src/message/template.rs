//! Message templates
//!
//! A template is literal text with `{{ placeholder }}` tags. Four
//! placeholders exist:
//!
//! | Tag              | Substituted with                         |
//! |------------------|------------------------------------------|
//! | `{{fieldName}}`  | the field's display name                 |
//! | `{{ruleValue}}`  | the rule argument (or the computed bound)|
//! | `{{value}}`      | the field value, already stringified     |
//! | `{{ruleName}}`   | the rule name                            |
//!
//! A leading dot (`{{.fieldName}}`) and whitespace inside the braces are
//! accepted. Any other tag, or a `{{` without a closing `}}`, is a malformed
//! template and fails with [`ValidatorError::Template`].

use crate::error::ValidatorError;
use smallvec::SmallVec;

// ============================================================================
// TEMPLATE PARTS
// ============================================================================

/// A substitution point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Placeholder {
    /// `{{fieldName}}`
    FieldName,
    /// `{{ruleValue}}`
    RuleValue,
    /// `{{value}}`
    Value,
    /// `{{ruleName}}`
    RuleName,
}

impl Placeholder {
    fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "fieldName" => Some(Self::FieldName),
            "ruleValue" => Some(Self::RuleValue),
            "value" => Some(Self::Value),
            "ruleName" => Some(Self::RuleName),
            _ => None,
        }
    }
}

/// A template part - either literal text or a placeholder
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplatePart {
    /// Text copied as-is
    Literal(String),
    /// Text substituted at render time
    Placeholder(Placeholder),
}

/// Values substituted into a template.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MessageArgs<'a> {
    /// Field display name.
    pub field_name: &'a str,
    /// Rule name.
    pub rule_name: &'a str,
    /// Rule argument or computed bound.
    pub rule_value: &'a str,
    /// Stringified field value.
    pub value: &'a str,
}

impl MessageArgs<'_> {
    fn get(&self, placeholder: Placeholder) -> &str {
        match placeholder {
            Placeholder::FieldName => self.field_name,
            Placeholder::RuleValue => self.rule_value,
            Placeholder::Value => self.value,
            Placeholder::RuleName => self.rule_name,
        }
    }
}

// ============================================================================
// TEMPLATE
// ============================================================================

/// A parsed message template, ready to render any number of times.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    parts: SmallVec<[TemplatePart; 8]>,
}

impl Template {
    /// Parses a template.
    ///
    /// # Errors
    ///
    /// Returns [`ValidatorError::Template`] for an unterminated tag or an
    /// unknown placeholder.
    ///
    /// # Examples
    ///
    /// ```
    /// use tagrule::{MessageArgs, Template};
    ///
    /// let template = Template::parse("The {{.fieldName}} is over {{ ruleValue }}.").unwrap();
    /// let args = MessageArgs { field_name: "Age", rule_value: "20", ..MessageArgs::default() };
    /// assert_eq!(template.render(&args), "The Age is over 20.");
    /// ```
    pub fn parse(source: &str) -> Result<Self, ValidatorError> {
        let mut parts = SmallVec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(open) = rest.find("{{") {
            if open > 0 {
                parts.push(TemplatePart::Literal(rest[..open].to_owned()));
            }
            let tag_start = offset + open;
            let after_open = &rest[open + 2..];
            let Some(close) = after_open.find("}}") else {
                return Err(template_error(source, tag_start, "unterminated `{{` tag"));
            };

            let tag = after_open[..close].trim();
            let tag = tag.strip_prefix('.').unwrap_or(tag).trim();
            let placeholder = Placeholder::from_tag(tag).ok_or_else(|| {
                template_error(source, tag_start, format!("unknown placeholder `{tag}`"))
            })?;
            parts.push(TemplatePart::Placeholder(placeholder));

            let consumed = open + 2 + close + 2;
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            parts.push(TemplatePart::Literal(rest.to_owned()));
        }
        Ok(Self { parts })
    }

    /// The parsed parts, in order.
    pub fn parts(&self) -> &[TemplatePart] {
        &self.parts
    }

    /// Renders with the given values.
    pub fn render(&self, args: &MessageArgs<'_>) -> String {
        let mut out = String::new();
        for part in &self.parts {
            match part {
                TemplatePart::Literal(text) => out.push_str(text),
                TemplatePart::Placeholder(p) => out.push_str(args.get(*p)),
            }
        }
        out
    }
}

fn template_error(source: &str, offset: usize, reason: impl Into<String>) -> ValidatorError {
    ValidatorError::Template {
        template: source.to_owned(),
        offset,
        reason: reason.into(),
    }
}
