//! Parsing of `#[validate(...)]` attributes

use syn::{Attribute, LitStr, Meta};

/// What a field's `#[validate]` attribute says about it.
#[derive(Debug, Default, Clone)]
pub(super) struct FieldAttrs {
    pub rules: Option<LitStr>,
    pub name: Option<LitStr>,
    pub alias: Option<LitStr>,
}

impl FieldAttrs {
    /// Parses the `validate` attributes of a field.
    ///
    /// Returns `None` when the field carries none, i.e. it is not part of
    /// the record.
    pub(super) fn from_attributes(attrs: &[Attribute]) -> syn::Result<Option<Self>> {
        let mut result: Option<Self> = None;

        for attr in attrs {
            if !attr.path().is_ident("validate") {
                continue;
            }
            if result.is_some() {
                return Err(syn::Error::new_spanned(
                    attr,
                    "duplicate #[validate] attribute, merge the rules into one",
                ));
            }

            let mut parsed = Self::default();
            match &attr.meta {
                Meta::Path(_) => {}
                Meta::List(list) => {
                    // `#[validate("min:3|max:20")]`
                    if let Ok(rules) = list.parse_args::<LitStr>() {
                        parsed.rules = Some(rules);
                    } else {
                        attr.parse_nested_meta(|meta| parsed.parse_meta(&meta))?;
                    }
                }
                Meta::NameValue(nv) => {
                    return Err(syn::Error::new_spanned(
                        nv,
                        "expected #[validate(\"rules\")] or #[validate(rules = \"...\")]",
                    ));
                }
            }
            result = Some(parsed);
        }

        Ok(result)
    }

    fn parse_meta(&mut self, meta: &syn::meta::ParseNestedMeta<'_>) -> syn::Result<()> {
        let slot = if meta.path.is_ident("rules") {
            &mut self.rules
        } else if meta.path.is_ident("name") {
            &mut self.name
        } else if meta.path.is_ident("alias") {
            &mut self.alias
        } else {
            return Err(meta.error("unknown validate key, expected `rules`, `name` or `alias`"));
        };

        if slot.is_some() {
            return Err(meta.error("key given twice"));
        }
        let value: LitStr = meta.value()?.parse()?;
        *slot = Some(value);
        Ok(())
    }
}
