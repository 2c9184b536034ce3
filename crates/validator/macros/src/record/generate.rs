//! Code generation for the Record derive

use super::parse::FieldAttrs;
use proc_macro2::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, FieldsNamed};

/// Generates `impl ::tagrule::Record` for a struct with named fields.
pub(super) fn generate_record(input: &DeriveInput) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let fields = require_named_struct(input)?;

    let mut descriptors = Vec::new();
    let mut bounds = Vec::new();
    for field in &fields.named {
        let Some(attrs) = FieldAttrs::from_attributes(&field.attrs)? else {
            continue;
        };
        let Some(ident) = field.ident.as_ref() else {
            continue;
        };
        let ty = &field.ty;

        let display = attrs.name.map_or_else(|| ident.to_string(), |lit| lit.value());
        let rules = attrs.rules.map(|lit| lit.value()).unwrap_or_default();
        let alias = attrs.alias.map(|lit| quote! { .with_alias(#lit) });

        descriptors.push(quote! {
            ::tagrule::FieldDescriptor::of(#display, &self.#ident, #rules) #alias
        });
        bounds.push(quote! { #ty: ::tagrule::FieldType });
    }

    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();
    let where_clause = if input.generics.params.is_empty() {
        quote! { #where_clause }
    } else {
        let existing = where_clause.map(|clause| {
            let predicates = &clause.predicates;
            quote! { #predicates, }
        });
        quote! { where #existing #(#bounds,)* }
    };

    Ok(quote! {
        impl #impl_generics ::tagrule::Record for #name #ty_generics #where_clause {
            fn fields(
                &self,
            ) -> ::core::result::Result<
                ::std::vec::Vec<::tagrule::FieldDescriptor>,
                ::tagrule::ValidatorError,
            > {
                ::core::result::Result::Ok(::std::vec![#(#descriptors),*])
            }
        }
    })
}

fn require_named_struct(input: &DeriveInput) -> syn::Result<&FieldsNamed> {
    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(fields),
            Fields::Unnamed(_) => Err(syn::Error::new_spanned(
                input,
                "#[derive(Record)] requires named fields; tuple structs are not supported",
            )),
            Fields::Unit => Err(syn::Error::new_spanned(
                input,
                "#[derive(Record)] cannot be applied to unit structs",
            )),
        },
        Data::Enum(_) | Data::Union(_) => Err(syn::Error::new_spanned(
            input,
            "#[derive(Record)] can only be applied to structs",
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use syn::parse_quote;

    #[test]
    fn test_only_attributed_fields_are_emitted() {
        let input: DeriveInput = parse_quote! {
            struct Signup {
                #[validate(rules = "min:3", name = "ID", alias = "id")]
                id: u32,
                cache: u64,
                #[validate]
                site: String,
            }
        };
        let out = generate_record(&input).unwrap().to_string();
        assert!(out.contains("\"ID\""));
        assert!(out.contains("with_alias"));
        assert!(out.contains("\"site\""));
        assert!(!out.contains("cache"));
    }

    #[test]
    fn test_rejects_enums_and_tuple_structs() {
        let en: DeriveInput = parse_quote! { enum E { A } };
        assert!(generate_record(&en).is_err());

        let tuple: DeriveInput = parse_quote! { struct T(u8); };
        assert!(generate_record(&tuple).is_err());
    }

    #[test]
    fn test_generic_struct_gets_field_bounds() {
        let input: DeriveInput = parse_quote! {
            struct Wrapper<T> where T: Clone {
                #[validate("required")]
                inner: T,
            }
        };
        let out = generate_record(&input).unwrap().to_string();
        assert!(out.contains("Clone"));
        assert!(out.contains("FieldType"));
    }
}
