//! A derive macro for implementing the `QueryValue` trait for C-style enums.
use convert_case::{Case, Casing};
use proc_macro::TokenStream;
use quote::quote;
use syn::{Data, DeriveInput, Fields, Lit, ext::IdentExt, parse_macro_input};

pub(super) fn derive_query_value(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    let name = &input.ident;

    let unsupported_error_msg = "An implementation of the `QueryValue` trait can only be derived for enums with unit variants (no fields). \
        Consider implementing the trait manually.";

    let Data::Enum(data_enum) = &input.data else {
        return syn::Error::new_spanned(name, unsupported_error_msg)
            .to_compile_error()
            .into();
    };
    if let Some(param) = input.generics.params.first() {
        return syn::Error::new_spanned(param, "`#[derive(QueryValue)]` doesn't support generic enums.")
            .to_compile_error()
            .into();
    }

    let mut match_arms = Vec::new();
    let mut valid_values: Vec<String> = Vec::new();

    for variant in &data_enum.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return syn::Error::new_spanned(&variant.ident, unsupported_error_msg)
                .to_compile_error()
                .into();
        }

        let variant_name = &variant.ident;
        let mut value = variant_name.unraw().to_string().to_case(Case::Snake);

        for attr in &variant.attrs {
            if !attr.meta.path().is_ident("query") {
                continue;
            }
            let error_msg = "Invalid `query` attribute. Expected `#[query(rename = \"name\")]`";
            let Ok(args) = attr.parse_args::<syn::MetaNameValue>() else {
                return syn::Error::new_spanned(attr, error_msg)
                    .to_compile_error()
                    .into();
            };
            if !args.path.is_ident("rename") {
                return syn::Error::new_spanned(&args.path, error_msg)
                    .to_compile_error()
                    .into();
            }
            let syn::Expr::Lit(syn::ExprLit {
                lit: Lit::Str(lit_str),
                ..
            }) = &args.value
            else {
                return syn::Error::new_spanned(&args.value, error_msg)
                    .to_compile_error()
                    .into();
            };
            value = lit_str.value();
            if value.is_empty() {
                return syn::Error::new_spanned(&args.value, "The renamed value cannot be empty.")
                    .to_compile_error()
                    .into();
            }
            // It would be split apart when the enum is used in a sequence field.
            if value.contains(',') {
                return syn::Error::new_spanned(&args.value, "The renamed value cannot contain a comma.")
                    .to_compile_error()
                    .into();
            }
        }

        if valid_values.contains(&value) {
            return syn::Error::new_spanned(
                variant_name,
                format!("`{value}` is already used by another variant of `{name}`."),
            )
            .to_compile_error()
            .into();
        }
        valid_values.push(value.clone());
        match_arms.push(quote! {
            #value => ::core::result::Result::Ok(#name::#variant_name),
        });
    }

    let valid_values_str = valid_values
        .iter()
        .map(|s| format!("`{s}`"))
        .collect::<Vec<_>>()
        .join(", ");

    let expanded = quote! {
        #[automatically_derived]
        impl ::query_bind::QueryValue for #name {
            fn decode(raw: &str) -> ::core::result::Result<Self, ::query_bind::DecodeError> {
                match raw {
                    #(#match_arms)*
                    _ => ::core::result::Result::Err(::query_bind::DecodeError::custom(
                        ::std::format!("`{}` is not a valid value. Valid options are: {}", raw, #valid_values_str)
                    )),
                }
            }
        }
    };

    TokenStream::from(expanded)
}
