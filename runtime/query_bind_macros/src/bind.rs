//! A derive macro generating the field descriptor table of a `Bind` implementation.
use darling::{FromDeriveInput, FromField, util::Flag, util::Ignored};
use proc_macro::TokenStream;
use quote::{format_ident, quote, quote_spanned};
use syn::{DeriveInput, Ident, LitStr, Type, ext::IdentExt, parse_macro_input, spanned::Spanned};

#[derive(FromDeriveInput)]
#[darling(attributes(query), supports(struct_named))]
struct BindInput {
    data: darling::ast::Data<Ignored, ParsedField>,
    generics: syn::Generics,
    ident: syn::Ident,
    sanitize: Flag,
}

struct ParsedField {
    ident: Ident,
    ty: Type,
    source: FieldSource,
}

enum FieldSource {
    /// `#[query("key,defaults")]`
    Tag(LitStr),
    /// `#[query(flatten)]`
    Flatten,
    /// No `#[query]` attribute.
    Unbound,
}

const ATTRIBUTE_HELP: &str = "Expected `#[query(\"key\")]`, `#[query(\"key,default\")]` or `#[query(flatten)]`.";

impl FromField for ParsedField {
    fn from_field(field: &syn::Field) -> darling::Result<Self> {
        let Some(ident) = field.ident.clone() else {
            return Err(darling::Error::unsupported_shape("tuple struct").with_span(field));
        };
        let mut sources = Vec::new();
        for attr in &field.attrs {
            if !attr.path().is_ident("query") {
                continue;
            }
            let syn::Meta::List(list) = &attr.meta else {
                return Err(darling::Error::custom(ATTRIBUTE_HELP).with_span(&attr.meta));
            };
            let source = if let Ok(tag) = syn::parse2::<LitStr>(list.tokens.clone()) {
                FieldSource::Tag(tag)
            } else {
                match syn::parse2::<Ident>(list.tokens.clone()) {
                    Ok(word) if word == "flatten" => FieldSource::Flatten,
                    _ => {
                        return Err(darling::Error::custom(ATTRIBUTE_HELP).with_span(&attr.meta));
                    }
                }
            };
            sources.push(source);
        }

        let source = match sources.len() {
            0 => FieldSource::Unbound,
            1 => sources.remove(0),
            _ => {
                return Err(darling::Error::custom(format!(
                    "Field `{ident}` has multiple `#[query]` attributes.\nUse only **one**."
                ))
                .with_span(&ident));
            }
        };
        Ok(Self {
            ident,
            ty: field.ty.clone(),
            source,
        })
    }
}

pub(super) fn derive_bind(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    match _derive_bind(input) {
        Ok(tokens) => tokens.into(),
        Err(err) => err.write_errors().into(),
    }
}

fn _derive_bind(input: DeriveInput) -> Result<proc_macro2::TokenStream, darling::Error> {
    let input = BindInput::from_derive_input(&input)?;
    reject_invalid_inputs(&input)?;

    let struct_ident = &input.ident;
    let fields = input
        .data
        .take_struct()
        // `darling` rejects every shape other than structs with named fields.
        .expect("`Bind` only supports structs with named fields.");

    let mut binders = Vec::with_capacity(fields.len());
    let mut entries = Vec::with_capacity(fields.len());
    for field in fields.iter() {
        let field_ident = &field.ident;
        let ty_span = field.ty.span();
        let fn_ident = format_ident!("__bind_{}", field_ident);
        match &field.source {
            FieldSource::Tag(tag) => {
                binders.push(quote_spanned! { ty_span =>
                    fn #fn_ident(
                        __target: &mut #struct_ident,
                        __raw: &str,
                    ) -> ::core::result::Result<(), ::query_bind::DecodeError> {
                        ::query_bind::BindField::bind_field(&mut __target.#field_ident, __raw)
                    }
                });
                entries.push(quote! {
                    ::query_bind::Field::Value { tag: #tag, bind: #fn_ident }
                });
            }
            FieldSource::Flatten => {
                let name = field_ident.unraw().to_string();
                binders.push(quote_spanned! { ty_span =>
                    fn #fn_ident(
                        __target: &mut #struct_ident,
                        __source: &dyn ::query_bind::ParamSource,
                        __errors: &mut ::query_bind::BindErrors,
                    ) {
                        ::query_bind::bind_fields(&mut __target.#field_ident, __source, __errors)
                    }
                });
                entries.push(quote! {
                    ::query_bind::Field::Embedded { name: #name, bind: #fn_ident }
                });
            }
            FieldSource::Unbound => {}
        }
    }

    let post_bind = input.sanitize.is_present().then(|| {
        quote! {
            fn post_bind(&mut self, errors: &mut ::query_bind::BindErrors) {
                <Self as ::query_bind::Sanitize>::sanitize(self, errors)
            }
        }
    });

    Ok(quote! {
        #[automatically_derived]
        impl ::query_bind::Bind for #struct_ident {
            fn fields() -> &'static [::query_bind::Field<Self>] {
                #(#binders)*
                static FIELDS: &[::query_bind::Field<#struct_ident>] = &[#(#entries),*];
                FIELDS
            }

            #post_bind
        }
    })
}

fn reject_invalid_inputs(input: &BindInput) -> Result<(), darling::Error> {
    let struct_ident = &input.ident;
    // The descriptor table lives in a `static`, which can't be generic.
    if let Some(generic) = input.generics.type_params().next() {
        return Err(darling::Error::custom(format!(
            "`#[derive(Bind)]` can't be applied to structs with generic type parameters, such as `{struct_ident}`.\n\n\
            help: Consider using concrete types instead. Alternatively, implement `Bind` for `{struct_ident}` manually.",
        ))
        .with_span(generic));
    }
    if let Some(lifetime) = input.generics.lifetimes().next() {
        return Err(darling::Error::custom(format!(
            "`#[derive(Bind)]` can't be applied to structs with generic lifetimes, such as `{struct_ident}`.\n\n\
            help: Bound records must own their data. Use `String` instead of `&str`.",
        ))
        .with_span(lifetime));
    }
    if let Some(param) = input.generics.const_params().next() {
        return Err(darling::Error::custom(format!(
            "`#[derive(Bind)]` can't be applied to structs with const generic parameters, such as `{struct_ident}`.",
        ))
        .with_span(param));
    }
    Ok(())
}
