use proc_macro::TokenStream;

mod bind;
mod query_value;

#[proc_macro_derive(Bind, attributes(query))]
pub fn derive_bind(input: TokenStream) -> TokenStream {
    bind::derive_bind(input)
}

#[proc_macro_derive(QueryValue, attributes(query))]
pub fn derive_query_value(input: TokenStream) -> TokenStream {
    query_value::derive_query_value(input)
}
