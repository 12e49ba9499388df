//! Bind query parameters into a typed record.
pub use bound_query::BoundQuery;
pub use config::{DuplicateKeys, QueryParamsConfig};
pub use query_params::QueryParams;

mod bound_query;
mod config;
pub mod errors;
mod query_params;
