//! Extract bindable parameters from an incoming request.
pub mod query;
