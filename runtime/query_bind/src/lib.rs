//! Bind the parameters of a request into plain Rust structs.
//!
//! Each bindable field carries an annotation, `#[query("key,default1,default2")]`,
//! naming the parameter to read and the value(s) to fall back to when the
//! parameter is missing or empty.
//! Failures don't stop the process: every field that couldn't be bound gets an
//! entry in the returned [`BindErrors`], keyed by parameter name.
//!
//! ```rust
//! use query_bind::{Bind, BindErrors, QueryParams, QueryValue, Sanitize};
//!
//! #[derive(QueryValue, Debug, PartialEq, Default)]
//! pub enum State {
//!     #[default]
//!     Normal,
//!     Locked,
//! }
//!
//! #[derive(Bind, Default)]
//! #[query(sanitize)]
//! pub struct Users {
//!     #[query("state,normal")]
//!     pub state: State,
//!     #[query("ids")]
//!     pub ids: Vec<u64>,
//!     #[query("page,1")]
//!     pub page: u32,
//! }
//!
//! impl Sanitize for Users {
//!     fn sanitize(&mut self, errors: &mut BindErrors) {
//!         if self.page == 0 {
//!             errors.insert("page", "pages start at 1");
//!         }
//!     }
//! }
//!
//! let mut users = Users::default();
//! let errors = query_bind::bind(&QueryParams::parse("state=locked&ids=1,2&page=0"), &mut users);
//! assert_eq!(users.state, State::Locked);
//! assert_eq!(users.ids, vec![1, 2]);
//! assert_eq!(errors.get("page"), Some("pages start at 1"));
//! ```
extern crate self as query_bind;

pub use binder::{Bind, Sanitize, bind, bind_fields, bind_query};
pub use errors::BindErrors;
pub use field::{BindField, Field, SEQUENCE_DELIMITER};
pub use request::query::{BoundQuery, QueryParams};
pub use source::ParamSource;
pub use value::{DecodeError, QueryValue};

/// Derive an implementation of [`Bind`] for a struct with named fields.
///
/// # Field annotations
///
/// - `#[query("key")]`: bind the field to the `key` parameter;
/// - `#[query("key,default")]`: fall back to `default` when `key` is
///   missing or empty. Sequence fields take comma-separated defaults,
///   e.g. `#[query("ids,1,2,3")]`;
/// - `#[query("-")]`: don't bind the field;
/// - `#[query(flatten)]`: the field is a record implementing [`Bind`], whose
///   own fields are bound as if they belonged to the parent.
///
/// Fields without a `#[query]` attribute are left untouched.
///
/// # Struct annotations
///
/// `#[query(sanitize)]` wires the struct's [`Sanitize`] implementation into
/// [`Bind::post_bind`].
///
/// # Field types
///
/// Every annotated field must implement [`BindField`]: any [`QueryValue`],
/// `Vec<T>` or `Option<T>` where `T: QueryValue`.
pub use query_bind_macros::Bind;

/// Derive an implementation of [`QueryValue`] for an enum with unit variants.
///
/// Each variant is decoded from its **snake_case** name.
/// Override it with `#[query(rename = "...")]`:
///
/// ```rust
/// use query_bind::QueryValue;
///
/// #[derive(QueryValue, Debug, PartialEq)]
/// pub enum Sort {
///     MostRecent, // "most_recent"
///     #[query(rename = "top")]
///     MostPopular,
/// }
///
/// assert_eq!(Sort::decode("most_recent").unwrap(), Sort::MostRecent);
/// assert_eq!(Sort::decode("top").unwrap(), Sort::MostPopular);
/// assert!(Sort::decode("most_popular").is_err());
/// ```
pub use query_bind_macros::QueryValue;

mod binder;
mod errors;
mod field;
pub mod request;
mod source;
pub mod tag;
mod value;
