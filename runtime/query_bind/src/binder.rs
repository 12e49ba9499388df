//! Walk a record's descriptor table and populate its fields.
use crate::errors::BindErrors;
use crate::field::Field;
use crate::request::query::QueryParams;
use crate::source::ParamSource;
use crate::tag::FieldTag;

/// A record that can be populated from a [`ParamSource`].
///
/// Derive it with [`#[derive(Bind)]`](derive@crate::Bind), or implement it by
/// hand by listing a [`Field`] for each bindable member.
pub trait Bind: Sized + 'static {
    /// The descriptor table of `Self`, in declaration order.
    fn fields() -> &'static [Field<Self>];

    /// Invoked by [`bind`] once every field has been bound, whether or not
    /// some of them failed.
    ///
    /// It does nothing by default. Use it to check invariants that span
    /// several fields or to reject values that decode fine but are not
    /// acceptable. Embedded records are not sanitized automatically:
    /// forward to their hook from yours if you need it.
    fn post_bind(&mut self, errors: &mut BindErrors) {
        let _ = errors;
    }
}

/// A post-bind validation hook.
///
/// Implement it and mark the struct with `#[query(sanitize)]` to have
/// [`#[derive(Bind)]`](derive@crate::Bind) wire it into [`Bind::post_bind`].
pub trait Sanitize {
    /// Record an entry in `errors` for every invalid field.
    fn sanitize(&mut self, errors: &mut BindErrors);
}

/// Populate the fields of `target` from `source`, recording failures in `errors`.
///
/// Fields are processed in declaration order. Embedded records are bound
/// in place, with the same source and collector.
/// A failing field never prevents the others from being bound.
///
/// This does **not** invoke [`Bind::post_bind`]: use [`bind`] for that.
pub fn bind_fields<T: Bind>(target: &mut T, source: &dyn ParamSource, errors: &mut BindErrors) {
    for field in T::fields() {
        match field {
            Field::Value { tag, bind } => {
                let tag = FieldTag::parse(tag);
                if !tag.is_bindable() {
                    tracing::trace!("Field has no key, skipping it");
                    continue;
                }
                let raw = match source.get(tag.key) {
                    Some(value) if !value.is_empty() => value,
                    _ if tag.has_defaults() => {
                        tracing::trace!(key = tag.key, defaults = tag.defaults, "Using defaults");
                        tag.defaults
                    }
                    _ => continue,
                };
                if let Err(e) = bind(target, raw) {
                    let message = e.field_message(tag.key);
                    tracing::debug!(key = tag.key, value = raw, error = %message, "Failed to bind field");
                    errors.insert(tag.key, message);
                }
            }
            Field::Embedded { name, bind } => {
                tracing::trace!(field = name, "Binding embedded record");
                bind(target, source, errors);
            }
        }
    }
}

/// Bind `source` into `target`, then run its [sanitize hook](Bind::post_bind).
///
/// The returned collection is empty if every field was bound successfully
/// and the hook didn't object.
///
/// # Example
///
/// ```rust
/// use query_bind::{Bind, QueryParams};
///
/// #[derive(Bind, Default)]
/// pub struct Search {
///     #[query("q")]
///     pub text: String,
///     #[query("page,1")]
///     pub page: u32,
///     #[query("tags")]
///     pub tags: Vec<String>,
/// }
///
/// let params = QueryParams::parse("q=rust&tags=web,http");
/// let mut search = Search::default();
/// let errors = query_bind::bind(&params, &mut search);
///
/// assert!(errors.is_empty());
/// assert_eq!(search.text, "rust");
/// assert_eq!(search.page, 1);
/// assert_eq!(search.tags, vec!["web", "http"]);
/// ```
pub fn bind<S, T>(source: &S, target: &mut T) -> BindErrors
where
    S: ParamSource + ?Sized,
    T: Bind,
{
    let mut errors = BindErrors::new();
    bind_fields(target, &source, &mut errors);
    target.post_bind(&mut errors);
    errors
}

/// Parse `query` and bind it into a fresh `T::default()`.
///
/// ```rust
/// use query_bind::Bind;
///
/// #[derive(Bind, Default, Debug)]
/// pub struct Page {
///     #[query("page,1")]
///     pub number: u32,
/// }
///
/// assert_eq!(query_bind::bind_query::<Page>("").unwrap().number, 1);
///
/// let errors = query_bind::bind_query::<Page>("page=abc").unwrap_err();
/// assert_eq!(errors.get("page"), Some("invalid value `abc` for `page`"));
/// ```
pub fn bind_query<T>(query: &str) -> Result<T, BindErrors>
where
    T: Bind + Default,
{
    let mut target = T::default();
    let errors = bind(&QueryParams::parse(query), &mut target);
    if errors.is_empty() {
        Ok(target)
    } else {
        Err(errors)
    }
}
