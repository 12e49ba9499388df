use crate::binder::{Bind, bind};

use super::{QueryParams, QueryParamsConfig};
use super::errors::{ExtractBoundQueryError, InvalidQueryParameters};

/// Bind the query parameters of an incoming request into `T`.
///
/// `T` must implement [`Bind`], usually via [`#[derive(Bind)]`](derive@crate::Bind).
///
/// # Example
///
/// ```rust
/// use query_bind::{Bind, BoundQuery};
///
/// #[derive(Bind, Default)]
/// pub struct Listing {
///     #[query("page,1")]
///     pub page: u32,
///     #[query("size,20")]
///     pub size: u32,
/// }
///
/// let request = http::Request::get("/homes?page=3").body(()).unwrap();
/// let (parts, _) = request.into_parts();
/// let listing = BoundQuery::<Listing>::extract(&parts).unwrap();
/// assert_eq!(listing.0.page, 3);
/// assert_eq!(listing.0.size, 20);
/// ```
#[doc(alias = "Query")]
pub struct BoundQuery<T>(
    /// The bound record.
    pub T,
);

impl<T> BoundQuery<T>
where
    T: Bind,
{
    /// Bind the query of the request target into `T::default()`.
    ///
    /// If any field fails, or the sanitize hook of `T` records an error,
    /// an [`ExtractBoundQueryError`] is returned.
    ///
    /// The query is parsed with the default [`QueryParamsConfig`].
    /// Use [`BoundQuery::extract_with`] to pass your own.
    pub fn extract(parts: &http::request::Parts) -> Result<Self, ExtractBoundQueryError>
    where
        T: Default,
    {
        Self::extract_into(&parts.uri, T::default())
    }

    /// Bind the query of the request target into `T::default()`,
    /// parsing it according to `config`.
    pub fn extract_with(
        parts: &http::request::Parts,
        config: &QueryParamsConfig,
    ) -> Result<Self, ExtractBoundQueryError>
    where
        T: Default,
    {
        Self::extract_into_with(&parts.uri, T::default(), config)
    }

    /// Bind the query of `uri` into `T::default()`.
    pub fn extract_from_uri(uri: &http::Uri) -> Result<Self, ExtractBoundQueryError>
    where
        T: Default,
    {
        Self::extract_into(uri, T::default())
    }

    /// Bind the query of `uri` into a record you populated beforehand.
    ///
    /// Fields without a matching parameter and without declared defaults
    /// keep the value you set.
    pub fn extract_into(uri: &http::Uri, initial: T) -> Result<Self, ExtractBoundQueryError> {
        Self::extract_into_with(uri, initial, &QueryParamsConfig::default())
    }

    /// Same as [`BoundQuery::extract_into`], parsing the query according to `config`.
    pub fn extract_into_with(
        uri: &http::Uri,
        mut initial: T,
        config: &QueryParamsConfig,
    ) -> Result<Self, ExtractBoundQueryError> {
        let params = QueryParams::from_uri_with(uri, config);
        let errors = bind(&params, &mut initial);
        if !errors.is_empty() {
            return Err(ExtractBoundQueryError::InvalidQueryParameters(
                InvalidQueryParameters::new(errors),
            ));
        }
        Ok(BoundQuery(initial))
    }
}

impl<T> BoundQuery<T> {
    /// Unwrap the bound record.
    pub fn into_inner(self) -> T {
        self.0
    }
}
