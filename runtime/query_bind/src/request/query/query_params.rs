use indexmap::IndexMap;

use crate::source::ParamSource;

use super::config::{DuplicateKeys, QueryParamsConfig};

/// The percent-decoded parameters found in the query of a request.
///
/// A key without a value (`?a` or `?a=`) is present, with an empty value.
/// When a key appears more than once, [`DuplicateKeys`] decides which value
/// is kept.
///
/// # Example
///
/// ```rust
/// use query_bind::{ParamSource, QueryParams};
///
/// let params = QueryParams::parse("name=Hi%20there&tags=a,b&empty=");
/// assert_eq!(params.get("name"), Some("Hi there"));
/// assert_eq!(params.get("tags"), Some("a,b"));
/// assert_eq!(params.get("empty"), Some(""));
/// assert_eq!(params.get("missing"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    params: IndexMap<String, String>,
}

impl QueryParams {
    /// Parse a raw query string, using the default [`QueryParamsConfig`].
    ///
    /// A leading `?`, if present, is ignored.
    pub fn parse(query: &str) -> Self {
        Self::parse_with(query, &QueryParamsConfig::default())
    }

    /// Parse a raw query string according to `config`.
    pub fn parse_with(query: &str, config: &QueryParamsConfig) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut params: IndexMap<String, String> = IndexMap::new();
        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match config.duplicate_keys {
                DuplicateKeys::First if params.contains_key(&*key) => {
                    tracing::trace!(key = %key, value = %value, "Ignoring repeated query parameter");
                }
                DuplicateKeys::First | DuplicateKeys::Last => {
                    params.insert(key.into_owned(), value.into_owned());
                }
            }
        }
        Self { params }
    }

    /// The parameters in the query of `uri`.
    pub fn from_uri(uri: &http::Uri) -> Self {
        Self::from_uri_with(uri, &QueryParamsConfig::default())
    }

    /// The parameters in the query of `uri`, parsed according to `config`.
    pub fn from_uri_with(uri: &http::Uri, config: &QueryParamsConfig) -> Self {
        Self::parse_with(uri.query().unwrap_or_default(), config)
    }

    /// The parameters in the query of the request target.
    pub fn from_request_parts(parts: &http::request::Parts) -> Self {
        Self::from_uri(&parts.uri)
    }

    /// The parameters in the query of the request target.
    pub fn from_request<B>(request: &http::Request<B>) -> Self {
        Self::from_uri(request.uri())
    }

    /// The number of distinct keys.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// `true` if the query carries no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Iterate over `(key, value)` pairs, in the order their keys first appeared.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl ParamSource for QueryParams {
    fn get(&self, key: &str) -> Option<&str> {
        self.params.get(key).map(String::as_str)
    }
}

impl<K, V> FromIterator<(K, V)> for QueryParams
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params: IndexMap<String, String> = IndexMap::new();
        for (key, value) in iter {
            params.entry(key.into()).or_insert_with(|| value.into());
        }
        Self { params }
    }
}
