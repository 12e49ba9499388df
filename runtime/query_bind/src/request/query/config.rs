/// How [`QueryParams`](super::QueryParams) parses a raw query string.
///
/// It can be deserialized from your application configuration: every field
/// is optional and falls back to its default.
/// Pass it to [`QueryParams::parse_with`](super::QueryParams::parse_with) or
/// [`BoundQuery::extract_with`](super::BoundQuery::extract_with).
///
/// ```yaml
/// query_params:
///   duplicate_keys: last
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(default)]
pub struct QueryParamsConfig {
    /// Which value to keep when a key appears more than once.
    pub duplicate_keys: DuplicateKeys,
}

/// The policy for keys that appear more than once in the same query string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateKeys {
    /// Keep the first value, ignore the others.
    #[default]
    First,
    /// Keep the last value.
    Last,
}

#[cfg(feature = "config")]
mod loading {
    use figment::Figment;
    use figment::providers::Env;

    use super::QueryParamsConfig;
    use crate::request::query::errors::ConfigLoadError;

    static CONFIG_KEY: &str = "query_params";
    static ENV_PREFIX: &str = "QB_";

    impl QueryParamsConfig {
        /// A [`Figment`] that reads `QB_*` environment variables.
        ///
        /// Nested keys are separated by a double underscore:
        /// `QB_QUERY_PARAMS__DUPLICATE_KEYS=last`.
        pub fn figment() -> Figment {
            Figment::new().merge(Env::prefixed(ENV_PREFIX).split("__"))
        }

        /// Extract the configuration stored under the `query_params` key.
        ///
        /// If the key is missing, the default configuration is returned.
        pub fn load(figment: &Figment) -> Result<Self, ConfigLoadError> {
            if figment.find_value(CONFIG_KEY).is_err() {
                tracing::trace!("No `{CONFIG_KEY}` configuration found, using defaults");
                return Ok(Self::default());
            }
            figment
                .extract_inner(CONFIG_KEY)
                .map_err(|e| ConfigLoadError::new(Box::new(e)))
        }
    }

}
