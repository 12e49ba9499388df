//! Errors that can happen when binding query parameters.
use crate::errors::BindErrors;

/// The error returned by [`BoundQuery::extract`] when binding fails.
///
/// See [`BoundQuery::extract`] and the documentation of each error variant for more details.
///
/// [`BoundQuery::extract`]: crate::request::query::BoundQuery::extract
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ExtractBoundQueryError {
    #[error(transparent)]
    /// See [`InvalidQueryParameters`] for details.
    InvalidQueryParameters(InvalidQueryParameters),
}

impl ExtractBoundQueryError {
    /// The per-field errors behind the failure.
    pub fn errors(&self) -> &BindErrors {
        match self {
            Self::InvalidQueryParameters(e) => &e.errors,
        }
    }

    /// Write a human-readable description of the failure, one line per field.
    pub fn response_body<W: std::fmt::Write>(&self, writer: &mut W) -> std::fmt::Result {
        match self {
            Self::InvalidQueryParameters(e) => {
                writeln!(writer, "Invalid query parameters.")?;
                write!(writer, "{}", e.errors)
            }
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("{} query parameter(s) could not be bound", .errors.len())]
/// One or more fields could not be bound, or the sanitize hook of the target
/// type rejected them.
pub struct InvalidQueryParameters {
    pub(super) errors: BindErrors,
}

impl InvalidQueryParameters {
    pub(super) fn new(errors: BindErrors) -> Self {
        Self { errors }
    }

    /// Take ownership of the per-field errors.
    pub fn into_errors(self) -> BindErrors {
        self.errors
    }
}

#[cfg(feature = "config")]
#[derive(Debug, thiserror::Error)]
#[error("Failed to load the query parameters configuration")]
/// [`QueryParamsConfig::load`] could not extract a valid configuration.
///
/// [`QueryParamsConfig::load`]: crate::request::query::QueryParamsConfig::load
pub struct ConfigLoadError {
    #[source]
    source: Box<figment::Error>,
}

#[cfg(feature = "config")]
impl ConfigLoadError {
    pub(super) fn new(source: Box<figment::Error>) -> Self {
        Self { source }
    }
}
