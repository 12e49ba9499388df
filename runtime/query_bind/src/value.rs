//! Convert a single raw token into a typed value.
//!
//! [`QueryValue`] is implemented for the primitive types out of the box.
//! Implement it for your own types to plug in custom decoding logic.
use std::fmt::Display;

/// A type that can be decoded from a single, already percent-decoded, query token.
///
/// # Custom types
///
/// Implement this trait to control how your own types are decoded.
/// The message of a [`DecodeError::custom`] is reported verbatim for the field.
///
/// ```rust
/// use query_bind::{DecodeError, QueryValue};
///
/// #[derive(Debug, PartialEq)]
/// pub enum Order {
///     Ascending,
///     Descending,
/// }
///
/// impl QueryValue for Order {
///     fn decode(raw: &str) -> Result<Self, DecodeError> {
///         match raw {
///             "asc" => Ok(Order::Ascending),
///             "desc" => Ok(Order::Descending),
///             _ => Err(DecodeError::custom(format!("`{raw}` is not a sort order"))),
///         }
///     }
/// }
///
/// assert_eq!(Order::decode("asc").unwrap(), Order::Ascending);
/// ```
///
/// Unit-only enums can derive an implementation via
/// [`#[derive(QueryValue)]`](derive@crate::QueryValue).
pub trait QueryValue: Sized {
    /// Decode `raw` into `Self`.
    fn decode(raw: &str) -> Result<Self, DecodeError>;
}

/// The error returned by [`QueryValue::decode`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum DecodeError {
    /// The token is not a valid representation for one of the built-in types.
    #[error("invalid value `{value}`")]
    Invalid {
        /// The offending token.
        value: String,
    },
    /// A custom [`QueryValue`] implementation rejected the token.
    #[error("{0}")]
    Custom(String),
}

impl DecodeError {
    /// The token could not be decoded as one of the built-in types.
    pub fn invalid(value: impl Into<String>) -> Self {
        Self::Invalid {
            value: value.into(),
        }
    }

    /// Report a failure with your own message.
    pub fn custom(message: impl Display) -> Self {
        Self::Custom(message.to_string())
    }

    /// The message recorded for the field bound to `key`.
    pub fn field_message(&self, key: &str) -> String {
        match self {
            Self::Invalid { value } => format!("invalid value `{value}` for `{key}`"),
            Self::Custom(message) => message.clone(),
        }
    }
}

impl QueryValue for String {
    fn decode(raw: &str) -> Result<Self, DecodeError> {
        Ok(raw.to_owned())
    }
}

impl QueryValue for bool {
    fn decode(raw: &str) -> Result<Self, DecodeError> {
        match raw {
            "1" | "t" | "T" | "TRUE" | "true" | "True" => Ok(true),
            "0" | "f" | "F" | "FALSE" | "false" | "False" => Ok(false),
            _ => Err(DecodeError::invalid(raw)),
        }
    }
}

macro_rules! from_str_query_value {
    ($($ty:ty),* $(,)?) => {
        $(
            impl QueryValue for $ty {
                fn decode(raw: &str) -> Result<Self, DecodeError> {
                    raw.parse::<$ty>().map_err(|_| DecodeError::invalid(raw))
                }
            }
        )*
    };
}

from_str_query_value!(
    char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32, f64,
);
