//! Field descriptors and the storage-level conversion policy.
use crate::errors::BindErrors;
use crate::source::ParamSource;
use crate::value::{DecodeError, QueryValue};

/// Tokens of a sequence field are separated by this delimiter, both in the
/// incoming parameter value and in the declared defaults.
pub const SEQUENCE_DELIMITER: char = ',';

/// The storage of a bindable field.
///
/// It decides what happens to the current value of the field when a raw
/// value is converted into it:
///
/// - scalars (every [`QueryValue`]) are overwritten on success and left
///   untouched on failure;
/// - `Vec<T>` splits the raw value on [`SEQUENCE_DELIMITER`] and decodes each
///   token. If any token fails, the sequence is emptied;
/// - `Option<T>` is set to `Some` on success and left untouched on failure.
pub trait BindField {
    /// Convert `raw` into the field storage.
    fn bind_field(&mut self, raw: &str) -> Result<(), DecodeError>;
}

impl<T> BindField for T
where
    T: QueryValue,
{
    fn bind_field(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = T::decode(raw)?;
        Ok(())
    }
}

impl<T> BindField for Vec<T>
where
    T: QueryValue,
{
    fn bind_field(&mut self, raw: &str) -> Result<(), DecodeError> {
        let decoded: Result<Vec<T>, DecodeError> =
            raw.split(SEQUENCE_DELIMITER).map(T::decode).collect();
        match decoded {
            Ok(values) => {
                *self = values;
                Ok(())
            }
            Err(e) => {
                self.clear();
                Err(e)
            }
        }
    }
}

impl<T> BindField for Option<T>
where
    T: QueryValue,
{
    fn bind_field(&mut self, raw: &str) -> Result<(), DecodeError> {
        *self = Some(T::decode(raw)?);
        Ok(())
    }
}

/// One entry in the descriptor table of a [`Bind`](crate::Bind) type.
///
/// Tables are usually generated by [`#[derive(Bind)]`](derive@crate::Bind),
/// but they can be written by hand:
///
/// ```rust
/// use query_bind::{Bind, DecodeError, Field, BindField};
///
/// #[derive(Default)]
/// pub struct Page {
///     pub number: u32,
/// }
///
/// fn bind_number(page: &mut Page, raw: &str) -> Result<(), DecodeError> {
///     page.number.bind_field(raw)
/// }
///
/// impl Bind for Page {
///     fn fields() -> &'static [Field<Self>] {
///         static FIELDS: &[Field<Page>] = &[Field::Value {
///             tag: "page,1",
///             bind: bind_number,
///         }];
///         FIELDS
///     }
/// }
///
/// let mut page = Page::default();
/// let errors = query_bind::bind(&query_bind::QueryParams::parse(""), &mut page);
/// assert!(errors.is_empty());
/// assert_eq!(page.number, 1);
/// ```
pub enum Field<T> {
    /// A field populated from a single parameter.
    Value {
        /// The raw annotation, `key[,default1[,default2...]]`.
        tag: &'static str,
        /// Convert a raw value into the field.
        bind: fn(&mut T, &str) -> Result<(), DecodeError>,
    },
    /// A sub-record whose fields are bound as if they belonged to `T`.
    Embedded {
        /// The name of the field holding the sub-record.
        name: &'static str,
        /// Bind the sub-record with the same source and error collector.
        bind: fn(&mut T, &dyn ParamSource, &mut BindErrors),
    },
}

impl<T> std::fmt::Debug for Field<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Value { tag, .. } => f.debug_struct("Value").field("tag", tag).finish(),
            Field::Embedded { name, .. } => {
                f.debug_struct("Embedded").field("name", name).finish()
            }
        }
    }
}
