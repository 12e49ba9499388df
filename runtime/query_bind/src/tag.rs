//! Parse the binding annotation attached to a field.
//!
//! An annotation has the form `key[,default1[,default2[,...]]]`.

/// The separator between the key and the default value(s) of an annotation.
pub const TAG_SEPARATOR: char = ',';

/// A key equal to this marker disables binding for the field.
pub const SKIP_MARKER: &str = "-";

/// The key and the raw default value(s) extracted from a field annotation.
///
/// Both are borrowed from the annotation itself.
///
/// # Example
///
/// ```rust
/// use query_bind::tag::FieldTag;
///
/// let tag = FieldTag::parse("page,1");
/// assert_eq!(tag.key, "page");
/// assert_eq!(tag.defaults, "1");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FieldTag<'a> {
    /// The name of the parameter to look up.
    ///
    /// Empty if the field must not be bound.
    pub key: &'a str,
    /// Everything after the first separator, verbatim.
    ///
    /// Separators inside the default portion are preserved: they are only
    /// split when the field is a sequence.
    pub defaults: &'a str,
}

impl<'a> FieldTag<'a> {
    /// Parse a raw annotation into its key and default portion.
    ///
    /// - An empty annotation yields an empty key and no defaults.
    /// - A key equal to [`SKIP_MARKER`] yields an empty key and no defaults.
    /// - `"name"` and `"name,"` both yield `("name", "")`.
    pub fn parse(raw: &'a str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }
        let (key, defaults) = raw.split_once(TAG_SEPARATOR).unwrap_or((raw, ""));
        if key == SKIP_MARKER {
            return Self::default();
        }
        Self { key, defaults }
    }

    /// `true` if the field carrying this tag takes part in binding.
    pub fn is_bindable(&self) -> bool {
        !self.key.is_empty()
    }

    /// `true` if the annotation declares at least one default token.
    pub fn has_defaults(&self) -> bool {
        !self.defaults.is_empty()
    }
}
