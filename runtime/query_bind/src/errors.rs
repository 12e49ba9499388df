//! The per-field error collector.
use indexmap::IndexMap;

/// Errors collected while binding a record, keyed by parameter name.
///
/// Entries are kept in insertion order.
/// Each key holds at most one message: the first one recorded wins.
///
/// An empty collection means that binding succeeded.
///
/// # Example
///
/// ```rust
/// use query_bind::BindErrors;
///
/// let mut errors = BindErrors::new();
/// assert!(errors.insert("page", "must be positive"));
/// assert!(!errors.insert("page", "ignored"));
/// assert_eq!(errors.get("page"), Some("must be positive"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct BindErrors {
    entries: IndexMap<String, String>,
}

impl BindErrors {
    /// An empty error collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `message` for `key`.
    ///
    /// Returns `false`, leaving the collection unchanged, if there is already
    /// a message for `key`.
    pub fn insert(&mut self, key: impl Into<String>, message: impl Into<String>) -> bool {
        match self.entries.entry(key.into()) {
            indexmap::map::Entry::Occupied(entry) => {
                tracing::trace!(
                    key = %entry.key(),
                    "An error was already recorded for this key, ignoring the new one"
                );
                false
            }
            indexmap::map::Entry::Vacant(entry) => {
                entry.insert(message.into());
                true
            }
        }
    }

    /// The message recorded for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// `true` if a message has been recorded for `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// The number of keys that failed.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// `true` if binding succeeded for every field.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The keys that failed, in the order they were recorded.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    /// Iterate over `(key, message)` pairs, in the order they were recorded.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(key, message)| (key.as_str(), message.as_str()))
    }
}

impl std::fmt::Display for BindErrors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, (key, message)) in self.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{key}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for BindErrors {}

impl IntoIterator for BindErrors {
    type Item = (String, String);
    type IntoIter = indexmap::map::IntoIter<String, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
