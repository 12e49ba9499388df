//! Where parameter values come from.
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use indexmap::IndexMap;

/// A read-only, string-keyed, string-valued parameter set.
///
/// Implementations must distinguish between a key that is absent
/// (`get` returns `None`) and a key that is present with an empty value
/// (`get` returns `Some("")`).
///
/// [`QueryParams`](crate::QueryParams) is the implementation you'll use
/// most often, but any map from `String` to `String` will do.
pub trait ParamSource {
    /// The value associated with `key`, if the key is present.
    fn get(&self, key: &str) -> Option<&str>;

    /// `true` if `key` is present, even if its value is empty.
    fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }
}

impl<S: BuildHasher> ParamSource for HashMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        HashMap::get(self, key).map(String::as_str)
    }
}

impl ParamSource for BTreeMap<String, String> {
    fn get(&self, key: &str) -> Option<&str> {
        BTreeMap::get(self, key).map(String::as_str)
    }
}

impl<S: BuildHasher> ParamSource for IndexMap<String, String, S> {
    fn get(&self, key: &str) -> Option<&str> {
        IndexMap::get(self, key).map(String::as_str)
    }
}

impl<P: ParamSource + ?Sized> ParamSource for &P {
    fn get(&self, key: &str) -> Option<&str> {
        (**self).get(key)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::{BTreeMap, HashMap};

    use super::ParamSource;

    #[test]
    fn absent_and_empty_are_distinct() {
        let mut map = HashMap::new();
        map.insert("a".to_string(), String::new());
        assert!(ParamSource::contains_key(&map, "a"));
        assert_eq!(ParamSource::get(&map, "a"), Some(""));
        assert!(!ParamSource::contains_key(&map, "b"));
        assert_eq!(ParamSource::get(&map, "b"), None);
    }

    #[test]
    fn btree_map() {
        let map = BTreeMap::from([("k".to_string(), "v".to_string())]);
        assert_eq!(ParamSource::get(&map, "k"), Some("v"));
    }
}
