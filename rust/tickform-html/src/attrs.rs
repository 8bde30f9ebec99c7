//! Caller-supplied attributes for the container element.

use std::collections::BTreeMap;

/// Extra HTML attributes to merge onto a rendered container.
///
/// Keys are kept sorted so output is deterministic. Underscores in keys
/// normalize to dashes (`data_role` becomes `data-role`), matching the
/// usual helper convention for attribute names that are not valid
/// identifiers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
    map: BTreeMap<String, String>,
}

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute, consuming and returning the set for chaining.
    pub fn set(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.map.insert(normalize_key(&key.into()), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.map.get(key).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.map.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for Attributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Attributes::new(), |attrs, (k, v)| attrs.set(k, v))
    }
}

fn normalize_key(key: &str) -> String {
    key.replace('_', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn underscores_normalize_to_dashes() {
        let attrs = Attributes::new().set("data_role", "picker");
        assert_eq!(attrs.get("data-role"), Some("picker"));
        assert_eq!(attrs.get("data_role"), None);
    }

    #[test]
    fn iteration_is_sorted_by_key() {
        let attrs = Attributes::new().set("style", "x").set("class", "y");
        let keys: Vec<&str> = attrs.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["class", "style"]);
    }

    #[test]
    fn from_iterator_collects_pairs() {
        let attrs: Attributes = [("class", "wide"), ("data_kind", "list")].into_iter().collect();
        assert_eq!(attrs.get("class"), Some("wide"));
        assert_eq!(attrs.get("data-kind"), Some("list"));
    }
}
