use super::scope_key::{compare_specificity, scope_key_matches};
use super::specifier::SpecifierMap;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Scope prefix to the specifier overrides that apply under it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScopeMap(IndexMap<String, SpecifierMap>);

impl ScopeMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, scope: &str) -> Option<&SpecifierMap> {
        self.0.get(scope)
    }

    pub fn insert(
        &mut self,
        scope: impl Into<String>,
        mapping: SpecifierMap,
    ) -> Option<SpecifierMap> {
        self.0.insert(scope.into(), mapping)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &SpecifierMap)> + '_ {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.0.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Entries whose key applies to `scope`, most specific first.
    ///
    /// Recomputed on every call: the ordering never depends on how the
    /// underlying map happens to be arranged.
    pub fn matching(&self, scope: &str) -> Vec<(&str, &SpecifierMap)> {
        let mut matches: Vec<(&str, &SpecifierMap)> = self
            .iter()
            .filter(|(key, _)| scope_key_matches(key, scope))
            .collect();
        matches.sort_by(|(a, _), (b, _)| compare_specificity(a, b));
        matches
    }

    /// Rebuilds the map with keys in most-specific-first order.
    pub fn sorted_by_specificity(mut self) -> Self {
        self.0.sort_by(|a, _, b, _| compare_specificity(a, b));
        self
    }
}

impl FromIterator<(String, SpecifierMap)> for ScopeMap {
    fn from_iter<I: IntoIterator<Item = (String, SpecifierMap)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for ScopeMap {
    type Item = (String, SpecifierMap);
    type IntoIter = indexmap::map::IntoIter<String, SpecifierMap>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scopes(keys: &[&str]) -> ScopeMap {
        keys.iter()
            .map(|k| (k.to_string(), SpecifierMap::new()))
            .collect()
    }

    #[test]
    fn test_matching_orders_most_specific_first() {
        let map = scopes(&[
            "https://example.com/x/",
            "https://example.com/x/y/z",
            "https://example.com/other/",
            "https://example.com/x/y/",
        ]);

        let keys: Vec<&str> = map
            .matching("https://example.com/x/y/z")
            .into_iter()
            .map(|(k, _)| k)
            .collect();

        assert_eq!(
            keys,
            vec![
                "https://example.com/x/y/z",
                "https://example.com/x/y/",
                "https://example.com/x/",
            ]
        );
    }

    #[test]
    fn test_sorted_by_specificity() {
        let map = scopes(&["https://b/", "https://a/long/", "https://a/"]).sorted_by_specificity();
        assert_eq!(
            map.keys().collect::<Vec<_>>(),
            vec!["https://a/long/", "https://a/", "https://b/"]
        );
    }
}
