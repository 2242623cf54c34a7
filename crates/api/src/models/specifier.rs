use super::fallback::FallbackList;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Specifier key to fallback list.
///
/// Iteration follows insertion order. Equality ignores order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpecifierMap(IndexMap<String, FallbackList>);

impl SpecifierMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, specifier: &str) -> Option<&FallbackList> {
        self.0.get(specifier)
    }

    /// Inserts or replaces. A replaced key keeps its original position.
    pub fn insert(
        &mut self,
        specifier: impl Into<String>,
        targets: FallbackList,
    ) -> Option<FallbackList> {
        self.0.insert(specifier.into(), targets)
    }

    /// Overlays `overrides` on top of this map, the overriding value winning
    /// on every shared key.
    pub fn overlay(&mut self, overrides: SpecifierMap) {
        self.0.extend(overrides.0);
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FallbackList)> + '_ {
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
}

impl FromIterator<(String, FallbackList)> for SpecifierMap {
    fn from_iter<I: IntoIterator<Item = (String, FallbackList)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SpecifierMap {
    type Item = (String, FallbackList);
    type IntoIter = indexmap::map::IntoIter<String, FallbackList>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}
