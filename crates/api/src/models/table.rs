use super::fallback::FallbackList;
use super::scope::ScopeMap;
use super::specifier::SpecifierMap;
use serde::{Deserialize, Serialize};

/// A complete specifier-resolution table: global imports plus scoped overrides.
///
/// Tables are plain values. Composition always produces a fresh table and
/// never touches its operands.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolutionTable {
    #[serde(default)]
    pub imports: SpecifierMap,
    #[serde(default)]
    pub scopes: ScopeMap,
}

impl ResolutionTable {
    pub fn new(imports: SpecifierMap, scopes: ScopeMap) -> Self {
        Self { imports, scopes }
    }

    pub fn is_empty(&self) -> bool {
        self.imports.is_empty() && self.scopes.is_empty()
    }
}

/// Specifier maps to consult for one lookup, in consultation order.
///
/// Borrowed from a table for the duration of a single cascade; never stored.
#[derive(Debug, Clone, Default)]
pub struct ResolutionContext<'a> {
    layers: Vec<&'a SpecifierMap>,
}

impl<'a> ResolutionContext<'a> {
    pub fn new(layers: Vec<&'a SpecifierMap>) -> Self {
        Self { layers }
    }

    pub fn push(&mut self, layer: &'a SpecifierMap) {
        self.layers.push(layer);
    }

    /// First layer defining `candidate`, if any.
    pub fn lookup(&self, candidate: &str) -> Option<&'a FallbackList> {
        self.layers.iter().find_map(|layer| layer.get(candidate))
    }

    pub fn layers(&self) -> &[&'a SpecifierMap] {
        &self.layers
    }

    pub fn len(&self) -> usize {
        self.layers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_fields_default_to_empty() {
        let table: ResolutionTable = serde_json::from_str("{}").unwrap();
        assert!(table.is_empty());
        assert_eq!(table, ResolutionTable::default());
    }

    #[test]
    fn test_context_lookup_takes_first_layer() {
        let mut near = SpecifierMap::new();
        near.insert("a", FallbackList::single("near"));
        let mut far = SpecifierMap::new();
        far.insert("a", FallbackList::single("far"));
        far.insert("b", FallbackList::single("far-b"));

        let ctx = ResolutionContext::new(vec![&near, &far]);
        assert_eq!(ctx.lookup("a"), Some(&FallbackList::single("near")));
        assert_eq!(ctx.lookup("b"), Some(&FallbackList::single("far-b")));
        assert_eq!(ctx.lookup("c"), None);
    }
}
