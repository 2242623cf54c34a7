use layermap_api::{ResolutionContext, ResolutionTable};

/// The specifier maps of `table` that apply at `scope`, in consultation order.
///
/// Matching scopes come first, most specific first, and the global imports
/// come last. `None` selects the global imports alone.
pub fn applicable_contexts<'a>(
    scope: Option<&str>,
    table: &'a ResolutionTable,
) -> ResolutionContext<'a> {
    let mut contexts = ResolutionContext::default();
    if let Some(scope) = scope {
        for (_, mapping) in table.scopes.matching(scope) {
            contexts.push(mapping);
        }
    }
    contexts.push(&table.imports);
    contexts
}

#[cfg(test)]
mod tests {
    use super::*;
    use layermap_api::{FallbackList, ScopeMap, SpecifierMap};

    fn single(specifier: &str, target: &str) -> SpecifierMap {
        let mut map = SpecifierMap::new();
        map.insert(specifier, FallbackList::single(target));
        map
    }

    fn nested_table() -> ResolutionTable {
        let mut scopes = ScopeMap::new();
        scopes.insert("https://example.com/x/", single("k", "x"));
        scopes.insert("https://example.com/x/y/z", single("k", "xyz"));
        scopes.insert("https://example.com/x/y/", single("k", "xy"));
        scopes.insert("https://example.com/q/", single("k", "q"));
        ResolutionTable::new(single("k", "global"), scopes)
    }

    #[test]
    fn test_global_only_for_unscoped() {
        let table = nested_table();
        let contexts = applicable_contexts(None, &table);
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts.lookup("k"), Some(&FallbackList::single("global")));
    }

    #[test]
    fn test_most_specific_scope_first_global_last() {
        let table = nested_table();
        let contexts = applicable_contexts(Some("https://example.com/x/y/z"), &table);

        let order: Vec<&str> = contexts
            .layers()
            .iter()
            .map(|layer| layer.get("k").and_then(|l| l.first()).unwrap_or("-"))
            .collect();
        assert_eq!(order, vec!["xyz", "xy", "x", "global"]);
    }

    #[test]
    fn test_unmatched_scope_falls_back_to_global() {
        let table = nested_table();
        let contexts = applicable_contexts(Some("https://elsewhere/"), &table);
        assert_eq!(contexts.len(), 1);
        assert_eq!(contexts.lookup("k"), Some(&FallbackList::single("global")));
    }
}
