//! Composition of resolution tables.
//!
//! `append_map(base, incoming)` behaves as if the author of `incoming` wrote
//! every target in terms of what it means in `base`. Targets are resolved
//! through `base` before the two tables are merged, new entries winning.

use crate::cascade::resolve_mapping;
use crate::context::applicable_contexts;
use crate::error::{LayermapError, Result};
use layermap_api::ResolutionTable;
use tracing::debug;

pub fn append_map(base: &ResolutionTable, incoming: &ResolutionTable) -> ResolutionTable {
    // 1. Global imports resolve through the base imports only
    let global = applicable_contexts(None, base);
    let mut imports = base.imports.clone();
    imports.overlay(resolve_mapping(&incoming.imports, &global));

    // 2. Each incoming scope resolves through whatever applies to it in base.
    //    Contexts always come from `base`, never from the scopes being built.
    let mut scopes = base.scopes.clone();
    for (scope, mapping) in incoming.scopes.iter() {
        let contexts = applicable_contexts(Some(scope), base);
        let mut merged = base.scopes.get(scope).cloned().unwrap_or_default();
        merged.overlay(resolve_mapping(mapping, &contexts));
        debug!(
            scope,
            contexts = contexts.len(),
            entries = merged.len(),
            "composed scope"
        );
        scopes.insert(scope, merged);
    }

    debug!(
        imports = imports.len(),
        scopes = scopes.len(),
        "composed table"
    );

    // 3. Most specific scope first
    ResolutionTable::new(imports, scopes.sorted_by_specificity())
}

/// Left fold of `tables` with [`append_map`]; the first table has the lowest
/// precedence.
pub fn compose_all<I>(tables: I) -> Result<ResolutionTable>
where
    I: IntoIterator<Item = ResolutionTable>,
{
    let mut tables = tables.into_iter();
    let first = tables.next().ok_or(LayermapError::EmptyComposition)?;
    Ok(tables.fold(first, |acc, table| append_map(&acc, &table)))
}
