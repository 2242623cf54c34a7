use crate::cascade::resolve_candidate;
use crate::context::applicable_contexts;
use layermap_api::{FallbackList, ResolutionTable};
use tracing::debug;

/// Read-only lookup of single specifiers against a finished table.
pub struct Resolver<'a> {
    table: &'a ResolutionTable,
}

impl<'a> Resolver<'a> {
    pub fn new(table: &'a ResolutionTable) -> Self {
        Self { table }
    }

    /// Targets for `specifier` when requested from `referrer`.
    ///
    /// `referrer` is matched against scope keys exactly like a scope during
    /// composition; `None` consults the global imports only.
    pub fn resolve(&self, referrer: Option<&str>, specifier: &str) -> FallbackList {
        let contexts = applicable_contexts(referrer, self.table);
        let targets = resolve_candidate(specifier, &contexts);
        debug!(?referrer, specifier, %targets, "resolved specifier");
        targets
    }
}
