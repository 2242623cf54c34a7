//! One-step substitution of candidate targets through a resolution context.
//!
//! Each call substitutes at most once. Chains longer than one hop only arise
//! from composing repeatedly, one layer per composition.

use layermap_api::{FallbackList, ResolutionContext, SpecifierMap};
use tracing::trace;

/// Resolves `candidate` against `contexts`.
///
/// Returns the first defining layer's list verbatim, without re-resolving it
/// against the remaining layers. An unmatched candidate resolves to itself.
pub fn resolve_candidate(candidate: &str, contexts: &ResolutionContext<'_>) -> FallbackList {
    match contexts.lookup(candidate) {
        Some(targets) => {
            trace!(candidate, %targets, "substituted candidate");
            targets.clone()
        }
        None => FallbackList::single(candidate),
    }
}

/// Resolves every target of `targets` independently and concatenates the
/// results in order. Duplicates are kept.
pub fn resolve_fallbacks(targets: &FallbackList, contexts: &ResolutionContext<'_>) -> FallbackList {
    targets.flat_map(|target| resolve_candidate(target, contexts))
}

pub fn resolve_mapping(mapping: &SpecifierMap, contexts: &ResolutionContext<'_>) -> SpecifierMap {
    mapping
        .iter()
        .map(|(specifier, targets)| (specifier.to_string(), resolve_fallbacks(targets, contexts)))
        .collect()
}
