//! Scope-prefix matching and specificity ordering.
//!
//! Composition and resolution both depend on these two functions agreeing,
//! so they live in one place and are tested on their own.

use std::cmp::Ordering;

/// Character that marks a scope key as a prefix rather than an exact key.
pub const SCOPE_SEPARATOR: char = '/';

pub fn is_prefix_scope(scope_key: &str) -> bool {
    scope_key.ends_with(SCOPE_SEPARATOR)
}

/// Whether `scope_key` applies to `scope`.
///
/// A key applies when it is identical to `scope`, or when it ends with
/// [`SCOPE_SEPARATOR`] and `scope` starts with it.
pub fn scope_key_matches(scope_key: &str, scope: &str) -> bool {
    scope_key == scope || (is_prefix_scope(scope_key) && scope.starts_with(scope_key))
}

/// Most specific first: longer keys sort before shorter ones, equal lengths
/// fall back to ascending byte order.
pub fn compare_specificity(a: &str, b: &str) -> Ordering {
    b.len().cmp(&a.len()).then_with(|| a.cmp(b))
}
