pub mod fallback;
pub mod scope;
pub mod scope_key;
pub mod specifier;
pub mod table;

pub use fallback::FallbackList;
pub use scope::ScopeMap;
pub use scope_key::{SCOPE_SEPARATOR, compare_specificity, is_prefix_scope, scope_key_matches};
pub use specifier::SpecifierMap;
pub use table::{ResolutionContext, ResolutionTable};
