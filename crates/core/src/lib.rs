pub mod error;
pub mod logging;

pub mod cascade;
pub mod compose;
pub mod context;
pub mod loader;
pub mod resolve;

pub use compose::{append_map, compose_all};
pub use context::applicable_contexts;
pub use error::{LayermapError, Result};
pub use loader::LoaderConfig;
pub use resolve::Resolver;
