//! globalsearch-engine
//!
//! Per-category matchers and the orchestrator that turns one query and a
//! [`DataBundle`](globalsearch_core::DataBundle) into ranked results.
pub mod engine;
pub mod matchers;
pub mod suggestions;

pub use engine::{combined, SearchEngine};
pub use matchers::{AccountMatcher, LocationMatcher, MenuMatcher};
pub use suggestions::suggestions;
