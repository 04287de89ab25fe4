//! globalsearch-text
//!
//! Text canonicalization and tiered field scoring. Everything here is a pure
//! function of its inputs.
pub mod normalize;
pub mod scorer;

pub use normalize::normalize;
pub use scorer::{classify, score, MatchTier};
