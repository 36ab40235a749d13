//! Vector Index Provider Implementations
//!
//! | Provider | Notes |
//! |----------|-------|
//! | [`FlatVectorIndex`] | Exact inner-product search over an in-memory matrix |

pub mod flat;

pub use flat::FlatVectorIndex;
