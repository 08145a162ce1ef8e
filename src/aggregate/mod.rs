//! Multi-source result aggregation.
//!
//! This module provides:
//! - [`SourceSearchResult`] / [`SearchResult`]: per-source and merged
//!   result containers
//! - [`engine`]: the merge step (dedup, date sort, truncation, error
//!   folding) and the dual-source limit split
//! - [`typeahead`]: suggestion grouping and ranking

pub mod engine;
pub mod typeahead;
mod types;

pub use types::{SearchResult, SourceSearchResult};
