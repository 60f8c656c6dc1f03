//! Snapshot cache for the Firmdex directory.
//!
//! One in-memory snapshot in front of one outbound fetch, with a curated
//! fallback. Reads within the freshness window never touch the source.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod cache;

pub use cache::{CacheConfig, CacheStats, DirectoryCache};
