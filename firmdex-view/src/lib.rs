//! View model for the Firmdex directory.
//!
//! A pure projection from `(records, ViewState)` to the visible page and its
//! pagination metadata. No side effects, no shared state; recompute whenever
//! the records or any view parameter change.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod project;

pub use project::{distinct_industries, distinct_locations, project, DirectoryPage};
