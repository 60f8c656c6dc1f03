//! Domain types for Firmdex.
//!
//! This module provides the core data structures used throughout the service:
//!
//! - [`CompanyRecord`]: One directory entry
//! - [`CacheSnapshot`]: An immutable, atomically-swapped view of the full list
//! - [`ViewState`]: The user-controlled search/filter/sort/page parameters

mod company;
mod snapshot;
mod view;

pub use company::*;
pub use snapshot::*;
pub use view::*;
