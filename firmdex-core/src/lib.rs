//! # Firmdex Core
//!
//! Core types, errors, and traits for the Firmdex company directory.
//!
//! This crate provides the foundational building blocks used by all other
//! Firmdex crates:
//!
//! - **Types**: Domain models for company records, cache snapshots, and view state
//! - **Errors**: Comprehensive error types with context
//! - **Constants**: Service defaults (port, freshness window, page size)
//! - **Traits**: The [`CompanySource`] interface the cache refreshes from
//!
//! ## Example
//!
//! ```rust
//! use firmdex_core::{CompanyRecord, ViewState, SortKey};
//!
//! let record = CompanyRecord::public(1, "Acme", "NY", "Tech", 100, 2000, "ACME");
//! assert!(record.validate().is_ok());
//!
//! let mut state = ViewState::default();
//! state.set_sort_key(SortKey::Employees);
//! assert_eq!(state.page, 1);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

pub mod constants;
pub mod error;
pub mod traits;
pub mod types;

// Re-export commonly used items at crate root
pub use constants::*;
pub use error::{DirectoryError, Result};
pub use traits::*;
pub use types::*;
