//! # Firmdex Registry
//!
//! Primary-source client and curated fallback data for the Firmdex directory.
//!
//! The primary source is a public ticker registry: a JSON object keyed by
//! index whose values carry a display name and a stock symbol. The registry
//! provides nothing else, so the remaining record fields are produced by a
//! deterministic [`FieldSynthesizer`] — presentation filler, not authoritative
//! data.
//!
//! When the registry is unreachable (or answers garbage), callers fall back
//! to [`fallback::curated_companies`], a fixed list of 20 well-known
//! companies with fully populated fields.

#![forbid(unsafe_code)]
#![warn(missing_docs, rust_2018_idioms, clippy::all)]

mod client;
pub mod fallback;
mod synthesize;

pub use client::{RegistryClient, RegistryConfig};
pub use synthesize::{FieldSynthesizer, SynthesizedFields};
