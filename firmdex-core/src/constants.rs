//! Service constants for Firmdex.
//!
//! These are the documented defaults of the reference behavior; the port,
//! freshness window, and source timeout can all be overridden through
//! configuration, the page size is fixed.

// ═══════════════════════════════════════════════════════════════════════════════
// SERVICE DEFAULTS
// ═══════════════════════════════════════════════════════════════════════════════

/// Default TCP port the API server listens on.
pub const DEFAULT_PORT: u16 = 5000;

/// Default freshness window for a cache snapshot, in seconds (1 hour).
/// A read within this window is served from memory without touching the
/// external source.
pub const DEFAULT_FRESHNESS_SECONDS: u64 = 3600;

/// Default timeout for the outbound registry fetch, in seconds.
/// The refresh path never blocks longer than this before falling back.
pub const DEFAULT_SOURCE_TIMEOUT_SECONDS: u64 = 5;

// ═══════════════════════════════════════════════════════════════════════════════
// VIEW MODEL
// ═══════════════════════════════════════════════════════════════════════════════

/// Fixed page size of the directory view (records per page).
pub const PAGE_SIZE: usize = 6;

// ═══════════════════════════════════════════════════════════════════════════════
// RECORD VALIDATION BOUNDS
// ═══════════════════════════════════════════════════════════════════════════════

/// Earliest founding year accepted as plausible.
pub const MIN_FOUNDED_YEAR: i32 = 1600;

/// Latest founding year accepted as plausible.
pub const MAX_FOUNDED_YEAR: i32 = 2100;
