//! Deterministic filler for fields the ticker registry does not provide.
//!
//! The registry only carries a name and a symbol; industry, head count, and
//! founding year are synthesized so the directory still has something to
//! filter and sort on. The output is a pure function of `(seed, record id)`,
//! so tests can assert exact values and a re-fetch with the same seed
//! produces the same directory. None of it is authoritative data.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Industry labels the synthesizer draws from.
pub const INDUSTRY_LABELS: &[&str] = &[
    "Technology",
    "Finance",
    "Healthcare",
    "Energy",
    "Retail",
    "Manufacturing",
    "Media",
    "Transportation",
];

/// Synthesized head-count range (inclusive).
const EMPLOYEE_RANGE: std::ops::RangeInclusive<u32> = 50..=250_000;

/// Synthesized founding-year range (inclusive).
const FOUNDED_RANGE: std::ops::RangeInclusive<i32> = 1900..=2020;

/// The fields filled in for one record.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SynthesizedFields {
    /// Industry label, drawn from [`INDUSTRY_LABELS`].
    pub industry: &'static str,
    /// Head count.
    pub employees: u32,
    /// Founding year.
    pub founded: i32,
}

/// Deterministic field synthesizer.
///
/// Each record id gets its own ChaCha stream derived from the configured
/// seed, so output does not depend on the order records are filled in.
#[derive(Clone, Copy, Debug)]
pub struct FieldSynthesizer {
    seed: u64,
}

impl FieldSynthesizer {
    /// Creates a synthesizer with the given seed.
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }

    /// Fills in the missing fields for one record id.
    pub fn fill(&self, id: u32) -> SynthesizedFields {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed ^ (u64::from(id) << 32 | u64::from(id)));

        let industry = INDUSTRY_LABELS[rng.gen_range(0..INDUSTRY_LABELS.len())];
        let employees = rng.gen_range(EMPLOYEE_RANGE);
        let founded = rng.gen_range(FOUNDED_RANGE);

        SynthesizedFields {
            industry,
            employees,
            founded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use firmdex_core::constants::{MAX_FOUNDED_YEAR, MIN_FOUNDED_YEAR};

    #[test]
    fn test_deterministic_for_seed_and_id() {
        let synth = FieldSynthesizer::new(42);
        assert_eq!(synth.fill(7), synth.fill(7));
        assert_eq!(synth.fill(7), FieldSynthesizer::new(42).fill(7));
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = FieldSynthesizer::new(1);
        let b = FieldSynthesizer::new(2);
        // A handful of ids; at least one must differ if seeding works at all.
        let differs = (1..=16).any(|id| a.fill(id) != b.fill(id));
        assert!(differs);
    }

    #[test]
    fn test_output_within_bounds() {
        let synth = FieldSynthesizer::new(1234);
        for id in 1..=200 {
            let fields = synth.fill(id);
            assert!(INDUSTRY_LABELS.contains(&fields.industry));
            assert!(fields.employees >= 50 && fields.employees <= 250_000);
            assert!(fields.founded >= MIN_FOUNDED_YEAR && fields.founded <= MAX_FOUNDED_YEAR);
        }
    }

    #[test]
    fn test_independent_of_fill_order() {
        let synth = FieldSynthesizer::new(9);
        let forward: Vec<_> = (1..=10).map(|id| synth.fill(id)).collect();
        let mut backward: Vec<_> = (1..=10).rev().map(|id| synth.fill(id)).collect();
        backward.reverse();
        assert_eq!(forward, backward);
    }
}
