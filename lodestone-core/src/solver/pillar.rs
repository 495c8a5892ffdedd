//! Pillar-seed solver.
//!
//! The End pillar layout leaks a 32-bit value drawn from its own 64-bit
//! LCG. Guessing the 16 bits below the leak pins 32 bits in the middle of
//! the structure seed, leaving only the 16 upper bits free: 2^32
//! candidates instead of 2^48.

use crate::constraint::Constraint;
use crate::solver::Solver;
use crate::verify;
use lodestone_utils::random::{LCG_XOR, PILLAR_ADD, PILLAR_MULT};
use rayon::prelude::*;
use tracing::info;

pub struct PillarSolver {
    pillar_seed: u32,
    constraints: Vec<Constraint>,
}

impl PillarSolver {
    #[must_use]
    pub fn new(pillar_seed: u32, constraints: Vec<Constraint>) -> Self {
        Self {
            pillar_seed,
            constraints,
        }
    }
}

/// Runs the pillar LCG two steps forward from the guessed input and
/// unscrambles the middle 32 bits of the structure seed.
const fn pillar_mid32(pillar_seed: u32, lower16: u16) -> u32 {
    let partial = ((pillar_seed as u64) << 16) | lower16 as u64;
    let s1 = partial.wrapping_mul(PILLAR_MULT).wrapping_add(PILLAR_ADD);
    let s2 = s1.wrapping_mul(PILLAR_MULT).wrapping_add(PILLAR_ADD);
    ((s2 ^ LCG_XOR as u64) & 0xFFFF_FFFF) as u32
}

impl Solver for PillarSolver {
    fn solve(&self) -> Vec<i64> {
        info!(
            "searching the 2^32 space derived from pillar seed {}",
            self.pillar_seed
        );

        let seeds: Vec<i64> = (0u32..=u16::MAX as u32)
            .into_par_iter()
            .flat_map_iter(|lower16| {
                let mid32 = pillar_mid32(self.pillar_seed, lower16 as u16) as i64;
                let constraints = &self.constraints;
                (0u32..=u16::MAX as u32).filter_map(move |upper16| {
                    let seed = ((upper16 as i64) << 32) | mid32;
                    verify::check_all(seed, constraints).then_some(seed)
                })
            })
            .collect();
        super::cap_results(seeds)
    }
}

#[cfg(test)]
mod test {
    use super::pillar_mid32;

    #[test]
    fn test_mid32_is_deterministic() {
        assert_eq!(pillar_mid32(0, 0), pillar_mid32(0, 0));
        assert_eq!(pillar_mid32(91752, 1234), pillar_mid32(91752, 1234));
    }

    #[test]
    fn test_mid32_depends_on_both_inputs() {
        let base = pillar_mid32(91752, 0);
        assert_ne!(pillar_mid32(91752, 1), base);
        assert_ne!(pillar_mid32(91753, 0), base);
    }

    #[test]
    fn test_mid32_matches_manual_schedule() {
        use lodestone_utils::random::{LCG_XOR, PILLAR_ADD, PILLAR_MULT};

        let pillar_seed = 7u32;
        let lower16 = 0x00FFu16;
        let partial = (u64::from(pillar_seed) << 16) | u64::from(lower16);
        let mut state = partial;
        for _ in 0..2 {
            state = state.wrapping_mul(PILLAR_MULT).wrapping_add(PILLAR_ADD);
        }
        let expected = ((state ^ LCG_XOR as u64) & 0xFFFF_FFFF) as u32;
        assert_eq!(pillar_mid32(pillar_seed, lower16), expected);
    }
}
