//! Brute-force solver: the fallback when nothing anchors the algebra.
//!
//! Every candidate is one surviving low-20 fragment paired with one of the
//! 2^28 upper-bit completions. A single flat task index spans the whole
//! product space so rayon can split it evenly.

use crate::constraint::Constraint;
use crate::solver::{Solver, prefilter};
use crate::verify;
use rayon::prelude::*;
use tracing::info;

const UPPER_BITS: u32 = 28;
const UPPER_MASK: u64 = (1 << UPPER_BITS) - 1;

pub struct BruteForceSolver {
    constraints: Vec<Constraint>,
    low_bits: Vec<u32>,
}

impl BruteForceSolver {
    #[must_use]
    pub fn new(constraints: Vec<Constraint>, low_bits: Vec<u32>) -> Self {
        Self {
            constraints,
            low_bits,
        }
    }

    /// Maps a flat task index to its candidate seed.
    fn seed_at(&self, task: u64) -> i64 {
        let low = self.low_bits[(task >> UPPER_BITS) as usize];
        let upper = (task & UPPER_MASK) as i64;
        (upper << prefilter::LOW_BITS) | low as i64
    }
}

impl Solver for BruteForceSolver {
    fn solve(&self) -> Vec<i64> {
        let total = (self.low_bits.len() as u64) << UPPER_BITS;
        info!("brute forcing {total} candidates");

        let seeds = (0..total)
            .into_par_iter()
            .filter_map(|task| {
                if task & 0xFFF_FFFF == 0 && task != 0 {
                    info!("{task}/{total} candidates tried");
                }
                let seed = self.seed_at(task);
                verify::check_all(seed, &self.constraints).then_some(seed)
            })
            .collect();
        super::cap_results(seeds)
    }
}

#[cfg(test)]
mod test {
    use super::{BruteForceSolver, UPPER_BITS};
    use crate::constraint::{Constraint, VillageBiome};
    use crate::verify::observe_village;

    #[test]
    fn test_task_index_mapping() {
        let constraints = vec![Constraint::Village(observe_village(
            1,
            0,
            0,
            VillageBiome::Plains,
        ))];
        let solver = BruteForceSolver::new(constraints, vec![3, 0xF_FFFF]);

        // Task space is low-fragment-major.
        assert_eq!(solver.seed_at(0), 3);
        assert_eq!(solver.seed_at(1), (1 << 20) | 3);
        assert_eq!(solver.seed_at(1 << UPPER_BITS), 0xF_FFFF);
        assert_eq!(
            solver.seed_at((1 << UPPER_BITS) + 7),
            (7 << 20) | 0xF_FFFF
        );
        // The last candidate is the full 48-bit value.
        assert_eq!(solver.seed_at((2 << UPPER_BITS) - 1), 0xFFFF_FFFF_FFFF);
    }
}
