//! Low-20-bit shipwreck pre-filter.
//!
//! The low 20 bits of an LCG state never depend on anything above bit 19
//! of the input, and a `nextInt(20)` placement draw is congruent mod 4 to
//! bits 17..18 of its state. So for each shipwreck the two placement
//! residues can be checked against every 20-bit seed fragment in
//! isolation, discarding most of the space before the real search starts.

use crate::constraint::Constraint;
use crate::verify::SHIPWRECK;
use lodestone_utils::math::{floor_div, floor_mod};
use lodestone_utils::random::{region_seed_mix, scramble, step};
use rayon::prelude::*;

/// Number of seed bits the filter constrains.
pub const LOW_BITS: u32 = 20;
/// Size of the filtered space.
pub const LOW_SPAN: u32 = 1 << LOW_BITS;

/// One shipwreck's residue targets, precomputed.
struct ResidueCheck {
    mix: i64,
    x_residue: i64,
    z_residue: i64,
}

impl ResidueCheck {
    fn new(chunk_x: i32, chunk_z: i32) -> Self {
        let region_x = floor_div(chunk_x, SHIPWRECK.spacing);
        let region_z = floor_div(chunk_z, SHIPWRECK.spacing);
        // The region corner is a multiple of 4 chunks, so the expected
        // draw is congruent to the chunk coordinate itself.
        Self {
            mix: region_seed_mix(0, region_x, region_z, SHIPWRECK.salt),
            x_residue: floor_mod(chunk_x, 4) as i64,
            z_residue: floor_mod(chunk_z, 4) as i64,
        }
    }

    fn matches(&self, low: u32) -> bool {
        let state = scramble(self.mix.wrapping_add(low as i64));
        let state = step(state);
        if (state >> 17) & 3 != self.x_residue {
            return false;
        }
        let state = step(state);
        (state >> 17) & 3 == self.z_residue
    }
}

/// Every 20-bit fragment consistent with all shipwreck constraints,
/// ascending. Without shipwreck constraints the whole space survives.
#[must_use]
pub fn shipwreck_low_bits(constraints: &[Constraint]) -> Vec<u32> {
    let checks: Vec<ResidueCheck> = constraints
        .iter()
        .filter_map(|c| match c {
            Constraint::Shipwreck(s) => Some(ResidueCheck::new(s.chunk_x, s.chunk_z)),
            _ => None,
        })
        .collect();
    if checks.is_empty() {
        return (0..LOW_SPAN).collect();
    }

    (0..LOW_SPAN)
        .into_par_iter()
        .filter(|&low| checks.iter().all(|c| c.matches(low)))
        .collect()
}
