//! Reversing solver.
//!
//! Brute force spends 2^28 verifier runs per surviving low-20 fragment.
//! This solver instead inverts the anchor's placement algebra: the
//! fragment fixes the low bits of both placement states, the observed
//! chunk fixes each draw modulo the placement bound, and together those
//! leave a strided set of candidate second-draw values. Each candidate is
//! completed to a full 48-bit state from the known low bits, stepped back
//! through the LCG, checked against the first draw, and unmixed into the
//! seed that produced it.

use crate::constraint::Constraint;
use crate::solver::Solver;
use crate::verify::{self, RUINED_PORTAL, SHIPWRECK, StructureConfig};
use lodestone_utils::math::floor_div;
use lodestone_utils::random::{LCG_MASK, LCG_XOR, region_seed_mix, scramble, step, step_back};
use rayon::prelude::*;
use std::sync::atomic::{AtomicUsize, Ordering};
use tracing::info;

/// Placement geometry of the anchor constraint, precomputed.
struct Anchor {
    config: StructureConfig,
    region_x: i32,
    region_z: i32,
    /// Expected x draw, `chunk_x − region_x·spacing`.
    expect_x: i32,
    /// Expected z draw.
    expect_z: i32,
}

pub struct ReversingSolver {
    constraints: Vec<Constraint>,
    anchor: Anchor,
    low_bits: Vec<u32>,
}

impl ReversingSolver {
    /// Anchors on the first portal, else the first shipwreck.
    ///
    /// # Panics
    /// Panics when `constraints` holds neither; the strategy selector
    /// never hands such a set over.
    #[must_use]
    pub fn new(constraints: Vec<Constraint>, low_bits: Vec<u32>) -> Self {
        let anchor = constraints
            .iter()
            .find(|c| c.is_portal())
            .or_else(|| constraints.iter().find(|c| c.is_shipwreck()))
            .expect("reversing needs a portal or shipwreck anchor");

        let config = if anchor.is_portal() { RUINED_PORTAL } else { SHIPWRECK };
        let (chunk_x, chunk_z) = (anchor.chunk_x(), anchor.chunk_z());
        let region_x = floor_div(chunk_x, config.spacing);
        let region_z = floor_div(chunk_z, config.spacing);
        let anchor = Anchor {
            config,
            region_x,
            region_z,
            expect_x: chunk_x - region_x * config.spacing,
            expect_z: chunk_z - region_z * config.spacing,
        };

        Self {
            constraints,
            anchor,
            low_bits,
        }
    }

    /// Every seed with these low 20 bits that places the anchor at its
    /// observed chunk. Property draws are not checked here.
    fn anchor_seeds_for_low(&self, low: u32) -> Vec<i64> {
        let anchor = &self.anchor;
        let bound = anchor.config.offset() as i64;
        // Candidate second draws repeat with this stride: they are pinned
        // mod 8 by the known state bits and mod `bound` by the chunk.
        let stride = lcm(8, bound);

        let mix = region_seed_mix(0, anchor.region_x, anchor.region_z, anchor.config.salt);
        let low_state = scramble(mix.wrapping_add(low as i64));
        let low_state2 = step(step(low_state));
        let known_low17 = low_state2 & 0x1_FFFF;
        let known_low3 = (low_state2 >> 17) & 7;

        let expect_x = anchor.expect_x as i64;
        let expect_z = anchor.expect_z as i64;

        let mut seeds = Vec::new();
        let mut start = known_low3;
        while start < known_low3 + stride {
            if start % bound == expect_z {
                let mut draw2 = start;
                while draw2 < 1_i64 << 31 {
                    if let Some(seed) = self.complete(draw2, known_low17, low) {
                        seeds.push(seed);
                    }
                    draw2 += stride;
                }
            }
            start += 8;
        }
        seeds
    }

    /// Completes one candidate second draw into a seed, or rejects it.
    fn complete(&self, draw2: i64, known_low17: i64, low: u32) -> Option<i64> {
        let anchor = &self.anchor;
        let bound = anchor.config.offset();

        // Java's nextInt redraws when the rejection test underflows; such
        // a draw would not have been the one placement used.
        if !draw_is_final(draw2 as i32, anchor.expect_z, bound) {
            return None;
        }

        let state2 = (draw2 << 17) | known_low17;
        let state1 = step_back(state2);
        let draw1 = state1 >> 17;
        if draw1 % bound as i64 != anchor.expect_x as i64 {
            return None;
        }
        if !draw_is_final(draw1 as i32, anchor.expect_x, bound) {
            return None;
        }

        let state0 = step_back(state1);
        let mixed = (state0 ^ LCG_XOR) & LCG_MASK;
        let mix = region_seed_mix(0, anchor.region_x, anchor.region_z, anchor.config.salt);
        let seed = mixed.wrapping_sub(mix) & LCG_MASK;
        debug_assert_eq!(seed & 0xF_FFFF, low as i64);
        Some(seed)
    }
}

impl Solver for ReversingSolver {
    fn solve(&self) -> Vec<i64> {
        info!(
            "reversing the anchor over {} low-bit fragments",
            self.low_bits.len()
        );
        let done = AtomicUsize::new(0);
        let seeds: Vec<i64> = self
            .low_bits
            .par_iter()
            .flat_map_iter(|&low| {
                let hits: Vec<i64> = self
                    .anchor_seeds_for_low(low)
                    .into_iter()
                    .filter(|&seed| verify::check_all(seed, &self.constraints))
                    .collect();
                let n = done.fetch_add(1, Ordering::Relaxed) + 1;
                if n % 4096 == 0 {
                    info!("{n}/{} fragments reversed", self.low_bits.len());
                }
                hits
            })
            .collect();
        super::cap_results(seeds)
    }
}

/// Whether `draw` is the value `nextInt(bound)` actually returns, rather
/// than one the rejection loop throws away.
fn draw_is_final(draw: i32, expected: i32, bound: i32) -> bool {
    draw.wrapping_sub(expected).wrapping_add(bound - 1) >= 0
}

const fn gcd(a: i64, b: i64) -> i64 {
    if b == 0 { a } else { gcd(b, a % b) }
}

const fn lcm(a: i64, b: i64) -> i64 {
    a / gcd(a, b) * b
}

#[cfg(test)]
mod test {
    use super::ReversingSolver;
    use crate::constraint::{Constraint, PortalBiome};
    use crate::solver::Solver;
    use crate::verify::{RUINED_PORTAL, check_all, check_placement, observe_portal, observe_shipwreck};

    const SEED: i64 = 0x6A1F_93C4_08D5 & 0xFFFF_FFFF_FFFF;

    #[test]
    fn test_enumeration_is_complete_for_anchor_placement() {
        let portal = observe_portal(SEED, 0, 0, PortalBiome::Desert);
        let low = (SEED & 0xF_FFFF) as u32;
        let solver = ReversingSolver::new(vec![Constraint::RuinedPortal(portal)], vec![low]);

        let enumerated = solver.anchor_seeds_for_low(low);
        assert!(enumerated.contains(&SEED));

        // Cross-check a slice of the upper-bit space by brute force: every
        // seed that places the anchor must have been enumerated.
        for upper in 0i64..4096 {
            let seed = (upper << 20) | low as i64;
            if check_placement(seed, portal.chunk_x, portal.chunk_z, &RUINED_PORTAL) {
                assert!(enumerated.contains(&seed), "missing seed {seed}");
            }
        }
    }

    #[test]
    fn test_enumerated_seeds_place_the_anchor() {
        let portal = observe_portal(SEED, 0, 0, PortalBiome::Desert);
        let low = (SEED & 0xF_FFFF) as u32;
        let solver = ReversingSolver::new(vec![Constraint::RuinedPortal(portal)], vec![low]);

        let enumerated = solver.anchor_seeds_for_low(low);
        for &seed in enumerated.iter().take(64) {
            assert!(check_placement(seed, portal.chunk_x, portal.chunk_z, &RUINED_PORTAL));
            assert_eq!(seed & 0xF_FFFF, SEED & 0xF_FFFF);
        }
    }

    #[test]
    fn test_solve_finds_the_generating_seed() {
        let portal = observe_portal(SEED, 0, 0, PortalBiome::Mountains);
        let constraints = vec![Constraint::RuinedPortal(portal)];
        let low = (SEED & 0xF_FFFF) as u32;
        let solver = ReversingSolver::new(constraints.clone(), vec![low]);

        let hits = solver.solve();
        assert!(hits.contains(&SEED));
        for &seed in hits.iter().take(64) {
            assert!(check_all(seed, &constraints));
        }
    }

    #[test]
    fn test_shipwreck_anchor_finds_the_generating_seed() {
        let wreck = observe_shipwreck(SEED, -1, 2, false);
        let constraints = vec![Constraint::Shipwreck(wreck)];
        let low = (SEED & 0xF_FFFF) as u32;
        let solver = ReversingSolver::new(constraints.clone(), vec![low]);

        let hits = solver.solve();
        assert!(hits.contains(&SEED), "shipwreck anchor lost the seed");
    }
}
