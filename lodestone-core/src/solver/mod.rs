//! Search strategies.
//!
//! All three solvers share one contract: enumerate candidate structure
//! seeds, run every verifier against each, and return the survivors. They
//! differ only in how the candidate space is generated, so the driver
//! picks one through [`select_solver`] and calls it blind.

mod brute_force;
mod pillar;
pub mod prefilter;
mod reversing;

pub use brute_force::BruteForceSolver;
pub use pillar::PillarSolver;
pub use reversing::ReversingSolver;

use crate::constraint::Constraint;
use enum_dispatch::enum_dispatch;
use tracing::{info, warn};

/// Capacity of the result buffer. More hits than this are dropped with a
/// warning; everything kept is still written out.
pub const MAX_RESULTS: usize = 20_000_000;

/// The most constraints the reversing strategy is worth setting up for.
const REVERSING_LIMIT: usize = 10;

/// A seed search that runs to completion and reports every survivor.
#[enum_dispatch]
pub trait Solver: Send + Sync {
    /// Runs the search. Emission order is unspecified; the driver sorts.
    fn solve(&self) -> Vec<i64>;
}

/// The available search strategies.
#[enum_dispatch(Solver)]
pub enum SolverKind {
    Reversing(ReversingSolver),
    BruteForce(BruteForceSolver),
    Pillar(PillarSolver),
}

/// Inspects the input and builds the right strategy.
///
/// With a pillar seed the derived 2^32 space is searched directly. Without
/// one, the low-20-bit shipwreck pre-filter runs first; an anchorable
/// constraint set then gets the reversing solver, anything else the brute
/// force over the remaining upper bits.
pub fn select_solver(
    constraints: Vec<Constraint>,
    pillar_seed: Option<u32>,
) -> Result<SolverKind, &'static str> {
    if let Some(pillar) = pillar_seed {
        if constraints.is_empty() {
            return Err("a pillar seed needs at least one constraint to verify against");
        }
        return Ok(PillarSolver::new(pillar, constraints).into());
    }
    if constraints.is_empty() {
        return Err("no constraints to search with");
    }

    let low_bits = prefilter::shipwreck_low_bits(&constraints);
    info!(
        "{} of {} low-bit fragments survive the shipwreck pre-filter",
        low_bits.len(),
        prefilter::LOW_SPAN
    );

    let has_anchor = constraints.iter().any(|c| c.is_shipwreck() || c.is_portal());
    if has_anchor && constraints.len() <= REVERSING_LIMIT {
        Ok(ReversingSolver::new(constraints, low_bits).into())
    } else {
        Ok(BruteForceSolver::new(constraints, low_bits).into())
    }
}

/// Applies the result-buffer capacity on the way out of a solver.
fn cap_results(mut seeds: Vec<i64>) -> Vec<i64> {
    if seeds.len() > MAX_RESULTS {
        warn!(
            "found {} seeds but the result buffer holds {MAX_RESULTS}, truncating",
            seeds.len()
        );
        seeds.truncate(MAX_RESULTS);
    }
    seeds
}
