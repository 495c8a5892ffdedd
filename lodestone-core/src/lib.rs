//! # lodestone-core
//!
//! The structure-seed recovery engine: the constraint model, the piece
//! registries, the placement/property verifiers, and the parallel search
//! strategies that enumerate candidate 48-bit structure seeds.
#![warn(clippy::all, clippy::pedantic, clippy::unwrap_used)]
#![allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::module_name_repetitions
)]

pub mod constraint;
pub mod pieces;
pub mod solver;
pub mod verify;

pub use constraint::Constraint;
pub use solver::{Solver, SolverKind, select_solver};
