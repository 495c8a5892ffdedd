//! Shared utilities for the lodestone workspace: the Java-compatible RNG
//! kernel that structure placement replays, and the integer math that goes
//! with it.
#![warn(
    clippy::all,
    clippy::pedantic,
    missing_docs,
    clippy::unwrap_used
)]
#![allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]

pub mod math;
pub mod random;

pub use random::JavaRandom;
