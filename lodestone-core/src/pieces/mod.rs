//! Structure piece registries.
//!
//! Each structure kind owns an ordinal-indexed table (the order the game
//! draws from) and a name lookup for the text parser.

mod portal;
mod shipwreck;
mod village;

pub use portal::{GIANT_PORTAL_PIECES, PORTAL_PIECES, PortalPiece};
pub use shipwreck::{BEACHED_PIECES, OCEAN_PIECES, ShipwreckPiece};
pub use village::{VillagePiece, select_start_piece};
