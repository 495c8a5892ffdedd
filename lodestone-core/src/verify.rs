//! Placement and property verification.
//!
//! Each check replays exactly the draws the game makes for one structure:
//! the region placement draws first, then the per-chunk property draws off
//! the carver seed. A seed is accepted only when every drawn value matches
//! the observation. The `observe_*` functions run the same replay forward
//! to answer "what would this seed generate here".

use crate::constraint::{
    Constraint, Mirror, PortalBiome, PortalConstraint, Rotation, ShipwreckConstraint,
    VillageBiome, VillageConstraint,
};
use crate::pieces::{
    BEACHED_PIECES, GIANT_PORTAL_PIECES, OCEAN_PIECES, PORTAL_PIECES, select_start_piece,
};
use lodestone_utils::JavaRandom;
use lodestone_utils::math::floor_div;

const ROTATIONS: [Rotation; 4] = [
    Rotation::None,
    Rotation::Clockwise90,
    Rotation::Clockwise180,
    Rotation::CounterClockwise90,
];

/// Region geometry and salt for one structure kind.
#[derive(Debug, Clone, Copy)]
pub struct StructureConfig {
    /// Region edge length in chunks.
    pub spacing: i32,
    /// Minimum distance from the region's far edge, in chunks.
    pub separation: i32,
    /// Per-structure region seed salt.
    pub salt: i32,
}

impl StructureConfig {
    /// The bound of each placement draw.
    #[must_use]
    pub const fn offset(&self) -> i32 {
        self.spacing - self.separation
    }
}

pub const SHIPWRECK: StructureConfig = StructureConfig {
    spacing: 24,
    separation: 4,
    salt: 165_745_295,
};

pub const RUINED_PORTAL: StructureConfig = StructureConfig {
    spacing: 40,
    separation: 15,
    salt: 34_222_645,
};

pub const VILLAGE: StructureConfig = StructureConfig {
    spacing: 34,
    separation: 8,
    salt: 10_387_312,
};

/// Replays the two placement draws for a region and returns the chunk the
/// structure lands in.
#[must_use]
pub fn replay_placement(
    seed: i64,
    region_x: i32,
    region_z: i32,
    config: &StructureConfig,
) -> (i32, i32) {
    let mut rand = JavaRandom::with_region_seed(seed, region_x, region_z, config.salt);
    let offset = config.offset();
    let x = region_x * config.spacing + rand.next_i32_bounded(offset);
    let z = region_z * config.spacing + rand.next_i32_bounded(offset);
    (x, z)
}

/// True when `seed` places a structure of this kind exactly at
/// `(chunk_x, chunk_z)`. The x draw comes before the z draw; the game
/// never swaps them.
#[must_use]
pub fn check_placement(seed: i64, chunk_x: i32, chunk_z: i32, config: &StructureConfig) -> bool {
    let region_x = floor_div(chunk_x, config.spacing);
    let region_z = floor_div(chunk_z, config.spacing);
    replay_placement(seed, region_x, region_z, config) == (chunk_x, chunk_z)
}

/// The shipwreck `seed` generates in the given region.
#[must_use]
pub fn observe_shipwreck(
    seed: i64,
    region_x: i32,
    region_z: i32,
    beached: bool,
) -> ShipwreckConstraint {
    let (chunk_x, chunk_z) = replay_placement(seed, region_x, region_z, &SHIPWRECK);
    let mut rand = JavaRandom::with_carver_seed(seed, chunk_x, chunk_z);
    let rotation = ROTATIONS[rand.next_i32_bounded(4) as usize];
    let piece = if beached {
        BEACHED_PIECES[rand.next_i32_bounded(11) as usize]
    } else {
        OCEAN_PIECES[rand.next_i32_bounded(20) as usize]
    };
    ShipwreckConstraint {
        chunk_x,
        chunk_z,
        rotation,
        piece,
        beached,
    }
}

/// The ruined portal `seed` generates in the given region.
#[must_use]
pub fn observe_portal(
    seed: i64,
    region_x: i32,
    region_z: i32,
    biome: PortalBiome,
) -> PortalConstraint {
    let (chunk_x, chunk_z) = replay_placement(seed, region_x, region_z, &RUINED_PORTAL);
    let mut rand = JavaRandom::with_carver_seed(seed, chunk_x, chunk_z);
    burn_biome_draws(&mut rand, biome);
    let piece = if rand.next_f32() < 0.05 {
        GIANT_PORTAL_PIECES[rand.next_i32_bounded(3) as usize]
    } else {
        PORTAL_PIECES[rand.next_i32_bounded(10) as usize]
    };
    let rotation = ROTATIONS[rand.next_i32_bounded(4) as usize];
    let mirror = if rand.next_f32() < 0.5 {
        Mirror::None
    } else {
        Mirror::FrontBack
    };
    PortalConstraint {
        chunk_x,
        chunk_z,
        rotation,
        mirror,
        piece,
        biome,
    }
}

/// The village `seed` generates in the given region.
#[must_use]
pub fn observe_village(
    seed: i64,
    region_x: i32,
    region_z: i32,
    biome: VillageBiome,
) -> VillageConstraint {
    let (chunk_x, chunk_z) = replay_placement(seed, region_x, region_z, &VILLAGE);
    let mut rand = JavaRandom::with_carver_seed(seed, chunk_x, chunk_z);
    let rotation = ROTATIONS[rand.next(2) as usize];
    let t = rand.next_i32_bounded(biome.pool_weight());
    let (start_piece, abandoned) = select_start_piece(biome, t);
    VillageConstraint {
        chunk_x,
        chunk_z,
        rotation,
        start_piece,
        biome,
        abandoned,
    }
}

// Draws burned before the portal template roll; how many depends on the
// biome category the portal generated in.
fn burn_biome_draws(rand: &mut JavaRandom, biome: PortalBiome) {
    match biome {
        PortalBiome::Desert => {}
        PortalBiome::Jungle => {
            rand.next_f32();
        }
        PortalBiome::Mountains => {
            if rand.next_f32() >= 0.5 {
                rand.next_f32();
            }
        }
    }
}

#[must_use]
pub fn check_shipwreck(seed: i64, c: &ShipwreckConstraint) -> bool {
    if !check_placement(seed, c.chunk_x, c.chunk_z, &SHIPWRECK) {
        return false;
    }
    let mut rand = JavaRandom::with_carver_seed(seed, c.chunk_x, c.chunk_z);
    if rand.next_i32_bounded(4) != c.rotation.ordinal() {
        return false;
    }
    let piece = if c.beached {
        BEACHED_PIECES[rand.next_i32_bounded(11) as usize]
    } else {
        OCEAN_PIECES[rand.next_i32_bounded(20) as usize]
    };
    piece == c.piece
}

#[must_use]
pub fn check_portal(seed: i64, c: &PortalConstraint) -> bool {
    if !check_placement(seed, c.chunk_x, c.chunk_z, &RUINED_PORTAL) {
        return false;
    }
    let mut rand = JavaRandom::with_carver_seed(seed, c.chunk_x, c.chunk_z);
    burn_biome_draws(&mut rand, c.biome);

    let piece = if rand.next_f32() < 0.05 {
        GIANT_PORTAL_PIECES[rand.next_i32_bounded(3) as usize]
    } else {
        PORTAL_PIECES[rand.next_i32_bounded(10) as usize]
    };
    if piece != c.piece {
        return false;
    }
    if rand.next_i32_bounded(4) != c.rotation.ordinal() {
        return false;
    }
    let mirror = if rand.next_f32() < 0.5 {
        Mirror::None
    } else {
        Mirror::FrontBack
    };
    mirror == c.mirror
}

#[must_use]
pub fn check_village(seed: i64, c: &VillageConstraint) -> bool {
    if !check_placement(seed, c.chunk_x, c.chunk_z, &VILLAGE) {
        return false;
    }
    let mut rand = JavaRandom::with_carver_seed(seed, c.chunk_x, c.chunk_z);

    // Villages take their rotation from next(2), not nextInt(4).
    if rand.next(2) != c.rotation.ordinal() {
        return false;
    }
    let t = rand.next_i32_bounded(c.biome.pool_weight());
    let (piece, abandoned) = select_start_piece(c.biome, t);
    piece == c.start_piece && abandoned == c.abandoned
}

/// Verifies one constraint against a candidate seed.
#[must_use]
pub fn check(seed: i64, constraint: &Constraint) -> bool {
    match constraint {
        Constraint::Shipwreck(c) => check_shipwreck(seed, c),
        Constraint::RuinedPortal(c) => check_portal(seed, c),
        Constraint::Village(c) => check_village(seed, c),
    }
}

/// Verifies every constraint against a candidate seed.
#[must_use]
pub fn check_all(seed: i64, constraints: &[Constraint]) -> bool {
    constraints.iter().all(|c| check(seed, c))
}
