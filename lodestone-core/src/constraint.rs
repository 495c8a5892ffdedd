//! The observation model: one constraint per structure the player has
//! located in the world, carrying everything the verifiers replay.

use crate::pieces::{PortalPiece, ShipwreckPiece, VillagePiece};

/// A template rotation. Ordinals match the game's `Rotation` enum, which
/// is the value the property draws produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(i32)]
pub enum Rotation {
    None,
    Clockwise90,
    Clockwise180,
    CounterClockwise90,
}

impl Rotation {
    #[must_use]
    pub const fn ordinal(self) -> i32 {
        self as i32
    }

    /// Parses a rotation name, case-insensitively.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_ascii_uppercase().as_str() {
            "NONE" => Some(Self::None),
            "CLOCKWISE_90" => Some(Self::Clockwise90),
            "CLOCKWISE_180" => Some(Self::Clockwise180),
            "COUNTERCLOCKWISE_90" => Some(Self::CounterClockwise90),
            _ => None,
        }
    }
}

/// A template mirror. The portal draw only ever produces these two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mirror {
    None,
    FrontBack,
}

/// The biome category a ruined portal was found in. The category decides
/// how many floats the game burns before the template roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PortalBiome {
    Mountains = 1,
    Desert = 2,
    Jungle = 3,
}

impl PortalBiome {
    /// Parses a category id (`1`..`3`) or a biome word, case-insensitively.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "1" | "mountains" => Some(Self::Mountains),
            "2" | "desert" => Some(Self::Desert),
            "3" | "jungle" => Some(Self::Jungle),
            _ => None,
        }
    }
}

/// The biome a village was found in, which selects its start-piece pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum VillageBiome {
    Plains = 1,
    Snowy = 2,
    Taiga = 3,
    Savanna = 4,
    Desert = 5,
}

impl VillageBiome {
    /// Parses a biome id (`1`..`5`) or a biome word, case-insensitively.
    #[must_use]
    pub fn from_token(token: &str) -> Option<Self> {
        match token.to_ascii_lowercase().as_str() {
            "1" | "plains" => Some(Self::Plains),
            "2" | "snowy" => Some(Self::Snowy),
            "3" | "taiga" => Some(Self::Taiga),
            "4" | "savanna" => Some(Self::Savanna),
            "5" | "desert" => Some(Self::Desert),
            _ => None,
        }
    }

    /// Total weight of this biome's start pool; the bound fed to
    /// `nextInt` when the start piece is drawn.
    #[must_use]
    pub const fn pool_weight(self) -> i32 {
        match self {
            Self::Plains => 204,
            Self::Desert => 250,
            Self::Savanna => 459,
            Self::Taiga => 100,
            Self::Snowy => 306,
        }
    }
}

/// An observed shipwreck.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipwreckConstraint {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub rotation: Rotation,
    pub piece: ShipwreckPiece,
    pub beached: bool,
}

/// An observed ruined portal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalConstraint {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub rotation: Rotation,
    pub mirror: Mirror,
    pub piece: PortalPiece,
    pub biome: PortalBiome,
}

/// An observed village.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VillageConstraint {
    pub chunk_x: i32,
    pub chunk_z: i32,
    pub rotation: Rotation,
    pub start_piece: VillagePiece,
    pub biome: VillageBiome,
    pub abandoned: bool,
}

/// One observed structure. Verifiers dispatch on the variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Constraint {
    Shipwreck(ShipwreckConstraint),
    RuinedPortal(PortalConstraint),
    Village(VillageConstraint),
}

impl Constraint {
    #[must_use]
    pub const fn chunk_x(&self) -> i32 {
        match self {
            Self::Shipwreck(c) => c.chunk_x,
            Self::RuinedPortal(c) => c.chunk_x,
            Self::Village(c) => c.chunk_x,
        }
    }

    #[must_use]
    pub const fn chunk_z(&self) -> i32 {
        match self {
            Self::Shipwreck(c) => c.chunk_z,
            Self::RuinedPortal(c) => c.chunk_z,
            Self::Village(c) => c.chunk_z,
        }
    }

    #[must_use]
    pub const fn is_shipwreck(&self) -> bool {
        matches!(self, Self::Shipwreck(_))
    }

    #[must_use]
    pub const fn is_portal(&self) -> bool {
        matches!(self, Self::RuinedPortal(_))
    }
}

#[cfg(test)]
mod test {
    use super::{PortalBiome, Rotation, VillageBiome};

    #[test]
    fn test_rotation_names() {
        assert_eq!(Rotation::from_name("NONE"), Some(Rotation::None));
        assert_eq!(
            Rotation::from_name("counterclockwise_90"),
            Some(Rotation::CounterClockwise90)
        );
        assert_eq!(Rotation::from_name("CLOCKWISE_270"), None);
    }

    #[test]
    fn test_rotation_ordinals() {
        assert_eq!(Rotation::None.ordinal(), 0);
        assert_eq!(Rotation::CounterClockwise90.ordinal(), 3);
    }

    #[test]
    fn test_biome_tokens() {
        assert_eq!(PortalBiome::from_token("1"), Some(PortalBiome::Mountains));
        assert_eq!(PortalBiome::from_token("Jungle"), Some(PortalBiome::Jungle));
        assert_eq!(PortalBiome::from_token("4"), None);

        assert_eq!(VillageBiome::from_token("3"), Some(VillageBiome::Taiga));
        assert_eq!(VillageBiome::from_token("SNOWY"), Some(VillageBiome::Snowy));
        assert_eq!(VillageBiome::from_token("6"), None);
    }
}
