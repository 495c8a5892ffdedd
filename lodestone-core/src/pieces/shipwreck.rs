use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// A shipwreck template. The ordinal order matches the game's template
/// arrays; the drawn index means nothing outside these tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShipwreckPiece {
    WithMast,
    UpsidedownFull,
    UpsidedownFronthalf,
    UpsidedownBackhalf,
    SidewaysFull,
    SidewaysFronthalf,
    SidewaysBackhalf,
    RightsideupFull,
    RightsideupFronthalf,
    RightsideupBackhalf,
    WithMastDegraded,
    UpsidedownFullDegraded,
    UpsidedownFronthalfDegraded,
    UpsidedownBackhalfDegraded,
    SidewaysFullDegraded,
    SidewaysFronthalfDegraded,
    SidewaysBackhalfDegraded,
    RightsideupFullDegraded,
    RightsideupFronthalfDegraded,
    RightsideupBackhalfDegraded,
}

/// Templates an ocean shipwreck picks from with `nextInt(20)`.
pub const OCEAN_PIECES: [ShipwreckPiece; 20] = [
    ShipwreckPiece::WithMast,
    ShipwreckPiece::UpsidedownFull,
    ShipwreckPiece::UpsidedownFronthalf,
    ShipwreckPiece::UpsidedownBackhalf,
    ShipwreckPiece::SidewaysFull,
    ShipwreckPiece::SidewaysFronthalf,
    ShipwreckPiece::SidewaysBackhalf,
    ShipwreckPiece::RightsideupFull,
    ShipwreckPiece::RightsideupFronthalf,
    ShipwreckPiece::RightsideupBackhalf,
    ShipwreckPiece::WithMastDegraded,
    ShipwreckPiece::UpsidedownFullDegraded,
    ShipwreckPiece::UpsidedownFronthalfDegraded,
    ShipwreckPiece::UpsidedownBackhalfDegraded,
    ShipwreckPiece::SidewaysFullDegraded,
    ShipwreckPiece::SidewaysFronthalfDegraded,
    ShipwreckPiece::SidewaysBackhalfDegraded,
    ShipwreckPiece::RightsideupFullDegraded,
    ShipwreckPiece::RightsideupFronthalfDegraded,
    ShipwreckPiece::RightsideupBackhalfDegraded,
];

/// Templates a beached shipwreck picks from with `nextInt(11)`.
pub const BEACHED_PIECES: [ShipwreckPiece; 11] = [
    ShipwreckPiece::WithMast,
    ShipwreckPiece::SidewaysFull,
    ShipwreckPiece::SidewaysFronthalf,
    ShipwreckPiece::SidewaysBackhalf,
    ShipwreckPiece::RightsideupFull,
    ShipwreckPiece::RightsideupFronthalf,
    ShipwreckPiece::RightsideupBackhalf,
    ShipwreckPiece::WithMastDegraded,
    ShipwreckPiece::RightsideupFullDegraded,
    ShipwreckPiece::RightsideupFronthalfDegraded,
    ShipwreckPiece::RightsideupBackhalfDegraded,
];

static BY_NAME: LazyLock<FxHashMap<&'static str, ShipwreckPiece>> = LazyLock::new(|| {
    OCEAN_PIECES.iter().map(|&p| (p.name(), p)).collect()
});

impl ShipwreckPiece {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::WithMast => "with_mast",
            Self::UpsidedownFull => "upsidedown_full",
            Self::UpsidedownFronthalf => "upsidedown_fronthalf",
            Self::UpsidedownBackhalf => "upsidedown_backhalf",
            Self::SidewaysFull => "sideways_full",
            Self::SidewaysFronthalf => "sideways_fronthalf",
            Self::SidewaysBackhalf => "sideways_backhalf",
            Self::RightsideupFull => "rightsideup_full",
            Self::RightsideupFronthalf => "rightsideup_fronthalf",
            Self::RightsideupBackhalf => "rightsideup_backhalf",
            Self::WithMastDegraded => "with_mast_degraded",
            Self::UpsidedownFullDegraded => "upsidedown_full_degraded",
            Self::UpsidedownFronthalfDegraded => "upsidedown_fronthalf_degraded",
            Self::UpsidedownBackhalfDegraded => "upsidedown_backhalf_degraded",
            Self::SidewaysFullDegraded => "sideways_full_degraded",
            Self::SidewaysFronthalfDegraded => "sideways_fronthalf_degraded",
            Self::SidewaysBackhalfDegraded => "sideways_backhalf_degraded",
            Self::RightsideupFullDegraded => "rightsideup_full_degraded",
            Self::RightsideupFronthalfDegraded => "rightsideup_fronthalf_degraded",
            Self::RightsideupBackhalfDegraded => "rightsideup_backhalf_degraded",
        }
    }

    /// Looks a piece up by its lower-case template name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }
}
