use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// A ruined portal template, ten regular and three giant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PortalPiece {
    Portal1,
    Portal2,
    Portal3,
    Portal4,
    Portal5,
    Portal6,
    Portal7,
    Portal8,
    Portal9,
    Portal10,
    GiantPortal1,
    GiantPortal2,
    GiantPortal3,
}

/// Regular templates, indexed by `nextInt(10)`.
pub const PORTAL_PIECES: [PortalPiece; 10] = [
    PortalPiece::Portal1,
    PortalPiece::Portal2,
    PortalPiece::Portal3,
    PortalPiece::Portal4,
    PortalPiece::Portal5,
    PortalPiece::Portal6,
    PortalPiece::Portal7,
    PortalPiece::Portal8,
    PortalPiece::Portal9,
    PortalPiece::Portal10,
];

/// Giant templates, indexed by `nextInt(3)` after the 5% roll.
pub const GIANT_PORTAL_PIECES: [PortalPiece; 3] = [
    PortalPiece::GiantPortal1,
    PortalPiece::GiantPortal2,
    PortalPiece::GiantPortal3,
];

static BY_NAME: LazyLock<FxHashMap<&'static str, PortalPiece>> = LazyLock::new(|| {
    PORTAL_PIECES
        .iter()
        .chain(GIANT_PORTAL_PIECES.iter())
        .map(|&p| (p.name(), p))
        .collect()
});

impl PortalPiece {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Portal1 => "portal_1",
            Self::Portal2 => "portal_2",
            Self::Portal3 => "portal_3",
            Self::Portal4 => "portal_4",
            Self::Portal5 => "portal_5",
            Self::Portal6 => "portal_6",
            Self::Portal7 => "portal_7",
            Self::Portal8 => "portal_8",
            Self::Portal9 => "portal_9",
            Self::Portal10 => "portal_10",
            Self::GiantPortal1 => "giant_portal_1",
            Self::GiantPortal2 => "giant_portal_2",
            Self::GiantPortal3 => "giant_portal_3",
        }
    }

    /// Looks a piece up by its lower-case template name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }

    #[must_use]
    pub const fn is_giant(self) -> bool {
        matches!(
            self,
            Self::GiantPortal1 | Self::GiantPortal2 | Self::GiantPortal3
        )
    }
}
