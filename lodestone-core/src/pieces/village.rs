use crate::constraint::VillageBiome;
use rustc_hash::FxHashMap;
use std::sync::LazyLock;

/// A village start piece (the jigsaw root the rest of the village grows
/// from). One fountain plus meeting points, per biome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VillagePiece {
    PlainsFountain01,
    PlainsMeetingPoint1,
    PlainsMeetingPoint2,
    PlainsMeetingPoint3,
    DesertMeetingPoint1,
    DesertMeetingPoint2,
    DesertMeetingPoint3,
    SavannaMeetingPoint1,
    SavannaMeetingPoint2,
    SavannaMeetingPoint3,
    SavannaMeetingPoint4,
    TaigaMeetingPoint1,
    TaigaMeetingPoint2,
    SnowyMeetingPoint1,
    SnowyMeetingPoint2,
    SnowyMeetingPoint3,
}

static BY_NAME: LazyLock<FxHashMap<&'static str, VillagePiece>> = LazyLock::new(|| {
    ALL_PIECES.iter().map(|&p| (p.name(), p)).collect()
});

const ALL_PIECES: [VillagePiece; 16] = [
    VillagePiece::PlainsFountain01,
    VillagePiece::PlainsMeetingPoint1,
    VillagePiece::PlainsMeetingPoint2,
    VillagePiece::PlainsMeetingPoint3,
    VillagePiece::DesertMeetingPoint1,
    VillagePiece::DesertMeetingPoint2,
    VillagePiece::DesertMeetingPoint3,
    VillagePiece::SavannaMeetingPoint1,
    VillagePiece::SavannaMeetingPoint2,
    VillagePiece::SavannaMeetingPoint3,
    VillagePiece::SavannaMeetingPoint4,
    VillagePiece::TaigaMeetingPoint1,
    VillagePiece::TaigaMeetingPoint2,
    VillagePiece::SnowyMeetingPoint1,
    VillagePiece::SnowyMeetingPoint2,
    VillagePiece::SnowyMeetingPoint3,
];

impl VillagePiece {
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PlainsFountain01 => "plains_fountain_01",
            Self::PlainsMeetingPoint1 => "plains_meeting_point_1",
            Self::PlainsMeetingPoint2 => "plains_meeting_point_2",
            Self::PlainsMeetingPoint3 => "plains_meeting_point_3",
            Self::DesertMeetingPoint1 => "desert_meeting_point_1",
            Self::DesertMeetingPoint2 => "desert_meeting_point_2",
            Self::DesertMeetingPoint3 => "desert_meeting_point_3",
            Self::SavannaMeetingPoint1 => "savanna_meeting_point_1",
            Self::SavannaMeetingPoint2 => "savanna_meeting_point_2",
            Self::SavannaMeetingPoint3 => "savanna_meeting_point_3",
            Self::SavannaMeetingPoint4 => "savanna_meeting_point_4",
            Self::TaigaMeetingPoint1 => "taiga_meeting_point_1",
            Self::TaigaMeetingPoint2 => "taiga_meeting_point_2",
            Self::SnowyMeetingPoint1 => "snowy_meeting_point_1",
            Self::SnowyMeetingPoint2 => "snowy_meeting_point_2",
            Self::SnowyMeetingPoint3 => "snowy_meeting_point_3",
        }
    }

    /// Looks a piece up by its lower-case template name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        BY_NAME.get(name).copied()
    }
}

/// Maps one weighted draw `t` in `[0, biome.weight_total())` to the start
/// piece it selects and whether the village is abandoned. The intervals
/// mirror the game's weighted start pools; the top ~2% of each pool is the
/// zombie variant.
#[must_use]
pub const fn select_start_piece(biome: VillageBiome, t: i32) -> (VillagePiece, bool) {
    use VillagePiece as P;
    match biome {
        VillageBiome::Plains => match t {
            0..=49 => (P::PlainsFountain01, false),
            50..=99 => (P::PlainsMeetingPoint1, false),
            100..=149 => (P::PlainsMeetingPoint2, false),
            150..=199 => (P::PlainsMeetingPoint3, false),
            200 => (P::PlainsFountain01, true),
            201 => (P::PlainsMeetingPoint1, true),
            202 => (P::PlainsMeetingPoint2, true),
            _ => (P::PlainsMeetingPoint3, true),
        },
        VillageBiome::Desert => match t {
            0..=97 => (P::DesertMeetingPoint1, false),
            98..=195 => (P::DesertMeetingPoint2, false),
            196..=244 => (P::DesertMeetingPoint3, false),
            245..=246 => (P::DesertMeetingPoint1, true),
            247..=248 => (P::DesertMeetingPoint2, true),
            _ => (P::DesertMeetingPoint3, true),
        },
        VillageBiome::Savanna => match t {
            0..=99 => (P::SavannaMeetingPoint1, false),
            100..=149 => (P::SavannaMeetingPoint2, false),
            150..=299 => (P::SavannaMeetingPoint3, false),
            300..=449 => (P::SavannaMeetingPoint4, false),
            450..=451 => (P::SavannaMeetingPoint1, true),
            452 => (P::SavannaMeetingPoint2, true),
            453..=455 => (P::SavannaMeetingPoint3, true),
            _ => (P::SavannaMeetingPoint4, true),
        },
        VillageBiome::Taiga => match t {
            0..=48 => (P::TaigaMeetingPoint1, false),
            49..=97 => (P::TaigaMeetingPoint2, false),
            98 => (P::TaigaMeetingPoint1, true),
            _ => (P::TaigaMeetingPoint2, true),
        },
        VillageBiome::Snowy => match t {
            0..=99 => (P::SnowyMeetingPoint1, false),
            100..=149 => (P::SnowyMeetingPoint2, false),
            150..=299 => (P::SnowyMeetingPoint3, false),
            300..=301 => (P::SnowyMeetingPoint1, true),
            302 => (P::SnowyMeetingPoint2, true),
            _ => (P::SnowyMeetingPoint3, true),
        },
    }
}

#[cfg(test)]
mod test {
    use super::{VillagePiece, select_start_piece};
    use crate::constraint::VillageBiome;

    #[test]
    fn test_lookup_round_trip() {
        assert_eq!(
            VillagePiece::from_name("taiga_meeting_point_1"),
            Some(VillagePiece::TaigaMeetingPoint1)
        );
        assert_eq!(VillagePiece::from_name("plains_fountain_1"), None);
    }

    #[test]
    fn test_plains_intervals() {
        assert_eq!(
            select_start_piece(VillageBiome::Plains, 0),
            (VillagePiece::PlainsFountain01, false)
        );
        assert_eq!(
            select_start_piece(VillageBiome::Plains, 199),
            (VillagePiece::PlainsMeetingPoint3, false)
        );
        assert_eq!(
            select_start_piece(VillageBiome::Plains, 200),
            (VillagePiece::PlainsFountain01, true)
        );
        assert_eq!(
            select_start_piece(VillageBiome::Plains, 203),
            (VillagePiece::PlainsMeetingPoint3, true)
        );
    }

    #[test]
    fn test_desert_abandoned_boundary() {
        assert_eq!(
            select_start_piece(VillageBiome::Desert, 244),
            (VillagePiece::DesertMeetingPoint3, false)
        );
        assert_eq!(
            select_start_piece(VillageBiome::Desert, 245),
            (VillagePiece::DesertMeetingPoint1, true)
        );
        assert_eq!(
            select_start_piece(VillageBiome::Desert, 249),
            (VillagePiece::DesertMeetingPoint3, true)
        );
    }

    #[test]
    fn test_taiga_intervals() {
        assert_eq!(
            select_start_piece(VillageBiome::Taiga, 48),
            (VillagePiece::TaigaMeetingPoint1, false)
        );
        assert_eq!(
            select_start_piece(VillageBiome::Taiga, 98),
            (VillagePiece::TaigaMeetingPoint1, true)
        );
        assert_eq!(
            select_start_piece(VillageBiome::Taiga, 99),
            (VillagePiece::TaigaMeetingPoint2, true)
        );
    }

    #[test]
    fn test_savanna_and_snowy_tails() {
        assert_eq!(
            select_start_piece(VillageBiome::Savanna, 455),
            (VillagePiece::SavannaMeetingPoint3, true)
        );
        assert_eq!(
            select_start_piece(VillageBiome::Savanna, 458),
            (VillagePiece::SavannaMeetingPoint4, true)
        );
        assert_eq!(
            select_start_piece(VillageBiome::Snowy, 305),
            (VillagePiece::SnowyMeetingPoint3, true)
        );
    }
}
