//! Constraint file parsing.
//!
//! One observation per line, comma-separated, with the structure kind
//! inferred by trying each parser in registration order. A lone integer
//! token is the pillar seed. Lines that fit nothing are logged and
//! skipped so one typo does not throw away a whole session's notes.

use anyhow::Context;
use lodestone_core::Constraint;
use lodestone_core::constraint::{
    Mirror, PortalBiome, PortalConstraint, Rotation, ShipwreckConstraint, VillageBiome,
    VillageConstraint,
};
use lodestone_core::pieces::{PortalPiece, ShipwreckPiece, VillagePiece};
use std::fs;
use std::path::Path;
use tracing::warn;

pub struct ParsedInput {
    pub constraints: Vec<Constraint>,
    pub pillar_seed: Option<u32>,
}

pub fn parse_file(path: &Path) -> anyhow::Result<ParsedInput> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read {}", path.display()))?;
    Ok(parse_content(&text))
}

pub fn parse_content(text: &str) -> ParsedInput {
    let mut constraints = Vec::new();
    let mut pillar_seed = None;

    for (index, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        if !line.contains(',') {
            match line.parse::<u32>() {
                Ok(pillar) => pillar_seed = Some(pillar),
                Err(_) => warn!("line {}: not a constraint or pillar seed: {line}", index + 1),
            }
            continue;
        }

        let fields: Vec<&str> = line.split(',').map(str::trim).collect();
        match parse_constraint(&fields) {
            Some(constraint) => constraints.push(constraint),
            None => warn!("line {}: malformed constraint, skipping: {line}", index + 1),
        }
    }

    ParsedInput {
        constraints,
        pillar_seed,
    }
}

fn parse_constraint(fields: &[&str]) -> Option<Constraint> {
    parse_shipwreck(fields)
        .or_else(|| parse_portal(fields))
        .or_else(|| parse_village(fields))
}

/// The leading `chunk_x, chunk_z, ROTATION` triple every kind shares.
fn parse_common(fields: &[&str]) -> Option<(i32, i32, Rotation)> {
    let chunk_x = fields.first()?.parse().ok()?;
    let chunk_z = fields.get(1)?.parse().ok()?;
    let rotation = Rotation::from_name(fields.get(2)?)?;
    Some((chunk_x, chunk_z, rotation))
}

fn parse_yes_no(token: &str) -> Option<bool> {
    match token.to_ascii_lowercase().as_str() {
        "yes" => Some(true),
        "no" => Some(false),
        _ => None,
    }
}

fn parse_shipwreck(fields: &[&str]) -> Option<Constraint> {
    if fields.len() != 5 {
        return None;
    }
    let (chunk_x, chunk_z, rotation) = parse_common(fields)?;
    let piece = ShipwreckPiece::from_name(fields[3])?;
    let beached = match fields[4] {
        "Ocean" => false,
        "Beached" => true,
        _ => return None,
    };
    Some(Constraint::Shipwreck(ShipwreckConstraint {
        chunk_x,
        chunk_z,
        rotation,
        piece,
        beached,
    }))
}

fn parse_portal(fields: &[&str]) -> Option<Constraint> {
    if fields.len() != 6 {
        return None;
    }
    let (chunk_x, chunk_z, rotation) = parse_common(fields)?;
    let piece = PortalPiece::from_name(fields[3])?;
    let mirror = if parse_yes_no(fields[4])? {
        Mirror::FrontBack
    } else {
        Mirror::None
    };
    let biome = PortalBiome::from_token(fields[5])?;
    Some(Constraint::RuinedPortal(PortalConstraint {
        chunk_x,
        chunk_z,
        rotation,
        mirror,
        piece,
        biome,
    }))
}

fn parse_village(fields: &[&str]) -> Option<Constraint> {
    if fields.len() != 5 && fields.len() != 6 {
        return None;
    }
    let (chunk_x, chunk_z, rotation) = parse_common(fields)?;
    let start_piece = VillagePiece::from_name(fields[3])?;
    let biome = VillageBiome::from_token(fields[4])?;
    let abandoned = match fields.get(5) {
        Some(token) => parse_yes_no(token)?,
        None => false,
    };
    Some(Constraint::Village(VillageConstraint {
        chunk_x,
        chunk_z,
        rotation,
        start_piece,
        biome,
        abandoned,
    }))
}

#[cfg(test)]
mod test {
    use super::parse_content;
    use lodestone_core::Constraint;
    use lodestone_core::constraint::{Mirror, PortalBiome, Rotation, VillageBiome};
    use lodestone_core::pieces::{PortalPiece, ShipwreckPiece, VillagePiece};

    #[test]
    fn test_parses_shipwreck_line() {
        let parsed = parse_content("-54, -14, COUNTERCLOCKWISE_90, sideways_fronthalf, Ocean\n");
        assert_eq!(parsed.constraints.len(), 1);
        let Constraint::Shipwreck(c) = parsed.constraints[0] else {
            panic!("expected a shipwreck");
        };
        assert_eq!((c.chunk_x, c.chunk_z), (-54, -14));
        assert_eq!(c.rotation, Rotation::CounterClockwise90);
        assert_eq!(c.piece, ShipwreckPiece::SidewaysFronthalf);
        assert!(!c.beached);
    }

    #[test]
    fn test_parses_beached_shipwreck_line() {
        let parsed = parse_content("112, 89, CLOCKWISE_180, rightsideup_full_degraded, Beached");
        let Constraint::Shipwreck(c) = parsed.constraints[0] else {
            panic!("expected a shipwreck");
        };
        assert!(c.beached);
        assert_eq!(c.piece, ShipwreckPiece::RightsideupFullDegraded);
    }

    #[test]
    fn test_parses_portal_line() {
        let parsed = parse_content("52, 17, CLOCKWISE_180, portal_1, yes, 1");
        let Constraint::RuinedPortal(c) = parsed.constraints[0] else {
            panic!("expected a portal");
        };
        assert_eq!((c.chunk_x, c.chunk_z), (52, 17));
        assert_eq!(c.piece, PortalPiece::Portal1);
        assert_eq!(c.mirror, Mirror::FrontBack);
        assert_eq!(c.biome, PortalBiome::Mountains);
    }

    #[test]
    fn test_parses_village_line() {
        let parsed = parse_content("55, -9, CLOCKWISE_180, taiga_meeting_point_1, 3, no");
        let Constraint::Village(c) = parsed.constraints[0] else {
            panic!("expected a village");
        };
        assert_eq!(c.start_piece, VillagePiece::TaigaMeetingPoint1);
        assert_eq!(c.biome, VillageBiome::Taiga);
        assert!(!c.abandoned);
    }

    #[test]
    fn test_village_abandoned_defaults_to_no() {
        let parsed = parse_content("0, 0, NONE, plains_fountain_01, 1");
        let Constraint::Village(c) = parsed.constraints[0] else {
            panic!("expected a village");
        };
        assert!(!c.abandoned);
    }

    #[test]
    fn test_biome_words_are_case_insensitive() {
        let parsed = parse_content(
            "0, 0, none, snowy_meeting_point_2, SNOWY, YES\n5, 5, NONE, portal_3, No, Jungle",
        );
        assert_eq!(parsed.constraints.len(), 2);
        let Constraint::Village(v) = parsed.constraints[0] else {
            panic!("expected a village");
        };
        assert!(v.abandoned);
        let Constraint::RuinedPortal(p) = parsed.constraints[1] else {
            panic!("expected a portal");
        };
        assert_eq!(p.biome, PortalBiome::Jungle);
        assert_eq!(p.mirror, Mirror::None);
    }

    #[test]
    fn test_piece_names_are_case_sensitive() {
        let parsed = parse_content("-54, -14, NONE, Sideways_Fronthalf, Ocean");
        assert!(parsed.constraints.is_empty());
    }

    #[test]
    fn test_pillar_seed_token() {
        let parsed = parse_content(
            "# observed near spawn\n52, 17, CLOCKWISE_180, portal_1, yes, 1\n\n91752\n",
        );
        assert_eq!(parsed.constraints.len(), 1);
        assert_eq!(parsed.pillar_seed, Some(91752));
    }

    #[test]
    fn test_pillar_seed_must_fit_u32() {
        let parsed = parse_content("4294967296");
        assert_eq!(parsed.pillar_seed, None);
    }

    #[test]
    fn test_malformed_lines_are_skipped() {
        let parsed = parse_content(
            "52, 17, CLOCKWISE_180, portal_1, yes, 1\n\
             52, 17, CLOCKWISE_180, portal_99, yes, 1\n\
             not a line at all,\n\
             # comment\n",
        );
        assert_eq!(parsed.constraints.len(), 1);
    }

    #[test]
    fn test_empty_input() {
        let parsed = parse_content("# nothing but comments\n\n");
        assert!(parsed.constraints.is_empty());
        assert_eq!(parsed.pillar_seed, None);
    }
}
