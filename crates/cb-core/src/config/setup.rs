//! Setup file parsing
//!
//! One entry per line: `<Kind>, <Name>, <Initial>`. Any line containing
//! `//` is a comment and skipped whole. Blank lines are skipped too,
//! wherever they appear in the file.

use std::str::FromStr;

use super::ConfigError;
use crate::board::{Room, RoomKind, RoomRegistry};

const COMMENT: &str = "//";
const FIELD_SEPARATOR: &str = ", ";

/// Parse setup text into a room registry
pub fn parse_setup(contents: &str) -> Result<RoomRegistry, ConfigError> {
    let mut rooms = RoomRegistry::new();

    for (index, line) in contents.lines().enumerate() {
        let line_no = index + 1;
        let line = line.trim_end_matches('\r');

        if line.contains(COMMENT) || line.trim().is_empty() {
            continue;
        }

        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        let kind = RoomKind::from_str(fields[0]).map_err(|_| ConfigError::InvalidRoomKind {
            line: line_no,
            kind: fields[0].to_string(),
        })?;

        let (Some(name), Some(initial)) = (
            fields.get(1),
            fields.get(2).and_then(|f| f.chars().next()),
        ) else {
            return Err(ConfigError::MissingField { line: line_no });
        };

        if let Some(previous) = rooms.insert(initial, Room::new(*name, kind)) {
            tracing::warn!(%initial, previous = previous.name(), "setup initial redefined");
        }
    }

    tracing::debug!(rooms = rooms.len(), "setup parsed");
    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rooms_and_spaces() {
        let setup = "\
// Rooms: kind, name, initial
Room, Conservatory, C
Room, Billiard Room, B
Space, Walkway, W
Space, Unused, X
";
        let rooms = parse_setup(setup).unwrap();
        assert_eq!(rooms.len(), 4);
        assert_eq!(rooms.get('B').unwrap().name(), "Billiard Room");
        assert_eq!(rooms.get('C').unwrap().kind(), RoomKind::Room);
        assert_eq!(rooms.get('W').unwrap().kind(), RoomKind::Space);
    }

    #[test]
    fn test_comment_lines_skipped_even_if_valid() {
        let setup = "Room, Kitchen, K\nRoom, Lounge, L // old lounge\nCard, Bogus, Z //\n";
        let rooms = parse_setup(setup).unwrap();
        assert_eq!(rooms.len(), 1);
        assert!(!rooms.contains('L'));
    }

    #[test]
    fn test_invalid_kind_rejected() {
        let err = parse_setup("Room, Kitchen, K\nWeapon, Rope, R\n").unwrap_err();
        match err {
            ConfigError::InvalidRoomKind { line, kind } => {
                assert_eq!(line, 2);
                assert_eq!(kind, "Weapon");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_kind_is_case_sensitive() {
        let err = parse_setup("room, Kitchen, K\n").unwrap_err();
        assert!(err.is_malformed());
    }

    #[test]
    fn test_missing_fields_rejected() {
        assert!(matches!(
            parse_setup("Room, Kitchen\n"),
            Err(ConfigError::MissingField { line: 1 })
        ));
        assert!(matches!(
            parse_setup("Room, Kitchen, \n"),
            Err(ConfigError::MissingField { line: 1 })
        ));
    }

    #[test]
    fn test_trailing_text_after_initial() {
        let rooms = parse_setup("Room, Study, Sx\r\nSpace, Walkway, W\r\n").unwrap();
        assert!(rooms.contains('S'));
        assert!(rooms.contains('W'));
    }

    #[test]
    fn test_blank_lines_ignored() {
        let rooms = parse_setup("\nRoom, Hall, H\n\n").unwrap();
        assert_eq!(rooms.len(), 1);

        let rooms = parse_setup("Room, Kitchen, K\n\n  \nSpace, Walkway, W\n").unwrap();
        assert_eq!(rooms.len(), 2);
        assert_eq!(rooms.get('W').map(Room::name), Some("Walkway"));
    }
}
