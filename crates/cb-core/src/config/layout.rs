//! Layout file parsing
//!
//! Each non-empty line is a board row of comma-separated tokens. A token
//! starts with the room initial and may carry markers anywhere after it:
//!
//! | Marker | Meaning                      |
//! |--------|------------------------------|
//! | `*`    | room center                  |
//! | `#`    | room label                   |
//! | `^` `v` `<` `>` | doorway facing up/down/left/right |
//!
//! A second character that is itself a known room initial marks a secret
//! passage to that room.
//!
//! Every field counts, so a trailing comma adds an empty last token and the
//! row is rejected with [`ConfigError::EmptyToken`].

use super::ConfigError;
use crate::board::{BoardCell, CellFlags, CellPos, DoorDirection, Grid, RoomRegistry};

const CENTER_MARKER: char = '*';
const LABEL_MARKER: char = '#';
const FIELD_SEPARATOR: char = ',';

/// Split layout text into rows of tokens, checking every row has the same
/// number of columns as the first.
fn split_rows(contents: &str) -> Result<(Vec<Vec<&str>>, usize), ConfigError> {
    let rows: Vec<Vec<&str>> = contents
        .lines()
        .map(|line| line.trim_end_matches('\r'))
        .filter(|line| !line.is_empty())
        .map(|line| line.split(FIELD_SEPARATOR).collect())
        .collect();

    let num_columns = rows.first().map(Vec::len).ok_or(ConfigError::EmptyLayout)?;
    if let Some((row, tokens)) = rows
        .iter()
        .enumerate()
        .find(|(_, tokens)| tokens.len() != num_columns)
    {
        return Err(ConfigError::ColumnMismatch {
            expected: num_columns,
            found: tokens.len(),
            row,
        });
    }

    Ok((rows, num_columns))
}

/// Decode one token into a cell, recording center and label cells on the
/// owning room.
fn parse_token(
    token: &str,
    pos: CellPos,
    rooms: &mut RoomRegistry,
) -> Result<BoardCell, ConfigError> {
    let mut chars = token.chars();
    let initial = chars.next().ok_or(ConfigError::EmptyToken {
        row: pos.row,
        col: pos.col,
    })?;
    let Some(room) = rooms.get_mut(initial) else {
        return Err(ConfigError::UnknownRoom {
            row: pos.row,
            col: pos.col,
            initial,
        });
    };

    let mut cell = BoardCell::new(pos.row, pos.col, initial);
    cell.set_flag(CellFlags::ROOM, room.is_card_room());

    if token.contains(CENTER_MARKER) {
        cell.set_flag(CellFlags::ROOM_CENTER, true);
        room.set_center(pos);
    }
    if token.contains(LABEL_MARKER) {
        cell.set_flag(CellFlags::LABEL, true);
        room.set_label(pos);
    }
    if let Some(dir) = DoorDirection::from_token(token) {
        cell.set_door_direction(dir);
    }
    if let Some(target) = chars.next().filter(|c| rooms.contains(*c)) {
        cell.set_secret_passage(target);
    }

    Ok(cell)
}

/// Parse layout text against an already loaded room registry.
///
/// Center and label positions are written back into `rooms`.
pub fn parse_layout(contents: &str, rooms: &mut RoomRegistry) -> Result<Grid, ConfigError> {
    let (rows, num_columns) = split_rows(contents)?;
    let num_rows = rows.len();

    let mut cells = Vec::with_capacity(num_rows * num_columns);
    for (row, tokens) in rows.iter().enumerate() {
        for (col, token) in tokens.iter().enumerate() {
            cells.push(parse_token(token, CellPos::new(row, col), rooms)?);
        }
    }

    tracing::debug!(rows = num_rows, columns = num_columns, "layout parsed");
    Ok(Grid::from_cells(num_rows, num_columns, cells))
}
