//! Board cell types

use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use strum::EnumIter;

/// Grid coordinate, row first
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CellPos {
    pub row: usize,
    pub col: usize,
}

impl CellPos {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Manhattan distance to another position
    pub fn distance(&self, other: CellPos) -> usize {
        self.row.abs_diff(other.row) + self.col.abs_diff(other.col)
    }
}

impl std::fmt::Display for CellPos {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

/// Which way a doorway faces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum DoorDirection {
    Up,
    Down,
    Left,
    Right,
}

impl DoorDirection {
    /// Layout marker for this direction
    pub const fn marker(&self) -> char {
        match self {
            DoorDirection::Up => '^',
            DoorDirection::Down => 'v',
            DoorDirection::Left => '<',
            DoorDirection::Right => '>',
        }
    }

    /// Find the door marker in a layout token.
    ///
    /// Markers are checked in the order up, down, left, right; the first one
    /// present wins.
    pub fn from_token(token: &str) -> Option<Self> {
        [
            DoorDirection::Up,
            DoorDirection::Down,
            DoorDirection::Left,
            DoorDirection::Right,
        ]
        .into_iter()
        .find(|dir| token.contains(dir.marker()))
    }
}

bitflags! {
    /// Cell flags
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct CellFlags: u8 {
        /// Belongs to a card room (entering it ends a move)
        const ROOM = 0x01;
        const ROOM_CENTER = 0x02;
        const LABEL = 0x04;
        /// Holds a player token
        const OCCUPIED = 0x08;
    }
}

/// A single board cell
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardCell {
    pos: CellPos,

    /// Initial of the room (or space) this cell belongs to
    initial: char,

    flags: CellFlags,

    door_direction: Option<DoorDirection>,

    /// Initial of the room a secret passage here leads to
    secret_passage: Option<char>,

    /// Grid neighbours, filled once when the board is built
    adjacent: Vec<CellPos>,
}

impl BoardCell {
    pub fn new(row: usize, col: usize, initial: char) -> Self {
        Self {
            pos: CellPos::new(row, col),
            initial,
            flags: CellFlags::empty(),
            door_direction: None,
            secret_passage: None,
            adjacent: Vec::new(),
        }
    }

    pub fn row(&self) -> usize {
        self.pos.row
    }

    pub fn col(&self) -> usize {
        self.pos.col
    }

    pub fn pos(&self) -> CellPos {
        self.pos
    }

    pub fn initial(&self) -> char {
        self.initial
    }

    pub fn flags(&self) -> CellFlags {
        self.flags
    }

    /// Part of a card room; a move that enters it stops there
    pub fn is_room(&self) -> bool {
        self.flags.contains(CellFlags::ROOM)
    }

    pub fn is_room_center(&self) -> bool {
        self.flags.contains(CellFlags::ROOM_CENTER)
    }

    pub fn is_label(&self) -> bool {
        self.flags.contains(CellFlags::LABEL)
    }

    pub fn is_occupied(&self) -> bool {
        self.flags.contains(CellFlags::OCCUPIED)
    }

    pub fn set_occupied(&mut self, occupied: bool) {
        self.flags.set(CellFlags::OCCUPIED, occupied);
    }

    pub fn is_doorway(&self) -> bool {
        self.door_direction.is_some()
    }

    pub fn door_direction(&self) -> Option<DoorDirection> {
        self.door_direction
    }

    pub fn secret_passage(&self) -> Option<char> {
        self.secret_passage
    }

    pub fn adjacent(&self) -> &[CellPos] {
        &self.adjacent
    }

    pub(crate) fn set_flag(&mut self, flag: CellFlags, value: bool) {
        self.flags.set(flag, value);
    }

    pub(crate) fn set_door_direction(&mut self, dir: DoorDirection) {
        self.door_direction = Some(dir);
    }

    pub(crate) fn set_secret_passage(&mut self, initial: char) {
        self.secret_passage = Some(initial);
    }

    pub(crate) fn clear_adjacent(&mut self) {
        self.adjacent.clear();
    }

    pub(crate) fn add_adjacent(&mut self, pos: CellPos) {
        self.adjacent.push(pos);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_door_direction_priority() {
        assert_eq!(DoorDirection::from_token("W^"), Some(DoorDirection::Up));
        assert_eq!(DoorDirection::from_token("Wv"), Some(DoorDirection::Down));
        assert_eq!(DoorDirection::from_token("W<"), Some(DoorDirection::Left));
        assert_eq!(DoorDirection::from_token("W>"), Some(DoorDirection::Right));
        // Up beats everything else, down beats left and right
        assert_eq!(DoorDirection::from_token("W>^"), Some(DoorDirection::Up));
        assert_eq!(DoorDirection::from_token("W<v"), Some(DoorDirection::Down));
        assert_eq!(DoorDirection::from_token("W"), None);
    }

    #[test]
    fn test_door_markers_are_distinct() {
        let markers: Vec<char> = DoorDirection::iter().map(|d| d.marker()).collect();
        assert_eq!(markers, vec!['^', 'v', '<', '>']);
    }

    #[test]
    fn test_new_cell_is_plain() {
        let cell = BoardCell::new(3, 4, 'W');
        assert_eq!(cell.pos(), CellPos::new(3, 4));
        assert_eq!(cell.initial(), 'W');
        assert!(!cell.is_room());
        assert!(!cell.is_doorway());
        assert!(!cell.is_occupied());
        assert!(cell.secret_passage().is_none());
        assert!(cell.adjacent().is_empty());
    }

    #[test]
    fn test_occupancy_toggle() {
        let mut cell = BoardCell::new(0, 0, 'W');
        cell.set_occupied(true);
        assert!(cell.is_occupied());
        cell.set_occupied(false);
        assert!(!cell.is_occupied());
    }

    #[test]
    fn test_pos_distance() {
        assert_eq!(CellPos::new(1, 1).distance(CellPos::new(3, 0)), 3);
        assert_eq!(CellPos::new(2, 2).to_string(), "2,2");
    }
}
