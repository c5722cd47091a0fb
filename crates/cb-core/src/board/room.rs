//! Rooms and the room registry
//!
//! Every setup entry becomes a [`Room`] keyed by its one-character initial.
//! Walkways and unused areas are entries too, with [`RoomKind::Space`].

use hashbrown::HashMap;
use strum::EnumString;

use super::CellPos;

/// Setup entry kind
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString)]
pub enum RoomKind {
    /// Card room; entering it ends a move
    Room,
    /// Walkway or other non-room area
    Space,
}

/// A named area of the board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Room {
    name: String,
    kind: RoomKind,
    center: Option<CellPos>,
    label: Option<CellPos>,
}

impl Room {
    pub fn new(name: impl Into<String>, kind: RoomKind) -> Self {
        Self {
            name: name.into(),
            kind,
            center: None,
            label: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> RoomKind {
        self.kind
    }

    pub fn is_card_room(&self) -> bool {
        self.kind == RoomKind::Room
    }

    /// Cell where tokens are drawn when inside the room
    pub fn center(&self) -> Option<CellPos> {
        self.center
    }

    /// Cell where the room name is drawn
    pub fn label(&self) -> Option<CellPos> {
        self.label
    }

    pub(crate) fn set_center(&mut self, pos: CellPos) {
        self.center = Some(pos);
    }

    pub(crate) fn set_label(&mut self, pos: CellPos) {
        self.label = Some(pos);
    }
}

/// Room lookup by initial
#[derive(Debug, Clone, Default)]
pub struct RoomRegistry {
    rooms: HashMap<char, Room>,
}

impl RoomRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, initial: char) -> Option<&Room> {
        self.rooms.get(&initial)
    }

    pub fn contains(&self, initial: char) -> bool {
        self.rooms.contains_key(&initial)
    }

    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// All entries, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (char, &Room)> {
        self.rooms.iter().map(|(initial, room)| (*initial, room))
    }

    /// Register a room, replacing any earlier entry with the same initial
    pub(crate) fn insert(&mut self, initial: char, room: Room) -> Option<Room> {
        self.rooms.insert(initial, room)
    }

    pub(crate) fn get_mut(&mut self, initial: char) -> Option<&mut Room> {
        self.rooms.get_mut(&initial)
    }
}
