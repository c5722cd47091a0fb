//! cb-core: Core board logic for a Clue board
//!
//! Loads a board from a setup file (room initials and names) and a layout
//! file (one token per cell), links every cell to its grid neighbours and
//! answers move-target queries.
//!
//! The crate does no terminal I/O; callers own the [`Board`] value and
//! decide what to do with load errors.

pub mod board;
pub mod config;

pub use board::{
    Board, BoardCell, CellFlags, CellPos, DoorDirection, Grid, Room, RoomKind, RoomRegistry,
};
pub use config::{BoardConfig, ConfigError};
