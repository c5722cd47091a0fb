//! Game board
//!
//! Contains the board value, its cells and rooms, and the move target search.

mod cell;
mod grid;
mod room;
mod targets;

pub use cell::{BoardCell, CellFlags, CellPos, DoorDirection};
pub use grid::Grid;
pub use room::{Room, RoomKind, RoomRegistry};
pub use targets::find_targets;

use hashbrown::HashSet;

use crate::config::{self, BoardConfig, ConfigError};

/// A loaded board: cells, rooms and the last computed move targets.
///
/// Built once with [`Board::load`] or [`Board::from_sources`] and then
/// handed to whatever needs it. Only cell occupancy changes after loading.
#[derive(Debug, Clone)]
pub struct Board {
    grid: Grid,
    rooms: RoomRegistry,
    targets: HashSet<CellPos>,
}

impl Board {
    /// Load setup and layout files named by `config`, then link cells.
    pub fn load(config: &BoardConfig) -> Result<Self, ConfigError> {
        let mut rooms = config::load_setup_file(&config.setup_path())?;
        let grid = config::load_layout_file(&config.layout_path(), &mut rooms)?;
        Ok(Self::from_parts(grid, rooms))
    }

    /// Build a board from setup and layout text already in memory.
    pub fn from_sources(setup: &str, layout: &str) -> Result<Self, ConfigError> {
        let mut rooms = config::parse_setup(setup)?;
        let grid = config::parse_layout(layout, &mut rooms)?;
        Ok(Self::from_parts(grid, rooms))
    }

    fn from_parts(mut grid: Grid, rooms: RoomRegistry) -> Self {
        grid.build_adjacency();
        tracing::debug!(
            rows = grid.num_rows(),
            columns = grid.num_columns(),
            rooms = rooms.len(),
            "board ready"
        );
        Self {
            grid,
            rooms,
            targets: HashSet::new(),
        }
    }

    pub fn num_rows(&self) -> usize {
        self.grid.num_rows()
    }

    pub fn num_columns(&self) -> usize {
        self.grid.num_columns()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Cell at `(row, col)`, or `None` when off the board
    pub fn cell(&self, row: usize, col: usize) -> Option<&BoardCell> {
        self.grid.get(CellPos::new(row, col))
    }

    pub fn cell_at(&self, pos: CellPos) -> Option<&BoardCell> {
        self.grid.get(pos)
    }

    /// Mark or clear a player token on a cell. Returns `false` when the
    /// position is off the board.
    pub fn set_occupied(&mut self, pos: CellPos, occupied: bool) -> bool {
        match self.grid.get_mut(pos) {
            Some(cell) => {
                cell.set_occupied(occupied);
                true
            }
            None => false,
        }
    }

    pub fn room(&self, initial: char) -> Option<&Room> {
        self.rooms.get(initial)
    }

    /// Room a cell belongs to
    pub fn room_for_cell(&self, cell: &BoardCell) -> Option<&Room> {
        self.rooms.get(cell.initial())
    }

    pub fn rooms(&self) -> &RoomRegistry {
        &self.rooms
    }

    /// Compute move targets from `start` and keep them for [`Board::targets`].
    ///
    /// Previous targets are discarded. See [`find_targets`] for the rules and
    /// preconditions.
    pub fn calc_targets(&mut self, start: CellPos, path_length: u32) {
        self.targets = find_targets(&self.grid, start, path_length);
    }

    /// Targets from the most recent [`Board::calc_targets`] call
    pub fn targets(&self) -> &HashSet<CellPos> {
        &self.targets
    }

    /// Compute move targets without touching the stored result
    pub fn find_targets(&self, start: CellPos, path_length: u32) -> HashSet<CellPos> {
        find_targets(&self.grid, start, path_length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SETUP: &str = "\
// Test board
Room, Kitchen, K
Room, Lounge, L
Space, Walkway, W
";

    const LAYOUT: &str = "\
K,K*,K#,W,L
K,K,KL,W,L#
W,W^,W,W,L*
";

    fn board() -> Board {
        Board::from_sources(SETUP, LAYOUT).unwrap()
    }

    #[test]
    fn test_dimensions() {
        let b = board();
        assert_eq!(b.num_rows(), 3);
        assert_eq!(b.num_columns(), 5);
        assert!(b.cell(2, 4).is_some());
        assert!(b.cell(3, 0).is_none());
        assert!(b.cell(0, 5).is_none());
    }

    #[test]
    fn test_room_lookups() {
        let b = board();
        let kitchen = b.room('K').unwrap();
        assert_eq!(kitchen.name(), "Kitchen");
        assert_eq!(kitchen.center(), Some(CellPos::new(0, 1)));
        assert_eq!(kitchen.label(), Some(CellPos::new(0, 2)));

        let cell = b.cell(2, 4).unwrap();
        assert_eq!(b.room_for_cell(cell).unwrap().name(), "Lounge");
        assert!(b.room('Z').is_none());
    }

    #[test]
    fn test_calc_targets_replaces_previous() {
        let mut b = board();
        b.calc_targets(CellPos::new(2, 3), 1);
        assert_eq!(b.targets().len(), 3);
        assert!(b.targets().contains(&CellPos::new(2, 4)));

        b.calc_targets(CellPos::new(0, 3), 1);
        let expected: HashSet<CellPos> =
            [CellPos::new(0, 2), CellPos::new(0, 4), CellPos::new(1, 3)]
                .into_iter()
                .collect();
        assert_eq!(b.targets(), &expected);
    }

    #[test]
    fn test_find_targets_leaves_stored_result() {
        let mut b = board();
        b.calc_targets(CellPos::new(2, 3), 1);
        let before = b.targets().clone();
        let other = b.find_targets(CellPos::new(0, 3), 2);
        assert!(!other.is_empty());
        assert_eq!(b.targets(), &before);
    }

    #[test]
    fn test_occupancy_blocks_targets() {
        let mut b = board();
        assert!(b.set_occupied(CellPos::new(1, 3), true));
        b.calc_targets(CellPos::new(2, 3), 1);
        assert!(!b.targets().contains(&CellPos::new(1, 3)));
        assert!(!b.set_occupied(CellPos::new(9, 9), true));
    }
}
