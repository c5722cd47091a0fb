//! Cell storage and grid adjacency

use super::{BoardCell, CellPos};

/// Row-major cell arena of fixed size
#[derive(Debug, Clone)]
pub struct Grid {
    num_rows: usize,
    num_columns: usize,
    cells: Vec<BoardCell>,
}

impl Grid {
    /// Build a grid from row-major cells.
    ///
    /// `cells.len()` should equal `num_rows * num_columns` and each cell's
    /// position should match its slot; the layout loader guarantees both.
    /// Lookups past the end of a short arena return `None`.
    pub(crate) fn from_cells(num_rows: usize, num_columns: usize, cells: Vec<BoardCell>) -> Self {
        Self {
            num_rows,
            num_columns,
            cells,
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_columns(&self) -> usize {
        self.num_columns
    }

    pub fn contains(&self, pos: CellPos) -> bool {
        pos.row < self.num_rows && pos.col < self.num_columns
    }

    fn index(&self, pos: CellPos) -> Option<usize> {
        self.contains(pos).then(|| pos.row * self.num_columns + pos.col)
    }

    pub fn get(&self, pos: CellPos) -> Option<&BoardCell> {
        self.index(pos).and_then(|i| self.cells.get(i))
    }

    pub fn get_mut(&mut self, pos: CellPos) -> Option<&mut BoardCell> {
        self.index(pos).and_then(|i| self.cells.get_mut(i))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = &BoardCell> {
        self.cells.iter()
    }

    /// In-bounds N/S/W/E neighbours of a position
    fn neighbours(&self, pos: CellPos) -> Vec<CellPos> {
        let mut result = Vec::with_capacity(4);
        if pos.row > 0 {
            result.push(CellPos::new(pos.row - 1, pos.col));
        }
        if pos.row + 1 < self.num_rows {
            result.push(CellPos::new(pos.row + 1, pos.col));
        }
        if pos.col > 0 {
            result.push(CellPos::new(pos.row, pos.col - 1));
        }
        if pos.col + 1 < self.num_columns {
            result.push(CellPos::new(pos.row, pos.col + 1));
        }
        result
    }

    /// Fill every cell's adjacency list with its grid neighbours.
    ///
    /// Existing lists are cleared first, so calling this again rebuilds the
    /// same relation instead of duplicating edges.
    pub(crate) fn build_adjacency(&mut self) {
        for i in 0..self.cells.len() {
            let pos = self.cells[i].pos();
            let neighbours = self.neighbours(pos);
            let cell = &mut self.cells[i];
            cell.clear_adjacent();
            for nb in neighbours {
                cell.add_adjacent(nb);
            }
        }
    }
}
