//! Move target search
//!
//! Finds every cell a token can land on after moving exactly `steps` cells,
//! never stepping on the same cell twice in one move and never passing
//! through an occupied cell. Entering a card room ends the move at once,
//! whatever is left of the roll.

use hashbrown::HashSet;

use super::{CellPos, Grid};

/// Depth-first search state for a single query
struct TargetSearch<'a> {
    grid: &'a Grid,
    /// Cells on the current path only; siblings never see each other's cells
    visited: HashSet<CellPos>,
}

impl<'a> TargetSearch<'a> {
    fn new(grid: &'a Grid, start: CellPos) -> Self {
        let mut visited = HashSet::new();
        visited.insert(start);
        Self { grid, visited }
    }

    fn search(&mut self, from: CellPos, steps: u32) -> HashSet<CellPos> {
        let mut found = HashSet::new();
        let Some(cell) = self.grid.get(from) else {
            return found;
        };

        for &next in cell.adjacent() {
            let Some(next_cell) = self.grid.get(next) else {
                continue;
            };
            if self.visited.contains(&next) || next_cell.is_occupied() {
                continue;
            }

            self.visited.insert(next);
            if steps == 1 || next_cell.is_room() {
                found.insert(next);
            } else {
                found.extend(self.search(next, steps - 1));
            }
            self.visited.remove(&next);
        }

        found
    }
}

/// Cells reachable from `start` in exactly `steps` moves, or fewer when the
/// path ends in a room.
///
/// Preconditions: `steps >= 1` and `start` inside the grid. Violating either
/// yields an empty set.
pub fn find_targets(grid: &Grid, start: CellPos, steps: u32) -> HashSet<CellPos> {
    if steps == 0 {
        tracing::warn!(%start, "target query with zero steps");
        return HashSet::new();
    }
    if !grid.contains(start) {
        tracing::warn!(%start, "target query outside the board");
        return HashSet::new();
    }

    let targets = TargetSearch::new(grid, start).search(start, steps);
    tracing::trace!(%start, steps, count = targets.len(), "targets computed");
    targets
}
