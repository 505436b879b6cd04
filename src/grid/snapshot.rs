use super::{checked_index, write_cells};
use crate::GridError;

/// Frozen copy of one settled generation.
///
/// A host can keep rendering a snapshot while the grid it came from moves on.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    dimension: usize,
    generation: u64,
    cells: Vec<bool>,
}

impl Snapshot {
    pub(super) fn new(dimension: usize, generation: u64, cells: Vec<bool>) -> Self {
        Self {
            dimension,
            generation,
            cells,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    pub fn is_alive(&self, row: i64, col: i64) -> Result<bool, GridError> {
        Ok(self.cells[checked_index(self.dimension, row, col)?])
    }

    /// Living cells as `(row, col)`, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.dimension;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / n, i % n))
    }
}

impl std::fmt::Display for Snapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_cells(f, self.dimension, &self.cells)
    }
}
