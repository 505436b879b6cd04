mod engine;
pub mod rule;
mod snapshot;

use crate::GridError;

pub use engine::Grid;
pub use snapshot::Snapshot;

/// Relative positions of the eight neighbors, as `(d_row, d_col)`.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Number of cells in a `dimension x dimension` grid.
fn cell_count(dimension: usize) -> Result<usize, GridError> {
    if dimension == 0 {
        return Err(GridError::InvalidDimension(dimension));
    }
    dimension
        .checked_mul(dimension)
        .ok_or(GridError::InvalidDimension(dimension))
}

/// Row-major index of `(row, col)`, or `IndexOutOfBounds`.
fn checked_index(dimension: usize, row: i64, col: i64) -> Result<usize, GridError> {
    let in_range = |v: i64| usize::try_from(v).ok().filter(|&v| v < dimension);
    match (in_range(row), in_range(col)) {
        (Some(r), Some(c)) => Ok(r * dimension + c),
        _ => Err(GridError::IndexOutOfBounds {
            row,
            col,
            dimension,
        }),
    }
}

fn write_cells(
    f: &mut std::fmt::Formatter<'_>,
    dimension: usize,
    cells: &[bool],
) -> std::fmt::Result {
    for row in cells.chunks_exact(dimension) {
        for &alive in row {
            f.write_str(if alive { "#" } else { "." })?;
        }
        writeln!(f)?;
    }
    Ok(())
}
