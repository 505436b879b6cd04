use super::{cell_count, checked_index, rule, write_cells, Snapshot, NEIGHBOR_OFFSETS};
use crate::{parse_rle, GridError};
use rand::Rng;

/// Game of Life on a bounded `dimension x dimension` square.
///
/// Positions outside the square do not exist: edge cells simply have fewer
/// neighbors. Cells are stored row-major.
#[derive(Clone, Debug)]
pub struct Grid {
    cells: Vec<bool>,
    counts: Vec<u8>, // scratch for the count pass
    dimension: usize,
    generation: u64,
}

impl Grid {
    /// Create a grid where every cell is alive with probability 1/2,
    /// drawing one value per cell in row-major order.
    pub fn new<R: Rng + ?Sized>(dimension: usize, rng: &mut R) -> Result<Self, GridError> {
        let size = cell_count(dimension)?;
        let cells = (0..size).map(|_| rng.gen::<bool>()).collect();
        Ok(Self::from_parts(dimension, cells))
    }

    /// Create a random grid
    ///
    /// `seed` - random seed (if `None`, then random seed is generated)
    pub fn random(dimension: usize, seed: Option<u64>) -> Result<Self, GridError> {
        use rand::SeedableRng;
        let mut rng = if let Some(x) = seed {
            rand_chacha::ChaCha8Rng::seed_from_u64(x)
        } else {
            rand_chacha::ChaCha8Rng::from_entropy()
        };
        Self::new(dimension, &mut rng)
    }

    pub fn blank(dimension: usize) -> Result<Self, GridError> {
        let size = cell_count(dimension)?;
        Ok(Self::from_parts(dimension, vec![false; size]))
    }

    /// Create a grid from a row-major vector of cells
    pub fn from_cells(dimension: usize, cells: Vec<bool>) -> Result<Self, GridError> {
        let expected = cell_count(dimension)?;
        if cells.len() != expected {
            return Err(GridError::CellCountMismatch {
                expected,
                actual: cells.len(),
            });
        }
        Ok(Self::from_parts(dimension, cells))
    }

    /// Create a grid whose only living cells are the given `(row, col)` pairs.
    pub fn with_alive<I>(dimension: usize, alive: I) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut grid = Self::blank(dimension)?;
        for (row, col) in alive {
            if row >= dimension || col >= dimension {
                return Err(GridError::IndexOutOfBounds {
                    row: i64::try_from(row).unwrap_or(i64::MAX),
                    col: i64::try_from(col).unwrap_or(i64::MAX),
                    dimension,
                });
            }
            grid.cells[row * dimension + col] = true;
        }
        Ok(grid)
    }

    /// Parse RLE format into a blank grid, top-left corner at `(0, 0)`.
    pub fn from_rle(dimension: usize, data: &[u8]) -> Result<Self, GridError> {
        let pattern = parse_rle(data)?;
        if pattern.width > dimension || pattern.height > dimension {
            return Err(GridError::PatternTooLarge {
                width: pattern.width,
                height: pattern.height,
                dimension,
            });
        }
        Self::with_alive(dimension, pattern.alive)
    }

    fn from_parts(dimension: usize, cells: Vec<bool>) -> Self {
        Self {
            counts: vec![0; cells.len()],
            cells,
            dimension,
            generation: 0,
        }
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Number of generations computed since construction.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Row-major cell states of the current generation.
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    pub fn is_alive(&self, row: i64, col: i64) -> Result<bool, GridError> {
        Ok(self.cells[checked_index(self.dimension, row, col)?])
    }

    /// Living neighbors of `(row, col)` in the current generation.
    pub fn neighbor_count(&self, row: i64, col: i64) -> Result<u8, GridError> {
        let idx = checked_index(self.dimension, row, col)?;
        Ok(self.count_neibs(idx / self.dimension, idx % self.dimension))
    }

    fn count_neibs(&self, row: usize, col: usize) -> u8 {
        let n = self.dimension;
        let mut count = 0;
        for (dr, dc) in NEIGHBOR_OFFSETS {
            let (Some(r), Some(c)) = (row.checked_add_signed(dr), col.checked_add_signed(dc))
            else {
                continue;
            };
            if r < n && c < n && self.cells[r * n + c] {
                count += 1;
            }
        }
        count
    }

    /// Advance by exactly one generation.
    ///
    /// All counts are taken from the current generation before any cell
    /// changes, so every cell transitions simultaneously.
    pub fn step(&mut self) {
        let n = self.dimension;
        for row in 0..n {
            for col in 0..n {
                let neibs = self.count_neibs(row, col);
                self.counts[row * n + col] = neibs;
            }
        }
        for (alive, &neibs) in self.cells.iter_mut().zip(&self.counts) {
            *alive = rule::next_state(*alive, neibs);
        }
        self.generation += 1;
        tracing::trace!(
            generation = self.generation,
            population = self.population(),
            "grid stepped"
        );
    }

    /// Advance by `steps` generations.
    pub fn advance(&mut self, steps: u64) {
        for _ in 0..steps {
            self.step();
        }
    }

    /// Read-only copy of the current generation.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot::new(self.dimension, self.generation, self.cells.clone())
    }
}

/// Grids are equal when they hold the same configuration, regardless of
/// how many generations it took to get there.
impl PartialEq for Grid {
    fn eq(&self, other: &Self) -> bool {
        self.dimension == other.dimension && self.cells == other.cells
    }
}

impl Eq for Grid {}

impl std::fmt::Display for Grid {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_cells(f, self.dimension, &self.cells)
    }
}
