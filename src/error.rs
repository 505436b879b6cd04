use thiserror::Error;

/// Failures while decoding an RLE pattern.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PatternError {
    #[error("missing `x = .., y = ..` header line")]
    MissingHeader,

    #[error("invalid number at byte {0}")]
    InvalidNumber(usize),

    #[error("unexpected symbol {0:?} at byte {1}")]
    UnexpectedSymbol(char, usize),

    #[error("cell ({row}, {col}) lies outside the declared {width}x{height} pattern")]
    OutOfBounds {
        row: usize,
        col: usize,
        width: usize,
        height: usize,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    #[error("invalid grid dimension: {0}")]
    InvalidDimension(usize),

    #[error("cell ({row}, {col}) is outside a {dimension}x{dimension} grid")]
    IndexOutOfBounds { row: i64, col: i64, dimension: usize },

    #[error("expected {expected} cells, got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("{width}x{height} pattern does not fit a {dimension}x{dimension} grid")]
    PatternTooLarge {
        width: usize,
        height: usize,
        dimension: usize,
    },

    #[error("pattern error: {0}")]
    Pattern(#[from] PatternError),
}

/// Failures of the desktop host around the engine.
#[derive(Error, Debug)]
pub enum HostError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("grid error: {0}")]
    Grid(#[from] GridError),

    #[error("display backend unavailable: {0}")]
    Display(#[from] eframe::Error),
}
