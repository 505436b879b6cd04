mod error;
mod grid;
mod gui;
mod utils;

pub use error::{GridError, HostError, PatternError};
pub use grid::{rule, Grid, Snapshot};
pub use gui::{App, Config};
pub use utils::{parse_rle, positive, prompt_positive, NiceInt, Pattern, TickPacer};
