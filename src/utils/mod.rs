mod format_int;
mod parse_rle;
mod prompt;
mod tick;

pub use format_int::NiceInt;
pub use parse_rle::{parse_rle, Pattern};
pub use prompt::{positive, prompt_positive};
pub use tick::TickPacer;
