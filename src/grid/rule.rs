//! Conway's rule, B3/S23.

/// State of a cell in the next generation.
///
/// A living cell survives with 2 or 3 living neighbors and dies otherwise;
/// a dead cell comes alive with exactly 3.
pub fn next_state(alive: bool, neighbors: u8) -> bool {
    if alive {
        neighbors == 2 || neighbors == 3
    } else {
        neighbors == 3
    }
}
