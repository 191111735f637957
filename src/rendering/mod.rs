//! Text rendering of the universe for the console.

use std::fmt;

use crate::domain::{Cell, Universe};

const ALIVE: &str = "#|";
const DEAD: &str = " |";

impl fmt::Display for Universe {
    /// One line per row: `|` then `#|` for alive or ` |` for dead cells
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            f.write_str("|")?;
            for cell in row {
                f.write_str(match cell {
                    Cell::Alive => ALIVE,
                    Cell::Dead => DEAD,
                })?;
            }
            f.write_str("\n")?;
        }
        Ok(())
    }
}

/// Render the universe as a string
pub fn render(universe: &Universe) -> String {
    universe.to_string()
}

/// Generation header followed by the rendered universe
pub fn frame(generation: u64, universe: &Universe) -> String {
    format!("Generation : {generation}\n{universe}")
}
