use super::{Universe, UniverseError};

/// Represents a pattern that can be placed on the universe
#[derive(Clone, Debug)]
pub struct Pattern {
    pub name: &'static str,
    pub description: &'static str,
    pub height: usize,
    pub width: usize,
    pub cells: Vec<(usize, usize)>, // Relative (row, col) of alive cells
}

impl Pattern {
    /// Create a new pattern from alive cell coordinates
    pub fn new(name: &'static str, description: &'static str, cells: Vec<(usize, usize)>) -> Self {
        let height = cells.iter().map(|(row, _)| *row).max().unwrap_or(0) + 1;
        let width = cells.iter().map(|(_, col)| *col).max().unwrap_or(0) + 1;
        Self { name, description, height, width, cells }
    }

    /// Place pattern with its top-left corner at (row, col).
    /// Nothing is placed if any cell would fall outside the universe.
    pub fn place_on(
        &self,
        universe: &mut Universe,
        row: usize,
        col: usize,
    ) -> Result<(), UniverseError> {
        for (dr, dc) in &self.cells {
            universe.try_get_cell(row + dr, col + dc)?;
        }
        for (dr, dc) in &self.cells {
            universe.spawn(row + dr, col + dc)?;
        }
        Ok(())
    }

    /// Place pattern in the middle of the universe.
    ///
    /// Placement goes through [`Universe::is_in_universe`], which bounds rows
    /// by the width and columns by the height. On a rectangular universe the
    /// centre can therefore be rejected even though the pattern fits.
    pub fn place_centered(&self, universe: &mut Universe) -> Result<(), UniverseError> {
        let row = universe.height().saturating_sub(self.height) / 2;
        let col = universe.width().saturating_sub(self.width) / 2;
        self.place_on(universe, row, col)
    }
}

/// Classic Game of Life patterns library
pub mod presets {
    use super::*;

    /// Block - simple still life
    pub fn block() -> Pattern {
        Pattern::new(
            "block",
            "Still life",
            vec![
                (0, 0), (0, 1),
                (1, 0), (1, 1),
            ],
        )
    }

    /// Blinker - period 2 oscillator
    pub fn blinker() -> Pattern {
        Pattern::new(
            "blinker",
            "Oscillator (period 2)",
            vec![(0, 1), (1, 1), (2, 1)],
        )
    }

    /// Toad - period 2 oscillator
    pub fn toad() -> Pattern {
        Pattern::new(
            "toad",
            "Oscillator (period 2)",
            vec![
                (0, 1), (0, 2), (0, 3),
                (1, 0), (1, 1), (1, 2),
            ],
        )
    }

    /// Beacon - period 2 oscillator
    pub fn beacon() -> Pattern {
        Pattern::new(
            "beacon",
            "Oscillator (period 2)",
            vec![
                (0, 0), (0, 1),
                (1, 0),
                (2, 3),
                (3, 2), (3, 3),
            ],
        )
    }

    /// Glider - moves diagonally until it hits the edge
    pub fn glider() -> Pattern {
        Pattern::new(
            "glider",
            "Spaceship (period 4), settles into a block at the border",
            vec![
                (0, 1),
                (1, 2),
                (2, 0), (2, 1), (2, 2),
            ],
        )
    }

    /// R-pentomino - classic methuselah
    pub fn r_pentomino() -> Pattern {
        Pattern::new(
            "r-pentomino",
            "Methuselah",
            vec![
                (0, 1), (0, 2),
                (1, 0), (1, 1),
                (2, 1),
            ],
        )
    }

    /// Acorn - small methuselah
    pub fn acorn() -> Pattern {
        Pattern::new(
            "acorn",
            "Methuselah",
            vec![
                (0, 1),
                (1, 3),
                (2, 0), (2, 1), (2, 4), (2, 5), (2, 6),
            ],
        )
    }

    /// Get all available patterns
    pub fn all_patterns() -> Vec<Pattern> {
        vec![
            block(),
            blinker(),
            toad(),
            beacon(),
            glider(),
            r_pentomino(),
            acorn(),
        ]
    }

    /// Look a pattern up by name, ignoring case
    pub fn by_name(name: &str) -> Option<Pattern> {
        all_patterns()
            .into_iter()
            .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
    }
}
