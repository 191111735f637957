//! The universe: a bounded, double-buffered Game of Life grid.
//!
//! `current` holds generation N and is the only buffer callers ever observe.
//! `next` is the staging buffer that a transition fills before it is swapped
//! in. The grid does not wrap: edge and corner cells simply have fewer
//! neighbours.

use rand::Rng;
use rayon::prelude::*;
use tracing::{debug, trace};

use super::{Cell, UniverseError};

/// Moore neighbourhood offsets as (row, col) deltas
#[rustfmt::skip]
const NEIGHBOUR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Single in-bounds predicate, parameterised on the bound for each axis.
const fn within(row: isize, col: isize, row_bound: usize, col_bound: usize) -> bool {
    row >= 0 && col >= 0 && (row as usize) < row_bound && (col as usize) < col_bound
}

/// Read-only view of one generation, shared by the serial and parallel passes.
#[derive(Clone, Copy)]
struct Snapshot<'a> {
    cells: &'a [Cell],
    height: usize,
    width: usize,
}

impl Snapshot<'_> {
    /// Rows are checked against the width and columns against the height.
    /// Square universes are unaffected; rectangular ones keep this pairing.
    fn is_in_universe(&self, row: isize, col: isize) -> bool {
        within(row, col, self.width, self.height)
    }

    /// Cell stored at (row, col), if storage has one there
    fn stored(&self, row: isize, col: isize) -> Option<Cell> {
        within(row, col, self.height, self.width)
            .then(|| self.cells[row as usize * self.width + col as usize])
    }

    fn alive_neighbours(&self, row: usize, col: usize) -> u8 {
        let (row, col) = (row as isize, col as isize);

        NEIGHBOUR_OFFSETS
            .iter()
            .map(|&(dr, dc)| (row + dr, col + dc))
            .filter(|&(r, c)| self.is_in_universe(r, c))
            .filter_map(|(r, c)| self.stored(r, c))
            .filter(|cell| cell.is_alive())
            .count() as u8
    }
}

/// Universe owns both generation buffers and the sticky stability flag.
#[derive(Clone, Debug)]
pub struct Universe {
    height: usize,
    width: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
    stable: bool,
}

impl Universe {
    /// Create a universe of `height` rows and `width` columns, all cells dead.
    ///
    /// # Panics
    /// If `height * width` overflows or exceeds what a buffer can hold.
    /// Use [`Self::with_dimensions`] for unchecked input.
    pub fn new(height: usize, width: usize) -> Self {
        Self {
            height,
            width,
            current: vec![Cell::Dead; height * width],
            next: vec![Cell::Dead; height * width],
            stable: false,
        }
    }

    /// Cells needed for the given dimensions, if a buffer can hold them
    fn cell_count(height: usize, width: usize) -> Option<usize> {
        height
            .checked_mul(width)
            .filter(|&cells| cells <= isize::MAX as usize)
    }

    /// Create a universe from unchecked dimensions.
    /// Fails if either is negative or the cell count does not fit in a buffer.
    pub fn with_dimensions(height: i64, width: i64) -> Result<Self, UniverseError> {
        match (usize::try_from(height), usize::try_from(width)) {
            (Ok(h), Ok(w)) if Self::cell_count(h, w).is_some() => Ok(Self::new(h, w)),
            _ => Err(UniverseError::InvalidDimension { height, width }),
        }
    }

    /// Number of rows
    pub const fn height(&self) -> usize {
        self.height
    }

    /// Number of columns
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Whether a transition has ever left the universe unchanged.
    /// Once set it stays set.
    pub const fn is_stable(&self) -> bool {
        self.stable
    }

    fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            cells: &self.current,
            height: self.height,
            width: self.width,
        }
    }

    const fn index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    fn out_of_bounds(&self, row: usize, col: usize) -> UniverseError {
        UniverseError::OutOfBounds {
            row,
            col,
            height: self.height,
            width: self.width,
        }
    }

    /// True iff `0 <= row < width` and `0 <= col < height`.
    ///
    /// Note the crossed pairing: rows are bounded by the width and columns
    /// by the height. Every caller inside the universe goes through this same
    /// predicate, so square universes behave exactly as expected.
    pub fn is_in_universe(&self, row: isize, col: isize) -> bool {
        self.snapshot().is_in_universe(row, col)
    }

    /// Alive/dead state of a cell, or `OutOfBounds`
    pub fn try_get_cell(&self, row: usize, col: usize) -> Result<bool, UniverseError> {
        let (r, c) = (row as isize, col as isize);
        if !self.is_in_universe(r, c) {
            return Err(self.out_of_bounds(row, col));
        }
        self.snapshot()
            .stored(r, c)
            .map(Cell::is_alive)
            .ok_or_else(|| self.out_of_bounds(row, col))
    }

    /// Alive/dead state of a cell.
    ///
    /// # Panics
    /// If (row, col) is not in the universe; that is a caller bug.
    pub fn get_cell(&self, row: usize, col: usize) -> bool {
        match self.try_get_cell(row, col) {
            Ok(alive) => alive,
            Err(err) => panic!("{err}"),
        }
    }

    /// Number of alive cells around (row, col), in `0..=8`.
    ///
    /// # Panics
    /// If (row, col) is not in the universe.
    pub fn alive_neighbours_count(&self, row: usize, col: usize) -> u8 {
        if !self.is_in_universe(row as isize, col as isize) {
            panic!("{}", self.out_of_bounds(row, col));
        }
        self.snapshot().alive_neighbours(row, col)
    }

    /// Stage the opposite of the cell's current state
    fn toggle_life_status(&mut self, row: usize, col: usize) {
        let idx = self.index(row, col);
        self.next[idx] = self.current[idx].toggle();
    }

    /// Make a cell alive right away
    pub fn spawn(&mut self, row: usize, col: usize) -> Result<(), UniverseError> {
        self.try_get_cell(row, col)?;
        let idx = self.index(row, col);
        self.current[idx] = Cell::Alive;
        Ok(())
    }

    /// Seed random life using the thread-local generator. See [`Self::seed_life_with`].
    pub fn seed_life(&mut self, seed_chance: i32) -> usize {
        self.seed_life_with(seed_chance, &mut rand::rng())
    }

    /// Bring dead cells to life at random.
    ///
    /// Every cell rolls a number in `0..=100`; a dead cell whose roll is at or
    /// below `seed_chance` becomes alive. A chance of 0 or less seeds nothing,
    /// 100 or more seeds every dead cell. The seeded cells are committed
    /// immediately, so they are visible through [`Self::get_cell`] and
    /// survive into the next [`Self::advance_generation`].
    ///
    /// Returns how many cells were brought to life.
    pub fn seed_life_with<R: Rng + ?Sized>(&mut self, seed_chance: i32, rng: &mut R) -> usize {
        debug!(seed_chance, "start seeding life");
        self.next.clone_from(&self.current);

        let mut sparkled = 0;
        if seed_chance > 0 {
            for row in 0..self.height {
                for col in 0..self.width {
                    let roll: i32 = rng.random_range(0..=100);
                    if !self.current[self.index(row, col)].is_alive() && roll <= seed_chance {
                        self.toggle_life_status(row, col);
                        sparkled += 1;
                        trace!(row, col, roll, "life sparkled");
                    }
                }
            }
        }

        self.current.clone_from(&self.next);
        debug!(sparkled, "done seeding life");
        sparkled
    }

    /// True iff no cell is alive
    pub fn universe_is_dead(&self) -> bool {
        !self.current.iter().any(|cell| cell.is_alive())
    }

    /// Number of alive cells
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Apply the rule to every cell at once.
    ///
    /// Neighbour counts are always read from the current generation; only the
    /// staging buffer is written until the final swap.
    pub fn advance_generation(&mut self) {
        self.next.clone_from(&self.current);

        for row in 0..self.height {
            for col in 0..self.width {
                let cell = self.current[self.index(row, col)];
                let neighbours = self.snapshot().alive_neighbours(row, col);
                // Birth on exactly 3, death below 2 or above 3, otherwise carried over
                if cell.evolve(neighbours) != cell {
                    self.toggle_life_status(row, col);
                }
            }
        }

        self.commit();
    }

    /// Same transition as [`Self::advance_generation`], rows computed in parallel
    pub fn advance_generation_parallel(&mut self) {
        if self.width > 0 {
            let snapshot = Snapshot {
                cells: &self.current,
                height: self.height,
                width: self.width,
            };

            self.next
                .par_chunks_mut(self.width)
                .enumerate()
                .for_each(|(row, staged_row)| {
                    for (col, staged) in staged_row.iter_mut().enumerate() {
                        let cell = snapshot.cells[row * snapshot.width + col];
                        *staged = cell.evolve(snapshot.alive_neighbours(row, col));
                    }
                });
        }

        self.commit();
    }

    /// Record stability, then swap the staged generation in
    fn commit(&mut self) {
        if self.current == self.next && !self.stable {
            debug!("universe reached a stable state");
            self.stable = true;
        }
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Rows of the current generation, top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        (0..self.height).map(move |row| &self.current[row * self.width..(row + 1) * self.width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn universe_with(height: usize, width: usize, alive: &[(usize, usize)]) -> Universe {
        let mut universe = Universe::new(height, width);
        for &(row, col) in alive {
            universe.spawn(row, col).unwrap();
        }
        universe
    }

    fn alive_cells(universe: &Universe) -> Vec<(usize, usize)> {
        (0..universe.height())
            .flat_map(|row| (0..universe.width()).map(move |col| (row, col)))
            .filter(|&(row, col)| universe.get_cell(row, col))
            .collect()
    }

    #[test]
    fn test_new_universe_is_all_dead() {
        let universe = Universe::new(4, 4);
        assert_eq!(universe.height(), 4);
        assert_eq!(universe.width(), 4);
        for row in 0..4 {
            for col in 0..4 {
                assert!(!universe.get_cell(row, col));
            }
        }
        assert!(universe.universe_is_dead());
        assert!(!universe.is_stable());
    }

    #[test]
    fn test_negative_dimensions_are_rejected() {
        assert_eq!(
            Universe::with_dimensions(-1, 3).unwrap_err(),
            UniverseError::InvalidDimension { height: -1, width: 3 }
        );
        assert!(Universe::with_dimensions(3, -2).is_err());

        let empty = Universe::with_dimensions(0, 0).unwrap();
        assert!(empty.universe_is_dead());
        assert!(!empty.is_in_universe(0, 0));
    }

    #[test]
    fn test_overflowing_dimensions_are_rejected() {
        let huge = 1_i64 << 33;
        assert_eq!(
            Universe::with_dimensions(huge, huge).unwrap_err(),
            UniverseError::InvalidDimension { height: huge, width: huge }
        );
        assert!(Universe::with_dimensions(i64::MAX, 2).is_err());
        assert!(Universe::with_dimensions(huge, 0).is_ok());
    }

    #[test]
    fn test_in_universe_square() {
        let universe = Universe::new(3, 3);
        assert!(universe.is_in_universe(0, 0));
        assert!(universe.is_in_universe(2, 2));
        assert!(!universe.is_in_universe(3, 0));
        assert!(!universe.is_in_universe(0, 3));
        assert!(!universe.is_in_universe(-1, 0));
        assert!(!universe.is_in_universe(0, -1));
    }

    #[test]
    fn test_in_universe_bounds_row_by_width_and_col_by_height() {
        // 2 rows, 5 columns
        let universe = Universe::new(2, 5);
        assert!(universe.is_in_universe(4, 1));
        assert!(!universe.is_in_universe(5, 0));
        assert!(!universe.is_in_universe(0, 2));
        assert!(!universe.is_in_universe(1, 4));
    }

    #[test]
    #[should_panic(expected = "outside of the")]
    fn test_get_cell_out_of_bounds_panics() {
        Universe::new(3, 3).get_cell(3, 0);
    }

    #[test]
    fn test_try_get_cell_reports_out_of_bounds() {
        let universe = Universe::new(3, 3);
        assert_eq!(
            universe.try_get_cell(0, 7),
            Err(UniverseError::OutOfBounds { row: 0, col: 7, height: 3, width: 3 })
        );
        assert_eq!(universe.try_get_cell(1, 1), Ok(false));
    }

    #[test]
    fn test_spawn_out_of_bounds_fails() {
        let mut universe = Universe::new(2, 2);
        assert!(universe.spawn(2, 0).is_err());
        assert!(universe.universe_is_dead());
    }

    #[test]
    fn test_neighbour_counts_on_full_grid() {
        let mut universe = Universe::new(3, 3);
        universe.seed_life(100);

        // Corners see 3, edges 5, the centre all 8
        assert_eq!(universe.alive_neighbours_count(0, 0), 3);
        assert_eq!(universe.alive_neighbours_count(2, 2), 3);
        assert_eq!(universe.alive_neighbours_count(0, 2), 3);
        assert_eq!(universe.alive_neighbours_count(0, 1), 5);
        assert_eq!(universe.alive_neighbours_count(1, 0), 5);
        assert_eq!(universe.alive_neighbours_count(1, 1), 8);
    }

    #[test]
    fn test_neighbour_count_does_not_wrap() {
        let universe = universe_with(4, 4, &[(3, 3), (0, 3), (3, 0)]);
        assert_eq!(universe.alive_neighbours_count(0, 0), 0);
    }

    #[test]
    fn test_neighbour_count_excludes_self() {
        let universe = universe_with(3, 3, &[(1, 1)]);
        assert_eq!(universe.alive_neighbours_count(1, 1), 0);
        assert_eq!(universe.alive_neighbours_count(0, 0), 1);
    }

    #[test]
    #[should_panic]
    fn test_neighbour_count_out_of_bounds_panics() {
        Universe::new(2, 2).alive_neighbours_count(0, 2);
    }

    #[test]
    fn test_dead_universe_becomes_stable_after_one_generation() {
        let mut universe = Universe::new(5, 5);
        universe.advance_generation();
        assert!(universe.universe_is_dead());
        assert!(universe.is_stable());

        universe.advance_generation();
        assert!(universe.universe_is_dead());
        assert!(universe.is_stable());
    }

    #[test]
    fn test_stable_flag_is_never_reset() {
        let algorithms: [fn(&mut Universe); 2] =
            [Universe::advance_generation, Universe::advance_generation_parallel];
        for algorithm in algorithms {
            let mut universe = Universe::new(5, 5);
            algorithm(&mut universe);
            assert!(universe.is_stable());

            // A lonely cell makes the next transition change the universe
            universe.spawn(2, 2).unwrap();
            algorithm(&mut universe);
            assert!(universe.universe_is_dead());
            assert!(universe.is_stable());

            // Blinker keeps changing every generation
            for col in 1..4 {
                universe.spawn(2, col).unwrap();
            }
            algorithm(&mut universe);
            algorithm(&mut universe);
            assert!(!universe.universe_is_dead());
            assert!(universe.is_stable());
        }
    }

    #[test]
    fn test_lonely_cell_dies() {
        let mut universe = universe_with(3, 3, &[(1, 1)]);
        assert!(!universe.universe_is_dead());

        universe.advance_generation();
        assert!(universe.universe_is_dead());
        assert!(!universe.is_stable());
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [(1, 1), (1, 2), (2, 1), (2, 2)];
        let mut universe = universe_with(4, 4, &block);

        for _ in 0..3 {
            universe.advance_generation();
            assert_eq!(alive_cells(&universe), block.to_vec());
        }
        assert!(universe.is_stable());
    }

    #[test]
    fn test_blinker_oscillates() {
        let vertical = vec![(1, 2), (2, 2), (3, 2)];
        let horizontal = vec![(2, 1), (2, 2), (2, 3)];
        let mut universe = universe_with(5, 5, &vertical);

        universe.advance_generation();
        assert_eq!(alive_cells(&universe), horizontal);

        universe.advance_generation();
        assert_eq!(alive_cells(&universe), vertical);
        assert!(!universe.is_stable());
    }

    #[test]
    fn test_universe_is_dead_with_single_cell() {
        let universe = universe_with(3, 3, &[(2, 0)]);
        assert!(!universe.universe_is_dead());
        assert_eq!(universe.population(), 1);
    }

    #[test]
    fn test_seed_zero_never_flips() {
        let mut universe = Universe::new(10, 10);
        let mut rng = StdRng::seed_from_u64(7);
        assert_eq!(universe.seed_life_with(0, &mut rng), 0);
        assert_eq!(universe.seed_life_with(-20, &mut rng), 0);
        assert!(universe.universe_is_dead());
    }

    #[test]
    fn test_seed_hundred_fills_every_dead_cell() {
        let mut universe = universe_with(6, 6, &[(0, 0)]);
        let mut rng = StdRng::seed_from_u64(7);

        assert_eq!(universe.seed_life_with(100, &mut rng), 35);
        assert_eq!(universe.population(), 36);
        assert_eq!(universe.seed_life_with(250, &mut rng), 0);
    }

    #[test]
    fn test_seeding_is_deterministic_for_a_seeded_rng() {
        let mut a = Universe::new(12, 12);
        let mut b = Universe::new(12, 12);
        a.seed_life_with(40, &mut StdRng::seed_from_u64(42));
        b.seed_life_with(40, &mut StdRng::seed_from_u64(42));

        assert_eq!(alive_cells(&a), alive_cells(&b));
        assert!(a.population() > 0);
    }

    #[test]
    fn test_seeded_cells_survive_into_the_next_generation() {
        // Seeding commits immediately, so the advance works on the seeded state
        let mut universe = Universe::new(4, 4);
        universe.seed_life(100);
        universe.advance_generation();

        // Only the four corners keep at most 3 neighbours
        assert_eq!(alive_cells(&universe), vec![(0, 0), (0, 3), (3, 0), (3, 3)]);
    }

    #[test]
    fn test_parallel_advance_matches_serial() {
        let mut serial = Universe::new(32, 32);
        serial.seed_life_with(35, &mut StdRng::seed_from_u64(2024));
        let mut parallel = serial.clone();

        for _ in 0..20 {
            serial.advance_generation();
            parallel.advance_generation_parallel();
            assert_eq!(alive_cells(&serial), alive_cells(&parallel));
            assert_eq!(serial.is_stable(), parallel.is_stable());
        }
    }

    #[test]
    fn test_rectangular_universe_advances_without_panicking() {
        let mut universe = Universe::new(2, 5);
        universe.seed_life(100);
        universe.advance_generation();
        universe.advance_generation_parallel();
        assert_eq!(universe.rows().count(), 2);
    }

    #[test]
    fn test_zero_width_universe() {
        let mut universe = Universe::new(3, 0);
        universe.advance_generation_parallel();
        assert!(universe.is_stable());
        assert_eq!(universe.rows().filter(|row| row.is_empty()).count(), 3);
    }
}
