use rand::Rng;

use crate::simulation::cell::GpuCell;
use crate::simulation::error::GridError;
use crate::simulation::rule::next_state;

/// Toroidal Game of Life board.
///
/// Cells are stored row-major. `next` is scratch space for [`Grid::step`]:
/// every entry is overwritten before the two buffers are swapped, so nothing
/// from a previous generation leaks into the next one.
#[derive(Debug, Clone)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<bool>,
    next: Vec<bool>,
}

impl Grid {
    /// Create a new grid with every cell dead
    pub fn new(rows: usize, cols: usize) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimensions { rows, cols });
        }

        let cell_count = rows
            .checked_mul(cols)
            .ok_or(GridError::InvalidDimensions { rows, cols })?;
        Ok(Self {
            rows,
            cols,
            cells: vec![false; cell_count],
            next: vec![false; cell_count],
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Row-major cell states
    #[allow(dead_code)]
    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Number of live cells
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row < self.rows && col < self.cols {
            Ok(row * self.cols + col)
        } else {
            Err(GridError::OutOfBounds {
                row,
                col,
                rows: self.rows,
                cols: self.cols,
            })
        }
    }

    #[allow(dead_code)]
    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        self.index(row, col).map(|idx| self.cells[idx])
    }

    #[allow(dead_code)]
    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flip a single cell, returning its new state
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Kill every cell
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Bring `count` uniformly chosen cells to life.
    ///
    /// Positions are drawn with replacement, so repeated picks and cells that
    /// were already alive collapse and the population grows by at most `count`.
    pub fn randomize<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) {
        for _ in 0..count {
            let row = rng.gen_range(0..self.rows);
            let col = rng.gen_range(0..self.cols);
            self.cells[row * self.cols + col] = true;
        }
    }

    /// Live cells among the 8 neighbors of `(row, col)`, wrapping at the edges
    #[allow(dead_code)]
    pub fn live_neighbors(&self, row: usize, col: usize) -> Result<u8, GridError> {
        self.index(row, col)?;
        Ok(self.count_live_neighbors(row, col))
    }

    fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        let mut count = 0;

        for row_offset in -1..=1 {
            for col_offset in -1..=1 {
                if row_offset == 0 && col_offset == 0 {
                    continue;
                }

                let neighbor_row = (row as isize + row_offset).rem_euclid(self.rows as isize) as usize;
                let neighbor_col = (col as isize + col_offset).rem_euclid(self.cols as isize) as usize;

                if self.cells[neighbor_row * self.cols + neighbor_col] {
                    count += 1;
                }
            }
        }

        count
    }

    /// Advance the whole board by one generation.
    ///
    /// Next states are computed from the current generation only, then
    /// committed together.
    pub fn step(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let idx = row * self.cols + col;
                let live_neighbors = self.count_live_neighbors(row, col);
                self.next[idx] = next_state(self.cells[idx], live_neighbors);
            }
        }

        std::mem::swap(&mut self.cells, &mut self.next);
    }

    /// Cell states packed for upload to the board storage buffer
    pub fn to_gpu_cells(&self) -> Vec<GpuCell> {
        self.cells.iter().map(|&alive| GpuCell::from(alive)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    /// Build a grid from rows of `#` (alive) and `.` (dead)
    fn grid_from_rows(rows: &[&str]) -> Grid {
        let mut grid = Grid::new(rows.len(), rows[0].len()).unwrap();
        for (row, line) in rows.iter().enumerate() {
            assert_eq!(line.len(), grid.cols(), "ragged pattern");
            for (col, ch) in line.chars().enumerate() {
                grid.set(row, col, ch == '#').unwrap();
            }
        }
        grid
    }

    fn render(grid: &Grid) -> Vec<String> {
        (0..grid.rows())
            .map(|row| {
                (0..grid.cols())
                    .map(|col| if grid.get(row, col).unwrap() { '#' } else { '.' })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_grid_creation() {
        let grid = Grid::new(25, 40).unwrap();
        assert_eq!(grid.rows(), 25);
        assert_eq!(grid.cols(), 40);
        assert_eq!(grid.cells().len(), 1000);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_invalid_dimensions() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions { rows: 0, cols: 5 }
        );
        assert_eq!(
            Grid::new(5, 0).unwrap_err(),
            GridError::InvalidDimensions { rows: 5, cols: 0 }
        );
        assert!(Grid::new(1, 1).is_ok());
    }

    #[test]
    fn test_dimensions_overflow() {
        assert_eq!(
            Grid::new(usize::MAX, 2).unwrap_err(),
            GridError::InvalidDimensions { rows: usize::MAX, cols: 2 }
        );
    }

    #[test]
    fn test_neighbor_wrap() {
        let grid = grid_from_rows(&["#..", "...", "..."]);
        // Diagonal wrap from the opposite corner
        assert_eq!(grid.live_neighbors(2, 2).unwrap(), 1);
        // Direct neighbor
        assert_eq!(grid.live_neighbors(1, 1).unwrap(), 1);
        // On a 3x3 torus every other cell touches (0, 0)
        for row in 0..3 {
            for col in 0..3 {
                if (row, col) != (0, 0) {
                    assert_eq!(grid.live_neighbors(row, col).unwrap(), 1, "({}, {})", row, col);
                }
            }
        }
        assert_eq!(grid.live_neighbors(0, 0).unwrap(), 0);
    }

    #[test]
    fn test_neighbor_wrap_edges() {
        let grid = grid_from_rows(&[
            ".....",
            ".....",
            "#....",
            ".....",
            ".....",
        ]);
        // Left edge wraps to the right edge
        assert_eq!(grid.live_neighbors(1, 4).unwrap(), 1);
        assert_eq!(grid.live_neighbors(2, 4).unwrap(), 1);
        assert_eq!(grid.live_neighbors(3, 4).unwrap(), 1);
        assert_eq!(grid.live_neighbors(2, 3).unwrap(), 0);
    }

    #[test]
    fn test_single_cell_is_its_own_neighbor() {
        let mut grid = grid_from_rows(&["#"]);
        assert_eq!(grid.live_neighbors(0, 0).unwrap(), 8);
        grid.step();
        assert!(!grid.get(0, 0).unwrap());
        grid.step();
        assert!(!grid.get(0, 0).unwrap());
    }

    #[test]
    fn test_birth() {
        let mut grid = grid_from_rows(&[
            ".....",
            ".#.#.",
            ".....",
            "..#..",
            ".....",
        ]);
        assert_eq!(grid.live_neighbors(2, 2).unwrap(), 3);
        grid.step();
        assert!(grid.get(2, 2).unwrap());
    }

    #[test]
    fn test_no_birth_with_two_or_four() {
        let mut two = grid_from_rows(&[
            ".....",
            ".#.#.",
            ".....",
            ".....",
            ".....",
        ]);
        two.step();
        assert!(!two.get(2, 2).unwrap());

        let mut four = grid_from_rows(&[
            ".....",
            ".#.#.",
            ".....",
            ".#.#.",
            ".....",
        ]);
        four.step();
        assert!(!four.get(2, 2).unwrap());
    }

    #[test]
    fn test_survival_and_death() {
        let neighbors = [(1, 1), (1, 2), (1, 3), (2, 1), (2, 3), (3, 1), (3, 2), (3, 3)];
        for n in 0..=8 {
            let mut grid = Grid::new(7, 7).unwrap();
            grid.set(2, 2, true).unwrap();
            for &(row, col) in &neighbors[..n] {
                grid.set(row, col, true).unwrap();
            }
            assert_eq!(grid.live_neighbors(2, 2).unwrap() as usize, n);
            grid.step();
            assert_eq!(grid.get(2, 2).unwrap(), n == 2 || n == 3, "{} neighbors", n);
        }
    }

    #[test]
    fn test_blinker_period_two() {
        let horizontal = [
            ".....",
            ".....",
            ".###.",
            ".....",
            ".....",
        ];
        let vertical = [
            ".....",
            "..#..",
            "..#..",
            "..#..",
            ".....",
        ];
        let mut grid = grid_from_rows(&horizontal);

        grid.step();
        assert_eq!(render(&grid), vertical);
        grid.step();
        assert_eq!(render(&grid), horizontal);
    }

    #[test]
    fn test_block_is_still_life() {
        let block = [
            "....",
            ".##.",
            ".##.",
            "....",
        ];
        let mut grid = grid_from_rows(&block);
        for _ in 0..3 {
            grid.step();
            assert_eq!(render(&grid), block);
        }
    }

    #[test]
    fn test_glider_wraps_around_torus() {
        let start = [
            ".#......",
            "..#.....",
            "###.....",
            "........",
            "........",
            "........",
            "........",
            "........",
        ];
        let mut grid = grid_from_rows(&start);

        // One diagonal cell every 4 generations, 8 cells to come home
        for _ in 0..32 {
            grid.step();
            assert_eq!(grid.population(), 5);
        }
        assert_eq!(render(&grid), start);
    }

    #[test]
    fn test_clear_idempotent() {
        let mut grid = grid_from_rows(&["#.#", ".#.", "##."]);
        grid.clear();
        assert_eq!(grid.population(), 0);
        assert!(grid.cells().iter().all(|&alive| !alive));

        let before = grid.cells().to_vec();
        grid.clear();
        assert_eq!(grid.cells(), before.as_slice());
    }

    #[test]
    fn test_randomize_bound() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(5, 5).unwrap();
        grid.randomize(300, &mut rng);
        let population = grid.population();
        assert!(population >= 1 && population <= 25, "population {}", population);

        let mut rng = StdRng::seed_from_u64(7);
        let mut grid = Grid::new(25, 40).unwrap();
        grid.randomize(10, &mut rng);
        let population = grid.population();
        assert!(population >= 1 && population <= 10, "population {}", population);
    }

    #[test]
    fn test_randomize_zero_count() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut grid = Grid::new(4, 4).unwrap();
        grid.randomize(0, &mut rng);
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_randomize_never_kills() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut grid = Grid::new(10, 10).unwrap();
        grid.set(4, 4, true).unwrap();
        grid.randomize(20, &mut rng);
        assert!(grid.get(4, 4).unwrap());
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut grid = grid_from_rows(&["#..", ".#.", "..#"]);
        let before = grid.cells().to_vec();

        assert!(grid.toggle(0, 1).unwrap());
        assert!(grid.get(0, 1).unwrap());
        assert!(!grid.toggle(0, 1).unwrap());

        assert_eq!(grid.cells(), before.as_slice());
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let mut grid = grid_from_rows(&["#..", ".#.", "..#"]);
        let before = grid.cells().to_vec();
        let rows = grid.rows();
        let cols = grid.cols();

        assert_eq!(
            grid.get(rows, 0).unwrap_err(),
            GridError::OutOfBounds { row: 3, col: 0, rows: 3, cols: 3 }
        );
        assert!(matches!(
            grid.set(usize::MAX, 0, true),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(matches!(
            grid.toggle(0, cols),
            Err(GridError::OutOfBounds { .. })
        ));
        assert!(grid.live_neighbors(0, cols).is_err());

        assert_eq!(grid.cells(), before.as_slice());
    }

    #[test]
    fn test_gpu_cells_match_grid() {
        let grid = grid_from_rows(&["#.", ".#"]);
        let cells = grid.to_gpu_cells();
        assert_eq!(
            cells,
            vec![GpuCell::ALIVE, GpuCell::DEAD, GpuCell::DEAD, GpuCell::ALIVE]
        );
    }
}
