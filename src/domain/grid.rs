use super::{Cell, GridError, Outcome};

/// Moore neighborhood offsets as (row, col). Counting does not depend on order.
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (-1, 0), (-1, 1),
    (0, -1),           (0, 1),
    (1, -1),  (1, 0),  (1, 1),
];

/// Grid manages the 2D cellular automaton grid.
/// Holds two equally sized buffers: rules read `current` and write `next`,
/// and `swap` publishes `next` once a whole pass is done.
#[derive(Clone, Debug)]
pub struct Grid {
    height: usize,
    width: usize,
    current: Vec<Cell>,
    next: Vec<Cell>,
}

impl Grid {
    /// Create a new grid with all cells initially dead
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height == 0 || width == 0 {
            return Err(GridError::InvalidDimensions { height, width });
        }

        let current: Vec<Cell> = (0..height)
            .flat_map(|row| (0..width).map(move |col| Cell::dead(row, col)))
            .collect();
        let next = current.clone();

        Ok(Self {
            height,
            width,
            current,
            next,
        })
    }

    /// Get grid dimensions as (height, width)
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.height, self.width)
    }

    pub const fn height(&self) -> usize {
        self.height
    }

    pub const fn width(&self) -> usize {
        self.width
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, row: usize, col: usize) -> usize {
        row * self.width + col
    }

    /// Index for signed coordinates, `None` when off the grid
    fn checked_index(&self, row: isize, col: isize) -> Option<usize> {
        let (row, col) = (usize::try_from(row).ok()?, usize::try_from(col).ok()?);
        (row < self.height && col < self.width).then(|| self.get_index(row, col))
    }

    /// Whether signed coordinates fall inside the grid
    pub fn contains(&self, row: isize, col: isize) -> bool {
        self.checked_index(row, col).is_some()
    }

    /// Get the cell at position in the current generation.
    ///
    /// # Panics
    /// Panics if the position is out of bounds.
    pub fn get(&self, row: usize, col: usize) -> &Cell {
        assert!(
            row < self.height && col < self.width,
            "cell ({row}, {col}) out of bounds for {}x{} grid",
            self.height,
            self.width
        );
        &self.current[self.get_index(row, col)]
    }

    /// Mark a cell alive in the current generation. Off-grid positions are ignored.
    pub fn set_alive(&mut self, row: isize, col: isize) {
        if let Some(idx) = self.checked_index(row, col) {
            self.current[idx].revive();
        }
    }

    /// Mark a cell dead in the current generation. Off-grid positions are ignored.
    pub fn set_dead(&mut self, row: isize, col: isize) {
        if let Some(idx) = self.checked_index(row, col) {
            self.current[idx].kill();
        }
    }

    /// Count live neighbors without wrapping: offsets leaving the grid are skipped
    pub fn count_live_neighbors(&self, row: usize, col: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .filter_map(|&(dr, dc)| self.checked_index(row as isize + dr, col as isize + dc))
            .filter(|&idx| self.current[idx].is_alive())
            .count() as u8
    }

    /// Write a rule outcome for one cell into the next generation.
    /// The current generation is left untouched until `swap`.
    pub(crate) fn stage(&mut self, row: usize, col: usize, outcome: Outcome) {
        debug_assert!(row < self.height && col < self.width);
        let idx = self.get_index(row, col);
        let was_alive = self.current[idx].is_alive();
        self.next[idx].apply(was_alive, outcome);
    }

    /// Publish the staged generation as current.
    /// Only meaningful after every cell has been staged.
    pub(crate) fn swap(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
    }

    /// Cells of one row of the current generation.
    ///
    /// # Panics
    /// Panics if the row is out of bounds.
    pub fn row(&self, row: usize) -> &[Cell] {
        assert!(
            row < self.height,
            "row {row} out of bounds for {}x{} grid",
            self.height,
            self.width
        );
        let start = self.get_index(row, 0);
        &self.current[start..start + self.width]
    }

    /// Iterate over the rows of the current generation
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.current.chunks(self.width)
    }

    /// Iterate over all cells of the current generation in row-major order
    pub fn iter_cells(&self) -> impl Iterator<Item = &Cell> + '_ {
        self.current.iter()
    }

    /// Number of live cells in the current generation
    pub fn population(&self) -> usize {
        self.current.iter().filter(|cell| cell.is_alive()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_grid(height: usize, width: usize) -> Grid {
        let mut grid = Grid::new(height, width).unwrap();
        for row in 0..height as isize {
            for col in 0..width as isize {
                grid.set_alive(row, col);
            }
        }
        grid
    }

    #[test]
    fn test_new_grid_is_dead_and_indexed() {
        let grid = Grid::new(4, 6).unwrap();
        assert_eq!(grid.dimensions(), (4, 6));
        assert_eq!(grid.population(), 0);
        for row in 0..4 {
            for col in 0..6 {
                let cell = grid.get(row, col);
                assert_eq!((cell.row(), cell.col()), (row, col));
            }
        }
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert_eq!(
            Grid::new(0, 5).unwrap_err(),
            GridError::InvalidDimensions { height: 0, width: 5 }
        );
        assert!(Grid::new(5, 0).is_err());
        assert!(Grid::new(0, 0).is_err());
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_get_out_of_bounds_panics() {
        let grid = Grid::new(3, 3).unwrap();
        grid.get(3, 0);
    }

    #[test]
    fn test_set_alive_and_dead_are_idempotent() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_alive(1, 1);
        grid.set_alive(1, 1);
        assert!(grid.get(1, 1).is_alive());
        assert_eq!(grid.population(), 1);

        grid.set_dead(1, 1);
        grid.set_dead(1, 1);
        assert!(!grid.get(1, 1).is_alive());
        assert_eq!(grid.population(), 0);
    }

    #[test]
    fn test_out_of_bounds_set_is_noop() {
        let mut grid = Grid::new(3, 4).unwrap();
        grid.set_alive(2, 2);

        for &(row, col) in &[(-1, 0), (0, -1), (3, 0), (0, 4), (-5, -5), (100, 100)] {
            grid.set_alive(row, col);
            grid.set_dead(row, col);
        }

        assert_eq!(grid.population(), 1);
        assert!(grid.get(2, 2).is_alive());
    }

    #[test]
    fn test_neighbor_counts_on_full_grid() {
        let grid = full_grid(4, 5);

        // corners
        assert_eq!(grid.count_live_neighbors(0, 0), 3);
        assert_eq!(grid.count_live_neighbors(0, 4), 3);
        assert_eq!(grid.count_live_neighbors(3, 0), 3);
        assert_eq!(grid.count_live_neighbors(3, 4), 3);

        // edges
        assert_eq!(grid.count_live_neighbors(0, 2), 5);
        assert_eq!(grid.count_live_neighbors(2, 0), 5);
        assert_eq!(grid.count_live_neighbors(3, 2), 5);
        assert_eq!(grid.count_live_neighbors(1, 4), 5);

        // interior
        assert_eq!(grid.count_live_neighbors(1, 1), 8);
        assert_eq!(grid.count_live_neighbors(2, 3), 8);
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_alive(1, 1);
        assert_eq!(grid.count_live_neighbors(1, 1), 0);
        assert_eq!(grid.count_live_neighbors(0, 0), 1);
    }

    #[test]
    fn test_no_wraparound() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_alive(0, 0);
        assert_eq!(grid.count_live_neighbors(2, 2), 0);
        assert_eq!(grid.count_live_neighbors(0, 2), 0);
        assert_eq!(grid.count_live_neighbors(2, 0), 0);
    }

    #[test]
    fn test_single_cell_grid() {
        let mut grid = Grid::new(1, 1).unwrap();
        grid.set_alive(0, 0);
        assert_eq!(grid.count_live_neighbors(0, 0), 0);
    }

    #[test]
    fn test_stage_is_invisible_until_swap() {
        let mut grid = Grid::new(2, 2).unwrap();
        grid.stage(0, 0, Outcome::Born);
        assert!(!grid.get(0, 0).is_alive());

        grid.swap();
        assert!(grid.get(0, 0).is_alive());
        assert_eq!(grid.get(0, 0).row(), 0);
        assert_eq!(grid.get(0, 0).col(), 0);
    }

    #[test]
    fn test_rows_cover_current_generation() {
        let mut grid = Grid::new(2, 3).unwrap();
        grid.set_alive(1, 2);
        let rows: Vec<_> = grid.rows().collect();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|row| row.len() == 3));
        assert!(grid.row(1)[2].is_alive());
        assert_eq!(grid.iter_cells().count(), 6);
    }

    #[test]
    #[should_panic(expected = "out of bounds")]
    fn test_row_out_of_bounds_panics() {
        let grid = Grid::new(2, 3).unwrap();
        grid.row(2);
    }

    #[test]
    fn test_contains() {
        let grid = Grid::new(2, 3).unwrap();
        assert!(grid.contains(1, 2));
        assert!(!grid.contains(2, 0));
        assert!(!grid.contains(0, -1));
    }
}
