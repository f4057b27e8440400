// grid.rs - One generation of Conway's Game of Life

/// A single generation: a `width` x `height` matrix of cells stored row-major.
///
/// Dimensions only change through [`CellGrid::resize_preserving`],
/// [`CellGrid::resize_preserving_in_place`] or [`CellGrid::resize_destructive`].
/// Every cell access is bounds-checked and an out-of-range coordinate panics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CellGrid {
    width  : usize,
    height : usize,
    cells  : Vec<bool>,
}

impl CellGrid {
    /// Creates a grid with every cell dead.
    pub fn new(width: usize, height: usize) -> Self {
        Self { width, height, cells: vec![false; width * height] }
    }

    pub fn width(&self) -> usize { self.width }

    pub fn height(&self) -> usize { self.height }

    pub fn dimensions(&self) -> (usize, usize) { (self.width, self.height) }

    #[inline]
    fn index(&self, x: usize, y: usize) -> usize {
        if x >= self.width || y >= self.height {
            panic!("cell ({}, {}) is outside the {}x{} grid", x, y, self.width, self.height);
        }
        x + y * self.width
    }

    pub fn get(&self, x: usize, y: usize) -> bool {
        self.cells[self.index(x, y)]
    }

    pub fn set(&mut self, x: usize, y: usize, val: bool) {
        let i = self.index(x, y);
        self.cells[i] = val;
    }

    pub fn toggle(&mut self, x: usize, y: usize) {
        let i = self.index(x, y);
        self.cells[i] = !self.cells[i];
    }

    pub fn contains(&self, x: usize, y: usize) -> bool {
        x < self.width && y < self.height
    }

    /// Live cells in the Moore neighborhood of `(x, y)`. Cells past the edge
    /// count as dead, there is no wraparound.
    pub fn count_neighbors(&self, x: usize, y: usize) -> u8 {
        self.index(x, y);
        let x_lo = x.saturating_sub(1);
        let y_lo = y.saturating_sub(1);
        let x_hi = (x + 1).min(self.width.saturating_sub(1));
        let y_hi = (y + 1).min(self.height.saturating_sub(1));

        let mut count = 0;
        for ny in y_lo..=y_hi {
            for nx in x_lo..=x_hi {
                if (nx, ny) != (x, y) && self.cells[nx + ny * self.width] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Writes the next generation into `target`, reallocating it first if its
    /// dimensions don't match. Returns whether any cell changed.
    pub fn next_generation_into(&self, target: &mut CellGrid) -> bool {
        if target.dimensions() != self.dimensions() {
            target.resize_destructive(self.width, self.height);
        }

        let mut changed = false;
        for y in 0..self.height {
            for x in 0..self.width {
                let i = x + y * self.width;
                let alive = self.cells[i];
                let next_state = match (alive, self.count_neighbors(x, y)) {
                    (true, 2) | (true, 3) => true,   // Survival
                    (false, 3)            => true,   // Birth
                    _                     => false,  // Death or stays dead
                };
                changed |= next_state != alive;
                target.cells[i] = next_state;
            }
        }
        changed
    }

    pub fn next_generation(&self) -> (CellGrid, bool) {
        let mut target = CellGrid::new(self.width, self.height);
        let changed = self.next_generation_into(&mut target);
        (target, changed)
    }

    /// Returns a `width` x `height` copy holding the overlapping top-left
    /// rectangle of this grid. Cells outside the overlap are dead.
    pub fn resize_preserving(&self, width: usize, height: usize) -> CellGrid {
        if (width, height) == self.dimensions() {
            return self.clone();
        }

        let mut resized = CellGrid::new(width, height);
        let keep_w = width.min(self.width);
        for y in 0..height.min(self.height) {
            let src = y * self.width;
            let dst = y * width;
            resized.cells[dst..dst + keep_w].copy_from_slice(&self.cells[src..src + keep_w]);
        }
        resized
    }

    pub fn resize_preserving_in_place(&mut self, width: usize, height: usize) {
        if (width, height) != self.dimensions() {
            *self = self.resize_preserving(width, height);
        }
    }

    /// Reallocates to `width` x `height` with every cell dead.
    pub fn resize_destructive(&mut self, width: usize, height: usize) {
        *self = CellGrid::new(width, height);
    }

    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Coordinates of every live cell, row by row.
    pub fn iter_live(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let width = self.width;
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, alive)| **alive)
            .map(move |(i, _)| (i % width, i / width))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(width: usize, height: usize, live: &[(usize, usize)]) -> CellGrid {
        let mut grid = CellGrid::new(width, height);
        for &(x, y) in live {
            grid.set(x, y, true);
        }
        grid
    }

    #[test]
    fn new_grid_is_dead() {
        let grid = CellGrid::new(7, 4);
        assert_eq!(grid.dimensions(), (7, 4));
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn set_and_get_are_row_major() {
        let mut grid = CellGrid::new(3, 2);
        grid.set(2, 0, true);
        grid.set(0, 1, true);
        assert!(grid.get(2, 0));
        assert!(grid.get(0, 1));
        assert!(!grid.get(1, 0));
        assert_eq!(grid.iter_live().collect::<Vec<_>>(), vec![(2, 0), (0, 1)]);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn get_out_of_range_panics() {
        CellGrid::new(3, 3).get(3, 0);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn set_out_of_range_panics() {
        CellGrid::new(3, 3).set(0, 3, true);
    }

    #[test]
    fn neighbor_counts_are_edge_clamped() {
        let mut grid = CellGrid::new(3, 3);
        for y in 0..3 {
            for x in 0..3 {
                grid.set(x, y, true);
            }
        }
        assert_eq!(grid.count_neighbors(0, 0), 3);  // corner
        assert_eq!(grid.count_neighbors(1, 0), 5);  // edge
        assert_eq!(grid.count_neighbors(1, 1), 8);  // center
        assert_eq!(grid.count_neighbors(2, 2), 3);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn neighbor_count_past_the_right_edge_panics() {
        CellGrid::new(3, 3).count_neighbors(3, 1);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn neighbor_count_past_the_bottom_edge_panics() {
        CellGrid::new(3, 3).count_neighbors(1, 3);
    }

    #[test]
    #[should_panic(expected = "outside the 3x3 grid")]
    fn neighbor_count_far_outside_panics() {
        CellGrid::new(3, 3).count_neighbors(usize::MAX, 0);
    }

    #[test]
    fn single_cell_grid_has_no_neighbors() {
        let grid = grid_with(1, 1, &[(0, 0)]);
        assert_eq!(grid.count_neighbors(0, 0), 0);
    }

    #[test]
    fn block_is_a_fixed_point() {
        let block = grid_with(6, 6, &[(2, 2), (3, 2), (2, 3), (3, 3)]);
        let (next, changed) = block.next_generation();
        assert!(!changed);
        assert_eq!(next, block);
    }

    #[test]
    fn blinker_flips_orientation() {
        let horizontal = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let vertical = grid_with(5, 5, &[(2, 1), (2, 2), (2, 3)]);

        let (next, changed) = horizontal.next_generation();
        assert!(changed);
        assert_eq!(next, vertical);

        let (back, _) = next.next_generation();
        assert_eq!(back, horizontal);
    }

    #[test]
    fn next_generation_reallocates_mismatched_target() {
        let blinker = grid_with(5, 5, &[(1, 2), (2, 2), (3, 2)]);
        let mut target = grid_with(2, 9, &[(1, 8)]);
        assert!(blinker.next_generation_into(&mut target));
        assert_eq!(target.dimensions(), (5, 5));
        assert_eq!(target.iter_live().collect::<Vec<_>>(), vec![(2, 1), (2, 2), (2, 3)]);
    }

    #[test]
    fn resize_round_trip_keeps_the_overlap() {
        let original = grid_with(6, 4, &[(0, 0), (5, 0), (2, 2), (5, 3), (1, 3)]);

        let shrunk = original.resize_preserving(4, 5);
        assert_eq!(shrunk.dimensions(), (4, 5));
        assert!(shrunk.get(0, 0));
        assert!(shrunk.get(2, 2));
        assert!(shrunk.get(1, 3));
        // row 4 did not exist in the original
        assert!((0..4).all(|x| !shrunk.get(x, 4)));

        let restored = shrunk.resize_preserving(6, 4);
        assert_eq!(restored.dimensions(), (6, 4));
        for y in 0..4 {
            for x in 0..4 {
                assert_eq!(restored.get(x, y), original.get(x, y), "cell ({}, {})", x, y);
            }
        }
        // columns 4..6 were cut off by the first resize
        assert!(!restored.get(5, 0));
        assert!(!restored.get(5, 3));
    }

    #[test]
    fn resize_in_place_to_same_size_is_a_no_op() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        let before = grid.clone();
        grid.resize_preserving_in_place(3, 3);
        assert_eq!(grid, before);
    }

    #[test]
    fn resize_destructive_discards_content() {
        let mut grid = grid_with(3, 3, &[(1, 1)]);
        grid.resize_destructive(4, 2);
        assert_eq!(grid.dimensions(), (4, 2));
        assert_eq!(grid.live_cells(), 0);
    }

    #[test]
    fn equality_requires_matching_dimensions() {
        assert_ne!(CellGrid::new(2, 3), CellGrid::new(3, 2));
        assert_eq!(CellGrid::new(3, 2), CellGrid::new(3, 2));
        assert_ne!(grid_with(3, 2, &[(0, 0)]), CellGrid::new(3, 2));
    }
}
