use super::{CellState, LifeError, rules::Rule};
use rand::Rng;
use rayon::prelude::*;

/// Map any index onto `[0, extent)` so the grid wraps like a torus.
/// `-1` lands on `extent - 1` and `extent` lands on `0`.
///
/// # Panics
///
/// Panics if `extent` is 0. `LifeGrid::new` never produces a zero extent.
pub const fn wrap(index: isize, extent: usize) -> usize {
    index.rem_euclid(extent as isize) as usize
}

/// Offsets of the 8 Moore neighbors, the cell itself excluded
#[rustfmt::skip]
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1), (0, -1), (1, -1),
    (-1, 0),           (1, 0),
    (-1, 1),  (0, 1),  (1, 1),
];

/// LifeGrid owns the cell states of a fixed-size toroidal board.
pub struct LifeGrid {
    width: usize,
    height: usize,
    cells: Vec<CellState>,
}

impl LifeGrid {
    /// Create a new grid with every flag of every cell false
    pub fn new(width: usize, height: usize) -> Result<Self, LifeError> {
        // The cell count must fit a Vec and every index must fit an isize
        let len = width
            .checked_mul(height)
            .filter(|&len| len > 0 && len <= isize::MAX as usize / size_of::<CellState>().max(1))
            .ok_or(LifeError::InvalidDimension { width, height })?;
        Ok(Self {
            width,
            height,
            cells: vec![CellState::default(); len],
        })
    }

    /// Get grid dimensions
    pub const fn dimensions(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Convert 2D coordinates to 1D index
    const fn get_index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    /// Get cell at position (with bounds checking)
    pub fn get(&self, x: usize, y: usize) -> Option<CellState> {
        (x < self.width && y < self.height)
            .then(|| self.cells[self.get_index(x, y)])
    }

    pub fn is_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(CellState::is_alive)
    }

    pub fn was_alive(&self, x: usize, y: usize) -> bool {
        self.get(x, y).is_some_and(CellState::was_alive)
    }

    /// Set the current flag of a cell (painting and stamping).
    /// Out-of-range coordinates are ignored.
    pub fn set_alive(&mut self, x: usize, y: usize, alive: bool) {
        if x < self.width && y < self.height {
            let idx = self.get_index(x, y);
            self.cells[idx].set_alive(alive);
        }
    }

    /// Count live neighbors using toroidal wrapping
    pub fn neighbor_count(&self, x: usize, y: usize) -> u8 {
        NEIGHBOR_OFFSETS
            .iter()
            .map(|&(dx, dy)| {
                let nx = wrap(x as isize + dx, self.width);
                let ny = wrap(y as isize + dy, self.height);
                self.cells[self.get_index(nx, ny)]
            })
            .filter(|cell| cell.is_alive())
            .count() as u8
    }

    /// Next value of the cell at `idx`, read from current flags only
    fn next_state(&self, idx: usize, rule: &dyn Rule) -> bool {
        let (x, y) = (idx % self.width, idx / self.width);
        rule.next_state(self.cells[idx].is_alive(), self.neighbor_count(x, y))
    }

    /// Read phase of a step, one cell after another
    pub(super) fn stage_serial(&mut self, rule: &dyn Rule) {
        for idx in 0..self.cells.len() {
            let next = self.next_state(idx, rule);
            self.cells[idx].stage(next);
        }
    }

    /// Read phase of a step, computed with rayon before anything is staged
    pub(super) fn stage_parallel(&mut self, rule: &dyn Rule) {
        let next: Vec<bool> = (0..self.cells.len())
            .into_par_iter()
            .map(|idx| self.next_state(idx, rule))
            .collect();

        self.cells
            .iter_mut()
            .zip(next)
            .for_each(|(cell, alive)| cell.stage(alive));
    }

    /// Commit phase of a step
    pub(super) fn commit(&mut self) {
        self.cells.iter_mut().for_each(CellState::commit);
    }

    /// Set every flag of every cell to false
    pub fn clear(&mut self) {
        self.cells.iter_mut().for_each(|cell| *cell = CellState::default());
    }

    /// Fair coin per cell using the thread-local generator
    pub fn randomize(&mut self) {
        self.randomize_with(&mut rand::rng());
    }

    /// Fair coin per cell; previous and next are reset to false
    pub fn randomize_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.cells
            .iter_mut()
            .for_each(|cell| *cell = CellState::seeded(rng.random_bool(0.5)));
    }

    pub fn live_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_alive()).count()
    }

    /// Iterate over all cells with their positions
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, CellState)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, cell)| (idx % self.width, idx / self.width, *cell))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    fn grid_with(width: usize, height: usize, alive: &[(usize, usize)]) -> LifeGrid {
        let mut grid = LifeGrid::new(width, height).unwrap();
        for &(x, y) in alive {
            grid.set_alive(x, y, true);
        }
        grid
    }

    #[test]
    fn test_zero_dimension_is_rejected() {
        assert_eq!(
            LifeGrid::new(0, 5).err(),
            Some(LifeError::InvalidDimension { width: 0, height: 5 })
        );
        assert!(LifeGrid::new(5, 0).is_err());
    }

    #[test]
    fn test_oversized_dimensions_are_rejected() {
        assert_eq!(
            LifeGrid::new(usize::MAX, 2).err(),
            Some(LifeError::InvalidDimension { width: usize::MAX, height: 2 })
        );
        // Product fits a usize but not an allocation
        assert!(LifeGrid::new(isize::MAX as usize, 1).is_err());
        assert!(LifeGrid::new(1 << (usize::BITS / 2), 1 << (usize::BITS / 2)).is_err());
    }

    #[test]
    fn test_new_grid_is_dead() {
        let grid = LifeGrid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.iter_cells().count(), 12);
        assert!(grid.iter_cells().all(|(_, _, c)| c == CellState::default()));
    }

    #[test]
    fn test_wrap_at_both_edges() {
        for extent in 1..10 {
            assert_eq!(wrap(-1, extent), extent - 1);
            assert_eq!(wrap(extent as isize, extent), 0);
            for i in 0..extent {
                assert_eq!(wrap(i as isize, extent), i);
            }
        }
        assert_eq!(wrap(-7, 5), 3);
        assert_eq!(wrap(12, 5), 2);
    }

    #[test]
    #[should_panic]
    fn test_wrap_zero_extent_panics() {
        wrap(3, 0);
    }

    #[test]
    fn test_neighbor_count_excludes_self() {
        let grid = grid_with(5, 5, &[(2, 2)]);
        assert_eq!(grid.neighbor_count(2, 2), 0);
        assert_eq!(grid.neighbor_count(1, 1), 1);
        assert_eq!(grid.neighbor_count(4, 4), 0);
    }

    #[test]
    fn test_corner_neighbors_wrap() {
        // Opposite corners touch on a torus
        let grid = grid_with(6, 5, &[(5, 4), (0, 4), (5, 0)]);
        assert_eq!(grid.neighbor_count(0, 0), 3);
    }

    #[test]
    fn test_edge_counts_match_shifted_interior() {
        // Shifting the whole board must not change any count
        let alive = [(0, 0), (1, 0), (6, 3), (6, 4), (3, 4), (0, 2)];
        let (w, h) = (7, 5);
        let grid = grid_with(w, h, &alive);
        let shifted: Vec<_> = alive.iter().map(|&(x, y)| ((x + 3) % w, (y + 2) % h)).collect();
        let moved = grid_with(w, h, &shifted);

        for y in 0..h {
            for x in 0..w {
                assert_eq!(
                    grid.neighbor_count(x, y),
                    moved.neighbor_count((x + 3) % w, (y + 2) % h),
                    "mismatch at ({x}, {y})"
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_access() {
        let mut grid = LifeGrid::new(3, 3).unwrap();
        grid.set_alive(3, 0, true);
        assert_eq!(grid.live_count(), 0);
        assert!(grid.get(0, 3).is_none());
        assert!(!grid.is_alive(10, 10));
    }

    #[test]
    fn test_clear_resets_everything() {
        let mut grid = grid_with(4, 4, &[(0, 0), (1, 1)]);
        grid.stage_serial(&crate::domain::ConwayRule);
        grid.commit();
        grid.set_alive(3, 3, true);
        grid.clear();
        assert!(grid.iter_cells().all(|(_, _, c)| c == CellState::default()));
    }

    #[test]
    fn test_randomize_resets_previous() {
        let mut grid = grid_with(8, 8, &[(1, 1), (1, 2), (1, 3)]);
        grid.stage_serial(&crate::domain::ConwayRule);
        grid.commit();
        grid.randomize_with(&mut StdRng::seed_from_u64(7));
        assert!(grid.iter_cells().all(|(_, _, c)| !c.was_alive()));
    }

    #[test]
    fn test_randomize_is_a_fair_coin() {
        let mut rng = StdRng::seed_from_u64(2024);
        let mut grid = LifeGrid::new(50, 50).unwrap();
        let trials = 20;
        let mut alive = 0;
        for _ in 0..trials {
            grid.randomize_with(&mut rng);
            alive += grid.live_count();
        }

        let total = (trials * 50 * 50) as f64;
        let expected = total / 2.0;
        let alive = alive as f64;
        let dead = total - alive;
        let chi_square = (alive - expected).powi(2) / expected + (dead - expected).powi(2) / expected;
        // 1 degree of freedom, p = 0.001
        assert!(chi_square < 10.83, "chi-square {chi_square}");
    }
}
