//! The toroidal cell lattice and the B3/S23 transition rule.

use crate::error::{LifeError, Result};
use crate::patterns::{self, Pattern};
use rand::rngs::StdRng;
use rand::Rng;

/// An N×N toroidal grid of cells. Row and column indices wrap modulo the side
/// length, so there are no edge cells. The side length is fixed for the life
/// of the value; `step` returns a fresh grid rather than mutating in place.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Grid {
    size: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// An all-dead grid.
    pub fn dead(size: usize) -> Self {
        Self {
            size,
            cells: vec![false; size * size],
        }
    }

    /// Each cell independently alive with probability 0.5.
    pub fn random(size: usize, rng: &mut StdRng) -> Self {
        Self {
            size,
            cells: (0..size * size).map(|_| rng.gen_bool(0.5)).collect(),
        }
    }

    /// A dead grid seeded with the glider. Any `size >= 1` wraps cleanly, but
    /// sizes below ~30 put the pattern close enough to its wrapped images to
    /// collide within a few generations.
    pub fn spaceship(size: usize) -> Self {
        Self::dead(size).stamp(&patterns::GLIDER)
    }

    /// A dead grid seeded with the pentadecathlon oscillator. Same sizing
    /// caveat as [`Grid::spaceship`].
    pub fn oscillator(size: usize) -> Self {
        Self::dead(size).stamp(&patterns::PENTADECATHLON)
    }

    pub(crate) fn stamp(mut self, pattern: &Pattern) -> Self {
        let n = self.size as i32;
        let (ar, ac) = pattern.anchor;
        for &(dr, dc) in pattern.cells {
            let row = (ar as i32 + dr).rem_euclid(n) as usize;
            let col = (ac as i32 + dc).rem_euclid(n) as usize;
            self.cells[row * self.size + col] = true;
        }
        self
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        self.cells[(row % self.size) * self.size + col % self.size]
    }

    /// Coordinates of every alive cell, row-major.
    pub fn alive_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let n = self.size;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &alive)| alive)
            .map(move |(i, _)| (i / n, i % n))
    }

    pub fn population(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Alive-neighbor count for every cell, row-major, values in 0..=8.
    /// Pure function of the grid; the hot path of a generation step.
    pub fn neighbor_counts(&self) -> Vec<u8> {
        let n = self.size;
        let mut counts = vec![0u8; n * n];
        for row in 0..n {
            let up = (row + n - 1) % n;
            let down = (row + 1) % n;
            for col in 0..n {
                let left = (col + n - 1) % n;
                let right = (col + 1) % n;
                let mut count = 0u8;
                for (r, c) in [
                    (up, left),
                    (up, col),
                    (up, right),
                    (row, left),
                    (row, right),
                    (down, left),
                    (down, col),
                    (down, right),
                ] {
                    if self.cells[r * n + c] {
                        count += 1;
                    }
                }
                counts[row * n + col] = count;
            }
        }
        counts
    }

    /// One generation under B3/S23. The next state is computed entirely from
    /// this grid's counts, so no cell ever sees a partially updated neighborhood.
    pub fn step(&self) -> Grid {
        let counts = self.neighbor_counts();
        let cells = self
            .cells
            .iter()
            .zip(counts.iter())
            .map(|(&alive, &neighbors)| {
                matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3))
            })
            .collect();
        Grid {
            size: self.size,
            cells,
        }
    }

    /// Population-weighted mean (row, col) of the alive cells. An all-dead
    /// grid has no center of mass and is reported as an error, never as NaN.
    pub fn centroid(&self) -> Result<(f64, f64)> {
        let mut alive = 0usize;
        let mut row_sum = 0usize;
        let mut col_sum = 0usize;
        for (row, col) in self.alive_cells() {
            alive += 1;
            row_sum += row;
            col_sum += col;
        }
        if alive == 0 {
            return Err(LifeError::DegenerateCentroid);
        }
        Ok((row_sum as f64 / alive as f64, col_sum as f64 / alive as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use std::collections::BTreeSet;

    fn from_cells(size: usize, alive: &[(usize, usize)]) -> Grid {
        let mut grid = Grid::dead(size);
        for &(row, col) in alive {
            grid.cells[row * size + col] = true;
        }
        grid
    }

    fn alive_set(grid: &Grid) -> BTreeSet<(usize, usize)> {
        grid.alive_cells().collect()
    }

    /// Brute-force neighbor count used as the oracle for the fast path.
    fn count_at(grid: &Grid, row: usize, col: usize) -> u8 {
        let n = grid.size() as i32;
        let mut count = 0;
        for dr in -1..=1i32 {
            for dc in -1..=1i32 {
                if (dr, dc) == (0, 0) {
                    continue;
                }
                let r = (row as i32 + dr).rem_euclid(n) as usize;
                let c = (col as i32 + dc).rem_euclid(n) as usize;
                if grid.is_alive(r, c) {
                    count += 1;
                }
            }
        }
        count
    }

    #[test]
    fn neighbor_counts_small_grid() {
        // Blinker on a 5x5: the middle cell sees its two row-mates.
        let grid = from_cells(5, &[(2, 1), (2, 2), (2, 3)]);
        let counts = grid.neighbor_counts();
        assert_eq!(counts[2 * 5 + 2], 2);
        assert_eq!(counts[5 + 2], 3);
        assert_eq!(counts[3 * 5 + 2], 3);
        assert_eq!(counts[2 * 5], 1);
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn neighbor_counts_wrap_around_edges() {
        // A single corner cell is seen by all 8 wrapped neighbors.
        let grid = from_cells(4, &[(0, 0)]);
        let counts = grid.neighbor_counts();
        let expected: Vec<(usize, usize)> =
            vec![(3, 3), (3, 0), (3, 1), (0, 3), (0, 1), (1, 3), (1, 0), (1, 1)];
        for (row, col) in expected {
            assert_eq!(counts[row * 4 + col], 1, "at ({row},{col})");
        }
        assert_eq!(counts[0], 0);
    }

    #[test]
    fn rule_table_is_exhaustive() {
        // Every (state, count) pair lands in exactly one of the four branches.
        for alive in [false, true] {
            for neighbors in 0u8..=8 {
                let survives =
                    matches!((alive, neighbors), (true, 2) | (true, 3) | (false, 3));
                let expected = if alive {
                    (2..=3).contains(&neighbors)
                } else {
                    neighbors == 3
                };
                assert_eq!(survives, expected, "state {alive} count {neighbors}");
            }
        }
    }

    #[test]
    fn all_dead_is_a_fixed_point() {
        let grid = Grid::dead(10);
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn block_is_a_still_life() {
        let grid = from_cells(6, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
        assert_eq!(grid.step(), grid);
    }

    #[test]
    fn blinker_oscillates_with_period_two() {
        let grid = from_cells(5, &[(2, 1), (2, 2), (2, 3)]);
        let once = grid.step();
        assert_ne!(alive_set(&once), alive_set(&grid));
        assert_eq!(alive_set(&once.step()), alive_set(&grid));
    }

    #[test]
    fn pentadecathlon_returns_after_fifteen_steps() {
        let seed = Grid::oscillator(50);
        let mut grid = seed.clone();
        for step in 1..=15 {
            grid = grid.step();
            if step < 15 {
                assert_ne!(alive_set(&grid), alive_set(&seed), "early return at {step}");
            }
        }
        assert_eq!(alive_set(&grid), alive_set(&seed));
    }

    #[test]
    fn glider_translates_one_down_right_every_four_steps() {
        let n = 50;
        let seed = Grid::spaceship(n);
        let mut grid = seed.clone();
        for _ in 0..4 {
            grid = grid.step();
        }
        let translated: BTreeSet<(usize, usize)> = alive_set(&seed)
            .into_iter()
            .map(|(row, col)| ((row + 1) % n, (col + 1) % n))
            .collect();
        assert_eq!(alive_set(&grid), translated);
    }

    #[test]
    fn random_fill_is_reproducible_from_a_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(Grid::random(20, &mut a), Grid::random(20, &mut b));
    }

    #[test]
    fn centroid_of_single_cell_is_that_cell() {
        let grid = from_cells(9, &[(4, 6)]);
        assert_eq!(grid.centroid().unwrap(), (4.0, 6.0));
    }

    #[test]
    fn centroid_of_dead_grid_is_an_error() {
        assert!(matches!(
            Grid::dead(8).centroid(),
            Err(LifeError::DegenerateCentroid)
        ));
    }

    fn arb_grid() -> impl Strategy<Value = Grid> {
        (2usize..12).prop_flat_map(|size| {
            proptest::collection::vec(any::<bool>(), size * size)
                .prop_map(move |cells| Grid { size, cells })
        })
    }

    proptest! {
        #[test]
        fn counts_match_brute_force(grid in arb_grid()) {
            let counts = grid.neighbor_counts();
            let n = grid.size();
            for row in 0..n {
                for col in 0..n {
                    prop_assert_eq!(counts[row * n + col], count_at(&grid, row, col));
                }
            }
        }

        /// Cyclically rotating the grid rotates the count field identically.
        #[test]
        fn counts_are_shift_invariant(grid in arb_grid(), dr in 0usize..12, dc in 0usize..12) {
            let n = grid.size();
            let (dr, dc) = (dr % n, dc % n);
            let mut shifted = Grid::dead(n);
            for row in 0..n {
                for col in 0..n {
                    shifted.cells[((row + dr) % n) * n + (col + dc) % n] =
                        grid.cells[row * n + col];
                }
            }
            let counts = grid.neighbor_counts();
            let shifted_counts = shifted.neighbor_counts();
            for row in 0..n {
                for col in 0..n {
                    prop_assert_eq!(
                        shifted_counts[((row + dr) % n) * n + (col + dc) % n],
                        counts[row * n + col]
                    );
                }
            }
        }

        #[test]
        fn step_preserves_size(grid in arb_grid()) {
            prop_assert_eq!(grid.step().size(), grid.size());
        }
    }
}
