//! Batch analyses built on top of the grid: lifetime-until-stability
//! statistics and center-of-mass trajectory tracking.

use crate::error::Result;
use crate::grid::Grid;
use rand::rngs::StdRng;
use rand::SeedableRng;
use rayon::prelude::*;

/// Consecutive zero-delta generations required to call a grid stable.
pub const STABILITY_WINDOW: u32 = 50;
/// Generation cap for a single lifetime trial.
pub const LIFETIME_CAP: u32 = 5000;
/// Default number of independent random trials in a lifetime batch.
pub const LIFETIME_TRIALS: usize = 2000;
/// Default length of a centroid trajectory.
pub const CENTROID_GENERATIONS: u32 = 200;

/// Result of a single lifetime trial. `Stabilized(g)` is the generation at
/// which the population last changed; `TimedOut` means the population never
/// held still for a full window within the cap. The two are deliberately
/// distinct variants so an instant stabilization (`Stabilized(0)`) cannot be
/// mistaken for a timeout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LifetimeOutcome {
    Stabilized(u32),
    TimedOut,
}

/// One point of a centroid trajectory. `row`/`col` are the population-weighted
/// mean indices of the alive cells at generation `time`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentroidSample {
    pub time: u32,
    pub row: f64,
    pub col: f64,
}

/// Advance `grid` until its population stays constant for `window` consecutive
/// generations, or until more than `cap` generations have elapsed.
pub fn lifetime(mut grid: Grid, cap: u32, window: u32) -> LifetimeOutcome {
    let mut time = 0u32;
    let mut constant = 0u32;
    loop {
        if time > cap {
            return LifetimeOutcome::TimedOut;
        }
        time += 1;
        let before = grid.population();
        grid = grid.step();
        if grid.population() == before {
            constant += 1;
            if constant == window {
                // Report the generation the population last changed, not the
                // generation the window filled up.
                return LifetimeOutcome::Stabilized(time - window);
            }
        } else {
            constant = 0;
        }
    }
}

/// Run `trials` independent lifetime trials on fresh random `size`×`size`
/// grids. Trials share no state: each derives its own RNG from `base_seed`
/// and the trial index, so the batch is deterministic for a given seed and
/// fans out across the rayon pool. Outcomes come back in trial order; a
/// timed-out trial is recorded like any other and never aborts the rest.
pub fn lifetime_batch(
    trials: usize,
    size: usize,
    base_seed: u64,
    cap: u32,
    window: u32,
) -> Vec<LifetimeOutcome> {
    (0..trials as u64)
        .into_par_iter()
        .map(|trial| {
            let mut rng = StdRng::seed_from_u64(base_seed.wrapping_add(trial));
            lifetime(Grid::random(size, &mut rng), cap, window)
        })
        .collect()
}

/// Record the centroid of `grid` for `generations` generations, stepping once
/// after each sample; the first sample describes the seed grid at t = 0.
///
/// A seed grid with no alive cells is an error. If the population dies out
/// mid-run the last known centroid is held for the remaining samples, so the
/// series always has exactly `generations` points.
pub fn track_centroid(mut grid: Grid, generations: u32) -> Result<Vec<CentroidSample>> {
    let mut last = grid.centroid()?;
    let mut samples = Vec::with_capacity(generations as usize);
    for time in 0..generations {
        if let Ok(centroid) = grid.centroid() {
            last = centroid;
        }
        samples.push(CentroidSample {
            time,
            row: last.0,
            col: last.1,
        });
        grid = grid.step();
    }
    Ok(samples)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LifeError;

    #[test]
    fn dead_grid_stabilizes_immediately() {
        assert_eq!(
            lifetime(Grid::dead(20), LIFETIME_CAP, STABILITY_WINDOW),
            LifetimeOutcome::Stabilized(0)
        );
    }

    fn single_cell_grid(size: usize, row: usize, col: usize) -> Grid {
        let pattern = crate::patterns::Pattern {
            name: "lone",
            anchor: (row, col),
            cells: &[(0, 0)],
        };
        Grid::dead(size).stamp(&pattern)
    }

    #[test]
    fn lone_cell_dies_at_generation_one() {
        // Dies of underpopulation on the first step, then the population is
        // constant; the reported lifetime is the last generation with change.
        assert_eq!(
            lifetime(single_cell_grid(20, 10, 10), LIFETIME_CAP, STABILITY_WINDOW),
            LifetimeOutcome::Stabilized(1)
        );
    }

    #[test]
    fn constant_population_pattern_stabilizes_at_zero() {
        // The glider keeps exactly 5 alive cells in every phase, so the
        // population never changes even though the grid does.
        assert_eq!(
            lifetime(Grid::spaceship(50), LIFETIME_CAP, STABILITY_WINDOW),
            LifetimeOutcome::Stabilized(0)
        );
    }

    #[test]
    fn varying_population_oscillator_times_out() {
        // The pentadecathlon's population varies within its period, so it
        // never accumulates a full zero-delta window.
        assert_eq!(
            lifetime(Grid::oscillator(50), 500, STABILITY_WINDOW),
            LifetimeOutcome::TimedOut
        );
    }

    #[test]
    fn batch_is_deterministic_and_ordered() {
        let first = lifetime_batch(8, 16, 42, 200, 20);
        let second = lifetime_batch(8, 16, 42, 200, 20);
        assert_eq!(first.len(), 8);
        assert_eq!(first, second);
    }

    #[test]
    fn centroid_series_has_one_sample_per_generation() {
        let samples = track_centroid(Grid::spaceship(50), 200).unwrap();
        assert_eq!(samples.len(), 200);
        assert_eq!(samples[0].time, 0);
        assert_eq!(samples[199].time, 199);
    }

    #[test]
    fn glider_centroid_starts_at_its_seed_position() {
        let samples = track_centroid(Grid::spaceship(50), 1).unwrap();
        // Seed cells: rows 21,22,23,23,23 and cols 22,23,23,24,24.
        assert!((samples[0].row - 22.4).abs() < 1e-9);
        assert!((samples[0].col - 23.2).abs() < 1e-9);
    }

    #[test]
    fn glider_centroid_drifts_down_right() {
        let samples = track_centroid(Grid::spaceship(50), 80).unwrap();
        // One full cell of drift per 4 generations, monotone away from the seam.
        for window in samples.windows(5).step_by(4) {
            assert!((window[4].row - window[0].row - 1.0).abs() < 1e-9);
            assert!((window[4].col - window[0].col - 1.0).abs() < 1e-9);
        }
        for pair in samples.windows(2) {
            assert!(pair[1].row >= pair[0].row);
            assert!(pair[1].col >= pair[0].col);
        }
    }

    #[test]
    fn tracking_a_dead_seed_grid_is_an_error() {
        assert!(matches!(
            track_centroid(Grid::dead(30), 10),
            Err(LifeError::DegenerateCentroid)
        ));
    }

    #[test]
    fn tracking_holds_position_after_die_off() {
        // A lone cell dies after one step; the remaining samples hold its
        // last known centroid instead of erroring mid-series.
        let samples = track_centroid(single_cell_grid(20, 5, 7), 10).unwrap();
        assert_eq!(samples.len(), 10);
        for sample in &samples {
            assert_eq!((sample.row, sample.col), (5.0, 7.0));
        }
    }
}
