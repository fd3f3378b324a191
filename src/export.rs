//! Flat CSV export for the two analysis result shapes.

use crate::analysis::{CentroidSample, LifetimeOutcome};
use crate::error::Result;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Write one `Mean lifetime` row per stabilized trial. Timed-out trials carry
/// no lifetime and are skipped. Returns the number of rows written.
pub fn write_lifetimes(path: &Path, outcomes: &[LifetimeOutcome]) -> Result<usize> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "Mean lifetime")?;
    let mut rows = 0;
    for outcome in outcomes {
        if let LifetimeOutcome::Stabilized(generation) = outcome {
            writeln!(out, "{generation}")?;
            rows += 1;
        }
    }
    out.flush()?;
    Ok(rows)
}

/// Write the centroid time series as `X_pos,Y_pos,T_time` rows, one per
/// generation. X is the mean row index, Y the mean column index.
pub fn write_centroids(path: &Path, samples: &[CentroidSample]) -> Result<()> {
    let mut out = BufWriter::new(File::create(path)?);
    writeln!(out, "X_pos,Y_pos,T_time")?;
    for sample in samples {
        writeln!(out, "{},{},{}", sample.row, sample.col, sample.time)?;
    }
    out.flush()?;
    Ok(())
}
