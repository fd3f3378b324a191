//! Named seed patterns as offset templates.
//!
//! Each pattern is a list of (row, col) offsets relative to an anchor, so the
//! grid size and the placement stay independent. Offsets may be negative; the
//! grid wraps them modulo its side length when stamping.

/// A canonical Life pattern anchored somewhere on the grid.
pub struct Pattern {
    pub name: &'static str,
    /// (row, col) the offsets are taken from.
    pub anchor: (usize, usize),
    /// Alive cells as offsets from the anchor.
    pub cells: &'static [(i32, i32)],
}

/// The glider: translates by (+1, +1) every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    anchor: (23, 23),
    cells: &[(0, 0), (0, 1), (0, -1), (-1, 1), (-2, 0)],
};

/// The pentadecathlon, a period-15 oscillator.
pub const PENTADECATHLON: Pattern = Pattern {
    name: "pentadecathlon",
    anchor: (20, 20),
    cells: &[
        (0, 0), (0, 1), (0, 2), (-1, 2), (1, 2),
        (-1, 5), (0, 5), (1, 5),
        (0, 6), (0, 7), (0, 8), (0, 9),
        (0, 10), (-1, 10), (1, 10),
        (0, 13), (-1, 13), (1, 13),
        (0, 14), (0, 15),
    ],
};

impl Pattern {
    /// Widest row/col extent of the offsets, a lower bound on a grid size
    /// where the stamped pattern does not immediately collide with itself.
    pub fn extent(&self) -> usize {
        let span = |values: &mut dyn Iterator<Item = i32>| -> i32 {
            let (mut lo, mut hi) = (0, 0);
            for v in values {
                lo = lo.min(v);
                hi = hi.max(v);
            }
            hi - lo + 1
        };
        let rows = span(&mut self.cells.iter().map(|&(r, _)| r));
        let cols = span(&mut self.cells.iter().map(|&(_, c)| c));
        rows.max(cols) as usize
    }
}
