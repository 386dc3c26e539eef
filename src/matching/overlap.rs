//! Greedy one-to-one resolution of a coefficient matrix.
//!
//! Each pass scans every row and column for its maximum (lowest index wins
//! ties). A cell that is the maximum of both its row and its column is a
//! mutually-preferred pair: it is recorded when it reaches the match minimum,
//! and its row and column are then consumed either way. Passes repeat until
//! every cell has been consumed.
//!
//! A weak mutual maximum still consumes its row and column. Those strings can
//! never match anything afterwards, even if a better partner is revealed later.

use tracing::{debug, trace};

use crate::core::types::{Overlap, OverlapMatch};
use crate::matching::scoring::CoefficientMatrix;

/// Written over consumed cells; below any valid coefficient
const CONSUMED: f64 = -1.0;

/// Resolve the overlap encoded in `matrix`, accepting pairs scoring at least `match_minimum`.
///
/// The matrix is consumed in place. A matrix with zero rows or columns
/// resolves to nothing matched.
#[must_use]
pub fn resolve_overlap(mut matrix: CoefficientMatrix, match_minimum: f64) -> Overlap {
    let (rows, cols) = (matrix.rows(), matrix.cols());
    let mut overlap = Overlap::unmatched(rows);

    if matrix.is_empty() {
        debug!(rows, cols, "Empty coefficient matrix, nothing to resolve");
        return overlap;
    }

    let mut row_live = vec![true; rows];
    let mut col_live = vec![true; cols];
    let mut live_rows = rows;
    let mut live_cols = cols;

    // Every cell is consumed once either all rows or all columns are
    while live_rows > 0 && live_cols > 0 {
        overlap.passes += 1;

        let row_best: Vec<usize> = (0..rows).map(|i| first_max(matrix.row(i)).0).collect();

        for j in 0..cols {
            let (i, best) = column_max(&matrix, j);
            if row_best[i] != j {
                continue;
            }

            // Consumed cells sit below any valid threshold
            if best >= match_minimum {
                trace!(left = i, right = j, coefficient = best, "Accepted mutual maximum");
                overlap.mapping[i] = Some(j);
                overlap.matches.push(OverlapMatch {
                    left: i,
                    right: j,
                    coefficient: best,
                });
            } else if best > CONSUMED {
                trace!(
                    left = i,
                    right = j,
                    coefficient = best,
                    "Mutual maximum below match minimum"
                );
            }

            consume(&mut matrix, i, j);
            if row_live[i] {
                row_live[i] = false;
                live_rows -= 1;
            }
            if col_live[j] {
                col_live[j] = false;
                live_cols -= 1;
            }
        }

        trace!(pass = overlap.passes, live_rows, live_cols, "Resolution pass complete");
    }

    debug!(
        rows,
        cols,
        passes = overlap.passes,
        matches = overlap.matches.len(),
        "Resolved overlap"
    );

    overlap
}

/// Index and value of the first maximum in `values`
fn first_max(values: &[f64]) -> (usize, f64) {
    let mut best = (0, values[0]);
    for (idx, &value) in values.iter().enumerate().skip(1) {
        if value > best.1 {
            best = (idx, value);
        }
    }
    best
}

/// Row index and value of the first maximum in column `col`
fn column_max(matrix: &CoefficientMatrix, col: usize) -> (usize, f64) {
    let mut best = (0, matrix.at(0, col));
    for row in 1..matrix.rows() {
        let value = matrix.at(row, col);
        if value > best.1 {
            best = (row, value);
        }
    }
    best
}

/// Remove a row and a column from all future passes
fn consume(matrix: &mut CoefficientMatrix, row: usize, col: usize) {
    for i in 0..matrix.rows() {
        matrix.set(i, col, CONSUMED);
    }
    matrix.row_mut(row).fill(CONSUMED);
}
