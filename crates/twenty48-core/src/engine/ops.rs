//! Pure grid transforms behind [`super::state::Game`].
//!
//! Everything here is deterministic and allocation-local: functions take the
//! current cells and return new ones, never touching an RNG. All four
//! directions reduce to the leftward merge via transpose and reverse.

use super::state::{Cell, Move, Score};

/// Slide and merge `cells` toward `direction`.
///
/// Returns the resulting grid and the score gained, the sum of every merged
/// tile's new value. The input is never mutated; comparing output to input
/// tells the caller whether the move was effective.
pub(crate) fn slide(cells: &[Cell], n: usize, direction: Move) -> (Vec<Cell>, Score) {
    let vertical = matches!(direction, Move::Up | Move::Down);
    let reversed = matches!(direction, Move::Right | Move::Down);

    // Unify on leftward merges: vertical moves work on the transpose,
    // right/down moves on reversed lines.
    let mut grid = if vertical {
        transpose(cells, n)
    } else {
        cells.to_vec()
    };

    let mut gain = 0;
    for row in grid.chunks_mut(n) {
        if reversed {
            row.reverse();
        }
        gain += merge_row(row);
        if reversed {
            row.reverse();
        }
    }

    if vertical {
        grid = transpose(&grid, n);
    }
    (grid, gain)
}

/// Merge one line leftward in place, returning the score gained.
///
/// Non-zero tiles compact toward index 0, then one left-to-right pass merges
/// equal adjacent pairs. Each tile merges at most once per move: a merged
/// tile never chains ([4,4,8] stays [8,8], never 16), and of three equal
/// tiles the two closest to the move edge pair up.
fn merge_row(row: &mut [Cell]) -> Score {
    let mut packed: Vec<Cell> = row.iter().copied().filter(|&v| v != 0).collect();

    let mut gain: Score = 0;
    let mut i = 0;
    while i + 1 < packed.len() {
        if packed[i] == packed[i + 1] {
            packed[i] *= 2;
            gain += Score::from(packed[i]);
            packed.remove(i + 1);
        }
        i += 1;
    }

    for (idx, slot) in row.iter_mut().enumerate() {
        *slot = packed.get(idx).copied().unwrap_or(0);
    }
    gain
}

/// Transpose an n×n row-major grid.
pub(crate) fn transpose(cells: &[Cell], n: usize) -> Vec<Cell> {
    let mut out = vec![0; cells.len()];
    for r in 0..n {
        for c in 0..n {
            out[c * n + r] = cells[r * n + c];
        }
    }
    out
}

/// True when the grid admits no effective move: no empty cell and no equal
/// horizontal or vertical neighbors.
pub(crate) fn is_stuck(cells: &[Cell], n: usize) -> bool {
    if cells.iter().any(|&v| v == 0) {
        return false;
    }
    for r in 0..n {
        for c in 0..n {
            let value = cells[r * n + c];
            if c + 1 < n && cells[r * n + c + 1] == value {
                return false;
            }
            if r + 1 < n && cells[(r + 1) * n + c] == value {
                return false;
            }
        }
    }
    true
}
