//! The Life rule and Moore-neighborhood counting.
//!
//! Both boundary modes walk the same eight offsets around a cell:
//!
//! - **Finite**: a neighbor position off the board is skipped.
//! - **Toroidal**: a position one step past an edge wraps to the opposite
//!   edge (`-1 -> width - 1`, `width -> 0`, same for `y`).
//!
//! [`next_generation`] is a full copy-then-scan pass over the board. The
//! source board is never mutated.

use chronolife_types::{Board, BoundaryMode, NeighborCounts};

/// The eight Moore-neighborhood offsets, excluding `(0, 0)`.
const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Step one cell along an axis of length `len`, wrapping at both ends.
const fn wrap_step(pos: usize, delta: isize, len: usize) -> Option<usize> {
    match delta {
        -1 => {
            if pos == 0 {
                len.checked_sub(1)
            } else {
                pos.checked_sub(1)
            }
        }
        1 => match pos.checked_add(1) {
            Some(next) if next >= len => Some(0),
            other => other,
        },
        _ => Some(pos),
    }
}

/// Step one cell along an axis of length `len`, returning `None` past an edge.
fn clamp_step(pos: usize, delta: isize, len: usize) -> Option<usize> {
    pos.checked_add_signed(delta).filter(|&next| next < len)
}

/// Count the live neighbors of `(x, y)` under the given boundary mode.
pub fn count_neighbors(board: &Board, boundary: BoundaryMode, x: usize, y: usize) -> u8 {
    let (width, height) = (board.width(), board.height());
    let mut count: u8 = 0;
    for &(dx, dy) in &NEIGHBOR_OFFSETS {
        let position = match boundary {
            BoundaryMode::Finite => clamp_step(x, dx, width).zip(clamp_step(y, dy, height)),
            BoundaryMode::Toroidal => wrap_step(x, dx, width).zip(wrap_step(y, dy, height)),
        };
        if position.and_then(|(nx, ny)| board.get(nx, ny)) == Some(true) {
            count = count.saturating_add(1);
        }
    }
    count
}

/// Apply the Life rule to a single cell.
///
/// A live cell survives with two or three neighbors; a dead cell is born
/// with exactly three. Everything else is dead next generation.
pub const fn next_state(alive: bool, neighbors: u8) -> bool {
    matches!((alive, neighbors), (true, 2 | 3) | (false, 3))
}

/// Compute the generation that follows `board`.
pub fn next_generation(board: &Board, boundary: BoundaryMode) -> Board {
    let mut next = board.clone();
    for y in 0..board.height() {
        for x in 0..board.width() {
            let alive = board.get(x, y).unwrap_or(false);
            let neighbors = count_neighbors(board, boundary, x, y);
            let survives = next_state(alive, neighbors);
            if survives != alive {
                next.set(x, y, survives);
            }
        }
    }
    next
}

/// Neighbor counts for every cell of `board`.
pub fn neighbor_counts(board: &Board, boundary: BoundaryMode) -> NeighborCounts {
    let mut counts = NeighborCounts::shaped_like(board);
    for y in 0..board.height() {
        for x in 0..board.width() {
            counts.set(x, y, count_neighbors(board, boundary, x, y));
        }
    }
    counts
}
