//! Collision module - placement tests and committing landed pieces

use crate::grid::Grid;
use crate::piece::Piece;

/// Check whether `piece` overlaps a wall, the floor, the ceiling or a filled cell.
///
/// Every occupied cell is bounds-checked before the grid is read.
pub fn collides(grid: &Grid, piece: &Piece) -> bool {
    piece.cells().iter().any(|&(x, y)| {
        if Grid::is_out_of_bounds(x, y) {
            return true;
        }
        grid.is_occupied(x, y)
    })
}

/// Write the piece's kind into every cell it covers.
///
/// No collision check: callers commit a piece only at a position that was
/// already found valid (the row above the one it collided at).
pub fn place(grid: &mut Grid, piece: &Piece) {
    for (x, y) in piece.cells() {
        let written = grid.set(x, y, Some(piece.kind));
        debug_assert!(written, "placed {:?} outside the grid at ({}, {})", piece, x, y);
    }
}
