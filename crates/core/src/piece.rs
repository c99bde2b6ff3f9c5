//! Piece module - the active falling piece as a value type
//!
//! A piece never mutates itself in place: translations and rotations return new
//! instances, and the game loop decides whether to adopt them.

use crate::shapes::{self, PieceCells, ShapeMask};
use crate::types::{PieceKind, Rotation, SPAWN_X, SPAWN_Y};

/// A tetromino placed on the grid by the top-left corner of its 4x4 box
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    pub fn new(kind: PieceKind, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            kind,
            rotation,
            x,
            y,
        }
    }

    /// Create a new piece at the spawn position
    pub fn spawn(kind: PieceKind) -> Self {
        Self::new(kind, Rotation::North, SPAWN_X, SPAWN_Y)
    }

    /// The 4x4 mask for the current rotation
    pub fn mask(&self) -> &'static ShapeMask {
        shapes::orientations(self.kind, self.rotation)
    }

    /// Occupied offsets relative to the bounding box
    pub fn offsets(&self) -> PieceCells {
        shapes::cells(self.kind, self.rotation)
    }

    /// Absolute grid coordinates of the four occupied cells.
    ///
    /// Computed in `i16` so that pieces far off the grid cannot overflow.
    pub fn cells(&self) -> [(i16, i16); 4] {
        self.offsets()
            .map(|(dx, dy)| (self.x as i16 + dx as i16, self.y as i16 + dy as i16))
    }

    /// A copy moved by (dx, dy)
    pub fn translated(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
            ..*self
        }
    }

    /// A copy rotated by `steps` clockwise steps (negative for counter-clockwise)
    pub fn rotated(&self, steps: i8) -> Self {
        Self {
            rotation: self.rotation.stepped(steps),
            ..*self
        }
    }

    pub fn rotated_cw(&self) -> Self {
        self.rotated(1)
    }

    pub fn rotated_ccw(&self) -> Self {
        self.rotated(-1)
    }
}
