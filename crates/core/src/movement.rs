//! Movement module - resolving shift and rotate requests against the grid
//!
//! Rotation uses a single-axis wall kick: when the rotated piece collides, it is
//! tried `kick_distance` columns to the right, then the same distance to the left.
//! There is no vertical kick and no per-transition kick table; this is a
//! deliberate simplification of the guideline rotation system.

use arrayvec::ArrayVec;

use crate::collision::collides;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::shapes::kick_distance;
use crate::types::FrameInput;

/// A discrete movement request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveRequest {
    #[default]
    None,
    ShiftLeft,
    ShiftRight,
    RotateCw,
    RotateCcw,
}

impl MoveRequest {
    /// Movement requests carried by a frame's input, in the order they are applied:
    /// rotations first, then shifts.
    pub fn from_input(input: &FrameInput) -> ArrayVec<MoveRequest, 4> {
        let mut out = ArrayVec::new();
        if input.rotate_cw {
            out.push(MoveRequest::RotateCw);
        }
        if input.rotate_ccw {
            out.push(MoveRequest::RotateCcw);
        }
        if input.shift_left {
            out.push(MoveRequest::ShiftLeft);
        }
        if input.shift_right {
            out.push(MoveRequest::ShiftRight);
        }
        out
    }
}

/// Outcome of resolving a [`MoveRequest`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Movement {
    /// Nothing was requested
    Unchanged,
    /// The candidate fit without adjustment
    Moved(Piece),
    /// A rotation fit only after a horizontal kick of `dx` columns
    Kicked { piece: Piece, dx: i8 },
    /// Every candidate collided; the piece stays where it was
    Blocked,
}

impl Movement {
    /// The piece to adopt, if the request was accepted
    pub fn piece(&self) -> Option<Piece> {
        match *self {
            Movement::Moved(piece) | Movement::Kicked { piece, .. } => Some(piece),
            Movement::Unchanged | Movement::Blocked => None,
        }
    }

    pub fn accepted(&self) -> bool {
        self.piece().is_some()
    }

    /// The piece after this movement, given the piece it was resolved from
    pub fn apply_to(&self, current: Piece) -> Piece {
        self.piece().unwrap_or(current)
    }
}

/// Adopt `candidate` if it does not collide, otherwise keep `current`.
///
/// Returns the resulting piece and whether the candidate was accepted.
pub fn maybe_move(grid: &Grid, current: Piece, candidate: Piece) -> (Piece, bool) {
    if collides(grid, &candidate) {
        (current, false)
    } else {
        (candidate, true)
    }
}

/// Resolve a movement request for `piece` against `grid`. Pure: nothing is mutated.
pub fn resolve(grid: &Grid, piece: &Piece, request: MoveRequest) -> Movement {
    match request {
        MoveRequest::None => Movement::Unchanged,
        MoveRequest::ShiftLeft => try_shift(grid, piece, -1),
        MoveRequest::ShiftRight => try_shift(grid, piece, 1),
        MoveRequest::RotateCw => try_rotate(grid, piece, 1),
        MoveRequest::RotateCcw => try_rotate(grid, piece, -1),
    }
}

/// Try to move the piece `dx` columns
pub fn try_shift(grid: &Grid, piece: &Piece, dx: i8) -> Movement {
    let candidate = piece.translated(dx, 0);
    if collides(grid, &candidate) {
        Movement::Blocked
    } else {
        Movement::Moved(candidate)
    }
}

/// Try to rotate the piece by `steps`, falling back to a horizontal wall kick
pub fn try_rotate(grid: &Grid, piece: &Piece, steps: i8) -> Movement {
    let rotated = piece.rotated(steps);
    if !collides(grid, &rotated) {
        return Movement::Moved(rotated);
    }

    let kick = kick_distance(piece.kind);
    for dx in [kick, -kick] {
        let kicked = rotated.translated(dx, 0);
        if !collides(grid, &kicked) {
            return Movement::Kicked { piece: kicked, dx };
        }
    }

    Movement::Blocked
}
