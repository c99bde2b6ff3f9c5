//! Shapes module - the constant catalog of tetromino masks
//!
//! Every kind has four rotation states, each a 4x4 occupancy mask laid out as
//! `mask[row][col]`. The table is process-wide constant data; the occupied-cell
//! offsets are derived from it at compile time.

use crate::types::{PieceKind, Rotation};

/// 4x4 occupancy mask, indexed `[row][col]`
pub type ShapeMask = [[bool; 4]; 4];

/// Offset of a single mino relative to the piece's bounding box, as `(col, row)`
pub type MinoOffset = (i8, i8);

/// Occupied cells of one mask, in row-major order
pub type PieceCells = [MinoOffset; 4];

const fn mask(rows: [[u8; 4]; 4]) -> ShapeMask {
    let mut out = [[false; 4]; 4];
    let mut r = 0;
    while r < 4 {
        let mut c = 0;
        while c < 4 {
            out[r][c] = rows[r][c] != 0;
            c += 1;
        }
        r += 1;
    }
    out
}

/// Orientation table indexed `[kind][rotation]`
pub const ORIENTATIONS: [[ShapeMask; 4]; PieceKind::COUNT] = [
    // I
    [
        mask([[0, 0, 0, 0], [0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0]]),
        mask([[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0], [0, 0, 1, 0]]),
    ],
    // O
    [
        mask([[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [0, 1, 1, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
    ],
    // T
    [
        mask([[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [1, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
    ],
    // J
    [
        mask([[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 1, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [1, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [0, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0]]),
    ],
    // L
    [
        mask([[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 0, 0], [1, 1, 1, 0], [1, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[1, 1, 0, 0], [0, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
    ],
    // S
    [
        mask([[0, 0, 0, 0], [0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[1, 0, 0, 0], [1, 1, 0, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [0, 1, 1, 0], [0, 0, 1, 0], [0, 0, 0, 0]]),
    ],
    // Z
    [
        mask([[0, 0, 0, 0], [1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0]]),
        mask([[0, 1, 0, 0], [1, 1, 0, 0], [1, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]]),
        mask([[0, 0, 1, 0], [0, 1, 1, 0], [0, 1, 0, 0], [0, 0, 0, 0]]),
    ],
];

/// Collect the four occupied offsets of a mask. Fails to compile if a mask in the
/// table does not hold exactly four minos.
const fn mask_cells(m: &ShapeMask) -> PieceCells {
    let mut out = [(0i8, 0i8); 4];
    let mut n = 0;
    let mut r = 0;
    while r < 4 {
        let mut c = 0;
        while c < 4 {
            if m[r][c] {
                assert!(n < 4, "shape mask has more than four minos");
                out[n] = (c as i8, r as i8);
                n += 1;
            }
            c += 1;
        }
        r += 1;
    }
    assert!(n == 4, "shape mask has fewer than four minos");
    out
}

const fn build_cells() -> [[PieceCells; 4]; PieceKind::COUNT] {
    let mut out = [[[(0i8, 0i8); 4]; 4]; PieceKind::COUNT];
    let mut k = 0;
    while k < PieceKind::COUNT {
        let mut r = 0;
        while r < 4 {
            out[k][r] = mask_cells(&ORIENTATIONS[k][r]);
            r += 1;
        }
        k += 1;
    }
    out
}

/// Occupied offsets per `[kind][rotation]`, derived from [`ORIENTATIONS`]
const CELLS: [[PieceCells; 4]; PieceKind::COUNT] = build_cells();

/// Get the 4x4 mask for a piece kind and rotation
pub fn orientations(kind: PieceKind, rotation: Rotation) -> &'static ShapeMask {
    &ORIENTATIONS[kind.index()][rotation.index()]
}

/// Get the occupied `(col, row)` offsets for a piece kind and rotation
pub fn cells(kind: PieceKind, rotation: Rotation) -> PieceCells {
    CELLS[kind.index()][rotation.index()]
}

/// Horizontal wall-kick distance tried when a rotation collides
///
/// The bar needs two columns to clear a wall after turning vertical; every
/// other kind needs one.
pub fn kick_distance(kind: PieceKind) -> i8 {
    match kind {
        PieceKind::I => 2,
        _ => 1,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROTATIONS: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    #[test]
    fn every_mask_has_four_minos() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let count = orientations(kind, rotation)
                    .iter()
                    .flatten()
                    .filter(|&&filled| filled)
                    .count();
                assert_eq!(count, 4, "{:?} {:?}", kind, rotation);
            }
        }
    }

    #[test]
    fn cells_match_mask() {
        for kind in PieceKind::ALL {
            for rotation in ROTATIONS {
                let m = orientations(kind, rotation);
                for (col, row) in cells(kind, rotation) {
                    assert!(m[row as usize][col as usize]);
                }
            }
        }
    }

    #[test]
    fn i_piece_spawns_on_third_row() {
        assert_eq!(
            cells(PieceKind::I, Rotation::North),
            [(0, 2), (1, 2), (2, 2), (3, 2)]
        );
        assert_eq!(
            cells(PieceKind::I, Rotation::East),
            [(1, 0), (1, 1), (1, 2), (1, 3)]
        );
    }

    #[test]
    fn o_piece_identical_in_all_rotations() {
        let north = orientations(PieceKind::O, Rotation::North);
        for rotation in ROTATIONS {
            assert_eq!(orientations(PieceKind::O, rotation), north);
        }
    }

    #[test]
    fn kick_distances() {
        assert_eq!(kick_distance(PieceKind::I), 2);
        for kind in [
            PieceKind::O,
            PieceKind::T,
            PieceKind::J,
            PieceKind::L,
            PieceKind::S,
            PieceKind::Z,
        ] {
            assert_eq!(kick_distance(kind), 1);
        }
    }
}
