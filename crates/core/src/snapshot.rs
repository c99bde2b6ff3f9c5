use crate::grid::{ClearedRows, GridRows};
use crate::piece::Piece;
use crate::types::{PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl Default for ActiveSnapshot {
    fn default() -> Self {
        Piece::spawn(PieceKind::I).into()
    }
}

impl From<Piece> for ActiveSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
        }
    }
}

impl From<ActiveSnapshot> for Piece {
    fn from(value: ActiveSnapshot) -> Self {
        Piece::new(value.kind, value.rotation, value.x, value.y)
    }
}

/// Read-only copy of everything a renderer needs for one frame
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GameSnapshot {
    pub board: GridRows,
    pub active: ActiveSnapshot,
    pub next: PieceKind,
    pub score: u32,
    pub level: u32,
    pub lines: u32,
    /// Rows removed by the last step, indexed before removal
    pub cleared_rows: ClearedRows,
    pub game_over: bool,
    pub frame: u64,
    pub episode: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[None; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: ActiveSnapshot::default(),
            next: PieceKind::I,
            score: 0,
            level: 0,
            lines: 0,
            cleared_rows: ClearedRows::new(),
            game_over: false,
            frame: 0,
            episode: 0,
        }
    }
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        !self.game_over
    }

    pub fn is_cleared_row(&self, y: usize) -> bool {
        self.cleared_rows.contains(&y)
    }

    /// The active piece's absolute cells
    pub fn active_cells(&self) -> [(i16, i16); 4] {
        Piece::from(self.active).cells()
    }
}
