//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no runtime dependencies, making them usable in
//! any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19)
//! - **Spawn position**: (3, 0), the top-left corner of the piece's 4x4 box
//!
//! # Frame Timing Constants
//!
//! The game is frame-stepped: one logical tick per rendered frame.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FPS` | 60 | Frames per second targeted by the runner |
//! | `FRAME_MS` | 16 | Frame length in milliseconds |
//! | `DROP_FRAMES` | 30 | Gravity threshold at level 0 |
//! | `DROP_FRAMES_DECREMENT` | 3 | Threshold reduction per level |
//! | `MIN_DROP_FRAMES` | 0 | Lowest gravity threshold (one row per frame) |
//! | `SOFT_DROP_FRAMES` | 5 | Gravity threshold while soft drop is held |
//! | `LINE_CLEAR_PAUSE_MS` | 500 | Presentation pause after a clear |
//!
//! # Examples
//!
//! ```
//! use frametris_types::{FrameInput, GameAction, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! let piece = PieceKind::T;
//! assert_eq!(PieceKind::from_str("t"), Some(piece));
//!
//! assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
//! assert_eq!(Rotation::from_index(7), Rotation::West);
//!
//! let mut input = FrameInput::default();
//! input.record(GameAction::RotateCw);
//! assert!(input.rotate_cw);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Total number of cells on the board
pub const BOARD_CELLS: usize = BOARD_WIDTH as usize * BOARD_HEIGHT as usize;

/// Spawn column of the piece's 4x4 bounding box
pub const SPAWN_X: i8 = 3;

/// Spawn row of the piece's 4x4 bounding box
pub const SPAWN_Y: i8 = 0;

/// Frames per second targeted by the runner
pub const FPS: u32 = 60;

/// Frame length in milliseconds (1000 / 60, truncated)
pub const FRAME_MS: u32 = 1000 / FPS;

/// Gravity threshold at level 0, in frames
pub const DROP_FRAMES: u32 = 30;

/// Gravity threshold reduction per level, in frames
pub const DROP_FRAMES_DECREMENT: u32 = 3;

/// Lowest gravity threshold reachable through leveling; 0 drops one row every frame
pub const MIN_DROP_FRAMES: u32 = 0;

/// Gravity threshold while soft drop is held, in frames
pub const SOFT_DROP_FRAMES: u32 = 5;

/// Cleared rows needed for one level-up
pub const LINES_PER_LEVEL: u32 = 8;

/// Pause after a line clear so the cleared rows can be seen
pub const LINE_CLEAR_PAUSE_MS: u32 = 500;

/// Line clear scoring table
///
/// Base points for clearing N rows in one landing at level 0:
/// - 1 row: 100 points
/// - 2 rows: 300 points
/// - 3 rows: 500 points
/// - 4 rows: 800 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 100, 300, 500, 800];

/// The seven tetromino piece kinds, in catalog order
///
/// Each kind has a distinct shape and color:
/// - **I**: Cyan, bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Magenta, T-shaped
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PieceKind {
    I,
    O,
    T,
    J,
    L,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::J,
        PieceKind::L,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Number of piece kinds
    pub const COUNT: usize = 7;

    /// Catalog index (0..7)
    pub fn index(self) -> usize {
        self as usize
    }

    /// Kind at a catalog index, taken modulo 7
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::COUNT]
    }

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use frametris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("O"), Some(PieceKind::O));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }
}

/// Rotation states of a piece
///
/// - **North**: Spawn orientation (index 0)
/// - **East**: One clockwise step (index 1)
/// - **South**: Two steps (index 2)
/// - **West**: Three clockwise steps (index 3)
///
/// Indices are always taken modulo 4, so an out-of-range rotation cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Rotation {
    #[default]
    North,
    East,
    South,
    West,
}

impl Rotation {
    /// Rotation index in 0..4
    pub fn index(self) -> usize {
        self as usize
    }

    /// Rotation for an arbitrary index, taken modulo 4
    pub fn from_index(index: usize) -> Self {
        match index % 4 {
            0 => Rotation::North,
            1 => Rotation::East,
            2 => Rotation::South,
            _ => Rotation::West,
        }
    }

    /// Rotate by a signed number of clockwise steps (negative is counter-clockwise)
    pub fn stepped(self, steps: i8) -> Self {
        let index = (self.index() as i32 + steps as i32).rem_euclid(4);
        Self::from_index(index as usize)
    }

    /// Rotate clockwise (90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use frametris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_cw(), Rotation::East);
    /// assert_eq!(Rotation::West.rotate_cw(), Rotation::North);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        self.stepped(1)
    }

    /// Rotate counter-clockwise (-90°)
    ///
    /// # Examples
    ///
    /// ```
    /// use frametris_types::Rotation;
    ///
    /// assert_eq!(Rotation::North.rotate_ccw(), Rotation::West);
    /// assert_eq!(Rotation::East.rotate_ccw(), Rotation::North);
    /// ```
    pub fn rotate_ccw(&self) -> Self {
        self.stepped(-1)
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Rotation::North => "north",
            Rotation::East => "east",
            Rotation::South => "south",
            Rotation::West => "west",
        }
    }
}

/// Discrete actions a player can trigger within a frame
///
/// Keyboard mapping lives in the input crate; the core only sees the
/// [`FrameInput`] these actions are folded into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Replace the active piece with the preview piece immediately
    SpawnNext,
    /// Rotate piece one step clockwise
    RotateCw,
    /// Rotate piece one step counter-clockwise
    RotateCcw,
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Hold soft drop for this frame
    SoftDrop,
    /// Restart the game (at any time, including after game over)
    Restart,
    /// Leave the game
    Quit,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use frametris_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("rotateCcw"), Some(GameAction::RotateCcw));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "spawnnext" => Some(GameAction::SpawnNext),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "restart" => Some(GameAction::Restart),
            "quit" => Some(GameAction::Quit),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::SpawnNext => "spawnNext",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Restart => "restart",
            GameAction::Quit => "quit",
        }
    }
}

/// The set of discrete actions that occurred during one frame
///
/// Consumed once by `GameState::step` and then discarded. `soft_drop` is a held
/// state rather than an edge: it is `true` for every frame the key is held.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct FrameInput {
    pub spawn_next: bool,
    pub rotate_cw: bool,
    pub rotate_ccw: bool,
    pub shift_left: bool,
    pub shift_right: bool,
    pub soft_drop: bool,
    pub restart: bool,
    pub quit: bool,
}

impl FrameInput {
    /// An input with no actions.
    pub const NONE: FrameInput = FrameInput {
        spawn_next: false,
        rotate_cw: false,
        rotate_ccw: false,
        shift_left: false,
        shift_right: false,
        soft_drop: false,
        restart: false,
        quit: false,
    };

    /// Build an input holding a single action.
    pub fn from_action(action: GameAction) -> Self {
        let mut input = Self::NONE;
        input.record(action);
        input
    }

    /// Mark `action` as having occurred this frame.
    pub fn record(&mut self, action: GameAction) {
        match action {
            GameAction::SpawnNext => self.spawn_next = true,
            GameAction::RotateCw => self.rotate_cw = true,
            GameAction::RotateCcw => self.rotate_ccw = true,
            GameAction::MoveLeft => self.shift_left = true,
            GameAction::MoveRight => self.shift_right = true,
            GameAction::SoftDrop => self.soft_drop = true,
            GameAction::Restart => self.restart = true,
            GameAction::Quit => self.quit = true,
        }
    }

    /// True when no action occurred.
    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: Cell filled by a piece of the given kind (color only)
pub type Cell = Option<PieceKind>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_timing_defaults() {
        assert_eq!(FPS, 60);
        assert_eq!(FRAME_MS, 16);
        assert_eq!(DROP_FRAMES, 30);
        assert_eq!(DROP_FRAMES_DECREMENT, 3);
        assert_eq!(SOFT_DROP_FRAMES, 5);
        assert_eq!(LINES_PER_LEVEL, 8);
        assert_eq!(LINE_SCORES, [0, 100, 300, 500, 800]);
    }

    #[test]
    fn rotation_index_wraps() {
        assert_eq!(Rotation::from_index(0), Rotation::North);
        assert_eq!(Rotation::from_index(4), Rotation::North);
        assert_eq!(Rotation::from_index(5), Rotation::East);
        assert_eq!(Rotation::North.stepped(-1), Rotation::West);
        assert_eq!(Rotation::West.stepped(1), Rotation::North);
        assert_eq!(Rotation::South.stepped(-6), Rotation::North);
    }

    #[test]
    fn rotate_cw_four_times_is_identity() {
        for r in [Rotation::North, Rotation::East, Rotation::South, Rotation::West] {
            assert_eq!(r.rotate_cw().rotate_cw().rotate_cw().rotate_cw(), r);
            assert_eq!(r.rotate_cw().rotate_ccw(), r);
        }
    }

    #[test]
    fn piece_kind_index_roundtrip() {
        for (i, kind) in PieceKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
            assert_eq!(PieceKind::from_index(i), *kind);
        }
        assert_eq!(PieceKind::from_index(7), PieceKind::I);
    }

    #[test]
    fn frame_input_records_actions() {
        let mut input = FrameInput::default();
        assert!(input.is_empty());

        input.record(GameAction::MoveLeft);
        input.record(GameAction::SoftDrop);
        assert!(input.shift_left);
        assert!(input.soft_drop);
        assert!(!input.shift_right);
        assert!(!input.is_empty());

        assert!(FrameInput::from_action(GameAction::Quit).quit);
    }
}
