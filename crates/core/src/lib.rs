//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the rules and the frame-stepped simulation of a
//! falling-block game. It has no dependencies on terminals, clocks or I/O:
//! time advances only when [`GameState::step`] is called, once per frame.
//!
//! # Module Structure
//!
//! - [`grid`]: 10x20 playfield with row completion and removal
//! - [`shapes`]: the fixed catalog of 7 kinds x 4 orientations as 4x4 masks
//! - [`piece`]: the active piece value (kind, rotation, box origin)
//! - [`collision`]: bounds and overlap checks, committing landed pieces
//! - [`movement`]: shift and rotate requests with a horizontal wall kick
//! - [`scoring`]: line clear points, level progress and gravity speed
//! - [`rng`]: piece kind sources (seeded LCG, scripted sequence)
//! - [`game_state`]: the per-frame driver tying everything together
//! - [`snapshot`]: a plain copy of the state for renderers and logs
//!
//! # Game Rules
//!
//! - **Uniform random**: each spawn draws one of 7 kinds with equal odds
//! - **Gravity**: the piece drops one row after `max(30 - 3 * level, 1)` frames,
//!   or every 5 frames while soft drop is held
//! - **Immediate landing**: a piece that cannot move down is placed at once
//! - **Wall kick**: a blocked rotation is retried 1 column right then left
//!   (2 for the I piece)
//! - **Scoring**: 100/300/500/800 for 1-4 rows, multiplied by `level + 1`
//! - **Leveling**: one level per 8 cleared rows
//!
//! # Example
//!
//! ```
//! use frametris_core::{GameState, SequencePieces};
//! use frametris_types::{FrameInput, GameAction, PieceKind};
//!
//! let mut game = GameState::with_source(SequencePieces::new([PieceKind::T, PieceKind::O]));
//! assert_eq!(game.active().kind, PieceKind::T);
//!
//! game.step(&FrameInput::from_action(GameAction::MoveRight));
//! assert_eq!(game.active().x, 4);
//! assert_eq!(game.next_kind(), PieceKind::O);
//! ```

pub mod collision;
pub mod game_state;
pub mod grid;
pub mod movement;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use frametris_types as types;

// Re-export commonly used types for convenience
pub use collision::{collides, place};
pub use game_state::{GameState, StepReport};
pub use grid::{ClearedRows, Grid, GridRows};
pub use movement::{resolve, MoveRequest, Movement};
pub use piece::Piece;
pub use rng::{PieceSource, SequencePieces, SimpleRng};
pub use scoring::{drop_frames, line_clear_score, LevelProgress};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
