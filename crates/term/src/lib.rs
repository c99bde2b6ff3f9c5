//! Terminal game renderer.
//!
//! A small, game-oriented rendering layer: no widget toolkit, just a
//! framebuffer of styled glyphs that a [`TerminalRenderer`] diffs and flushes
//! through `crossterm`. Board cells are drawn 2 columns wide to keep them
//! roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use frametris_core as core;
pub use frametris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{piece_color, BoardLayout, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
