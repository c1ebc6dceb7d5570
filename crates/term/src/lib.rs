//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer for terminal gameplay. It avoids widget
//! toolkits and renders into a simple framebuffer that is flushed to the terminal.
//!
//! - Keep `core` deterministic and testable
//! - Diff frames so only changed cells reach the terminal
//! - Allow precise control over aspect ratio (2 chars wide per cell)

pub mod bell;
pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use bell::Bell;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Hud, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
