//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules, session state and simulation logic.
//! It has **no dependencies** on terminals, files or clocks:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Scripted commands and synthetic timestamps drive every rule
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`catalog`]: Base shapes and colors of the seven piece kinds
//! - [`piece`]: Shape grids, matrix rotation and SRS-style wall kicks
//! - [`rng`]: 7-bag piece generation with a seeded LCG
//! - [`board`]: 10x20 board with placement checks and row clearing
//! - [`scoring`]: Line clear points, hard drop points, levels and gravity
//! - [`game_state`]: The session state machine
//! - [`events`]: Notifier hooks fed from the session's event queue
//! - [`driver`]: Converts absolute timestamps into ticks
//! - [`snapshot`]: Plain-value view for renderers
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, FrameDriver};
//! use blockfall_core::types::{GameAction, Phase};
//!
//! let mut game = GameState::new(12345);
//! game.start();
//! assert_eq!(game.phase(), Phase::Playing);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//! assert!(game.score() > 0); // Hard drop awards points
//!
//! let mut driver = FrameDriver::new();
//! driver.advance(&mut game, 0);
//! driver.advance(&mut game, 16);
//! ```
//!
//! # Timing
//!
//! - **Gravity**: `max(100, 1000 - (level - 1) * 50)` ms per row
//! - **Soft Drop**: fixed 50ms per row while held
//! - **Line Clear**: rows stay visible for 200ms before removal
//!
//! Call [`GameState::tick`](game_state::GameState::tick) with elapsed play time, or let a
//! [`FrameDriver`](driver::FrameDriver) do it from a clock.

pub mod board;
pub mod catalog;
pub mod driver;
pub mod events;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use catalog::{base_shape, color};
pub use driver::FrameDriver;
pub use events::{dispatch, Notifier, Silent};
pub use game_state::GameState;
pub use piece::{try_rotate, Piece, Shape};
pub use rng::{PieceQueue, SimpleRng};
pub use scoring::{drop_interval_ms, hard_drop_score, line_clear_score, ClearOutcome};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
