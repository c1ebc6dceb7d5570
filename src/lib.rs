//! Blockfall (workspace facade crate).
//!
//! The simulation, input mapping, terminal rendering and score storage live in dedicated
//! crates under `crates/`; this package re-exports them and hosts the interactive binary.

pub mod app;
pub mod config;
pub mod report;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_store as store;
pub use blockfall_term as term;
pub use blockfall_types as types;
