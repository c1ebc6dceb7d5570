//! Terminal bell as the audio notifier.
//!
//! A terminal has one sound, so only events worth interrupting for ring it.
//! Rings are collected during a frame and written once, after the frame is drawn.

use std::io::Write;

use anyhow::{Context, Result};

use crate::core::Notifier;
use crate::types::GameSummary;

const BEL: u8 = 0x07;

#[derive(Debug, Clone, Default)]
pub struct Bell {
    muted: bool,
    pending: u32,
}

impl Bell {
    pub fn new(muted: bool) -> Self {
        Self { muted, pending: 0 }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Returns the new muted state
    pub fn toggle_mute(&mut self) -> bool {
        self.muted = !self.muted;
        self.pending = 0;
        self.muted
    }

    pub fn pending(&self) -> u32 {
        self.pending
    }

    fn ring(&mut self) {
        if !self.muted {
            self.pending = self.pending.saturating_add(1);
        }
    }

    /// Write one BEL for all rings since the last flush
    pub fn flush(&mut self, out: &mut impl Write) -> Result<()> {
        if self.pending == 0 {
            return Ok(());
        }
        self.pending = 0;
        out.write_all(&[BEL])
            .and_then(|_| out.flush())
            .context("ring terminal bell")
    }
}

impl Notifier for Bell {
    fn on_rotate_fail(&mut self) {
        self.ring();
    }

    fn on_line_clear(&mut self, _count: u32) {
        self.ring();
    }

    fn on_level_up(&mut self, _level: u32) {
        self.ring();
    }

    fn on_game_over(&mut self, _summary: &GameSummary) {
        self.ring();
    }
}
