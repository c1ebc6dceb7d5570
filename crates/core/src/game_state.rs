//! Game state module - the session state machine
//!
//! This module ties together all core components: board, pieces, generator and scoring.
//! It handles gravity timing, piece movement, rotation, hold, deferred line clears and
//! the session lifecycle (`Ready -> Playing <-> Paused`, `Playing -> GameOver`).
//!
//! The state machine never talks to collaborators. Everything observable is queued as a
//! [`GameEvent`] and handed out by [`GameState::drain_events`].

use std::vec::Drain;

use crate::board::{Board, RowList};
use crate::piece::{try_rotate, Piece};
use crate::rng::PieceQueue;
use crate::scoring::{apply_line_clear, effective_drop_interval_ms, hard_drop_score};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// Rows marked full, waiting out the clear animation
#[derive(Debug, Clone, PartialEq)]
struct LineClear {
    rows: RowList,
    remaining_ms: u32,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<Piece>,
    next: PieceKind,
    hold: Option<PieceKind>,
    can_hold: bool,
    queue: PieceQueue,
    phase: Phase,
    score: u32,
    lines: u32,
    level: u32,
    pieces_placed: u32,
    drop_timer_ms: u32,
    soft_drop: bool,
    clearing: Option<LineClear>,
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new session with the given generator seed
    pub fn new(seed: u32) -> Self {
        Self::with_board(seed, Board::new())
    }

    /// Create a session on a prepared board (scripted play, tests, benchmarks)
    pub fn with_board(seed: u32, board: Board) -> Self {
        let mut queue = PieceQueue::new(seed);
        let next = queue.draw();

        Self {
            board,
            active: None,
            next,
            hold: None,
            can_hold: true,
            queue,
            phase: Phase::Ready,
            score: 0,
            lines: 0,
            level: START_LEVEL,
            pieces_placed: 0,
            drop_timer_ms: 0,
            soft_drop: false,
            clearing: None,
            events: Vec::new(),
        }
    }

    /// Leave `Ready` and spawn the first piece
    pub fn start(&mut self) -> bool {
        if self.phase != Phase::Ready {
            return false;
        }
        self.phase = Phase::Playing;
        self.spawn_next();
        true
    }

    /// Throw the session away and immediately start a new one.
    ///
    /// The generator continues from its current state, so consecutive games differ.
    /// Undrained events survive the reset.
    pub fn restart(&mut self) {
        let seed = self.queue.seed();
        let events = std::mem::take(&mut self.events);
        *self = Self::new(seed);
        self.events = events;
        self.start();
    }

    /// Toggle `Playing <-> Paused`
    pub fn toggle_pause(&mut self) -> bool {
        match self.phase {
            Phase::Playing => self.phase = Phase::Paused,
            Phase::Paused => self.phase = Phase::Playing,
            Phase::Ready | Phase::GameOver => return false,
        }
        true
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<Piece> {
        self.active
    }

    pub fn next(&self) -> PieceKind {
        self.next
    }

    /// Upcoming kinds after [`GameState::next`], without consuming them
    pub fn preview(&self, count: usize) -> Vec<PieceKind> {
        self.queue.peek(count)
    }

    pub fn hold_piece(&self) -> Option<PieceKind> {
        self.hold
    }

    pub fn can_hold(&self) -> bool {
        self.can_hold
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn pieces_placed(&self) -> u32 {
        self.pieces_placed
    }

    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    pub fn seed(&self) -> u32 {
        self.queue.seed()
    }

    /// Whether a line clear is waiting out its delay
    pub fn is_clearing(&self) -> bool {
        self.clearing.is_some()
    }

    /// Rows currently marked for removal
    pub fn clearing_rows(&self) -> &[usize] {
        self.clearing
            .as_ref()
            .map(|c| c.rows.as_slice())
            .unwrap_or(&[])
    }

    pub fn summary(&self) -> GameSummary {
        GameSummary {
            score: self.score,
            lines: self.lines,
            level: self.level,
            pieces_placed: self.pieces_placed,
        }
    }

    /// Current gravity interval, soft drop included
    pub fn drop_interval_ms(&self) -> u32 {
        effective_drop_interval_ms(self.level, self.soft_drop)
    }

    /// Hand out queued events, oldest first
    pub fn drain_events(&mut self) -> Drain<'_, GameEvent> {
        self.events.drain(..)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_grid(&mut out.board);

        out.active = self.active.map(ActiveSnapshot::from);
        out.next = self.next;
        out.hold = self.hold;
        out.can_hold = self.can_hold;
        out.phase = self.phase;
        out.clearing_rows = [false; BOARD_ROWS];
        for &y in self.clearing_rows() {
            out.clearing_rows[y] = true;
        }
        out.score = self.score;
        out.lines = self.lines;
        out.level = self.level;
        out.pieces_placed = self.pieces_placed;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Take the lookahead as the current piece and draw a new lookahead
    fn spawn_next(&mut self) -> bool {
        let kind = self.next;
        self.next = self.queue.draw();
        self.spawn(kind)
    }

    /// Place a fresh piece of `kind` at the spawn position.
    ///
    /// A blocked spawn ends the session; the piece stays visible.
    fn spawn(&mut self, kind: PieceKind) -> bool {
        let piece = Piece::new(kind);
        self.active = Some(piece);
        self.can_hold = true;
        self.drop_timer_ms = 0;

        if !self.board.is_valid_position(&piece, 0, 0) {
            self.end_game();
            return false;
        }
        true
    }

    fn end_game(&mut self) {
        self.phase = Phase::GameOver;
        self.clearing = None;
        self.soft_drop = false;
        self.events.push(GameEvent::GameOver(self.summary()));
    }

    /// Try to translate the active piece.
    ///
    /// A blocked downward step locks the piece in place.
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        if self.board.is_valid_position(&active, dx, dy) {
            self.active = Some(active.shifted(dx, dy));
            if dx != 0 {
                self.events.push(GameEvent::Moved);
            }
            return true;
        }

        if dx == 0 && dy == 1 {
            self.lock_piece();
        }
        false
    }

    /// Rotate the active piece with wall kicks
    pub fn try_rotate(&mut self, clockwise: bool) -> bool {
        if !self.phase.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let board = &self.board;
        match try_rotate(&active, clockwise, |p| board.is_valid_position(p, 0, 0)) {
            Some((rotated, _kick)) => {
                self.active = Some(rotated);
                self.events.push(GameEvent::Rotated);
                true
            }
            None => {
                self.events.push(GameEvent::RotateFailed);
                false
            }
        }
    }

    /// Drop the active piece to the lowest valid row and lock it.
    ///
    /// Returns the number of rows traversed.
    pub fn hard_drop(&mut self) -> u32 {
        if !self.phase.is_playing() {
            return 0;
        }
        let Some(mut active) = self.active else {
            return 0;
        };

        let mut cells: u32 = 0;
        while self.board.is_valid_position(&active, 0, 1) {
            active = active.shifted(0, 1);
            cells += 1;
        }
        self.active = Some(active);

        self.score = self.score.saturating_add(hard_drop_score(cells));
        self.events.push(GameEvent::HardDropped { cells });
        self.lock_piece();
        cells
    }

    /// Stash the active piece, or swap it with the held one. Once per piece.
    pub fn hold(&mut self) -> bool {
        if !self.phase.is_playing() || !self.can_hold {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let previous = self.hold.replace(active.kind);
        self.events.push(GameEvent::Held);
        match previous {
            // Swapping never touches the generator.
            Some(held) => self.spawn(held),
            None => self.spawn_next(),
        };
        self.can_hold = false;
        true
    }

    /// Write the active piece into the board and start the clear delay if rows filled
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.lock(&piece);
        self.pieces_placed = self.pieces_placed.saturating_add(1);
        self.drop_timer_ms = 0;
        self.events.push(GameEvent::Locked);

        let rows = self.board.full_rows();
        if rows.is_empty() {
            self.spawn_next();
        } else {
            self.clearing = Some(LineClear {
                rows,
                remaining_ms: LINE_CLEAR_DELAY_MS,
            });
        }
    }

    /// Remove the marked rows, score them and bring in the next piece
    fn finish_line_clear(&mut self) {
        let Some(clear) = self.clearing.take() else {
            return;
        };

        let count = self.board.clear_rows(&clear.rows);
        let outcome = apply_line_clear(count, self.level, self.lines);
        self.score = self.score.saturating_add(outcome.points);
        self.lines = outcome.total_lines;
        if outcome.leveled_up {
            self.level = outcome.level;
            self.events.push(GameEvent::LevelUp { level: self.level });
        }
        self.events.push(GameEvent::LinesCleared {
            count: count as u32,
            points: outcome.points,
        });

        self.spawn_next();
    }

    /// Advance gravity and the clear delay by `elapsed_ms` of play time.
    ///
    /// Returns true when the board or the active piece changed.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if !self.phase.is_playing() {
            return false;
        }

        if let Some(clear) = self.clearing.as_mut() {
            clear.remaining_ms = clear.remaining_ms.saturating_sub(elapsed_ms);
            if clear.remaining_ms == 0 {
                self.finish_line_clear();
                return true;
            }
            return false;
        }

        if self.active.is_none() {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms > self.drop_interval_ms() {
            self.drop_timer_ms = 0;
            self.try_move(0, 1);
            return true;
        }

        false
    }

    /// Apply a command. Commands that do not fit the current phase are ignored.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.try_move(-1, 0),
            GameAction::MoveRight => self.try_move(1, 0),
            GameAction::SoftDropOn => {
                // Recorded during the clear delay too; it applies to the next piece.
                if !self.phase.is_playing() {
                    return false;
                }
                self.soft_drop = true;
                true
            }
            GameAction::SoftDropOff => {
                self.soft_drop = false;
                true
            }
            GameAction::HardDrop => {
                if !self.phase.is_playing() || self.active.is_none() {
                    return false;
                }
                self.hard_drop();
                true
            }
            GameAction::RotateCw => self.try_rotate(true),
            GameAction::RotateCcw => self.try_rotate(false),
            GameAction::Hold => self.hold(),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Start => self.start(),
            GameAction::Restart => {
                self.restart();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
