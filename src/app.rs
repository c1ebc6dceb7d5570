//! Interactive session: keys in, frames and bells out.
//!
//! [`App`] holds everything except the terminal itself, so it can be driven with synthetic
//! key events and timestamps. [`run`] wires it to crossterm.

use std::io::Write;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::Config;
use crate::core::{dispatch, FrameDriver, GameSnapshot, GameState, Notifier};
use crate::input::{handle_key_event, is_mute_key, should_quit, InputHandler};
use crate::store::HighScores;
use crate::term::{Bell, FrameBuffer, GameView, Hud, TerminalRenderer, Viewport};
use crate::types::{GameAction, GameSummary, TICK_MS};

/// Half-period of the line clear blink
const FLASH_MS: u64 = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub struct App {
    game: GameState,
    driver: FrameDriver,
    input: InputHandler,
    bell: Bell,
    scores: HighScores,
    player: String,
    view: GameView,
    snap: GameSnapshot,
    now_ms: u64,
    last_rank: Option<usize>,
    warnings: Vec<String>,
}

impl App {
    pub fn new(config: &Config, scores: HighScores) -> Self {
        let seed = config.seed.unwrap_or_else(clock_seed);
        Self {
            game: GameState::new(seed),
            driver: FrameDriver::new(),
            input: InputHandler::new(),
            bell: Bell::new(config.muted),
            scores,
            player: config.player.clone(),
            view: GameView::default(),
            snap: GameSnapshot::default(),
            now_ms: 0,
            last_rank: None,
            warnings: Vec::new(),
        }
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn scores(&self) -> &HighScores {
        &self.scores
    }

    pub fn bell(&self) -> &Bell {
        &self.bell
    }

    /// Rank of the last finished game in the score table, if it made it in
    pub fn last_rank(&self) -> Option<usize> {
        self.last_rank
    }

    /// Problems that could not be shown while the terminal was in raw mode
    pub fn take_warnings(&mut self) -> Vec<String> {
        std::mem::take(&mut self.warnings)
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> Flow {
        if key.kind == KeyEventKind::Release {
            if let Some(action) = self.input.handle_key_release(key.code) {
                self.apply(action);
            }
            return Flow::Continue;
        }

        if should_quit(key) {
            return Flow::Quit;
        }
        if is_mute_key(key) {
            self.bell.toggle_mute();
            return Flow::Continue;
        }

        if InputHandler::tracks(key.code) && !key.modifiers.contains(KeyModifiers::CONTROL) {
            if let Some(action) = self.input.handle_key_press(key.code) {
                self.apply(action);
            }
            return Flow::Continue;
        }

        // Auto-repeat only matters for the keys the handler tracks.
        if key.kind == KeyEventKind::Repeat {
            return Flow::Continue;
        }
        if let Some(action) = handle_key_event(key) {
            self.apply(action);
        }
        Flow::Continue
    }

    /// Advance input repeat, gravity and the clear delay to `now_ms`
    pub fn update(&mut self, now_ms: u64) {
        self.now_ms = now_ms;
        let elapsed = self.driver.elapsed(now_ms);
        for action in self.input.update(elapsed) {
            self.apply(action);
        }
        if elapsed > 0 {
            self.game.tick(elapsed);
        }
        self.dispatch_events();
    }

    pub fn hud(&self) -> Hud {
        Hud {
            best_score: self.scores.best_score(),
            muted: self.bell.is_muted(),
            flash_on: (self.now_ms / FLASH_MS) % 2 == 0,
            new_record: self.last_rank == Some(1),
        }
    }

    pub fn render_into(&mut self, viewport: Viewport, fb: &mut FrameBuffer) {
        self.game.snapshot_into(&mut self.snap);
        let hud = self.hud();
        self.view.render_into(&self.snap, hud, viewport, fb);
    }

    /// Write pending bells after a frame
    pub fn flush_bell(&mut self, out: &mut impl Write) -> Result<()> {
        self.bell.flush(out)
    }

    fn apply(&mut self, action: GameAction) {
        if matches!(action, GameAction::Restart | GameAction::Start) {
            self.last_rank = None;
        }
        if action == GameAction::Restart {
            // Held keys belong to the old game.
            if let Some(off) = self.input.reset() {
                self.game.apply_action(off);
            }
        }
        self.game.apply_action(action);
        self.dispatch_events();
    }

    fn dispatch_events(&mut self) {
        let mut hooks = Hooks {
            bell: &mut self.bell,
            scores: &mut self.scores,
            player: &self.player,
            last_rank: &mut self.last_rank,
            warnings: &mut self.warnings,
        };
        dispatch(self.game.drain_events(), &mut hooks);
    }
}

/// Per-frame notifier: the bell, plus recording finished games
struct Hooks<'a> {
    bell: &'a mut Bell,
    scores: &'a mut HighScores,
    player: &'a str,
    last_rank: &'a mut Option<usize>,
    warnings: &'a mut Vec<String>,
}

impl Notifier for Hooks<'_> {
    fn on_rotate_fail(&mut self) {
        self.bell.on_rotate_fail();
    }

    fn on_line_clear(&mut self, count: u32) {
        self.bell.on_line_clear(count);
    }

    fn on_level_up(&mut self, level: u32) {
        self.bell.on_level_up(level);
    }

    fn on_game_over(&mut self, summary: &GameSummary) {
        self.bell.on_game_over(summary);
        *self.last_rank = self.scores.record(summary, self.player, unix_ms());
        if let Err(e) = self.scores.save() {
            self.warnings
                .push(format!("[Store] failed to save scores: {:#}", e));
        }
    }
}

/// Run the interactive loop until the player quits. The terminal is restored on every path.
pub fn run(app: &mut App) -> Result<()> {
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = event_loop(app, &mut term);

    let restored = term.exit();
    result.and(restored)
}

fn event_loop(app: &mut App, term: &mut TerminalRenderer) -> Result<()> {
    let start = Instant::now();
    let tick = Duration::from_millis(TICK_MS as u64);
    let mut next_tick = start;
    let mut fb = FrameBuffer::new(0, 0);

    app.update(0);

    loop {
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        app.render_into(Viewport::new(w, h), &mut fb);
        term.draw_swap(&mut fb)?;
        app.flush_bell(term.writer_mut())?;

        let timeout = next_tick.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    if app.handle_key(key) == Flow::Quit {
                        return Ok(());
                    }
                }
                Event::Resize(_, _) => term.invalidate(),
                _ => {}
            }
        }

        let now = Instant::now();
        if now >= next_tick {
            next_tick = now + tick;
            app.update(now.duration_since(start).as_millis() as u64);
        }
    }
}

/// Milliseconds since the Unix epoch; 0 if the clock is before it
pub fn unix_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or(0)
}

fn clock_seed() -> u32 {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1);
    (nanos ^ (nanos >> 32)) as u32
}
