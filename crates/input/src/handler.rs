//! DAS/ARR input handler for terminal environments.
//!
//! Supports terminals that do not emit key release events by using a timeout:
//! a held key that stops repeating for longer than the timeout counts as released.

use crossterm::event::KeyCode;

use arrayvec::ArrayVec;

use crate::types::{GameAction, DEFAULT_ARR_MS, DEFAULT_DAS_MS, KEY_RELEASE_TIMEOUT_MS};

/// Actions produced by one handler update
pub type Actions = ArrayVec<GameAction, 32>;

/// Direction for horizontal movement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HorizontalDirection {
    Left,
    Right,
    None,
}

fn is_left(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') | KeyCode::Char('H')
    )
}

fn is_right(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') | KeyCode::Char('L')
    )
}

fn is_down(code: KeyCode) -> bool {
    matches!(
        code,
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') | KeyCode::Char('J')
    )
}

/// Tracks held keys for auto-repeat and soft drop.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: HorizontalDirection,
    down_held: bool,
    /// Play time since the last press of a held key
    idle_ms: u32,
    horizontal_das_timer: u32,
    horizontal_arr_accumulator: u32,
    das_delay: u32,
    arr_rate: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_DAS_MS, DEFAULT_ARR_MS)
    }

    pub fn with_config(das_delay: u32, arr_rate: u32) -> Self {
        Self {
            horizontal: HorizontalDirection::None,
            down_held: false,
            idle_ms: 0,
            horizontal_das_timer: 0,
            horizontal_arr_accumulator: 0,
            das_delay,
            arr_rate: arr_rate.max(1),
            key_release_timeout_ms: KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Whether this handler owns the key (movement and soft drop)
    pub fn tracks(code: KeyCode) -> bool {
        is_left(code) || is_right(code) || is_down(code)
    }

    pub fn horizontal(&self) -> HorizontalDirection {
        self.horizontal
    }

    pub fn soft_drop_held(&self) -> bool {
        self.down_held
    }

    /// Key press or terminal key repeat. Only the first press of a held key acts.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        if is_left(code) {
            self.idle_ms = 0;
            return self.press_horizontal(HorizontalDirection::Left, GameAction::MoveLeft);
        }
        if is_right(code) {
            self.idle_ms = 0;
            return self.press_horizontal(HorizontalDirection::Right, GameAction::MoveRight);
        }
        if is_down(code) {
            self.idle_ms = 0;
            if self.down_held {
                return None;
            }
            self.down_held = true;
            return Some(GameAction::SoftDropOn);
        }
        None
    }

    fn press_horizontal(
        &mut self,
        direction: HorizontalDirection,
        action: GameAction,
    ) -> Option<GameAction> {
        if self.horizontal == direction {
            return None;
        }
        self.horizontal = direction;
        self.horizontal_das_timer = 0;
        self.horizontal_arr_accumulator = 0;
        Some(action)
    }

    pub fn handle_key_release(&mut self, code: KeyCode) -> Option<GameAction> {
        if (is_left(code) && self.horizontal == HorizontalDirection::Left)
            || (is_right(code) && self.horizontal == HorizontalDirection::Right)
        {
            self.release_horizontal();
            return None;
        }
        if is_down(code) && self.down_held {
            self.down_held = false;
            return Some(GameAction::SoftDropOff);
        }
        None
    }

    fn release_horizontal(&mut self) {
        self.horizontal = HorizontalDirection::None;
        self.horizontal_das_timer = 0;
        self.horizontal_arr_accumulator = 0;
    }

    /// Advance timers; returns auto-repeat moves and timed-out soft drop releases
    pub fn update(&mut self, elapsed_ms: u32) -> Actions {
        let mut actions = Actions::new();

        // Auto-release when terminal does not emit release events.
        self.idle_ms = self.idle_ms.saturating_add(elapsed_ms);
        if self.idle_ms > self.key_release_timeout_ms {
            if self.horizontal != HorizontalDirection::None {
                self.release_horizontal();
            }
            if self.down_held {
                self.down_held = false;
                let _ = actions.try_push(GameAction::SoftDropOff);
            }
        }

        let repeat = match self.horizontal {
            HorizontalDirection::Left => GameAction::MoveLeft,
            HorizontalDirection::Right => GameAction::MoveRight,
            HorizontalDirection::None => return actions,
        };

        let prev_das = self.horizontal_das_timer;
        self.horizontal_das_timer = self.horizontal_das_timer.saturating_add(elapsed_ms);

        if self.horizontal_das_timer >= self.das_delay {
            let excess = if prev_das < self.das_delay {
                self.horizontal_das_timer - self.das_delay
            } else {
                elapsed_ms
            };
            self.horizontal_arr_accumulator += excess;

            while self.horizontal_arr_accumulator >= self.arr_rate {
                let _ = actions.try_push(repeat);
                self.horizontal_arr_accumulator -= self.arr_rate;
            }
        }

        actions
    }

    /// Drop all held state. Returns `SoftDropOff` if soft drop was held.
    pub fn reset(&mut self) -> Option<GameAction> {
        let was_down = self.down_held;
        self.release_horizontal();
        self.down_held = false;
        self.idle_ms = 0;
        was_down.then_some(GameAction::SoftDropOff)
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
