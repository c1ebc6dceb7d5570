//! Notifier hooks for presentation collaborators (sound, bells, storage).
//!
//! Hooks are fire-and-forget: nothing a notifier does feeds back into the session.

use crate::types::{GameEvent, GameSummary};

/// Receives discrete gameplay events. Every hook defaults to a no-op.
pub trait Notifier {
    fn on_move(&mut self) {}

    fn on_rotate_success(&mut self) {}

    fn on_rotate_fail(&mut self) {}

    fn on_hard_drop(&mut self, _cells: u32) {}

    fn on_lock(&mut self) {}

    fn on_line_clear(&mut self, _count: u32) {}

    fn on_level_up(&mut self, _level: u32) {}

    fn on_hold(&mut self) {}

    fn on_game_over(&mut self, _summary: &GameSummary) {}
}

/// Route one event to its hook
pub fn notify(event: &GameEvent, notifier: &mut impl Notifier) {
    match *event {
        GameEvent::Moved => notifier.on_move(),
        GameEvent::Rotated => notifier.on_rotate_success(),
        GameEvent::RotateFailed => notifier.on_rotate_fail(),
        GameEvent::HardDropped { cells } => notifier.on_hard_drop(cells),
        GameEvent::Locked => notifier.on_lock(),
        GameEvent::LinesCleared { count, .. } => notifier.on_line_clear(count),
        GameEvent::LevelUp { level } => notifier.on_level_up(level),
        GameEvent::Held => notifier.on_hold(),
        GameEvent::GameOver(ref summary) => notifier.on_game_over(summary),
    }
}

/// Route every event in order
pub fn dispatch<I>(events: I, notifier: &mut impl Notifier)
where
    I: IntoIterator<Item = GameEvent>,
{
    for event in events {
        notify(&event, notifier);
    }
}

/// Notifier that ignores everything
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Notifier for Silent {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_state::GameState;
    use crate::types::GameAction;

    #[derive(Default)]
    struct Recorder {
        log: Vec<String>,
    }

    impl Notifier for Recorder {
        fn on_move(&mut self) {
            self.log.push("move".into());
        }

        fn on_hard_drop(&mut self, cells: u32) {
            self.log.push(format!("drop:{}", cells));
        }

        fn on_line_clear(&mut self, count: u32) {
            self.log.push(format!("clear:{}", count));
        }

        fn on_game_over(&mut self, summary: &GameSummary) {
            self.log.push(format!("over:{}", summary.score));
        }
    }

    #[test]
    fn dispatch_routes_in_order_and_skips_default_hooks() {
        let mut rec = Recorder::default();
        let events = [
            GameEvent::Moved,
            GameEvent::Rotated,
            GameEvent::HardDropped { cells: 3 },
            GameEvent::Locked,
            GameEvent::LinesCleared {
                count: 2,
                points: 300,
            },
            GameEvent::GameOver(GameSummary {
                score: 306,
                ..GameSummary::default()
            }),
        ];

        dispatch(events, &mut rec);
        assert_eq!(rec.log, ["move", "drop:3", "clear:2", "over:306"]);
    }

    #[test]
    fn dispatch_drains_session_events() {
        let mut game = GameState::new(12345);
        game.start();
        game.apply_action(GameAction::MoveRight);
        game.apply_action(GameAction::MoveLeft);

        let mut rec = Recorder::default();
        dispatch(game.drain_events(), &mut rec);
        assert_eq!(rec.log, ["move", "move"]);
        assert_eq!(game.drain_events().count(), 0);
    }

    #[test]
    fn silent_accepts_everything() {
        dispatch([GameEvent::Held, GameEvent::LevelUp { level: 4 }], &mut Silent);
    }
}
