//! Integration tests for the session: scripted play, events, clock driving

use blockfall::core::{dispatch, Board, FrameDriver, GameState, Notifier};
use blockfall::types::{GameAction, GameEvent, GameSummary, Phase, PieceKind, LINE_CLEAR_DELAY_MS};

/// First seed whose opening piece is `kind`
fn seed_opening_with(kind: PieceKind) -> u32 {
    (1..10_000u32)
        .find(|&seed| {
            let mut state = GameState::new(seed);
            state.start();
            state.active().map(|p| p.kind) == Some(kind)
        })
        .expect("no seed opens with the requested piece")
}

fn started(seed: u32, board: Board) -> GameState {
    let mut state = GameState::with_board(seed, board);
    state.start();
    state.drain_events().for_each(drop);
    state
}

#[derive(Default)]
struct Recorder {
    moves: u32,
    rotations: u32,
    locks: u32,
    cleared: Vec<u32>,
    game_over: Option<GameSummary>,
}

impl Notifier for Recorder {
    fn on_move(&mut self) {
        self.moves += 1;
    }

    fn on_rotate_success(&mut self) {
        self.rotations += 1;
    }

    fn on_lock(&mut self) {
        self.locks += 1;
    }

    fn on_line_clear(&mut self, count: u32) {
        self.cleared.push(count);
    }

    fn on_game_over(&mut self, summary: &GameSummary) {
        self.game_over = Some(*summary);
    }
}

#[test]
fn test_game_lifecycle() {
    let mut state = GameState::new(12345);
    assert_eq!(state.phase(), Phase::Ready);
    assert!(state.active().is_none());

    assert!(state.apply_action(GameAction::Start));
    assert_eq!(state.phase(), Phase::Playing);
    assert!(state.active().is_some());

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), Phase::Paused);
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.tick(5000));

    assert!(state.apply_action(GameAction::Pause));
    assert_eq!(state.phase(), Phase::Playing);
}

#[test]
fn test_hard_drop_into_gap_clears_after_delay() {
    let seed = seed_opening_with(PieceKind::I);
    let mut state = started(seed, Board::from_ascii(&["III....III"]));

    assert_eq!(state.hard_drop(), 18);
    assert_eq!(state.score(), 36);
    assert!(state.is_clearing());
    assert_eq!(state.clearing_rows(), &[19]);
    assert!(state.active().is_none());

    let events: Vec<_> = state.drain_events().collect();
    assert_eq!(
        events,
        [GameEvent::HardDropped { cells: 18 }, GameEvent::Locked]
    );

    // Input is ignored while the row is flashing.
    assert!(!state.apply_action(GameAction::MoveLeft));
    assert!(!state.tick(LINE_CLEAR_DELAY_MS - 1));
    assert!(state.is_clearing());

    assert!(state.tick(1));
    assert!(!state.is_clearing());
    assert_eq!(state.lines(), 1);
    assert_eq!(state.score(), 136);
    assert!(state.board().cells().iter().all(|c| c.is_none()));
    assert!(state.active().is_some());

    let events: Vec<_> = state.drain_events().collect();
    assert_eq!(
        events,
        [GameEvent::LinesCleared {
            count: 1,
            points: 100
        }]
    );
}

#[test]
fn test_frame_driver_applies_gravity() {
    let mut state = started(5, Board::new());
    let y0 = state.active().unwrap().y;
    let mut driver = FrameDriver::new();

    assert!(!driver.advance(&mut state, 10_000));
    assert!(!driver.advance(&mut state, 11_000));
    assert_eq!(state.active().unwrap().y, y0);
    assert!(driver.advance(&mut state, 11_001));
    assert_eq!(state.active().unwrap().y, y0 + 1);

    // Soft drop speeds gravity up.
    state.apply_action(GameAction::SoftDropOn);
    assert!(!driver.advance(&mut state, 11_051));
    assert!(driver.advance(&mut state, 11_102));
    assert_eq!(state.active().unwrap().y, y0 + 2);
}

#[test]
fn test_hold_once_per_piece() {
    let mut state = started(77, Board::new());
    let first = state.active().unwrap().kind;
    let upcoming = state.next();

    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.hold_piece(), Some(first));
    assert_eq!(state.active().unwrap().kind, upcoming);
    assert!(!state.can_hold());
    assert!(!state.apply_action(GameAction::Hold));

    state.hard_drop();
    assert!(state.can_hold());
    assert!(state.apply_action(GameAction::Hold));
    assert_eq!(state.active().unwrap().kind, first);
}

#[test]
fn test_events_reach_notifier_in_order() {
    let mut state = started(3, Board::new());
    state.apply_action(GameAction::MoveLeft);
    state.apply_action(GameAction::MoveRight);
    state.apply_action(GameAction::RotateCw);
    state.apply_action(GameAction::HardDrop);

    let mut recorder = Recorder::default();
    dispatch(state.drain_events(), &mut recorder);
    assert_eq!(recorder.moves, 2);
    assert_eq!(recorder.rotations, 1);
    assert_eq!(recorder.locks, 1);
    assert!(recorder.cleared.is_empty());
    assert_eq!(state.drain_events().count(), 0);
}

#[test]
fn test_stacking_ends_the_game() {
    let mut state = started(11, Board::new());
    let mut recorder = Recorder::default();

    for _ in 0..100 {
        if state.phase() == Phase::GameOver {
            break;
        }
        state.apply_action(GameAction::HardDrop);
        dispatch(state.drain_events(), &mut recorder);
    }

    assert_eq!(state.phase(), Phase::GameOver);
    let summary = recorder.game_over.expect("game over event");
    assert_eq!(summary, state.summary());
    assert_eq!(summary.pieces_placed, recorder.locks);
    assert!(summary.score > 0);

    // Nothing but a restart moves a finished game.
    assert!(!state.apply_action(GameAction::HardDrop));
    assert!(!state.apply_action(GameAction::Pause));
    assert!(state.apply_action(GameAction::Restart));
    assert_eq!(state.phase(), Phase::Playing);
    assert_eq!(state.score(), 0);
    assert_eq!(state.pieces_placed(), 0);
}

#[test]
fn test_same_seed_same_game() {
    let script = [
        GameAction::MoveLeft,
        GameAction::RotateCw,
        GameAction::HardDrop,
        GameAction::Hold,
        GameAction::MoveRight,
        GameAction::HardDrop,
        GameAction::RotateCcw,
        GameAction::HardDrop,
    ];

    let play = || {
        let mut state = started(4242, Board::new());
        for action in script {
            state.apply_action(action);
            state.tick(16);
        }
        state.snapshot()
    };

    assert_eq!(play(), play());
}

#[test]
fn test_preview_matches_future_spawns() {
    let mut state = started(9, Board::new());
    let mut upcoming = vec![state.next()];
    upcoming.extend(state.preview(5));

    for expected in upcoming {
        state.hard_drop();
        assert_eq!(state.phase(), Phase::Playing);
        assert_eq!(state.active().unwrap().kind, expected);
    }
}
