use dino_runner::sim::{GameEvent, GamePhase, GameState, InputEvent, LoopControl, TickInput, tick};
use dino_runner::{FileHighscoreStore, HighscoreStore, MemoryHighscoreStore, Settings};

fn temp_store(name: &str) -> FileHighscoreStore {
    let path = std::env::temp_dir().join(format!("dino_runner_it_{}_{}.json", name, std::process::id()));
    let _ = std::fs::remove_file(&path);
    FileHighscoreStore::new(path)
}

#[test]
fn test_highscore_survives_between_games() {
    let mut store = temp_store("survives");
    assert_eq!(store.load(), 0);

    let mut state = GameState::new(Settings::default(), 7);
    tick(&mut state, &TickInput::with_event(InputEvent::Start), &mut store);
    state.obstacles.positions = vec![-18.0, 100.0, 900.0];

    let mut ticks = 0;
    while state.is_active() {
        tick(&mut state, &TickInput::default(), &mut store);
        ticks += 1;
        assert!(ticks < 100, "player should have been hit");
    }
    assert_eq!(state.phase, GamePhase::GameOver);
    assert_eq!(state.score, 1);
    assert_eq!(store.load(), 1);

    // A fresh process reads it back
    let mut next = GameState::new(Settings::default(), 8);
    next.refresh_highscore(&store);
    assert_eq!(next.highscore, 1);

    let _ = std::fs::remove_file(store.path());
}

#[test]
fn test_autopilot_session_accounting() {
    let mut store = MemoryHighscoreStore::new();
    let mut state = GameState::new(Settings::default(), 99);
    tick(&mut state, &TickInput::with_event(InputEvent::Start), &mut store);

    let idle = TickInput {
        idle_mode: true,
        ..Default::default()
    };
    let mut scored = 0u64;
    let mut speedups = 0;
    for _ in 0..3_000 {
        tick(&mut state, &idle, &mut store);
        for event in state.drain_events() {
            match event {
                GameEvent::Scored { points, score } => {
                    scored += u64::from(points);
                    assert_eq!(score, scored);
                }
                GameEvent::SpeedIncreased { .. } => speedups += 1,
                _ => {}
            }
        }
        if !state.is_active() {
            break;
        }
    }

    assert_eq!(state.score, scored);
    // One increase per band reached, each 0.5
    let expected_speed = 2.0 + 0.5 * speedups as f32;
    assert!((state.obstacles.speed - expected_speed).abs() < 1e-6);
    if state.phase == GamePhase::GameOver && state.score > 0 {
        assert_eq!(store.highscore, Some(state.score));
    }
}

#[test]
fn test_quit_mid_session_keeps_stored_highscore() {
    let mut store = MemoryHighscoreStore::with_highscore(12);
    let mut state = GameState::new(Settings::default(), 1);
    tick(&mut state, &TickInput::with_event(InputEvent::Start), &mut store);
    state.score = 40;

    let control = tick(&mut state, &TickInput::with_event(InputEvent::Quit), &mut store);
    assert_eq!(control, LoopControl::Quit);
    assert_eq!(store.load(), 12);
    assert_eq!(store.saves, 0);
}
