//! Dino Runner entry point
//!
//! Headless native runner: loads settings, sprites and the highscore, then
//! drives the frame loop with the autopilot until the run ends.

use std::path::PathBuf;

use anyhow::Context;

use dino_runner::assets::{PlayerSprites, load_obstacle_sprite};
use dino_runner::audio::{AudioManager, AudioSink, LogAudioSink};
use dino_runner::platform::FrameLimiter;
use dino_runner::sim::{GamePhase, GameState, InputEvent, LoopControl, TickInput, tick};
use dino_runner::{FileHighscoreStore, Settings};

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("Dino Runner (native) starting...");

    let args: Vec<String> = std::env::args().skip(1).collect();
    let mute = args.iter().any(|a| a == "--mute");
    let settings_path = args
        .iter()
        .find(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(Settings::FILE_NAME));
    let settings = Settings::load(&settings_path);
    if !settings_path.exists() {
        match settings.save(&settings_path) {
            Ok(()) => log::info!("Wrote default settings to {}", settings_path.display()),
            Err(e) => log::warn!(
                "Could not write settings to {}: {}",
                settings_path.display(),
                e
            ),
        }
    }

    let mut store = FileHighscoreStore::new(settings.highscore_path.clone());
    let seed = settings.seed.unwrap_or_else(rand::random);
    log::info!("Run seed: {}", seed);

    let mut state = GameState::new(settings.clone(), seed);
    state.sprites = PlayerSprites::load(&settings.assets_dir);
    state.obstacle_sprite = load_obstacle_sprite(&settings.assets_dir);
    state.refresh_highscore(&store);

    let mut audio = AudioManager::new(settings.audio);
    if mute {
        audio.set_muted(true);
    }
    let mut sink = LogAudioSink;
    for command in audio.startup() {
        sink.apply(command);
    }

    let mut limiter = FrameLimiter::new(settings.fps);
    log::info!(
        "Frame budget {:?} ({} fps)",
        limiter.frame_duration(),
        settings.fps
    );
    loop {
        let mut input = TickInput {
            idle_mode: true,
            ..Default::default()
        };
        if limiter.frames() == 0 {
            input.events.push(InputEvent::Start);
        } else if state.phase == GamePhase::MainMenu
            || limiter.frames() >= settings.demo_frame_limit
        {
            input.events.push(InputEvent::Quit);
        }

        let control = tick(&mut state, &input, &mut store);
        audio.dispatch(&state.drain_events(), &mut sink);
        if control == LoopControl::Quit {
            break;
        }

        if log::log_enabled!(log::Level::Trace) {
            let snapshot =
                serde_json::to_string(&state.snapshot()).context("serializing snapshot")?;
            log::trace!("{}", snapshot);
        }
        limiter.wait();
    }

    log::info!(
        "Run finished after {} frames: score {}, highscore {} ({})",
        limiter.frames(),
        state.score,
        state.highscore,
        store.path().display()
    );
    Ok(())
}
