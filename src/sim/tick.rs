//! Per-frame simulation tick
//!
//! One call per rendered frame. Discrete input events are applied first, in
//! arrival order, then an active session advances: animation, player, obstacles,
//! score, collision, difficulty.

use super::player::Controls;
use super::state::{GameEvent, GamePhase, GameState};
use crate::highscores::HighscoreStore;

/// How far ahead (in ticks of obstacle travel) the autopilot looks before jumping
const AUTOPILOT_LOOKAHEAD_TICKS: f32 = 8.0;

/// Discrete, already-decoded input events
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Start a session from the main menu
    Start,
    /// Toggle the pause overlay
    Pause,
    /// Leave the pause overlay
    Resume,
    /// Abandon a paused session
    MainMenu,
    /// Close the game
    Quit,
}

/// Input for a single tick
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Held movement keys
    pub move_left: bool,
    pub move_right: bool,
    pub jump: bool,
    /// Events received since the last tick, oldest first
    pub events: Vec<InputEvent>,
    /// Idle/demo mode - autopilot drives the player
    pub idle_mode: bool,
}

impl TickInput {
    pub fn with_event(event: InputEvent) -> Self {
        Self {
            events: vec![event],
            ..Default::default()
        }
    }

    fn controls(&self) -> Controls {
        Controls {
            left: self.move_left,
            right: self.move_right,
            jump: self.jump,
        }
    }
}

/// Whether the frame loop should keep going
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopControl {
    Continue,
    Quit,
}

/// Advance the game by one frame
pub fn tick(
    state: &mut GameState,
    input: &TickInput,
    store: &mut dyn HighscoreStore,
) -> LoopControl {
    // Game over only lasts for the frame it happened in
    if state.phase == GamePhase::GameOver {
        state.phase = GamePhase::MainMenu;
    }

    for event in &input.events {
        match event {
            InputEvent::Quit => {
                log::info!("Quit requested");
                return LoopControl::Quit;
            }
            InputEvent::Start => {
                if state.phase == GamePhase::MainMenu {
                    state.start_session(store);
                }
            }
            InputEvent::Pause => match state.phase {
                GamePhase::Playing => state.pause(),
                GamePhase::Paused => state.resume(),
                _ => {}
            },
            InputEvent::Resume => state.resume(),
            InputEvent::MainMenu => state.return_to_menu(),
        }
    }

    if !state.is_active() {
        return LoopControl::Continue;
    }

    state.time_ticks += 1;

    let controls = if input.idle_mode {
        autopilot(state)
    } else {
        input.controls()
    };

    let sprites = state.sprites;
    state.player.update_animation(&sprites);

    let floor_top = state.settings.floor_top();
    let max_x = state.settings.max_player_x();
    if state.player.apply_movement(controls, floor_top, max_x) {
        state.push_event(GameEvent::Jumped);
    }

    let points = state.obstacles.move_obstacles(true);
    if points > 0 {
        state.score += u64::from(points);
        state.push_event(GameEvent::Scored {
            points,
            score: state.score,
        });
    }

    // The rest of the frame still runs; the field freezes from the next tick
    if state.obstacles.check_collision(&state.player.rect()) {
        state.end_session(store);
    }

    if state.difficulty.update(state.score, &mut state.obstacles) {
        let speed = state.obstacles.speed;
        state.push_event(GameEvent::SpeedIncreased { speed });
        log::debug!("Speed up to {} at score {}", speed, state.score);
    }

    log::trace!(
        "tick {}: player {:?} obstacles {:?} score {}",
        state.time_ticks,
        state.player.pos,
        state.obstacles.positions,
        state.score
    );

    LoopControl::Continue
}

/// Demo-mode controls: jump when the nearest obstacle ahead is close
fn autopilot(state: &GameState) -> Controls {
    let player = &state.player;
    let front = player.pos.x + player.size;
    let window = state.obstacles.speed * AUTOPILOT_LOOKAHEAD_TICKS;
    let threat = state.obstacles.positions.iter().any(|&x| {
        let gap = x - front;
        gap > 0.0 && gap <= window
    });
    Controls {
        jump: threat && player.on_ground,
        ..Default::default()
    }
}
