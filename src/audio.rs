//! Audio cues for game events
//!
//! The simulation only raises `GameEvent`s. `AudioManager` turns them into
//! playback commands for whatever backend is plugged in as an `AudioSink`.

use crate::settings::AudioSettings;
use crate::sim::GameEvent;

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Player hit an obstacle
    Death,
}

impl SoundEffect {
    pub fn file_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump-sound.ogg",
            SoundEffect::Death => "death-sound.ogg",
        }
    }
}

/// Looping music tracks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MusicTrack {
    Menu,
    InGame,
}

impl MusicTrack {
    pub fn file_name(&self) -> &'static str {
        match self {
            MusicTrack::Menu => "nguu.ogg",
            MusicTrack::InGame => "somebody_told_you.ogg",
        }
    }
}

/// A single instruction for the playback backend
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AudioCommand {
    PlayEffect { effect: SoundEffect, volume: f32 },
    PlayMusic { track: MusicTrack, volume: f32 },
    StopMusic,
    SetMusicVolume(f32),
}

/// Playback backend
pub trait AudioSink {
    fn apply(&mut self, command: AudioCommand);
}

/// Sink that only logs, for headless runs
#[derive(Debug, Default)]
pub struct LogAudioSink;

impl AudioSink for LogAudioSink {
    fn apply(&mut self, command: AudioCommand) {
        match command {
            AudioCommand::PlayEffect { effect, volume } => {
                log::debug!("sfx {} @ {:.2}", effect.file_name(), volume)
            }
            AudioCommand::PlayMusic { track, volume } => {
                log::debug!("music {} @ {:.2}", track.file_name(), volume)
            }
            AudioCommand::StopMusic => log::debug!("music stopped"),
            AudioCommand::SetMusicVolume(volume) => log::debug!("music volume {:.2}", volume),
        }
    }
}

/// Translates game events into audio commands
#[derive(Debug, Clone)]
pub struct AudioManager {
    settings: AudioSettings,
    muted: bool,
}

impl AudioManager {
    pub fn new(settings: AudioSettings) -> Self {
        Self {
            settings,
            muted: settings.muted,
        }
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    /// Commands to start the menu music on launch
    pub fn startup(&self) -> Vec<AudioCommand> {
        self.filtered(vec![AudioCommand::PlayMusic {
            track: MusicTrack::Menu,
            volume: self.settings.music_volume,
        }])
    }

    /// Commands triggered by a single event
    pub fn commands_for(&self, event: &GameEvent) -> Vec<AudioCommand> {
        let music = self.settings.music_volume;
        let commands = match event {
            GameEvent::SessionStarted => vec![
                AudioCommand::StopMusic,
                AudioCommand::PlayMusic {
                    track: MusicTrack::InGame,
                    volume: music,
                },
            ],
            GameEvent::Jumped => vec![AudioCommand::PlayEffect {
                effect: SoundEffect::Jump,
                volume: self.settings.jump_volume,
            }],
            GameEvent::Died { .. } => vec![
                AudioCommand::StopMusic,
                AudioCommand::PlayEffect {
                    effect: SoundEffect::Death,
                    volume: music,
                },
                AudioCommand::PlayMusic {
                    track: MusicTrack::Menu,
                    volume: music,
                },
            ],
            GameEvent::Paused => vec![AudioCommand::SetMusicVolume(self.settings.paused_volume)],
            GameEvent::Resumed => vec![AudioCommand::SetMusicVolume(music)],
            GameEvent::ReturnedToMenu => vec![AudioCommand::PlayMusic {
                track: MusicTrack::Menu,
                volume: music,
            }],
            GameEvent::Scored { .. }
            | GameEvent::SpeedIncreased { .. }
            | GameEvent::NewHighscore { .. }
            | GameEvent::SessionEnded { .. } => Vec::new(),
        };
        self.filtered(commands)
    }

    /// Route every event's commands into `sink`
    pub fn dispatch(&self, events: &[GameEvent], sink: &mut dyn AudioSink) {
        for event in events {
            for command in self.commands_for(event) {
                sink.apply(command);
            }
        }
    }

    fn filtered(&self, commands: Vec<AudioCommand>) -> Vec<AudioCommand> {
        if self.muted {
            // Stopping is still honoured so nothing keeps playing
            commands
                .into_iter()
                .filter(|c| matches!(c, AudioCommand::StopMusic))
                .collect()
        } else {
            commands
        }
    }
}
