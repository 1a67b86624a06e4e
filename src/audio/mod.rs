//! Success/failure sound playback.
//!
//! Playback is fire-and-forget: the sink is detached so the menu loop never
//! waits for a clip to finish. Any failure is surfaced as a warning and has
//! no effect on the data flow.

use crate::config::Config;
use crate::ui::messages::warning;
use rodio::{Decoder, OutputStream, OutputStreamHandle, Sink};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

pub struct SoundPlayer {
    // The stream must stay alive for detached sinks to keep playing.
    _stream: Option<OutputStream>,
    handle: Option<OutputStreamHandle>,
}

impl SoundPlayer {
    /// Open the default output device. When sound is disabled or no device
    /// is available the player degrades to a silent no-op.
    pub fn new(cfg: &Config) -> Self {
        if !cfg.sound_enabled {
            return Self {
                _stream: None,
                handle: None,
            };
        }

        match OutputStream::try_default() {
            Ok((stream, handle)) => Self {
                _stream: Some(stream),
                handle: Some(handle),
            },
            Err(e) => {
                warning(format!("Sound error: {e}"));
                Self {
                    _stream: None,
                    handle: None,
                }
            }
        }
    }

    /// Start playing a clip without waiting for it to finish.
    pub fn play(&self, path: &Path) {
        let Some(handle) = &self.handle else {
            return;
        };

        if let Err(e) = Self::start(handle, path) {
            warning(format!("Sound error: {e}"));
        }
    }

    fn start(handle: &OutputStreamHandle, path: &Path) -> Result<(), String> {
        let file = File::open(path).map_err(|e| e.to_string())?;
        let source = Decoder::new(BufReader::new(file)).map_err(|e| e.to_string())?;

        let sink = Sink::try_new(handle).map_err(|e| e.to_string())?;
        sink.append(source);
        sink.detach();
        Ok(())
    }
}
