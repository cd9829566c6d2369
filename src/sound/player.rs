//! rodio-backed sound playback.

use std::fs::File;
use std::io::{BufReader, Cursor};

use rodio::{Decoder, OutputStream, Sink};

use crate::error::TempoError;
use crate::sound::{SoundPlayer, SoundSource, CHIME};

/// Plays sounds through the default audio output device.
///
/// The device is opened per playback and held until the sink drains, so
/// nothing is touched when a session runs with `--silent` and there is
/// never more than one outstanding stream.
pub struct RodioPlayer;

impl RodioPlayer {
    /// Create a player. The output device is not opened until `play`.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Default for RodioPlayer {
    fn default() -> Self {
        Self::new()
    }
}

impl SoundPlayer for RodioPlayer {
    fn play(&mut self, source: &SoundSource) -> Result<(), TempoError> {
        let (_stream, handle) =
            OutputStream::try_default().map_err(|e| TempoError::Playback(e.to_string()))?;
        let sink = Sink::try_new(&handle).map_err(|e| TempoError::Playback(e.to_string()))?;

        match source {
            SoundSource::Builtin => {
                let decoder = Decoder::new(Cursor::new(CHIME))
                    .map_err(|e| TempoError::Playback(format!("builtin chime: {e}")))?;
                sink.append(decoder);
            }
            SoundSource::Custom(path) => {
                if !path.is_file() {
                    return Err(TempoError::SoundNotFound(path.clone()));
                }
                let file =
                    File::open(path).map_err(|_| TempoError::SoundNotFound(path.clone()))?;
                let decoder = Decoder::new(BufReader::new(file))
                    .map_err(|e| TempoError::Playback(format!("{}: {e}", path.display())))?;
                sink.append(decoder);
            }
        }

        // Block until the stream reports the sound has finished
        sink.sleep_until_end();
        Ok(())
    }
}
