//! Best-effort completion notification.
//!
//! Plays a short audio cue and rings the terminal bell when a session
//! completes. Audio objects are not `Send`, so a dedicated thread owns the
//! output stream and receives cue requests over a channel; the thread is
//! spawned lazily on the first cue. Every failure here (no audio device,
//! a dead channel, a closed terminal) is swallowed: notification must
//! never affect the timer.

use parking_lot::Mutex;
use rodio::source::{SineWave, Source};
use rodio::{OutputStream, Sink};
use std::io::Write;
use std::sync::mpsc::{self, Sender};
use std::thread;
use std::time::Duration;

enum Cue {
    SessionEnd,
}

pub struct Notifier {
    tx: Mutex<Option<Sender<Cue>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self { tx: Mutex::new(None) }
    }

    /// Signals a completed session: terminal bell plus a two-tone chime.
    /// Returns immediately; playback happens on the audio thread.
    pub fn session_end(&self) {
        // BEL is the terminal-native notification channel
        print!("\x07");
        let _ = std::io::stdout().flush();

        let tx = self.ensure_thread();
        let _ = tx.send(Cue::SessionEnd);
    }

    fn ensure_thread(&self) -> Sender<Cue> {
        let mut guard = self.tx.lock();
        if let Some(tx) = guard.as_ref() {
            return tx.clone();
        }

        let (tx, rx) = mpsc::channel::<Cue>();

        // The audio thread holds the non-Send rodio objects for its lifetime
        let _ = thread::Builder::new().name("notifier-audio".to_string()).spawn(move || {
            while let Ok(cue) = rx.recv() {
                match cue {
                    Cue::SessionEnd => play_chime(),
                }
            }
        });

        *guard = Some(tx.clone());
        tx
    }
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

/// Two short ascending tones. Errors are ignored on purpose: a machine
/// without an audio device still gets the terminal bell.
fn play_chime() {
    let Ok((_stream, handle)) = OutputStream::try_default() else {
        return;
    };
    let Ok(sink) = Sink::try_new(&handle) else {
        return;
    };

    sink.append(SineWave::new(660.0).take_duration(Duration::from_millis(160)).amplify(0.25));
    sink.append(SineWave::new(880.0).take_duration(Duration::from_millis(220)).amplify(0.25));
    sink.sleep_until_end();
}
