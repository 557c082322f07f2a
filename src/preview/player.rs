use std::sync::Mutex;
use std::sync::mpsc::{self, Sender};
use std::thread::JoinHandle;
use std::time::Duration;

use crate::config::PreviewSettings;

use super::thread::spawn_preview_thread;
use super::types::{PreviewCmd, PreviewEvent};

/// Handle to the audio thread.
pub struct PreviewPlayer {
    tx: Sender<PreviewCmd>,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl PreviewPlayer {
    /// Spawn the audio thread. `notify` is called from that thread on clip end or failure.
    pub fn new<F>(settings: &PreviewSettings, notify: F) -> Self
    where
        F: Fn(PreviewEvent) + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<PreviewCmd>();
        let handle = spawn_preview_thread(rx, settings.volume, Box::new(notify));
        Self {
            tx,
            join: Mutex::new(Some(handle)),
        }
    }

    pub fn send(&self, cmd: PreviewCmd) -> Result<(), mpsc::SendError<PreviewCmd>> {
        self.tx.send(cmd)
    }

    pub fn play(&self, url: String, bytes: Vec<u8>) {
        let _ = self.send(PreviewCmd::Play { url, bytes });
    }

    pub fn stop(&self) {
        let _ = self.send(PreviewCmd::Stop);
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        let _ = self.send(PreviewCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}
