use std::sync::mpsc::{Receiver, RecvTimeoutError};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStreamBuilder, Sink};

use super::sink::create_sink;
use super::types::{PreviewCmd, PreviewEvent};

pub(super) type Notify = Box<dyn Fn(PreviewEvent) + Send>;

/// The clip currently owned by the audio thread.
struct Current {
    url: String,
    sink: Sink,
}

pub(super) fn spawn_preview_thread(rx: Receiver<PreviewCmd>, volume: f32, notify: Notify) -> JoinHandle<()> {
    thread::spawn(move || {
        let mut stream = match OutputStreamBuilder::open_default_stream() {
            Ok(stream) => stream,
            Err(err) => {
                log::error!("no audio output device, previews disabled: {err}");
                drain_without_output(rx, &notify);
                return;
            }
        };
        // rodio logs to stderr when OutputStream is dropped, which garbles the TUI.
        stream.log_on_drop(false);

        let mut current: Option<Current> = None;

        loop {
            match rx.recv_timeout(Duration::from_millis(200)) {
                Ok(PreviewCmd::Play { url, bytes }) => {
                    if let Some(old) = current.take() {
                        old.sink.stop();
                    }
                    match create_sink(&stream, bytes, volume) {
                        Ok(sink) => {
                            sink.play();
                            log::debug!("playing preview {url}");
                            current = Some(Current { url, sink });
                        }
                        Err(err) => {
                            log::warn!("failed to decode preview {url}: {err}");
                            notify(PreviewEvent::Failed(url));
                        }
                    }
                }
                Ok(PreviewCmd::Stop) => {
                    if let Some(old) = current.take() {
                        old.sink.stop();
                    }
                }
                Ok(PreviewCmd::Quit { fade_out_ms }) => {
                    if let Some(cur) = current.take() {
                        fade_out_sink(&cur.sink, volume, fade_out_ms);
                        cur.sink.stop();
                    }
                    break;
                }
                Err(RecvTimeoutError::Timeout) => {
                    // periodic check for the end of the clip
                    if current.as_ref().is_some_and(|cur| cur.sink.empty()) {
                        if let Some(done) = current.take() {
                            notify(PreviewEvent::Ended(done.url));
                        }
                    }
                }
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
    })
}

/// Without an output device every play request fails right away.
fn drain_without_output(rx: Receiver<PreviewCmd>, notify: &Notify) {
    for cmd in rx {
        match cmd {
            PreviewCmd::Play { url, .. } => notify(PreviewEvent::Failed(url)),
            PreviewCmd::Stop => {}
            PreviewCmd::Quit { .. } => break,
        }
    }
}

fn fade_out_sink(sink: &Sink, volume: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(volume * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}
