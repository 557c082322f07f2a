//! Building `rodio` sinks from downloaded clips.

use std::io::Cursor;

use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink};

/// Decode `bytes` into a paused `Sink` on `stream` at `volume`.
pub(super) fn create_sink(
    stream: &OutputStream,
    bytes: Vec<u8>,
    volume: f32,
) -> Result<Sink, DecoderError> {
    let source = Decoder::new(Cursor::new(bytes))?;
    let sink = Sink::connect_new(stream.mixer());
    sink.set_volume(volume);
    sink.append(source);
    sink.pause();
    Ok(sink)
}
