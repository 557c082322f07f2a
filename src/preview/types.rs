/// Commands understood by the audio thread.
#[derive(Debug)]
pub enum PreviewCmd {
    /// Replace whatever is playing with the clip in `bytes`.
    Play { url: String, bytes: Vec<u8> },
    /// Stop playback immediately.
    Stop,
    /// Quit the audio thread, fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// Notifications sent back from the audio thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewEvent {
    /// The clip played to its end.
    Ended(String),
    /// The clip could not be decoded or no output device is available.
    Failed(String),
}
