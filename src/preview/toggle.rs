/// What the caller should do after a toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToggleOutcome {
    /// Start the given clip, replacing any other.
    Play(String),
    /// Stop the clip that was playing.
    Pause,
}

/// Tracks which preview URL, if any, is currently playing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PreviewToggle {
    playing_url: Option<String>,
}

impl PreviewToggle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Toggle `url`: pausing it when it is the current clip, otherwise making it current.
    pub fn toggle(&mut self, url: &str) -> ToggleOutcome {
        if self.is_playing(url) {
            self.playing_url = None;
            ToggleOutcome::Pause
        } else {
            self.playing_url = Some(url.to_string());
            ToggleOutcome::Play(url.to_string())
        }
    }

    /// A clip ended or failed. Returns true when it was the current one and got cleared.
    pub fn finished(&mut self, url: &str) -> bool {
        if self.is_playing(url) {
            self.playing_url = None;
            true
        } else {
            false
        }
    }

    pub fn clear(&mut self) {
        self.playing_url = None;
    }

    pub fn playing_url(&self) -> Option<&str> {
        self.playing_url.as_deref()
    }

    pub fn is_playing(&self, url: &str) -> bool {
        self.playing_url.as_deref() == Some(url)
    }
}
