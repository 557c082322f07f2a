use serde::{Deserialize, Serialize};

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/radioscrobbler/config.toml` or
/// `~/.config/radioscrobbler/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `RADIOSCROBBLER__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct Settings {
    /// Station shown on startup (matched against `stations[].id`).
    pub default_station: String,
    pub stations: Vec<StationSettings>,
    pub ui: UiSettings,
    pub poll: PollSettings,
    pub scrape: ScrapeSettings,
    pub enrich: EnrichSettings,
    pub preview: PreviewSettings,
    pub server: ServerSettings,
    pub log: LogSettings,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_station: "kink".to_string(),
            stations: vec![
                StationSettings {
                    id: "kink".to_string(),
                    name: "Kink".to_string(),
                    color: "#E30513".to_string(),
                    page_url: "https://kink.nl/gedraaid/kink".to_string(),
                    extractor: ExtractorKind::HeadingSibling,
                    use_relay: false,
                },
                StationSettings {
                    id: "sublime".to_string(),
                    name: "Sublime".to_string(),
                    color: "#FF6B00".to_string(),
                    page_url: "https://onlineradiobox.com/nl/sublime/playlist/?cs=nl.bangsajawa"
                        .to_string(),
                    extractor: ExtractorKind::TrackLinks,
                    use_relay: false,
                },
            ],
            ui: UiSettings::default(),
            poll: PollSettings::default(),
            scrape: ScrapeSettings::default(),
            enrich: EnrichSettings::default(),
            preview: PreviewSettings::default(),
            server: ServerSettings::default(),
            log: LogSettings::default(),
        }
    }
}

/// One radio station whose "recently played" page gets scraped.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StationSettings {
    pub id: String,
    pub name: String,
    /// Accent colour as `#RRGGBB`.
    #[serde(default = "default_station_color")]
    pub color: String,
    pub page_url: String,
    pub extractor: ExtractorKind,
    /// Route the page request through `scrape.relay_url`.
    #[serde(default)]
    pub use_relay: bool,
}

fn default_station_color() -> String {
    "#FFFFFF".to_string()
}

/// Which markup heuristic turns a station page into tracks.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ExtractorKind {
    /// `<h2>Artist</h2><p>Title</p>` pairs, optionally preceded by a `HH:MM` element.
    #[serde(alias = "heading_sibling", alias = "headings")]
    HeadingSibling,
    /// `<a href=".../track/...">Artist - Title</a>` links.
    #[serde(alias = "track_links", alias = "links")]
    TrackLinks,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered next to the station name in the header box.
    pub header_text: String,
    /// Fixed number of grid columns. Unset = derive from terminal width.
    pub columns: Option<usize>,
    /// Placeholder cards drawn while the first refresh is in flight.
    pub skeleton_cards: usize,
    /// Whether cards show the `HH:MM` the station played the track at.
    pub show_played_at: bool,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " Radio Scrobbler ".to_string(),
            columns: None,
            skeleton_cards: 10,
            show_played_at: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PollSettings {
    /// Seconds between two automatic refreshes.
    pub interval_secs: u64,
}

impl Default for PollSettings {
    fn default() -> Self {
        Self { interval_secs: 60 }
    }
}

impl PollSettings {
    pub fn interval(&self) -> std::time::Duration {
        std::time::Duration::from_secs(self.interval_secs.max(1))
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScrapeSettings {
    /// `User-Agent` sent with page requests. Unset = reqwest default.
    pub user_agent: Option<String>,
    /// Relay prefix; the percent-encoded page URL is appended to it.
    pub relay_url: String,
    /// Only the first `max_tracks` extracted entries are kept.
    pub max_tracks: usize,
    /// Headings longer than this (in characters) are not artists.
    pub max_artist_len: usize,
    /// Sibling text longer than this (in characters) is not a title.
    pub max_title_len: usize,
    /// Headings containing any of these are navigation/footer, not artists.
    pub ignored_headings: Vec<String>,
    /// Optional per-request timeout. Unset = wait as long as the server does.
    pub timeout_secs: Option<u64>,
}

impl Default for ScrapeSettings {
    fn default() -> Self {
        Self {
            user_agent: Some(
                "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36"
                    .to_string(),
            ),
            relay_url: "https://corsproxy.io/?".to_string(),
            max_tracks: 50,
            max_artist_len: 50,
            max_title_len: 100,
            ignored_headings: vec![
                "Meld je aan".to_string(),
                "Contact".to_string(),
                "NaamTelefoonnummer".to_string(),
            ],
            timeout_secs: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct EnrichSettings {
    /// Set to false to show scraped tracks without cover art or previews.
    pub enabled: bool,
    pub search_url: String,
    /// `media` query parameter.
    pub media: String,
    /// Edge length substituted for `100x100` in artwork URLs.
    pub artwork_size: u32,
}

impl Default for EnrichSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            search_url: "https://itunes.apple.com/search".to_string(),
            media: "music".to_string(),
            artwork_size: 600,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct PreviewSettings {
    /// Playback volume, 0.0 to 1.0.
    pub volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            volume: 1.0,
            quit_fade_out_ms: 300,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Address the relay endpoint listens on.
    pub bind: String,
    /// Seconds a station's response is reused. 0 disables reuse.
    pub cache_secs: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            bind: "127.0.0.1:3000".to_string(),
            cache_secs: 60,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LogSettings {
    pub level: LogLevel,
    /// Log file used while the TUI owns the terminal.
    /// Unset = `$XDG_STATE_HOME/radioscrobbler/radioscrobbler.log`.
    pub file: Option<std::path::PathBuf>,
}

impl Default for LogSettings {
    fn default() -> Self {
        Self {
            level: LogLevel::Info,
            file: None,
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for log::LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}
