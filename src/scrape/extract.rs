use std::sync::LazyLock;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::config::{ExtractorKind, ScrapeSettings};
use crate::track::Track;

static HEADINGS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse("h2").expect("static selector"));
static TRACK_LINKS: LazyLock<Selector> =
    LazyLock::new(|| Selector::parse(r#"a[href*="/track/"]"#).expect("static selector"));

/// `15:00 - 18:00`: a programme block, not a song.
static TIME_RANGE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}\s*-\s*\d{2}:\d{2}$").expect("static regex"));
/// `15:04`: the time a song was played.
static CLOCK_TIME: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{2}:\d{2}$").expect("static regex"));

/// Turns one station page into playlist entries, in page order.
///
/// Implementations never fail: markup they cannot make sense of yields no tracks.
pub trait Extractor: Send + Sync {
    fn extract(&self, html: &str) -> Vec<Track>;
}

/// Build the extractor configured for a station.
pub fn extractor_for(kind: ExtractorKind, settings: &ScrapeSettings) -> Box<dyn Extractor> {
    match kind {
        ExtractorKind::HeadingSibling => {
            Box::new(HeadingSiblingExtractor::from_settings(settings))
        }
        ExtractorKind::TrackLinks => Box::new(TrackLinkExtractor),
    }
}

fn element_text(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

/// Pages listing `<h2>Artist</h2>` followed by an element holding the title.
///
/// An element right before the heading whose text is a clock time becomes
/// `played_at`.
#[derive(Debug, Clone)]
pub struct HeadingSiblingExtractor {
    pub max_artist_len: usize,
    pub max_title_len: usize,
    /// Headings containing one of these are site chrome, not artists.
    pub ignored_headings: Vec<String>,
}

impl HeadingSiblingExtractor {
    pub fn from_settings(settings: &ScrapeSettings) -> Self {
        Self {
            max_artist_len: settings.max_artist_len,
            max_title_len: settings.max_title_len,
            ignored_headings: settings.ignored_headings.clone(),
        }
    }

    fn accepts(&self, artist: &str, title: &str) -> bool {
        if TIME_RANGE.is_match(title) {
            return false;
        }
        if artist.is_empty() || title.is_empty() {
            return false;
        }
        if self
            .ignored_headings
            .iter()
            .any(|needle| artist.contains(needle.as_str()))
        {
            return false;
        }
        artist.chars().count() <= self.max_artist_len && title.chars().count() <= self.max_title_len
    }
}

impl Default for HeadingSiblingExtractor {
    fn default() -> Self {
        Self::from_settings(&ScrapeSettings::default())
    }
}

impl Extractor for HeadingSiblingExtractor {
    fn extract(&self, html: &str) -> Vec<Track> {
        let doc = Html::parse_document(html);
        let mut tracks = Vec::new();

        for heading in doc.select(&HEADINGS) {
            let artist = element_text(heading);
            let title = heading
                .next_siblings()
                .find_map(ElementRef::wrap)
                .map(element_text)
                .unwrap_or_default();

            if !self.accepts(&artist, &title) {
                log::trace!("skipping heading {artist:?} / {title:?}");
                continue;
            }

            let played_at = heading
                .prev_siblings()
                .find_map(ElementRef::wrap)
                .map(element_text)
                .filter(|text| CLOCK_TIME.is_match(text));

            tracks.push(Track::new(artist, title).with_played_at(played_at));
        }

        tracks
    }
}

/// Pages listing `<a href="/track/...">Artist - Title</a>` links.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrackLinkExtractor;

impl Extractor for TrackLinkExtractor {
    fn extract(&self, html: &str) -> Vec<Track> {
        let doc = Html::parse_document(html);

        doc.select(&TRACK_LINKS)
            .filter_map(|link| {
                let text = element_text(link);
                let (artist, title) = text.split_once(" - ")?;
                let (artist, title) = (artist.trim(), title.trim());
                if artist.is_empty() || title.is_empty() {
                    return None;
                }
                Some(Track::new(artist, title))
            })
            .collect()
    }
}
