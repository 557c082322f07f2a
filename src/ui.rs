//! UI rendering helpers for the terminal user interface.
//!
//! This module contains functions to render the TUI using `ratatui`.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style, Stylize},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, Padding, Paragraph, Wrap},
};

use crate::app::App;
use crate::config::UiSettings;
use crate::station::Station;
use crate::track::Track;

/// Height of one card including its border.
const CARD_HEIGHT: u16 = 6;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

const CONTROLS: [(&str, &str); 8] = [
    ("h/j/k/l", "move"),
    ("gg/G", "first/last"),
    ("enter/space/p", "play/pause preview"),
    ("r", "refresh"),
    ("tab", "next station"),
    ("K", "metadata"),
    ("q", "quit"),
    ("arrows", "move"),
];

fn controls_text() -> String {
    CONTROLS
        .iter()
        .map(|(k, v)| format!("[{k}] {v}"))
        .collect::<Vec<String>>()
        .join(" | ")
}

/// Accent colour of `station`, white when its colour does not parse.
fn station_color(station: &Station) -> Color {
    station
        .rgb()
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::White)
}

fn preview_glyph(track: &Track, playing: bool) -> Option<&'static str> {
    match (&track.preview_url, playing) {
        (None, _) => None,
        (Some(_), true) => Some("⏸"),
        (Some(_), false) => Some("▶"),
    }
}

/// Lines shown inside one track card.
fn card_lines(track: &Track, playing: bool, show_played_at: bool) -> Vec<Line<'static>> {
    let mut title_style = Style::default().add_modifier(Modifier::BOLD);
    if playing {
        title_style = title_style.fg(Color::Green);
    }

    let mut status: Vec<Span<'static>> = Vec::new();
    if show_played_at {
        if let Some(at) = &track.played_at {
            status.push(Span::raw(at.clone()));
        }
    }
    if let Some(glyph) = preview_glyph(track, playing) {
        status.push(Span::styled(glyph, Style::default().fg(Color::Green)));
    }
    if track.cover_url.is_some() {
        status.push(Span::raw("◼ art").dim());
    }
    let status = status
        .into_iter()
        .flat_map(|s| [s, Span::raw("  ")])
        .collect::<Vec<_>>();

    vec![
        Line::from(Span::styled(track.title.clone(), title_style)),
        Line::from(track.artist.clone()),
        Line::from(track.collection_name.clone().unwrap_or_default()).dim(),
        Line::from(status),
    ]
}

fn skeleton_lines() -> Vec<Line<'static>> {
    vec![
        Line::from("░░░░░░░░░░░░░░").dim(),
        Line::from("░░░░░░░░░").dim(),
        Line::from("░░░░░░░░░░░").dim(),
    ]
}

/// Window of grid rows `[start, end)` that keeps `selected_row` visible.
fn visible_rows(selected_row: usize, total_rows: usize, capacity: usize) -> (usize, usize) {
    if capacity == 0 || total_rows <= capacity {
        return (0, total_rows);
    }
    let start = (selected_row + 1).saturating_sub(capacity);
    (start, start + capacity)
}

/// Compute a centered rectangle with given size constrained to `r`.
fn centered_rect_sized(mut width: u16, mut height: u16, r: Rect) -> Rect {
    width = width.min(r.width.saturating_sub(2)).max(10);
    height = height.min(r.height.saturating_sub(2)).max(5);

    let x = r.x + (r.width.saturating_sub(width) / 2);
    let y = r.y + (r.height.saturating_sub(height) / 2);
    Rect {
        x,
        y,
        width,
        height,
    }
}

fn header_line(app: &App, ui_settings: &UiSettings, tick: usize) -> Line<'static> {
    let color = station_color(&app.station);
    let mut spans = vec![
        Span::raw(ui_settings.header_text.clone()).bold(),
        Span::raw(" • "),
        Span::styled(app.station.name.clone(), Style::default().fg(color).bold()),
    ];
    if app.is_loading() {
        spans.push(Span::raw(format!(" {}", SPINNER[tick % SPINNER.len()])));
    }
    match app.seconds_since_refresh() {
        Some(secs) => spans.push(Span::raw(format!(" • updated {secs}s ago")).dim()),
        None if !app.is_loading() => spans.push(Span::raw(" • no data yet").dim()),
        None => {}
    }
    Line::from(spans)
}

fn draw_grid(frame: &mut Frame, app: &App, ui_settings: &UiSettings, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" recently played ");
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let columns = app.columns.max(1);
    let count = if app.show_skeletons() {
        ui_settings.skeleton_cards
    } else {
        app.tracks.len()
    };

    if count == 0 {
        let empty = Paragraph::new("No tracks found")
            .alignment(Alignment::Center)
            .dim();
        frame.render_widget(empty, inner);
        return;
    }

    let total_rows = count.div_ceil(columns);
    let capacity = (inner.height / CARD_HEIGHT) as usize;
    let (start, end) = visible_rows(app.selected / columns, total_rows, capacity.max(1));

    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Length(CARD_HEIGHT); end - start])
        .split(inner);

    for (row_area, row) in row_areas.iter().zip(start..end) {
        let cells = Layout::default()
            .direction(Direction::Horizontal)
            .constraints(vec![Constraint::Ratio(1, columns as u32); columns])
            .split(*row_area);

        for (col, cell) in cells.iter().enumerate() {
            let index = row * columns + col;
            if index >= count {
                break;
            }

            if app.show_skeletons() {
                let card = Paragraph::new(skeleton_lines())
                    .block(Block::default().borders(Borders::ALL).dim());
                frame.render_widget(card, *cell);
                continue;
            }

            let track = &app.tracks[index];
            let playing = app.is_card_playing(index);
            let mut card_block = Block::default()
                .borders(Borders::ALL)
                .padding(Padding::horizontal(1));
            if index == app.selected {
                card_block = card_block
                    .border_type(BorderType::Thick)
                    .border_style(Style::default().fg(station_color(&app.station)));
            }
            let card = Paragraph::new(card_lines(track, playing, ui_settings.show_played_at))
                .block(card_block);
            frame.render_widget(card, *cell);
        }
    }
}

fn metadata_text(track: Option<&Track>) -> String {
    let Some(track) = track else {
        return "No track selected".to_string();
    };
    format!(
        "Title: {}\nArtist: {}\nAlbum: {}\nPlayed at: {}\nCover: {}\nPreview: {}",
        track.title,
        track.artist,
        track.collection_name.as_deref().unwrap_or("-"),
        track.played_at.as_deref().unwrap_or("-"),
        track.cover_url.as_deref().unwrap_or("-"),
        track.preview_url.as_deref().unwrap_or("-"),
    )
}

/// Render the entire UI into the provided `frame`.
///
/// `tick` advances the loading spinner.
pub fn draw(frame: &mut Frame, app: &App, ui_settings: &UiSettings, tick: usize) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let header = Paragraph::new(header_line(app, ui_settings, tick))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(header, chunks[0]);

    draw_grid(frame, app, ui_settings, chunks[1]);

    // Overlay metadata popup (keeps the grid visible under it)
    if app.metadata_window {
        let popup_area = centered_rect_sized(90, 10, chunks[1]);
        frame.render_widget(Clear, popup_area);
        let meta = Paragraph::new(metadata_text(app.selected_track()))
            .block(
                Block::default()
                    .padding(Padding::left(1))
                    .borders(Borders::ALL)
                    .title(" metadata (K closes) "),
            )
            .wrap(Wrap { trim: true });
        frame.render_widget(meta, popup_area);
    }

    let footer = Paragraph::new(controls_text())
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" controls ")
                .padding(Padding::left(1)),
        )
        .wrap(Wrap { trim: true });
    frame.render_widget(footer, chunks[2]);
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;
    use crate::config::Settings;
    use crate::station::StationRegistry;

    fn app() -> App {
        let registry = StationRegistry::new(Settings::default().stations);
        let kink = registry.find("kink").cloned().unwrap();
        App::new(registry, kink, None)
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal
            .draw(|f| draw(f, app, &UiSettings::default(), 0))
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|c| c.symbol())
            .collect()
    }

    fn full_track() -> Track {
        Track {
            cover_url: Some("https://img/600x600.jpg".into()),
            preview_url: Some("https://audio/p.m4a".into()),
            collection_name: Some("AM".into()),
            played_at: Some("14:58".into()),
            ..Track::new("Arctic Monkeys", "Do I Wanna Know?")
        }
    }

    #[test]
    fn visible_rows_follow_selection() {
        assert_eq!(visible_rows(0, 3, 5), (0, 3));
        assert_eq!(visible_rows(0, 10, 4), (0, 4));
        assert_eq!(visible_rows(3, 10, 4), (0, 4));
        assert_eq!(visible_rows(4, 10, 4), (1, 5));
        assert_eq!(visible_rows(9, 10, 4), (6, 10));
    }

    #[test]
    fn preview_glyph_reflects_state() {
        let track = full_track();
        assert_eq!(preview_glyph(&track, false), Some("▶"));
        assert_eq!(preview_glyph(&track, true), Some("⏸"));
        assert_eq!(preview_glyph(&Track::new("A", "B"), false), None);
    }

    #[test]
    fn card_shows_title_artist_album_and_time() {
        let lines = card_lines(&full_track(), false, true);
        let text: Vec<String> = lines.iter().map(|l| l.to_string()).collect();
        assert_eq!(text[0], "Do I Wanna Know?");
        assert_eq!(text[1], "Arctic Monkeys");
        assert_eq!(text[2], "AM");
        assert!(text[3].contains("14:58"));
        assert!(text[3].contains("▶"));

        let hidden = card_lines(&full_track(), true, false);
        assert!(!hidden[3].to_string().contains("14:58"));
        assert_eq!(hidden[0].spans[0].style.fg, Some(Color::Green));
    }

    #[test]
    fn station_color_parses_hex() {
        let app = app();
        assert_eq!(station_color(&app.station), Color::Rgb(0xE3, 0x05, 0x13));
        let mut broken = app.station.clone();
        broken.color = "red".into();
        assert_eq!(station_color(&broken), Color::White);
    }

    #[test]
    fn metadata_text_lists_every_field() {
        let text = metadata_text(Some(&full_track()));
        assert!(text.contains("Album: AM"));
        assert!(text.contains("Cover: https://img/600x600.jpg"));
        assert!(text.contains("Preview: https://audio/p.m4a"));
        assert_eq!(metadata_text(None), "No track selected");
    }

    #[test]
    fn renders_skeletons_while_first_cycle_loads() {
        let mut app = app();
        app.cycle_started();
        let screen = render(&app, 100, 40);
        assert!(screen.contains("░░░"));
        assert!(screen.contains("Kink"));
    }

    #[test]
    fn renders_cards_and_empty_state() {
        let mut app = app();
        let screen = render(&app, 100, 30);
        assert!(screen.contains("No tracks found"));

        app.cycle_started();
        app.apply_cycle(1, "kink", vec![full_track()]);
        app.set_width(100);
        let screen = render(&app, 100, 30);
        assert!(screen.contains("Arctic Monkeys"));
        assert!(screen.contains("updated 0s ago"));
        assert!(!screen.contains("░"));
    }

    #[test]
    fn renders_metadata_popup() {
        let mut app = app();
        app.cycle_started();
        app.apply_cycle(1, "kink", vec![full_track()]);
        app.toggle_metadata_window();
        let screen = render(&app, 120, 40);
        assert!(screen.contains("metadata (K closes)"));
        assert!(screen.contains("Preview: https://audio/p.m4a"));
    }
}
