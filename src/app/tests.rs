use super::*;
use crate::config::Settings;
use crate::preview::ToggleOutcome;
use crate::station::StationRegistry;
use crate::track::Track;

fn t(artist: &str, title: &str) -> Track {
    Track::new(artist, title)
}

fn with_preview(artist: &str, url: &str) -> Track {
    Track {
        preview_url: Some(url.to_string()),
        ..Track::new(artist, "Song")
    }
}

fn app() -> App {
    let registry = StationRegistry::new(Settings::default().stations);
    let kink = registry.find("kink").cloned().unwrap();
    let mut app = App::new(registry, kink, Some(3));
    app.set_width(200);
    app
}

fn app_with(n: usize) -> App {
    let mut app = app();
    let tracks = (0..n).map(|i| t(&format!("Artist {i}"), "Song")).collect();
    app.cycle_started();
    assert!(app.apply_cycle(1, "kink", tracks));
    app
}

#[test]
fn columns_follow_terminal_width() {
    assert_eq!(columns_for_width(40), 2);
    assert_eq!(columns_for_width(59), 2);
    assert_eq!(columns_for_width(60), 3);
    assert_eq!(columns_for_width(89), 3);
    assert_eq!(columns_for_width(90), 4);
    assert_eq!(columns_for_width(119), 4);
    assert_eq!(columns_for_width(120), 5);
    assert_eq!(columns_for_width(300), 5);
}

#[test]
fn fixed_columns_override_width() {
    let mut app = app();
    app.set_width(40);
    assert_eq!(app.columns, 3);

    let registry = StationRegistry::new(Settings::default().stations);
    let kink = registry.find("kink").cloned().unwrap();
    let mut auto = App::new(registry, kink, None);
    auto.set_width(100);
    assert_eq!(auto.columns, 4);
}

#[test]
fn loading_tracks_in_flight_cycles() {
    let mut app = app();
    assert!(!app.is_loading());
    app.cycle_started();
    assert!(app.is_loading());
    assert!(app.show_skeletons());
    app.apply_cycle(1, "kink", vec![t("A", "B")]);
    assert!(!app.is_loading());
    assert!(!app.show_skeletons());
    assert!(app.seconds_since_refresh().is_some());
}

#[test]
fn previous_snapshot_stays_visible_while_refreshing() {
    let mut app = app_with(4);
    app.cycle_started();
    assert!(app.is_loading());
    assert!(!app.show_skeletons());
    assert_eq!(app.tracks.len(), 4);
}

#[test]
fn apply_cycle_replaces_snapshot_wholesale() {
    let mut app = app_with(4);
    app.cycle_started();
    assert!(app.apply_cycle(2, "kink", vec![t("New", "One")]));
    assert_eq!(app.tracks, vec![t("New", "One")]);
}

#[test]
fn empty_cycle_result_clears_the_grid() {
    let mut app = app_with(4);
    app.cycle_started();
    assert!(app.apply_cycle(2, "kink", Vec::new()));
    assert!(!app.has_tracks());
    assert!(!app.show_skeletons());
}

#[test]
fn stale_cycles_are_dropped() {
    let mut app = app();
    app.cycle_started();
    app.cycle_started();
    assert!(app.apply_cycle(2, "kink", vec![t("Newer", "x")]));
    assert!(!app.apply_cycle(1, "kink", vec![t("Older", "x")]));
    assert_eq!(app.tracks[0].artist, "Newer");
    assert!(!app.is_loading());
}

#[test]
fn cycles_for_other_station_are_dropped() {
    let mut app = app();
    app.cycle_started();
    assert!(app.next_station());
    assert_eq!(app.station.id, "sublime");
    app.cycle_started();
    assert!(!app.apply_cycle(1, "kink", vec![t("Kink", "x")]));
    assert!(app.tracks.is_empty());
    assert!(app.is_loading());
    assert!(app.apply_cycle(2, "sublime", vec![t("Sublime", "x")]));
    assert_eq!(app.tracks[0].artist, "Sublime");
}

#[test]
fn switching_station_clears_snapshot_and_preview() {
    let mut app = app();
    app.cycle_started();
    app.apply_cycle(1, "kink", vec![with_preview("A", "https://a")]);
    app.toggle_selected_preview();
    app.metadata_window = true;

    assert!(app.next_station());
    assert!(app.tracks.is_empty());
    assert_eq!(app.selected, 0);
    assert_eq!(app.preview.playing_url(), None);
    assert!(!app.metadata_window);
    assert!(app.last_refresh.is_none());

    assert!(app.next_station());
    assert_eq!(app.station.id, "kink");
}

#[test]
fn single_station_does_not_switch() {
    let stations = vec![Settings::default().stations.remove(0)];
    let only = stations[0].clone();
    let mut app = App::new(StationRegistry::new(stations), only, None);
    assert!(!app.next_station());
}

#[test]
fn horizontal_moves_are_clamped() {
    let mut app = app_with(4);
    app.move_left();
    assert_eq!(app.selected, 0);
    for _ in 0..10 {
        app.move_right();
    }
    assert_eq!(app.selected, 3);
}

#[test]
fn vertical_moves_step_by_row() {
    // 3 columns, 8 cards: rows [0 1 2] [3 4 5] [6 7]
    let mut app = app_with(8);
    app.selected = 1;
    app.move_down();
    assert_eq!(app.selected, 4);
    app.move_down();
    assert_eq!(app.selected, 7);
    app.move_down();
    assert_eq!(app.selected, 7);
    app.move_up();
    assert_eq!(app.selected, 4);
    app.move_up();
    app.move_up();
    assert_eq!(app.selected, 1);
}

#[test]
fn moving_down_into_short_last_row_lands_on_last_card() {
    let mut app = app_with(8);
    app.selected = 5;
    app.move_down();
    assert_eq!(app.selected, 7);
}

#[test]
fn first_and_last_jump() {
    let mut app = app_with(8);
    app.last();
    assert_eq!(app.selected, 7);
    app.first();
    assert_eq!(app.selected, 0);
}

#[test]
fn navigation_on_empty_grid_is_a_no_op() {
    let mut app = app();
    app.move_down();
    app.move_right();
    app.last();
    assert_eq!(app.selected, 0);
    assert!(app.selected_track().is_none());
}

#[test]
fn shrinking_snapshot_clamps_selection() {
    let mut app = app_with(8);
    app.last();
    app.cycle_started();
    app.apply_cycle(2, "kink", vec![t("A", "B"), t("C", "D")]);
    assert_eq!(app.selected, 1);
}

#[test]
fn preview_toggle_follows_selected_card() {
    let mut app = app();
    app.cycle_started();
    app.apply_cycle(
        1,
        "kink",
        vec![with_preview("A", "https://a"), t("No", "Preview"), with_preview("C", "https://c")],
    );

    assert_eq!(
        app.toggle_selected_preview(),
        Some(ToggleOutcome::Play("https://a".into()))
    );
    assert!(app.is_card_playing(0));

    app.selected = 1;
    assert_eq!(app.toggle_selected_preview(), None);
    assert!(app.is_card_playing(0));

    app.selected = 2;
    assert_eq!(
        app.toggle_selected_preview(),
        Some(ToggleOutcome::Play("https://c".into()))
    );
    assert!(!app.is_card_playing(0));
    assert!(app.is_card_playing(2));

    assert_eq!(app.toggle_selected_preview(), Some(ToggleOutcome::Pause));
    assert!(!app.is_card_playing(2));
}

#[test]
fn toggle_metadata_window_flips() {
    let mut app = app();
    app.toggle_metadata_window();
    assert!(app.metadata_window);
    app.toggle_metadata_window();
    assert!(!app.metadata_window);
}
