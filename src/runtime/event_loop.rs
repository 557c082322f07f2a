use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::app::App;
use crate::config::Settings;
use crate::error::Result;
use crate::preview::{PreviewCmd, PreviewEvent, PreviewPlayer, ToggleOutcome, fetch_clip};
use crate::ui;

use super::startup::Tui;
use super::{AppEvent, PollRequest};

/// Handles the loop needs to act on the outside world.
pub struct Context<'a> {
    pub settings: &'a Settings,
    pub player: &'a PreviewPlayer,
    pub http: &'a reqwest::Client,
    pub handle: &'a Handle,
    pub poll_tx: &'a UnboundedSender<PollRequest>,
    pub event_tx: &'a mpsc::Sender<AppEvent>,
}

/// State tracked by the runtime event loop across iterations.
#[derive(Debug, Default)]
pub struct EventLoopState {
    /// Internal two-key prefix state used for `gg` handling.
    pub pending_gg: bool,
    /// Redraw counter driving the spinner.
    pub tick: usize,
}

/// Side effects requested by a key press.
#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Refresh,
    StationChanged,
    Preview(ToggleOutcome),
}

/// Main terminal event loop: handles input, UI drawing and events from the
/// poller and the audio thread. Returns `Ok(())` when shutdown is requested.
pub fn run(
    terminal: &mut Tui,
    app: &mut App,
    ctx: &Context<'_>,
    events: &mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let mut state = EventLoopState::default();

    loop {
        while let Ok(event) = events.try_recv() {
            if let Some(cmd) = on_app_event(event, app) {
                let _ = ctx.player.send(cmd);
            }
        }

        app.set_width(terminal.size()?.width);
        terminal.draw(|f| ui::draw(f, app, &ctx.settings.ui, state.tick / 4))?;
        state.tick = state.tick.wrapping_add(1);

        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if key.kind != KeyEventKind::Press {
                    continue;
                }
                if let Some(action) = handle_key_event(key, app, &mut state) {
                    if apply_action(action, app, ctx) {
                        break;
                    }
                }
            }
        }
    }

    Ok(())
}

/// Fold an event into `app`. Returns a command for the audio thread when a
/// downloaded clip is still the one the user wants to hear.
pub fn on_app_event(event: AppEvent, app: &mut App) -> Option<PreviewCmd> {
    match event {
        AppEvent::CycleStarted { .. } => app.cycle_started(),
        AppEvent::CycleFinished {
            seq,
            station_id,
            tracks,
        } => {
            app.apply_cycle(seq, &station_id, tracks);
        }
        AppEvent::ClipLoaded { url, bytes } => {
            if app.preview.is_playing(&url) {
                return Some(PreviewCmd::Play { url, bytes });
            }
            log::debug!("discarding preview {url}, no longer selected");
        }
        AppEvent::ClipFailed(url)
        | AppEvent::Preview(PreviewEvent::Failed(url))
        | AppEvent::Preview(PreviewEvent::Ended(url)) => {
            app.preview.finished(&url);
        }
    }
    None
}

/// Carry out `action`. Returns true when the loop should stop.
fn apply_action(action: Action, app: &App, ctx: &Context<'_>) -> bool {
    match action {
        Action::Quit => {
            ctx.player.quit_softly(Duration::from_millis(
                ctx.settings.preview.quit_fade_out_ms,
            ));
            return true;
        }
        Action::Refresh => {
            let _ = ctx.poll_tx.send(PollRequest::Refresh);
        }
        Action::StationChanged => {
            ctx.player.stop();
            let _ = ctx.poll_tx.send(PollRequest::Station(app.station.clone()));
        }
        Action::Preview(ToggleOutcome::Pause) => ctx.player.stop(),
        Action::Preview(ToggleOutcome::Play(url)) => {
            ctx.player.stop();
            let http = ctx.http.clone();
            let events = ctx.event_tx.clone();
            ctx.handle.spawn(async move {
                let event = match fetch_clip(&http, &url).await {
                    Ok(bytes) => AppEvent::ClipLoaded { url, bytes },
                    Err(err) => {
                        log::warn!("failed to download preview {url}: {err}");
                        AppEvent::ClipFailed(url)
                    }
                };
                let _ = events.send(event);
            });
        }
    }
    false
}

/// Translate a key press into model changes plus an optional side effect.
pub fn handle_key_event(key: KeyEvent, app: &mut App, state: &mut EventLoopState) -> Option<Action> {
    let is_g = key.code == KeyCode::Char('g');
    let gg = is_g && state.pending_gg;
    state.pending_gg = is_g && !gg;

    match key.code {
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            return Some(Action::Quit);
        }
        KeyCode::Char('q') => return Some(Action::Quit),
        KeyCode::Char('g') => {
            if gg {
                app.first();
            }
        }
        KeyCode::Char('G') => app.last(),
        KeyCode::Char('h') | KeyCode::Left => app.move_left(),
        KeyCode::Char('l') | KeyCode::Right => app.move_right(),
        KeyCode::Char('k') | KeyCode::Up => app.move_up(),
        KeyCode::Char('j') | KeyCode::Down => app.move_down(),
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Char('p') => {
            return app.toggle_selected_preview().map(Action::Preview);
        }
        KeyCode::Char('r') => return Some(Action::Refresh),
        KeyCode::Tab => {
            if app.next_station() {
                return Some(Action::StationChanged);
            }
        }
        KeyCode::Char('K') => app.toggle_metadata_window(),
        KeyCode::Esc => app.metadata_window = false,
        _ => {}
    }

    None
}
