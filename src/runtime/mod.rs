//! Interactive mode: a tokio runtime for networking and a synchronous terminal loop.

use std::sync::mpsc;

use tokio::sync::mpsc as async_mpsc;

use crate::app::App;
use crate::config::Settings;
use crate::error::Result;
use crate::pipeline::Pipeline;
use crate::preview::{PreviewEvent, PreviewPlayer};
use crate::station::StationRegistry;
use crate::track::Track;

mod event_loop;
mod poller;
mod settings;
mod startup;

pub use poller::{PollRequest, run_poller};
pub use settings::load_settings;


/// Everything the terminal loop reacts to besides key presses.
#[derive(Debug)]
pub enum AppEvent {
    /// Poll cycle `seq` for `station_id` was spawned.
    CycleStarted { seq: u64, station_id: String },
    /// Poll cycle `seq` finished; `tracks` is empty when it failed.
    CycleFinished {
        seq: u64,
        station_id: String,
        tracks: Vec<Track>,
    },
    /// A preview clip finished downloading.
    ClipLoaded { url: String, bytes: Vec<u8> },
    /// A preview clip could not be downloaded.
    ClipFailed(String),
    Preview(PreviewEvent),
}

/// Run the TUI until the user quits, starting on `station_override` if given.
pub fn run(settings: Settings, station_override: Option<&str>) -> Result<()> {
    let registry = StationRegistry::new(settings.stations.clone());
    let station = startup::initial_station(&registry, &settings, station_override)?;

    let rt = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    let pipeline = Pipeline::from_settings(settings.clone())?;

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let (poll_tx, poll_rx) = async_mpsc::unbounded_channel::<PollRequest>();

    let preview_tx = event_tx.clone();
    let player = PreviewPlayer::new(&settings.preview, move |event| {
        let _ = preview_tx.send(AppEvent::Preview(event));
    });

    rt.spawn(run_poller(
        pipeline.clone(),
        station.clone(),
        settings.poll.interval(),
        poll_rx,
        event_tx.clone(),
    ));

    let mut app = App::new(registry, station, settings.ui.columns);
    let mut terminal = startup::enter_terminal()?;

    let ctx = event_loop::Context {
        settings: &settings,
        player: &player,
        http: pipeline.http(),
        handle: rt.handle(),
        poll_tx: &poll_tx,
        event_tx: &event_tx,
    };
    let run_result = event_loop::run(&mut terminal, &mut app, &ctx, &event_rx);

    startup::leave_terminal(&mut terminal)?;
    // In-flight cycles are abandoned rather than awaited.
    rt.shutdown_background();
    log::info!("bye");

    run_result
}
