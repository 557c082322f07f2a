use std::sync::mpsc::Sender;
use std::time::Duration;

use tokio::sync::mpsc::UnboundedReceiver;
use tokio::time::{MissedTickBehavior, interval};

use crate::pipeline::Pipeline;
use crate::station::Station;

use super::AppEvent;

/// Out-of-schedule requests to the poller.
#[derive(Debug)]
pub enum PollRequest {
    /// Run a cycle now.
    Refresh,
    /// Poll this station from now on, starting with an immediate cycle.
    Station(Station),
}

/// Spawn one poll cycle immediately and then every `every`, plus on request.
///
/// Cycles run as independent tasks and are never cancelled; each carries a
/// sequence number so the receiver can drop results that arrive out of order.
/// Returns when the request channel closes or nobody listens for events anymore.
pub async fn run_poller(
    pipeline: Pipeline,
    mut station: Station,
    every: Duration,
    mut requests: UnboundedReceiver<PollRequest>,
    events: Sender<AppEvent>,
) {
    let mut ticker = interval(every);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
    let mut seq: u64 = 0;

    loop {
        tokio::select! {
            _ = ticker.tick() => {}
            request = requests.recv() => match request {
                None => break,
                Some(PollRequest::Refresh) => {
                    log::debug!("manual refresh of {}", station.id);
                    ticker.reset();
                }
                Some(PollRequest::Station(next)) => {
                    station = next;
                    ticker.reset();
                }
            },
        }

        seq += 1;
        let started = AppEvent::CycleStarted {
            seq,
            station_id: station.id.clone(),
        };
        if events.send(started).is_err() {
            break;
        }

        let pipeline = pipeline.clone();
        let station = station.clone();
        let events = events.clone();
        tokio::spawn(async move {
            let tracks = pipeline.fetch_playlist(&station).await;
            let _ = events.send(AppEvent::CycleFinished {
                seq,
                station_id: station.id,
                tracks,
            });
        });
    }
    log::debug!("poller stopped");
}
