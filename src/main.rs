mod app;
mod cli;
mod config;
mod enrich;
mod error;
mod logging;
mod pipeline;
mod preview;
mod runtime;
mod scrape;
mod server;
mod station;
mod track;
mod ui;

#[cfg(test)]
mod testing;

fn main() {
    if let Err(err) = cli::main() {
        eprintln!("radioscrobbler: {err}");
        std::process::exit(1);
    }
}
