//! Command line interface.

use std::path::PathBuf;

use clap::{Args as ClapArgs, Parser, Subcommand};

use crate::config::Settings;
use crate::error::Result;
use crate::logging::{self, LogTarget};
use crate::pipeline::Pipeline;
use crate::station::StationRegistry;
use crate::track::Playlist;
use crate::{runtime, server};

/// Command line arguments.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Show debug information.
    #[arg(short, long, global = true)]
    verbose: bool,
    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
enum Command {
    /// Browse recently played tracks in the terminal (default).
    Tui(TuiArgs),
    /// Serve playlists over HTTP.
    Serve(ServeArgs),
    /// Run one fetch cycle and print the tracks as JSON.
    Dump(DumpArgs),
    /// Print the effective configuration as TOML.
    Config,
}

#[derive(ClapArgs, Debug, Default, PartialEq, Eq)]
struct TuiArgs {
    /// Station to show first.
    #[arg(short, long)]
    station: Option<String>,
}

#[derive(ClapArgs, Debug, PartialEq, Eq)]
struct ServeArgs {
    /// Address to listen on, overriding `server.bind`.
    #[arg(short, long)]
    bind: Option<String>,
}

#[derive(ClapArgs, Debug, PartialEq, Eq)]
struct DumpArgs {
    /// Station to fetch, defaults to `default_station`.
    #[arg(short, long)]
    station: Option<String>,
    /// Skip the metadata lookups.
    #[arg(long)]
    no_enrich: bool,
}

fn tokio_runtime() -> Result<tokio::runtime::Runtime> {
    Ok(tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?)
}

async fn dump(settings: Settings, args: DumpArgs) -> Result<String> {
    let registry = StationRegistry::new(settings.stations.clone());
    let id = args.station.as_deref().unwrap_or(&settings.default_station);
    let station = registry.get(id)?.clone();

    let mut settings = settings;
    if args.no_enrich {
        settings.enrich.enabled = false;
    }
    let tracks = Pipeline::from_settings(settings)?
        .try_fetch_playlist(&station)
        .await?;
    Ok(serde_json::to_string_pretty(&Playlist { tracks })?)
}

/// Main entry point.
///
/// # Errors
///
/// Can return errors if the configuration names an unknown station, the terminal
/// cannot be set up, or the server cannot bind.
pub fn main() -> Result<()> {
    let args = Args::parse();
    let settings = runtime::load_settings(args.config.as_deref());

    match args.command.unwrap_or(Command::Tui(TuiArgs::default())) {
        Command::Tui(tui) => {
            logging::init(&settings.log, args.verbose, LogTarget::File)?;
            runtime::run(settings, tui.station.as_deref())
        }
        Command::Serve(serve) => {
            logging::init(&settings.log, args.verbose, LogTarget::Stderr)?;
            let bind = serve.bind.unwrap_or_else(|| settings.server.bind.clone());
            let pipeline = Pipeline::from_settings(settings)?;
            tokio_runtime()?.block_on(server::serve(pipeline, &bind))
        }
        Command::Dump(dump_args) => {
            logging::init(&settings.log, args.verbose, LogTarget::Stderr)?;
            let json = tokio_runtime()?.block_on(dump(settings, dump_args))?;
            println!("{json}");
            Ok(())
        }
        Command::Config => {
            let toml_string = toml::to_string_pretty(&settings)?;
            println!("{toml_string}");
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::Router;
    use axum::routing::get;

    use super::*;
    use crate::config::ExtractorKind;
    use crate::testing::{self, LINK_PAGE};

    #[test]
    fn no_subcommand_means_tui() {
        let args = Args::try_parse_from(["radioscrobbler"]).unwrap();
        assert_eq!(args.command, None);
        assert!(!args.verbose);
    }

    #[test]
    fn parses_subcommands_and_global_flags() {
        let args =
            Args::try_parse_from(["radioscrobbler", "tui", "--station", "sublime", "-v"]).unwrap();
        assert!(args.verbose);
        assert_eq!(
            args.command,
            Some(Command::Tui(TuiArgs {
                station: Some("sublime".into())
            }))
        );

        let args = Args::try_parse_from([
            "radioscrobbler",
            "-c",
            "/tmp/rs.toml",
            "serve",
            "--bind",
            "0.0.0.0:8080",
        ])
        .unwrap();
        assert_eq!(args.config, Some(PathBuf::from("/tmp/rs.toml")));
        assert_eq!(
            args.command,
            Some(Command::Serve(ServeArgs {
                bind: Some("0.0.0.0:8080".into())
            }))
        );

        let args = Args::try_parse_from(["radioscrobbler", "dump", "--no-enrich"]).unwrap();
        assert_eq!(
            args.command,
            Some(Command::Dump(DumpArgs {
                station: None,
                no_enrich: true
            }))
        );

        let args = Args::try_parse_from(["radioscrobbler", "config"]).unwrap();
        assert_eq!(args.command, Some(Command::Config));
    }

    #[test]
    fn rejects_unknown_subcommand() {
        assert!(Args::try_parse_from(["radioscrobbler", "play"]).is_err());
    }

    #[tokio::test]
    async fn dump_prints_tracks_json() {
        let base = testing::serve(Router::new().route("/sublime", get(|| async { LINK_PAGE }))).await;
        let mut settings = Settings::default();
        settings.stations = vec![testing::station(
            "sublime",
            format!("{base}/sublime"),
            ExtractorKind::TrackLinks,
        )];
        settings.default_station = "sublime".into();

        let json = dump(
            settings,
            DumpArgs {
                station: None,
                no_enrich: true,
            },
        )
        .await
        .unwrap();
        let playlist: Playlist = serde_json::from_str(&json).unwrap();
        assert_eq!(playlist.tracks.len(), 3);
        assert!(playlist.tracks.iter().all(|t| !t.is_enriched()));
    }

    #[tokio::test]
    async fn dump_rejects_unknown_station() {
        let err = dump(
            Settings::default(),
            DumpArgs {
                station: Some("nope".into()),
                no_enrich: true,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, crate::error::Error::UnknownStation(id) if id == "nope"));
    }
}
