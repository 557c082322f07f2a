use std::io::Stdout;

use crossterm::execute;
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::config::Settings;
use crate::error::Result;
use crate::station::{Station, StationRegistry};

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Station to show first: the override when given, else the configured default.
pub fn initial_station(
    registry: &StationRegistry,
    settings: &Settings,
    station_override: Option<&str>,
) -> Result<Station> {
    let id = station_override.unwrap_or(&settings.default_station);
    Ok(registry.get(id)?.clone())
}

pub fn enter_terminal() -> Result<Tui> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    Ok(Terminal::new(backend)?)
}

pub fn leave_terminal(terminal: &mut Tui) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}
