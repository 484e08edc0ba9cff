//! Terminal setup and teardown
//!
//! A panic hook restores the terminal before the panic message prints.

use anyhow::Result;
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};
use std::panic;

use crate::clock::Clock;
use crate::config::Settings;
use crate::ledger::LedgerModel;
use crate::storage::Store;

use super::app::App;
use super::event::EventHandler;
use super::handler::handle_event;

pub type Tui = Terminal<CrosstermBackend<Stdout>>;

/// Enter raw mode and the alternate screen
pub fn init_terminal() -> Result<Tui> {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = restore_terminal();
        original_hook(panic_info);
    }));

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    Ok(Terminal::new(CrosstermBackend::new(stdout))?)
}

pub fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

/// Run the dashboard until the user quits
pub fn run_tui<S: Store, C: Clock>(
    ledger: &mut LedgerModel<S, C>,
    settings: &Settings,
) -> Result<()> {
    let mut terminal = init_terminal()?;
    let result = event_loop(&mut terminal, ledger, settings);
    restore_terminal()?;
    result
}

fn event_loop<S: Store, C: Clock>(
    terminal: &mut Tui,
    ledger: &mut LedgerModel<S, C>,
    settings: &Settings,
) -> Result<()> {
    let mut app = App::new(ledger, settings);
    let events = EventHandler::default();

    while !app.should_quit {
        terminal.draw(|frame| super::views::render(frame, &app))?;
        handle_event(&mut app, events.next()?)?;
    }

    // Leave no half-finished edit behind
    app.close_dialog();
    Ok(())
}
