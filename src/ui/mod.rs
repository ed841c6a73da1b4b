// UI module
// TUI components and the main event loop

pub mod app_view;
pub mod page_views;
pub mod styles;
pub mod user_list;

use anyhow::Result;
use crossterm::event;
use ratatui::{backend::Backend, Terminal};
use std::time::Instant;
use tokio::sync::mpsc::UnboundedReceiver;

use crate::core::{App, EventHandler, Outcome};
use crate::operations::Dispatcher;

pub use app_view::render_app;
pub use styles::Styles;

/// Run the main application event loop
pub fn run_app<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    dispatcher: &Dispatcher,
    outcomes: &mut UnboundedReceiver<Outcome>,
) -> Result<()> {
    let tick_rate = app.config.ui.tick_rate();

    loop {
        // Apply finished gateway calls, then send whatever they asked for
        while let Ok(outcome) = outcomes.try_recv() {
            app.apply_outcome(outcome);
        }
        flush_commands(app, dispatcher);
        app.expire_banner(Instant::now());

        // Render the UI
        terminal.draw(|f| render_app(f, app))?;

        // Handle events
        if event::poll(tick_rate)? {
            let app_event = EventHandler::handle(event::read()?, app.input_mode());
            app.handle_event(app_event);
            flush_commands(app, dispatcher);
        }

        // Check if we should quit
        if app.should_quit {
            return Ok(());
        }
    }
}

fn flush_commands(app: &mut App, dispatcher: &Dispatcher) {
    for command in app.take_commands() {
        dispatcher.dispatch(command);
    }
}
