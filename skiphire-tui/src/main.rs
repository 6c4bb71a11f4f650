//! Terminal UI for skiphire that lets users compare skip offers and pick one to book.

mod app;
mod booking;
mod cli;
mod input;
mod ui;

use std::{fs::File, io, path::Path, sync::Mutex, time::Duration as StdDuration};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, Event as CEvent},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt::writer::BoxMakeWriter};

use crate::app::App;
use crate::cli::Cli;
use crate::input::Action;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.log_file.as_deref())?;

    // Offer source + service setup
    let service = skiphire_provider_json::service(cli.catalogue.clone());
    info!(catalogue = %cli.catalogue.display(), "starting skiphire");

    // App state
    let app = App::new(service, cli.location());

    // Terminal init
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run event loop
    let res = run(&mut terminal, app).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}

fn init_logging(log_file: Option<&Path>) -> Result<()> {
    // the terminal belongs to the UI, so logs only ever go to a file
    let writer = match log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        None => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(())
}

async fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, mut app: App) -> Result<()> {
    reload_catalogue(terminal, &mut app).await?;

    loop {
        // Draw current UI
        terminal.draw(|frame| ui::draw(frame, &app))?;

        // Poll for input (non-blocking, small timeout to keep CPU low)
        if event::poll(StdDuration::from_millis(100))?
            && let CEvent::Key(key) = event::read()?
        {
            match input::handle_key_event(key, &mut app) {
                Action::Quit => break,
                Action::None => {}
                Action::ReloadCatalogue => reload_catalogue(terminal, &mut app).await?,
            }
        }
    }

    Ok(())
}

async fn reload_catalogue(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<()> {
    app.is_loading = true;
    app.error_message = None;
    terminal.draw(|frame| ui::draw(frame, app))?;

    let res = app.service.refresh(&app.location, &mut app.selection).await;

    app.is_loading = false;
    match res {
        Ok(offers) => {
            app.replace_offers(offers);
        }
        Err(err) => {
            warn!(error = %err, "catalogue reload failed");
            app.error_message = Some(format!("Failed to load catalogue: {err}"));
        }
    }
    Ok(())
}
