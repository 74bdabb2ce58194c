//! arc-recycle - Entry Point
//!
//! Initializes logging and the terminal, loads settings and the catalog,
//! and runs the event loop.

use std::env;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};

use arc_recycle::config::{init_settings_file, load_settings, Settings};
use arc_recycle::data::{export_default_catalog, load_catalog};
use arc_recycle::ui::App;

const LOG_FILE: &str = "arc-recycle.log";

fn main() -> Result<()> {
    init_logging();
    log::info!("Starting arc-recycle v{}", env!("CARGO_PKG_VERSION"));

    if env::args().skip(1).any(|arg| arg == "--export-data") {
        let path = export_default_catalog(Path::new("assets/data"))
            .context("failed to export the default catalog")?;
        println!("Default catalog written to {}", path.display());
        return Ok(());
    }

    match init_settings_file() {
        Ok(true) => log::info!("Wrote default settings"),
        Ok(false) => {}
        Err(e) => log::warn!("Could not write default settings: {:#}", e),
    }
    let settings = load_settings();
    let (catalog, source) = load_catalog(settings.catalog_path.as_deref());
    log::info!("Catalog loaded from {} ({} items)", source, catalog.len());

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(Arc::new(catalog), settings.clone());
    let result = run_event_loop(&mut terminal, &mut app, &settings);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("Exited with error: {}", e);
        eprintln!("Error: {}", e);
    }

    log::info!("arc-recycle shut down cleanly");
    result
}

/// Log to a file so output does not interfere with the TUI
fn init_logging() {
    let mut builder = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    );

    match OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(LOG_FILE)
    {
        Ok(file) => {
            builder.target(env_logger::Target::Pipe(Box::new(file)));
        }
        // Without a log file, stay quiet rather than write over the screen
        Err(_) => {
            builder.filter_level(log::LevelFilter::Off);
        }
    }

    builder.init();
}

/// Main event loop
fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    settings: &Settings,
) -> Result<()> {
    loop {
        let size = terminal.size()?;
        app.resize(Rect::new(0, 0, size.width, size.height));

        // Handle input
        if event::poll(settings.tick_rate())? {
            if let Event::Key(key) = event::read()? {
                // Only handle key press events, not releases
                if key.kind == KeyEventKind::Press {
                    match app.handle_input(key) {
                        Ok(true) => break,
                        Ok(false) => {}
                        Err(e) => log::warn!("Input handling error: {}", e),
                    }
                }
            }
        }

        app.tick(Instant::now());

        terminal.draw(|frame| {
            app.render(frame);
        })?;
    }

    Ok(())
}
