//! skydeck - Terminal weather dashboard
//!
//! A terminal UI application that shows current conditions, a multi-day
//! forecast, derived weather insights, and weather news for a searched
//! city or fixed coordinates.

use std::io;
use std::panic;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tokio::sync::watch;

use skydeck::app::{App, AppState};
use skydeck::cli::{Cli, StartupConfig};
use skydeck::refresh::{self, RefreshConfig, RefreshHandle};
use skydeck::ui;

/// Sets up a panic hook that restores the terminal before printing the
/// panic message, so the terminal stays usable after a crash.
fn setup_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        // Attempt to restore the terminal
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        // Call the original panic hook
        original_hook(panic_info);
    }));
}

/// Renders the UI based on the current application state
fn render_ui(frame: &mut ratatui::Frame, app: &App) {
    match app.state {
        AppState::Loading => {
            render_loading(frame);
        }
        AppState::Dashboard => {
            ui::render_dashboard(frame, app);
        }
    }

    if app.show_help {
        ui::render_help_overlay(frame);
    }
}

/// Renders a loading message while data is being fetched
fn render_loading(frame: &mut ratatui::Frame) {
    use ratatui::{
        layout::{Alignment, Constraint, Direction, Layout},
        style::{Color, Style},
        widgets::Paragraph,
    };

    let area = frame.area();

    // Center the loading message vertically
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(45),
            Constraint::Length(3),
            Constraint::Percentage(45),
        ])
        .split(area);

    let loading_text = Paragraph::new("Fetching weather data...")
        .style(Style::default().fg(Color::Cyan))
        .alignment(Alignment::Center);

    frame.render_widget(loading_text, chunks[1]);
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = match StartupConfig::from_cli(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::FAILURE;
        }
    };

    match run(config).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

/// Runs the terminal application to completion
async fn run(config: StartupConfig) -> Result<(), Box<dyn std::error::Error>> {
    // Set up panic hook to restore terminal on crash
    setup_panic_hook();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create app instance and wire up the background refresh task
    let refresh_config = RefreshConfig {
        forecast_days: config.forecast_days,
        enabled: config.auto_refresh,
        ..Default::default()
    };
    let (coords_tx, coords_rx) = watch::channel(None);
    let mut refresh_handle = RefreshHandle::spawn(refresh_config, coords_rx);

    let mut app = App::with_startup_config(config);
    app.set_coords_publisher(coords_tx);

    // Initial render to show loading state
    terminal.draw(|f| render_ui(f, &app))?;

    // Load weather and news for the startup location
    app.load_initial().await;

    // Main event loop
    loop {
        // Apply any background refresh results
        while let Some(message) = refresh::try_recv(&mut refresh_handle) {
            app.handle_refresh_message(message);
        }

        // Execute a queued search or manual refresh, showing the loading
        // screen while the fetch is in flight
        if let Some(query) = app.take_pending_fetch() {
            app.state = AppState::Loading;
            terminal.draw(|f| render_ui(f, &app))?;
            app.run_fetch(query).await;
        }

        // Render UI
        terminal.draw(|f| render_ui(f, &app))?;

        // Poll for keyboard events with 100ms timeout
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                app.handle_key(key);
            }
        }

        // Check if we should quit
        if app.should_quit {
            break;
        }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}
