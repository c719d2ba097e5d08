use std::io;

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{
        self, disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
        SetTitle,
    },
};
use ratatui::{backend::CrosstermBackend, Terminal};
use tracing::{error, info};

use folio_core::content::PortfolioContent;
use folio_core::AppConfig;
use folio_tui::{
    app::App,
    event::{AppEvent, EventHandler},
    input::handle_key_event,
};

pub fn run(config: &AppConfig, content: PortfolioContent) -> Result<()> {
    let (width, height) = terminal::size()?;
    let mut app = App::new(config, content, width, height)?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture, SetTitle("Folio"))?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    let result = event_loop(&mut terminal, &mut app, config);
    if let Err(e) = &result {
        error!(error = %e, "Event loop failed");
    }
    app.shutdown();

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    result
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    config: &AppConfig,
) -> Result<()> {
    let event_handler =
        EventHandler::with_animation_fps(config.ui.tick_rate_ms, config.ui.animation_fps);
    info!("TUI started");

    loop {
        app.tick();
        terminal.draw(|frame| app.render(frame))?;

        // Poll at frame rate only while the page is moving
        let event = if app.needs_frame() {
            event_handler.next_animation()?
        } else {
            event_handler.next()?
        };
        if let Some(event) = event {
            match event {
                AppEvent::Key(key) => app.handle_action(handle_key_event(key)),
                AppEvent::Wheel(notches) => app.on_wheel(notches),
                AppEvent::Pointer { column, row } => app.on_pointer(column, row),
                AppEvent::Click { column, row } => app.on_click(column, row),
                AppEvent::Drag { column, row } => app.on_drag(column, row),
                AppEvent::Release => app.on_release(),
                AppEvent::Resize(width, height) => app.resize(width, height)?,
                AppEvent::Tick => {}
            }
        }

        if app.should_quit {
            info!("TUI quit");
            return Ok(());
        }
    }
}
