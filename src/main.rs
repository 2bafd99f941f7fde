use std::error::Error;
use std::io;
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use human_panic::setup_panic;
use log::{info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};

use helixlab::{
    config::Settings,
    input::key_to_action,
    logging::{init_logging, log_critical_error, log_shutdown, log_system_info},
    ui::render_ui,
    App,
};

fn main() -> Result<(), Box<dyn Error>> {
    setup_panic!();

    let settings = Settings::from_env();
    if let Err(e) = init_logging(settings.log_level) {
        eprintln!("Logging disabled: {e}");
    }
    log_system_info();

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::with_lab_input(&settings.lab_dna, StdRng::from_entropy());
    let result = run(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(e) = &result {
        log_critical_error(&e.to_string(), Some("event loop"));
    }
    log_shutdown();

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, app: &mut App) -> Result<(), Box<dyn Error>> {
    info!("Entering event loop");
    while !app.should_quit {
        terminal.draw(|f| render_ui(f, app))?;
        match event::read()? {
            Event::Key(key) => {
                if let Some(action) = key_to_action(app.tab, key) {
                    app.dispatch(action);
                }
            }
            Event::Resize(width, height) => {
                if width < 80 || height < 30 {
                    warn!("Terminal is small ({width}x{height}); some panels may be clipped");
                }
            }
            _ => {}
        }
    }
    Ok(())
}
