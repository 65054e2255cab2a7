use std::io;
use std::path::Path;

use color_eyre::Result;
use crossterm::{
    cursor::Show,
    event::{
        DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyEventKind,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};

use folio::app::App;
use folio::cli::{parse_args, CliCommand, USAGE};
use folio::config::TICK_MS;
use folio::state::theme;
use folio::storage::{self, SettingsStore};
use folio::ui;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Optional file logging, enabled by pointing FOLIO_LOG at a path. Logs
/// cannot go to stdout while the alternate screen is active.
fn init_tracing() {
    use tracing_subscriber::EnvFilter;

    let Ok(path) = std::env::var("FOLIO_LOG") else {
        return;
    };
    let Ok(file) = std::fs::File::create(&path) else {
        eprintln!("warning: cannot open log file {path}");
        return;
    };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::sync::Mutex::new(file))
        .with_ansi(false)
        .init();
}

fn main() -> Result<()> {
    match parse_args(std::env::args()) {
        CliCommand::Version => {
            println!("folio {VERSION}");
            return Ok(());
        }
        CliCommand::Help => {
            println!("{USAGE}");
            return Ok(());
        }
        CliCommand::RunTui => {}
    }

    color_eyre::install()?;
    init_tracing();
    setup_panic_hook();

    // Resolve the starting theme before touching the terminal: the stored
    // preference wins, otherwise the system preference decides.
    let settings = match SettingsStore::new() {
        Ok(store) => Some(store),
        Err(err) => {
            tracing::warn!(%err, "settings unavailable, theme will not persist");
            None
        }
    };
    let stored = settings.as_ref().and_then(|s| s.load_theme());
    let initial = theme::initial_theme(stored, theme::system_prefers_dark());

    let projects = storage::load_projects(Path::new(App::default_projects_path()));

    let runtime = tokio::runtime::Runtime::new()?;

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let mut app = App::new(initial, settings, projects);
    let size = terminal.size()?;
    app.update_terminal_dimensions(size.width, size.height);

    let result = runtime.block_on(run_app(&mut terminal, &mut app));

    restore_terminal(&mut terminal)?;
    result
}

/// Restore the terminal even when a draw or handler panics.
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        let _ = execute!(io::stdout(), Show);
        original_hook(panic_info);
    }));
}

fn restore_terminal<B: ratatui::backend::Backend + std::io::Write>(
    terminal: &mut Terminal<B>,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;
    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let mut event_stream = EventStream::new();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| {
                ui::render(f, &mut *app);
            })?;
            app.needs_redraw = false;
        }

        // The tick drives the typewriter, the card stagger, the submit
        // timers, and the throttled scroll evaluation.
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(TICK_MS));

        tokio::select! {
            _ = timeout => {
                app.on_tick();
            }

            event_result = event_stream.next() => {
                if let Some(Ok(event)) = event_result {
                    match event {
                        Event::Resize(width, height) => {
                            app.update_terminal_dimensions(width, height);
                        }
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            app.handle_key(key);
                        }
                        Event::Mouse(mouse_event) => {
                            app.handle_mouse(mouse_event);
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
