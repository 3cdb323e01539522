//! arrow: an interactive terminal directory picker built with ratatui.
//!
//! The picker draws on stderr so that `cd "$(arrow)"` captures only the
//! chosen path, which is printed to stdout on confirm. Cancelling prints
//! nothing and exits with status 1.

mod app;
mod icons;
mod input;
mod render;
mod ui;

use std::io::{self, Write};
use std::panic;
use std::path::PathBuf;
use std::sync::Mutex;

use anyhow::Context;
use arrow_core::{clean_path, Config, NavigationModel, PathNode};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use tracing_subscriber::EnvFilter;

use crate::app::{App, Exit, Flow};
use crate::input::{handle_key, handle_mouse};
use crate::render::render;

type Term = Terminal<CrosstermBackend<io::Stderr>>;

#[derive(Parser)]
#[command(name = "arrow", version, about = "Pick a directory interactively")]
struct Args {
    /// Show hidden directories
    #[arg(short, long)]
    all: bool,

    /// Display Nerd Font icons
    #[arg(short, long)]
    icons: bool,

    /// Initial filter query
    #[arg(short, long, default_value = "")]
    query: String,

    /// Directory to start in (defaults to the working directory)
    path: Option<PathBuf>,
}

fn setup_terminal() -> anyhow::Result<Term> {
    enable_raw_mode()?;
    let mut stderr = io::stderr();
    execute!(stderr, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stderr);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

fn restore_terminal(terminal: &mut Term) -> anyhow::Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), DisableMouseCapture, LeaveAlternateScreen)?;
    terminal.show_cursor()?;
    Ok(())
}

/// Installs a panic hook that restores the terminal before printing the panic.
fn install_panic_hook() {
    let original_hook = panic::take_hook();
    panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stderr(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));
}

/// Logs to `<temp dir>/arrow.log`, filtered by `ARROW_LOG` (default `info`).
/// Never writes to the terminal; a log file that cannot be opened disables logging.
fn init_tracing() {
    let path = std::env::temp_dir().join("arrow.log");
    let file = match std::fs::OpenOptions::new().create(true).append(true).open(&path) {
        Ok(file) => file,
        Err(_) => return,
    };
    let filter = EnvFilter::try_from_env("ARROW_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init();
}

/// Absolute, lexically cleaned start directory. Symlinks are not resolved.
fn start_dir(arg: Option<PathBuf>) -> anyhow::Result<PathBuf> {
    let path = match arg {
        Some(path) => std::path::absolute(&path)
            .with_context(|| format!("invalid start path {}", path.display()))?,
        None => std::env::current_dir().context("failed to get current directory")?,
    };
    Ok(clean_path(&path))
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    init_tracing();

    let config = Config::default_path()
        .map(|path| Config::load_or_default(&path))
        .unwrap_or_default();
    let show_hidden = args.all || config.general.show_hidden;
    let show_icons = args.icons || config.general.show_icons;
    let theme = config.theme.with_env_overrides();

    let start = start_dir(args.path)?;
    tracing::info!("starting in {}", start.display());

    let model = NavigationModel::new(PathNode::local(start), show_hidden, args.query);
    let app = App::new(model, theme, show_icons);

    install_panic_hook();
    let mut terminal = setup_terminal()?;
    let result = run_app(&mut terminal, app);
    restore_terminal(&mut terminal)?;

    match result? {
        Exit::Confirmed(path) => {
            tracing::info!("confirmed {}", path.display());
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", path.display())?;
            stdout.flush()?;
            Ok(())
        }
        Exit::Cancelled => {
            tracing::info!("cancelled");
            std::process::exit(1);
        }
    }
}

/// Draw, read one event, apply it; until the session ends.
fn run_app(terminal: &mut Term, mut app: App) -> anyhow::Result<Exit> {
    loop {
        terminal.draw(|f| render(f, &app))?;

        let action = match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => handle_key(key),
            Event::Mouse(mouse) => {
                let size = terminal.size()?;
                handle_mouse(mouse, &app, Rect::new(0, 0, size.width, size.height))
            }
            _ => input::InputAction::None,
        };

        app = match app.apply(action) {
            Flow::Continue(app) => app,
            Flow::Exit(exit) => return Ok(exit),
        };
    }
}
