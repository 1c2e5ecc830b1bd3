//! cleartui - Text-mode Interface for ClearCase
//!
//! Binary entry point for the TUI application.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::DefaultTerminal;

use cleartui::app::App;
use cleartui::cleartool::ClearToolExecutor;
use cleartui::config::Config;
use cleartui::logging::{self, LogTarget, TracingLogger};

/// Browse the version history of ClearCase elements and check them in and out.
#[derive(Debug, Parser)]
#[command(name = "cleartui")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files to work on; Tab switches between them.
    files: Vec<PathBuf>,

    /// Config file (default: <config dir>/cleartui/config.toml).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output log file (overrides the config file).
    #[arg(long)]
    log_file: Option<PathBuf>,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();

    let config = Config::load(cli.config.as_deref())?;
    if let Some(target) = LogTarget::resolve(cli.log_file.clone(), config.log.file.clone()) {
        logging::init_logging(&target, &config.log.level)?;
    }
    tracing::info!(files = cli.files.len(), "starting cleartui");

    let logger = Arc::new(TracingLogger);
    let executor = ClearToolExecutor::with_program(config.executable.clone(), logger.clone());
    let app = App::new(cli.files, executor, logger, config);

    let terminal = ratatui::init();
    let result = run(terminal, app);
    ratatui::restore();
    result
}

/// Run the application's main loop.
fn run(mut terminal: DefaultTerminal, mut app: App) -> color_eyre::Result<()> {
    while app.running {
        terminal.draw(|frame| app.render(frame))?;
        handle_events(&mut app)?;
    }

    Ok(())
}

/// Handle crossterm events.
///
/// Uses poll with 200ms timeout so cleartool results arriving from worker
/// threads are applied even while no key is pressed.
fn handle_events(app: &mut App) -> color_eyre::Result<()> {
    if event::poll(Duration::from_millis(200))? {
        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                app.on_key_event(key);
            }
            _ => {}
        }
    }
    app.poll_responses();
    Ok(())
}
