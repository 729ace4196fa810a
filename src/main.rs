use std::io;
use std::sync::mpsc;
use std::time::Duration;

use clap::Parser;
use crossterm::event;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use cricket_guide::app::Workbench;
use cricket_guide::core::InputEvent;
use cricket_guide::kernel::services::adapters::{
    ensure_settings_file, load_settings, AppMessage, AsyncRuntime,
};
use cricket_guide::tui::terminal_guard::{SignalLatch, TerminalSession, TerminationSignal};
use cricket_guide::tui::view::View;

mod cli;
mod logging;

use cli::{resolve_startup_config, Cli};

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const MAX_LAYOUT_PASSES: usize = 3;

fn main() -> io::Result<()> {
    let cli = Cli::parse();
    let logging_guard = logging::init();

    if let Err(e) = ensure_settings_file() {
        tracing::warn!(error = %e, "cannot create settings file");
    }
    let settings = load_settings().unwrap_or_default();
    let cwd = std::env::current_dir()?;
    let startup = resolve_startup_config(cli, &settings, &cwd);
    tracing::info!(location = ?startup.location, "startup");

    let (msg_tx, msg_rx) = mpsc::channel::<AppMessage>();
    let runtime = AsyncRuntime::new(
        msg_tx,
        startup.location.into_source(),
        startup.tree_document,
        startup.content_document,
    )?;
    let mut workbench = Workbench::new(runtime, &settings);

    let signals = SignalLatch::install().unwrap_or_else(|e| {
        tracing::warn!(error = %e, "cannot install signal handlers");
        SignalLatch::default()
    });
    let mut session = TerminalSession::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    workbench.start();

    let result = run(&mut terminal, &mut workbench, &msg_rx, &signals);

    drop(terminal);
    if let Err(e) = session.restore() {
        tracing::warn!(error = %e, "terminal restore failed");
    }

    match result {
        Ok(Some(signal)) => {
            tracing::info!(?signal, "terminated by signal");
            // exit() skips destructors; flush the log writer first.
            drop(logging_guard);
            std::process::exit(signal.exit_code());
        }
        Ok(None) => Ok(()),
        Err(e) => {
            tracing::error!(error = %e, "event loop failed");
            Err(e)
        }
    }
}

fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    workbench: &mut Workbench,
    msg_rx: &mpsc::Receiver<AppMessage>,
    signals: &SignalLatch,
) -> io::Result<Option<TerminationSignal>> {
    let mut dirty = true;
    loop {
        if let Some(signal) = signals.take() {
            return Ok(Some(signal));
        }

        while let Ok(msg) = msg_rx.try_recv() {
            dirty |= workbench.handle_message(msg);
        }

        if dirty {
            for _ in 0..MAX_LAYOUT_PASSES {
                terminal.draw(|frame| workbench.render(frame, frame.area()))?;
                if !workbench.sync_layout() {
                    break;
                }
            }
            dirty = false;
        }

        if event::poll(POLL_INTERVAL)? {
            let input = InputEvent::from(event::read()?);
            let result = workbench.handle_input(&input);
            if result.is_quit() {
                return Ok(None);
            }
            dirty |= result.is_consumed() || matches!(input, InputEvent::Resize(..));
        }
    }
}
