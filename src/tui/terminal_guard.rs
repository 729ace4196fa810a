//! 终端会话：进入时开启 raw mode / 备用屏幕 / 鼠标捕获，退出时恰好恢复一次

use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

type Hook = fn() -> io::Result<()>;

pub struct TerminalSession {
    leave: Hook,
    active: bool,
}

impl TerminalSession {
    pub fn enter() -> io::Result<Self> {
        Self::with_hooks(enter_screen, leave_screen)
    }

    fn with_hooks(enter: Hook, leave: Hook) -> io::Result<Self> {
        if let Err(e) = enter() {
            // Half-entered: raw mode may already be on.
            let _ = leave();
            return Err(e);
        }
        Ok(Self {
            leave,
            active: true,
        })
    }

    /// Safe to call more than once; only the first call touches the terminal.
    pub fn restore(&mut self) -> io::Result<()> {
        if !std::mem::replace(&mut self.active, false) {
            return Ok(());
        }
        (self.leave)()
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        if let Err(e) = self.restore() {
            tracing::warn!(error = %e, "terminal restore failed");
        }
    }
}

fn enter_screen() -> io::Result<()> {
    use crossterm::{cursor, event::EnableMouseCapture, execute, terminal};

    terminal::enable_raw_mode()?;
    execute!(
        io::stdout(),
        terminal::EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )
}

fn leave_screen() -> io::Result<()> {
    use crossterm::{cursor, event::DisableMouseCapture, execute, terminal};

    let raw = terminal::disable_raw_mode();
    let screen = execute!(
        io::stdout(),
        DisableMouseCapture,
        terminal::LeaveAlternateScreen,
        cursor::Show
    );
    raw.and(screen)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    pub fn exit_code(self) -> i32 {
        match self {
            TerminationSignal::SigInt => 130,
            TerminationSignal::SigTerm => 143,
        }
    }
}

const NO_SIGNAL: usize = 0;
const SIGINT_RECEIVED: usize = 1;
const SIGTERM_RECEIVED: usize = 2;

/// SIGINT/SIGTERM latch polled by the event loop, so shutdown always
/// goes through the normal restore path.
#[derive(Clone, Default)]
pub struct SignalLatch {
    pending: Arc<AtomicUsize>,
}

impl SignalLatch {
    pub fn install() -> io::Result<Self> {
        let latch = Self::default();
        #[cfg(unix)]
        {
            use signal_hook::consts::signal::{SIGINT, SIGTERM};
            use signal_hook::flag::register_usize;

            register_usize(SIGINT, Arc::clone(&latch.pending), SIGINT_RECEIVED)?;
            register_usize(SIGTERM, Arc::clone(&latch.pending), SIGTERM_RECEIVED)?;
        }
        Ok(latch)
    }

    pub fn take(&self) -> Option<TerminationSignal> {
        match self.pending.swap(NO_SIGNAL, Ordering::SeqCst) {
            SIGINT_RECEIVED => Some(TerminationSignal::SigInt),
            SIGTERM_RECEIVED => Some(TerminationSignal::SigTerm),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
