use std::io;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

/// Puts the terminal into the state the UI needs and back again.
pub trait TerminalOps: Send + Sync + 'static {
    fn setup(&self) -> io::Result<()>;
    fn restore(&self) -> io::Result<()>;
}

/// Raw mode on the alternate screen, cursor hidden until a widget places it.
#[derive(Debug, Default)]
pub struct CrosstermTerminalOps;

impl TerminalOps for CrosstermTerminalOps {
    fn setup(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        terminal::enable_raw_mode()?;
        execute!(io::stdout(), terminal::EnterAlternateScreen, cursor::Hide)
    }

    /// Runs every step and reports the first failure.
    fn restore(&self) -> io::Result<()> {
        use crossterm::{cursor, execute, terminal};

        let steps = [
            terminal::disable_raw_mode(),
            execute!(io::stdout(), terminal::LeaveAlternateScreen, cursor::Show),
        ];
        steps.into_iter().collect()
    }
}

struct RestoreState {
    done: AtomicBool,
    ops: Arc<dyn TerminalOps>,
}

/// Shared handle that puts the terminal back. Only the first call reaches
/// the terminal; later calls from any thread return `Ok(())`.
#[derive(Clone)]
pub struct TerminalRestorer(Arc<RestoreState>);

impl TerminalRestorer {
    pub fn restore(&self) -> io::Result<()> {
        if self.0.done.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.0.ops.restore()
    }

    pub fn is_restored(&self) -> bool {
        self.0.done.load(Ordering::SeqCst)
    }
}

/// Owns the terminal mode for the lifetime of the UI loop.
pub struct TerminalGuard {
    restorer: TerminalRestorer,
}

impl TerminalGuard {
    pub fn new() -> io::Result<Self> {
        Self::with_ops(Arc::new(CrosstermTerminalOps))
    }

    pub fn with_ops(ops: Arc<dyn TerminalOps>) -> io::Result<Self> {
        ops.setup()?;
        let state = RestoreState {
            done: AtomicBool::new(false),
            ops,
        };
        Ok(Self {
            restorer: TerminalRestorer(Arc::new(state)),
        })
    }

    pub fn restorer(&self) -> TerminalRestorer {
        self.restorer.clone()
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        if let Err(e) = self.restorer.restore() {
            tracing::error!(error = %e, "terminal restore failed");
        }
    }
}

/// How long the UI loop gets to wind down after a signal before the process
/// is ended from the signal thread.
#[cfg(unix)]
const SIGNAL_GRACE: Duration = Duration::from_secs(2);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TerminationSignal {
    SigInt,
    SigTerm,
}

impl TerminationSignal {
    const SIGINT: i32 = 2;
    const SIGTERM: i32 = 15;

    pub fn from_raw(signal: i32) -> Option<Self> {
        match signal {
            Self::SIGINT => Some(Self::SigInt),
            Self::SIGTERM => Some(Self::SigTerm),
            _ => None,
        }
    }

    pub fn raw(self) -> i32 {
        match self {
            Self::SigInt => Self::SIGINT,
            Self::SigTerm => Self::SIGTERM,
        }
    }

    /// Shell convention: 128 plus the signal number.
    pub fn exit_code(self) -> i32 {
        128 + self.raw()
    }
}

#[cfg(unix)]
fn force_exit(restorer: &TerminalRestorer, signal: TerminationSignal) -> ! {
    if let Err(e) = restorer.restore() {
        tracing::error!(error = %e, "terminal restore failed during forced exit");
    }
    std::process::exit(signal.exit_code())
}

/// Forwards SIGINT/SIGTERM to `tx`. The process is ended after
/// `SIGNAL_GRACE`, or at once when nobody is listening on `tx`.
#[cfg(unix)]
pub fn install_termination_signals(
    restorer: TerminalRestorer,
    tx: Sender<TerminationSignal>,
) -> io::Result<thread::JoinHandle<()>> {
    use signal_hook::consts::signal::{SIGINT, SIGTERM};
    use signal_hook::iterator::Signals;

    let mut signals = Signals::new([SIGINT, SIGTERM])?;
    thread::Builder::new()
        .name("cellkit-signals".to_string())
        .spawn(move || {
            let Some(signal) = signals.forever().find_map(TerminationSignal::from_raw) else {
                return;
            };
            tracing::info!(?signal, "termination signal");
            if tx.send(signal).is_ok() {
                thread::sleep(SIGNAL_GRACE);
            }
            force_exit(&restorer, signal);
        })
}

#[cfg(not(unix))]
pub fn install_termination_signals(
    _restorer: TerminalRestorer,
    _tx: Sender<TerminationSignal>,
) -> io::Result<thread::JoinHandle<()>> {
    thread::Builder::new()
        .name("cellkit-signals".to_string())
        .spawn(|| {})
}

#[cfg(test)]
#[path = "../../tests/unit/tui/terminal_guard.rs"]
mod tests;
