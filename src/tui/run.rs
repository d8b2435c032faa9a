use super::crossterm::into_input_event;
use super::terminal_guard::{install_termination_signals, TerminalGuard, TerminationSignal};
use crate::config::UiConfig;
use crate::core::event::{InputEvent, Key, KeyCode, KeyModifiers};
use crate::runtime::{CommandRuntime, EventSink, UiEvent};
use crate::ui::backend::terminal::TerminalSurface;
use crate::ui::core::geom::Size;
use crate::ui::Ui;
use std::io;
use std::sync::mpsc::{self, Receiver};

/// Esc and Ctrl-C end the loop.
pub fn is_quit_key(key: &Key) -> bool {
    match key.code {
        KeyCode::Esc => true,
        KeyCode::Char('c') => key.modifiers.contains(KeyModifiers::CONTROL),
        _ => false,
    }
}

/// Hands every pending result to the screen's callbacks. Returns how many
/// were drained; any result means the screen should be rebuilt.
pub fn drain_results(ui: &mut Ui, results: &Receiver<UiEvent>) -> usize {
    let mut drained = 0;
    while let Ok(result) = results.try_recv() {
        drained += 1;
        if let Some(error) = &result.error {
            tracing::warn!(custom = result.custom, %error, "command failed");
        }
        ui.dispatch_event(&result);
    }
    drained
}

/// Runs a screen on the real terminal until Esc, Ctrl-C or a termination
/// signal.
///
/// `build` creates the screen for the current terminal size. It is called
/// again after a resize and after any command result has been handed to the
/// screen's callbacks, so callbacks only need to update the state `build`
/// reads from. Returning `None` ends the loop.
pub fn run<F>(config: &UiConfig, build: F) -> io::Result<()>
where
    F: FnMut(Size) -> Option<Ui>,
{
    let runtime = CommandRuntime::new(config.command_workers)?;
    let (events, results) = runtime.channel();

    let guard = TerminalGuard::new()?;
    let (signal_tx, signal_rx) = mpsc::channel();
    let _signals = install_termination_signals(guard.restorer(), signal_tx)?;
    let mut surface = TerminalSurface::new(io::stdout())?;

    tracing::info!(
        poll_ms = config.poll_interval_ms,
        workers = config.command_workers,
        "ui loop started"
    );
    let outcome = event_loop(
        config,
        build,
        &mut surface,
        &events,
        &results,
        &signal_rx,
    );
    match &outcome {
        Ok(()) => tracing::info!("ui loop finished"),
        Err(e) => tracing::error!(error = %e, "ui loop failed"),
    }

    drop(surface);
    drop(guard);
    runtime.shutdown();
    outcome
}

fn event_loop<F>(
    config: &UiConfig,
    mut build: F,
    surface: &mut TerminalSurface,
    events: &EventSink,
    results: &Receiver<UiEvent>,
    signals: &Receiver<TerminationSignal>,
) -> io::Result<()>
where
    F: FnMut(Size) -> Option<Ui>,
{
    let poll_interval = config.poll_interval();
    let Some(mut ui) = build(surface.sync_size()?) else {
        return Ok(());
    };
    let mut rebuild = false;

    loop {
        if let Ok(signal) = signals.try_recv() {
            tracing::info!(?signal, "stopping on signal");
            return Ok(());
        }

        if rebuild {
            match build(surface.sync_size()?) {
                Some(next) => ui = next,
                None => return Ok(()),
            }
            rebuild = false;
        }
        ui.draw(surface)?;

        if drain_results(&mut ui, results) > 0 {
            rebuild = true;
            continue;
        }

        if !crossterm::event::poll(poll_interval)? {
            continue;
        }
        let Some(event) = into_input_event(crossterm::event::read()?) else {
            continue;
        };

        match event {
            InputEvent::Resize(w, h) => {
                tracing::debug!(w, h, "terminal resized");
                rebuild = true;
            }
            InputEvent::Key(key) if is_quit_key(&key) => return Ok(()),
            InputEvent::Key(key) => {
                ui.handle_input(key, events);
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/tui/run.rs"]
mod tests;
