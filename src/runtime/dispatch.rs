use super::message::UiEvent;
use std::io;
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

/// Owns the worker threads that run menu commands off the input loop.
pub struct CommandRuntime {
    runtime: tokio::runtime::Runtime,
}

impl CommandRuntime {
    pub fn new(workers: usize) -> io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(workers.max(1))
            .thread_name("cellkit-command")
            .enable_all()
            .build()
            .or_else(|e| {
                tracing::error!(
                    error = %e,
                    "Failed to create multi-thread tokio runtime, falling back to current-thread"
                );
                tokio::runtime::Builder::new_current_thread()
                    .enable_all()
                    .build()
            })?;
        Ok(Self { runtime })
    }

    pub fn handle(&self) -> tokio::runtime::Handle {
        self.runtime.handle().clone()
    }

    /// A fresh result channel whose sink dispatches commands on this runtime.
    pub fn channel(&self) -> (EventSink, Receiver<UiEvent>) {
        let (tx, rx) = mpsc::channel();
        (EventSink::new(tx, self.handle()), rx)
    }

    /// Stops accepting work without waiting for in-flight commands; those
    /// keep running until they finish on their own.
    pub fn shutdown(self) {
        self.runtime.shutdown_timeout(Duration::from_millis(0));
    }
}

/// Write end of the result channel handed to widgets during input handling.
#[derive(Clone)]
pub struct EventSink {
    tx: Sender<UiEvent>,
    runtime: tokio::runtime::Handle,
}

impl EventSink {
    pub fn new(tx: Sender<UiEvent>, runtime: tokio::runtime::Handle) -> Self {
        Self { tx, runtime }
    }

    /// Sends an event right away. Returns `false` when the receiving loop is
    /// gone.
    pub fn send(&self, event: UiEvent) -> bool {
        self.tx.send(event).is_ok()
    }

    /// Runs `command` on a worker thread and sends its result when it
    /// finishes. Returns immediately; there is no cancellation or timeout.
    pub fn dispatch<F>(&self, command: F)
    where
        F: FnOnce() -> UiEvent + Send + 'static,
    {
        let tx = self.tx.clone();
        self.runtime.spawn_blocking(move || {
            let event = command();
            tracing::debug!(custom = event.custom, kind = ?event.kind, "command finished");
            if tx.send(event).is_err() {
                tracing::debug!("result channel closed before command finished");
            }
        });
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/dispatch.rs"]
mod tests;
