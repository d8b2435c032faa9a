//! Result plumbing between widgets and the application: the event type, the
//! channel widgets write to, and the tag → callback registry.

mod dispatch;
mod message;
mod registry;

pub use dispatch::{CommandRuntime, EventSink};
pub use message::{PayloadError, ResultKind, UiEvent};
pub use registry::EventRegistry;
