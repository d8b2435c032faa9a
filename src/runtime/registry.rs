use super::message::UiEvent;
use rustc_hash::FxHashMap;

type Callback = Box<dyn FnMut(&UiEvent)>;

/// Maps application-defined event tags to callbacks.
#[derive(Default)]
pub struct EventRegistry {
    handlers: FxHashMap<u16, Callback>,
}

impl EventRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `callback` for `tag`, replacing any previous one.
    pub fn register(&mut self, tag: u16, callback: impl FnMut(&UiEvent) + 'static) {
        if self.handlers.insert(tag, Box::new(callback)).is_some() {
            tracing::debug!(tag, "replaced event callback");
        }
    }

    pub fn contains(&self, tag: u16) -> bool {
        self.handlers.contains_key(&tag)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// Invokes the callback registered for `event.custom`. Returns `false`
    /// when no callback is registered for that tag.
    pub fn dispatch(&mut self, event: &UiEvent) -> bool {
        match self.handlers.get_mut(&event.custom) {
            Some(callback) => {
                callback(event);
                true
            }
            None => false,
        }
    }
}

impl std::fmt::Debug for EventRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut tags: Vec<_> = self.handlers.keys().copied().collect();
        tags.sort_unstable();
        f.debug_struct("EventRegistry").field("tags", &tags).finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/registry.rs"]
mod tests;
