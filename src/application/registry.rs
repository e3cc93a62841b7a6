//! Handler registry: the mapping from intent key to handler.
//!
//! Built once at setup time (imperatively via [`HandlerRegistry::register`] or
//! declaratively via [`HandlerRegistry::from_table`]) and read-only during
//! dispatch, so it is safely shared across concurrent conversations.

use std::collections::hash_map::Entry;
use std::collections::HashMap;
use std::sync::Arc;

use super::DialogError;
use crate::domain::IntentKey;
use crate::ports::IntentHandler;

/// Mapping from intent key to handler.
#[derive(Default)]
pub struct HandlerRegistry {
    handlers: HashMap<IntentKey, Arc<dyn IntentHandler>>,
}

impl HandlerRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a registry from a static table of `(intent, handler)` pairs.
    ///
    /// Evaluated once at construction; a duplicate entry fails construction
    /// immediately rather than deferring to first dispatch.
    pub fn from_table<I>(entries: I) -> Result<Self, DialogError>
    where
        I: IntoIterator<Item = (IntentKey, Arc<dyn IntentHandler>)>,
    {
        let mut registry = Self::new();
        for (intent, handler) in entries {
            registry.register(intent, handler)?;
        }
        Ok(registry)
    }

    /// Registers a handler under an intent key.
    ///
    /// Empty intent names normalize to [`IntentKey::Default`]. Registering a
    /// duplicate key fails with [`DialogError::DuplicateIntent`] and retains
    /// the first handler.
    pub fn register(
        &mut self,
        intent: impl Into<IntentKey>,
        handler: Arc<dyn IntentHandler>,
    ) -> Result<(), DialogError> {
        match self.handlers.entry(intent.into()) {
            Entry::Occupied(entry) => Err(DialogError::DuplicateIntent {
                intent: entry.key().clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(handler);
                Ok(())
            }
        }
    }

    /// Exact-match lookup; no fuzzy or prefix matching.
    pub fn resolve(&self, intent: &IntentKey) -> Option<Arc<dyn IntentHandler>> {
        self.handlers.get(intent).cloned()
    }

    /// Returns true if a default handler is registered.
    pub fn has_default(&self) -> bool {
        self.handlers.contains_key(&IntentKey::Default)
    }

    /// Number of registered handlers.
    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    /// Returns true if no handlers are registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}
