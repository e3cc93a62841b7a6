//! Registry key space for intent handlers.

use std::fmt;

/// Key under which a handler is registered.
///
/// The default handler occupies a dedicated variant rather than a reserved
/// string, so it cannot collide with a real backend intent of any literal
/// value. Empty intent names normalize to [`IntentKey::Default`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum IntentKey {
    /// The fallback handler, used when no intent matches or the result
    /// carries no intents.
    Default,
    /// A handler for the named intent; the name is never empty.
    Named(String),
}

impl IntentKey {
    /// Creates a key from an intent name, normalizing empty names to
    /// [`IntentKey::Default`].
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        if name.is_empty() {
            IntentKey::Default
        } else {
            IntentKey::Named(name)
        }
    }

    /// Returns the intent name, or `None` for the default key.
    pub fn name(&self) -> Option<&str> {
        match self {
            IntentKey::Default => None,
            IntentKey::Named(name) => Some(name),
        }
    }

    /// Returns true if this is the default key.
    pub fn is_default(&self) -> bool {
        matches!(self, IntentKey::Default)
    }
}

impl From<&str> for IntentKey {
    fn from(name: &str) -> Self {
        IntentKey::named(name)
    }
}

impl From<String> for IntentKey {
    fn from(name: String) -> Self {
        IntentKey::named(name)
    }
}

impl fmt::Display for IntentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IntentKey::Default => write!(f, "(default)"),
            IntentKey::Named(name) => write!(f, "{}", name),
        }
    }
}
