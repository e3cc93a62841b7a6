//! Host Framework Boundary - conversational context and inbound messages.
//!
//! The host framework owns message transport, persistence, and the
//! dialog-stack scheduler. The core treats the context as an opaque
//! capability: it arms continuations through it and passes it through to
//! handlers, never inspecting its internals.

/// Capability handle for one conversation, supplied by the host framework.
///
/// The host serializes message delivery per conversation, so a context is
/// only ever driven by one dispatch at a time.
pub trait DialogContext: Send {
    /// Arms the conversation's next-message continuation with the host
    /// scheduler.
    ///
    /// Exactly one continuation is armed at a time per conversation, and the
    /// host invokes it at most once per inbound message.
    fn wait(&mut self);

    /// Signals that the dialog is finished; control returns to the host's
    /// dialog stack.
    fn done(&mut self);
}

/// An inbound message delivered by the host framework.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InboundMessage {
    /// The raw utterance text.
    pub text: String,
}

impl InboundMessage {
    /// Creates a new inbound message.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}
