//! The resumable intent dialog.
//!
//! One dialog instance per conversation flow. `start` parks the dialog until
//! the host delivers a message; each `on_message_received` runs one dispatch:
//! NLU query, intent selection, registry lookup, handler invocation. The
//! handler's [`TurnStatus`] decides whether the dialog keeps listening or
//! completes.

use std::sync::Arc;
use thiserror::Error;

use super::registry::HandlerRegistry;
use crate::config::ValidationError;
use crate::domain::{select_intent, DialogState, IntentKey, StateMachine, TransitionError};
use crate::ports::{
    DialogContext, HandlerError, InboundMessage, IntentHandler, NluClient, NluError, TurnStatus,
};

/// Errors surfaced by dialog construction and dispatch.
#[derive(Debug, Error)]
pub enum DialogError {
    /// Missing or invalid configuration at construction time.
    #[error("configuration error: {0}")]
    Configuration(#[from] ValidationError),

    /// Two handlers registered under the same intent key.
    #[error("duplicate handler registered for intent '{intent}'")]
    DuplicateIntent {
        /// The colliding key.
        intent: IntentKey,
    },

    /// The NLU query failed; the turn is over but the conversation survives.
    #[error("NLU backend error: {0}")]
    Backend(#[from] NluError),

    /// Dispatch found neither a matching handler nor a default. A fatal
    /// configuration defect, not recoverable per turn.
    #[error("no handler registered for intent '{intent}' and no default handler")]
    NoHandler {
        /// The key dispatch tried to resolve.
        intent: IntentKey,
    },

    /// The invoked handler failed; propagates to the host uncaught.
    #[error("intent handler failed: {0}")]
    Handler(HandlerError),

    /// The host drove the dialog out of protocol (e.g. a message before
    /// `start`).
    #[error(transparent)]
    State(#[from] TransitionError),
}

/// Resumable dialog routing utterances to intent handlers.
///
/// Owns its registry and NLU client for the lifetime of the conversation
/// flow; both are immutable after construction. `&mut self` per turn encodes
/// the host's per-conversation serialization of message delivery.
pub struct IntentDialog {
    nlu: Arc<dyn NluClient>,
    registry: HandlerRegistry,
    state: DialogState,
}

impl IntentDialog {
    /// Starts building a dialog.
    pub fn builder() -> IntentDialogBuilder {
        IntentDialogBuilder::default()
    }

    /// Creates a dialog from an already-built registry.
    pub fn new(nlu: Arc<dyn NluClient>, registry: HandlerRegistry) -> Self {
        Self {
            nlu,
            registry,
            state: DialogState::Created,
        }
    }

    /// Current lifecycle state.
    pub fn state(&self) -> DialogState {
        self.state
    }

    /// Entry point invoked by the host's dialog scheduler when this dialog
    /// becomes active.
    ///
    /// Arms the next-message continuation; the dialog performs no work until
    /// resumed.
    pub fn start(&mut self, context: &mut dyn DialogContext) -> Result<(), DialogError> {
        self.state = self.state.transition_to(DialogState::WaitingForMessage)?;
        context.wait();
        Ok(())
    }

    /// Continuation invoked by the host when an inbound message arrives.
    ///
    /// Queries the NLU backend, selects the highest-scoring intent, resolves
    /// a handler (exact match, else default) and invokes it with the context
    /// and the parsed result.
    pub async fn on_message_received(
        &mut self,
        context: &mut dyn DialogContext,
        message: &InboundMessage,
    ) -> Result<(), DialogError> {
        self.state = self.state.transition_to(DialogState::Dispatching)?;

        let result = match self.nlu.query(&message.text).await {
            Ok(result) => result,
            Err(err) => {
                // The turn is over; the conversation may still receive a
                // future message, so re-arm before propagating.
                self.state = self.state.transition_to(DialogState::WaitingForMessage)?;
                context.wait();
                return Err(err.into());
            }
        };

        let intent = select_intent(&result)
            .map(|top| IntentKey::named(top.name.clone()))
            .unwrap_or(IntentKey::Default);

        let handler = match self
            .registry
            .resolve(&intent)
            .or_else(|| self.registry.resolve(&IntentKey::Default))
        {
            Some(handler) => handler,
            None => {
                self.state = self.state.transition_to(DialogState::Terminated)?;
                return Err(DialogError::NoHandler { intent });
            }
        };

        tracing::debug!(
            intent = %intent,
            candidates = result.intents.len(),
            entities = result.entities.len(),
            "dispatching to intent handler"
        );

        match handler.handle(context, result).await {
            Ok(TurnStatus::WaitForNextMessage) => {
                self.state = self.state.transition_to(DialogState::WaitingForMessage)?;
                context.wait();
                Ok(())
            }
            Ok(TurnStatus::Done) => {
                self.state = self.state.transition_to(DialogState::Terminated)?;
                context.done();
                Ok(())
            }
            Err(err) => {
                self.state = self.state.transition_to(DialogState::Terminated)?;
                Err(DialogError::Handler(err))
            }
        }
    }
}

/// Chainable builder for [`IntentDialog`].
///
/// Registration errors (duplicate intents, missing NLU client) surface at
/// [`build`](IntentDialogBuilder::build), never at dispatch time.
#[derive(Default)]
pub struct IntentDialogBuilder {
    nlu: Option<Arc<dyn NluClient>>,
    entries: Vec<(IntentKey, Arc<dyn IntentHandler>)>,
}

impl IntentDialogBuilder {
    /// Sets the NLU client.
    pub fn nlu_client(mut self, client: Arc<dyn NluClient>) -> Self {
        self.nlu = Some(client);
        self
    }

    /// Registers a handler for an intent. Empty names register the default
    /// handler.
    pub fn on(mut self, intent: impl Into<IntentKey>, handler: Arc<dyn IntentHandler>) -> Self {
        self.entries.push((intent.into(), handler));
        self
    }

    /// Registers the default handler, invoked when no intent matches or the
    /// result carries no intents.
    pub fn on_default(self, handler: Arc<dyn IntentHandler>) -> Self {
        self.on(IntentKey::Default, handler)
    }

    /// Registers a static table of `(intent, handler)` pairs.
    pub fn handlers<I>(mut self, table: I) -> Self
    where
        I: IntoIterator<Item = (IntentKey, Arc<dyn IntentHandler>)>,
    {
        self.entries.extend(table);
        self
    }

    /// Builds the dialog, surfacing duplicate registrations and missing
    /// configuration immediately.
    pub fn build(self) -> Result<IntentDialog, DialogError> {
        let nlu = self
            .nlu
            .ok_or(ValidationError::MissingRequired("nlu_client"))?;
        let registry = HandlerRegistry::from_table(self.entries)?;
        Ok(IntentDialog::new(nlu, registry))
    }
}
