//! Intent Handler Port - application-supplied handler seam.
//!
//! A handler is the unit of application behavior invoked when its intent is
//! selected. Handlers receive the conversational context and the full NLU
//! result (including entities, passed through unmodified) and decide whether
//! the dialog keeps listening or completes.

use async_trait::async_trait;

use super::DialogContext;
use crate::domain::NluResult;

/// Error surfaced by handler code.
///
/// Propagates to the host framework uncaught; the core performs no retry or
/// recovery.
pub type HandlerError = Box<dyn std::error::Error + Send + Sync>;

/// What the handler wants the dialog to do after this turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TurnStatus {
    /// Re-arm the next-message continuation and keep the dialog alive.
    WaitForNextMessage,
    /// The dialog is finished; return control to the host's dialog stack.
    Done,
}

/// Port for application intent handlers.
///
/// One dispatch method; the registry stores handlers as `Arc<dyn
/// IntentHandler>` so a single handler may serve several intents.
#[async_trait]
pub trait IntentHandler: Send + Sync {
    /// Handles one selected intent.
    ///
    /// The result is owned by this invocation and discarded afterwards.
    async fn handle(
        &self,
        context: &mut dyn DialogContext,
        result: NluResult,
    ) -> Result<TurnStatus, HandlerError>;
}
