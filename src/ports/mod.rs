//! Ports layer: interfaces at the system's seams.
//!
//! `NluClient` faces the NLU backend, `DialogContext` faces the host
//! conversational framework, and `IntentHandler` faces application code.

mod dialog_context;
mod intent_handler;
mod nlu_client;

pub use dialog_context::{DialogContext, InboundMessage};
pub use intent_handler::{HandlerError, IntentHandler, TurnStatus};
pub use nlu_client::{NluClient, NluError};
