//! Domain layer: NLU result value objects, the intent key space, the pure
//! intent selection policy, and the dialog lifecycle state machine.

mod intent_key;
mod nlu;
mod state;

pub use intent_key::IntentKey;
pub use nlu::{select_intent, EntityRecommendation, IntentRecommendation, NluResult};
pub use state::{DialogState, StateMachine, TransitionError};
