//! Dialog lifecycle state machine.
//!
//! Provides a consistent interface for validating and performing state
//! transitions, plus the concrete lifecycle of a resumable dialog.

use thiserror::Error;

/// Error returned when a state transition is not permitted.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid state transition from {from} to {to}")]
pub struct TransitionError {
    /// State the transition was attempted from.
    pub from: String,
    /// State the transition targeted.
    pub to: String,
}

/// Trait for status enums that represent state machines.
///
/// Implementors define valid state transitions and get validated
/// transition methods for free.
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if transition from self to target is valid.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns all valid target states from current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Performs transition with validation, returning error if invalid.
    fn transition_to(&self, target: Self) -> Result<Self, TransitionError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(TransitionError {
                from: format!("{:?}", self),
                to: format!("{:?}", target),
            })
        }
    }

    /// Checks if current state is terminal (no valid outgoing transitions).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}

/// Lifecycle of a resumable dialog.
///
/// A started dialog parks in `WaitingForMessage` with exactly one continuation
/// armed; each inbound message drives one `Dispatching` pass, after which the
/// dialog either re-arms the wait or terminates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogState {
    /// Constructed but not yet started by the host scheduler.
    Created,
    /// Parked until the host delivers the next inbound message.
    WaitingForMessage,
    /// Processing one inbound message (NLU query, selection, handler call).
    Dispatching,
    /// Finished; control has returned to the host's dialog stack.
    Terminated,
}

impl StateMachine for DialogState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use DialogState::*;
        matches!(
            (self, target),
            (Created, WaitingForMessage)
                | (WaitingForMessage, Dispatching)
                | (Dispatching, WaitingForMessage)
                | (Dispatching, Terminated)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use DialogState::*;
        match self {
            Created => vec![WaitingForMessage],
            WaitingForMessage => vec![Dispatching],
            Dispatching => vec![WaitingForMessage, Terminated],
            Terminated => vec![],
        }
    }
}
