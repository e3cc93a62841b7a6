//! Intent Dialog - NLU-backed intent routing for conversational applications
//!
//! Routes free-text user utterances to application-defined handlers based on
//! the highest-confidence intent returned by an NLU backend. The host
//! framework supplies message delivery, persistence, and scheduling; this
//! crate supplies the resumable dialog loop, the handler registry, and the
//! NLU query adapter.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
