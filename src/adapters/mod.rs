//! Adapters layer: concrete implementations of the outward-facing ports.

pub mod nlu;
