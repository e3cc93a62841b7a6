//! Application layer: the handler registry and the resumable dialog loop.

mod dialog;
mod registry;

pub use dialog::{DialogError, IntentDialog, IntentDialogBuilder};
pub use registry::HandlerRegistry;
