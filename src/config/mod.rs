//! Configuration module
//!
//! Type-safe NLU backend configuration, loadable from environment variables
//! using the `config` and `dotenvy` crates, with semantic validation at
//! construction time.

mod error;
mod nlu;

pub use error::{ConfigError, ValidationError};
pub use nlu::NluConfig;
