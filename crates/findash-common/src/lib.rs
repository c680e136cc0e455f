//! Common utilities and types for the findash dashboard crates

pub mod error;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use error::{FindashError, Result};
pub use logging::{init_default_logging, init_logging, LoggingConfig};
