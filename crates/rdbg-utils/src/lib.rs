//! # rdbg Utilities
//!
//! Shared utilities for the rdbg debugger workspace, currently the
//! `tracing`-based logging bootstrap used by every binary that embeds the
//! host layer.

pub mod logging;

// Re-export commonly used logging functions for convenience
pub use logging::{LogFormat, LogLevel, LoggingError, init_logging, init_logging_with_level};
pub use tracing::{debug, error, info, trace, warn};
