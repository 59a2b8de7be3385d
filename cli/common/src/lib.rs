//! Shared utilities for table-backup CLI binaries.
//!
//! Log level argument, stderr logging setup and summary formatting used by `tb-backup`.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::{format_count, format_seconds};
pub use logging::init_logging;
