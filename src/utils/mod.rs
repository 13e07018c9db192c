//! Utility modules for common functionality

pub mod exit_codes;
pub mod filesystem;
pub mod logging;

// Re-export commonly used functions
pub use exit_codes::{exit_code_for, get_exit_code_description};
pub use filesystem::{FileSpec, collect_files, to_repository_path};
pub use logging::init_logging;
