// maclink library - public API

// Re-export error types
pub mod error;
pub use error::{ErrorKind, LinkError, Result, StageFailure};

// Module declarations
pub mod commands;
pub mod core;

// Re-export commonly used types
pub use crate::core::profile::SiteProfile;
pub use crate::core::resolver::{ResolvedUrl, Resolver};

// Initialize logging. Defaults to warnings only so stdout stays a single URL.
pub fn init_logging() {
    env_logger::Builder::new()
        .filter_level(log::LevelFilter::Warn)
        .parse_default_env()
        .init();
}
