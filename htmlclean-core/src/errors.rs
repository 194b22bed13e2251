//! errors.rs - Custom error types for the htmlclean-core library.
//!
//! This module defines a structured error enum for the library, providing
//! specific, actionable error types that can be handled programmatically.
//!
//! License: MIT OR APACHE 2.0

use thiserror::Error;

/// This enum represents all possible error types in the `htmlclean-core` library.
///
/// Marked `#[non_exhaustive]` so new variants can be added without breaking
/// downstream `match` statements.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum HtmlCleanError {
    /// A transformation was invoked on a cleaner whose buffer was never loaded
    /// (or was loaded with an absent value).
    #[error("Cannot run '{0}': no HTML has been loaded into the cleaner")]
    NotLoaded(&'static str),

    #[error("Failed to compile cleaning pattern '{0}': {1}")]
    PatternCompilation(String, regex::Error),

    #[error("Unknown cleaning step '{0}'")]
    InvalidStep(String),
}
