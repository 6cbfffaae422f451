//! Error types for the session runner binary.
//!
//! [`RunnerError`] is the top-level error type that wraps every failure
//! mode during startup and at the end of a session.

/// Top-level error for the session runner binary.
#[derive(Debug, thiserror::Error)]
pub enum RunnerError {
    /// Configuration or animation asset loading failed.
    #[error("config error: {source}")]
    Config {
        /// The underlying config error.
        #[from]
        source: crate::config::ConfigError,
    },

    /// The final snapshot could not be serialized.
    #[error("snapshot serialization failed: {source}")]
    Snapshot {
        /// The underlying JSON error.
        #[from]
        source: serde_json::Error,
    },
}
