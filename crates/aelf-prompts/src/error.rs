//! Error type shared by the library and the `aelf-prompts` binary.

use std::path::PathBuf;

use thiserror::Error;

/// Everything that can go wrong while resolving a target URL or gathering
/// prompt input. The builders themselves are total and never fail.
#[derive(Debug, Error)]
pub enum PromptError {
    /// Caller-supplied data could not be used: a run counter that is not an
    /// integer, blank prompt input, or conflicting input sources.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A configuration value is unusable, e.g. a cyclic bound of zero.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// An input file named on the command line could not be read.
    #[error("failed to read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A rendered prompt could not be encoded as JSON.
    #[error("failed to serialize prompt: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl PromptError {
    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }
}
