use thiserror::Error;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(String),

    /// OMDb lookup failed
    #[error("{0}")]
    Api(String),

    /// Configuration error
    #[error("Config error: {0}")]
    Config(String),

    /// Bad argument or argument combination
    #[error("{0}")]
    InvalidInput(String),

    /// Website generation failed
    #[error("Export error: {0}")]
    Export(String),
}

impl CliError {
    pub(crate) fn database(msg: impl Into<String>) -> Self {
        Self::Database(msg.into())
    }

    pub(crate) fn api(msg: impl Into<String>) -> Self {
        Self::Api(msg.into())
    }

    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    pub(crate) fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    pub(crate) fn export(msg: impl Into<String>) -> Self {
        Self::Export(msg.into())
    }
}
