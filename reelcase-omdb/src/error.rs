/// Errors that can occur during OMDb lookups.
#[derive(Debug, thiserror::Error)]
pub enum OmdbError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Invalid OMDb API key")]
    InvalidApiKey,

    #[error("No OMDb entry found for '{title}'")]
    NotFound { title: String },

    #[error("OMDb entry has no usable {0}")]
    MissingField(&'static str),

    #[error("OMDb API error: {0}")]
    Api(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
