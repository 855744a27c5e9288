use thiserror::Error;

pub type ConfabResult<T> = Result<T, ConfabError>;

#[derive(Debug, Error)]
pub enum ConfabError {
    #[error("API error: {0}")]
    Api(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConfabError {
    pub fn api_error(msg: impl Into<String>) -> Self {
        ConfabError::Api(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        ConfabError::Config(msg.into())
    }

    pub fn clipboard_error(msg: impl Into<String>) -> Self {
        ConfabError::Clipboard(msg.into())
    }
}
