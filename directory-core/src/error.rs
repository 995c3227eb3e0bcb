use thiserror::Error;

#[derive(Error, Debug)]
pub enum DirectoryError {
    /// Record or session store failed or timed out. Retryable; never shown to users in detail.
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),

    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl DirectoryError {
    /// Whether the caller may retry the same event later.
    pub fn is_retryable(&self) -> bool {
        matches!(self, DirectoryError::StoreUnavailable(_))
    }
}

pub type Result<T> = std::result::Result<T, DirectoryError>;
