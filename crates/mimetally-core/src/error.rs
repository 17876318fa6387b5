use thiserror::Error;

pub type Result<T> = std::result::Result<T, MimeTallyError>;

#[derive(Debug, Error)]
pub enum MimeTallyError {
    #[error("not found: {0}")]
    NotFound(String),

    #[error("validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Regex(#[from] regex::Error),
}

impl MimeTallyError {
    pub fn code(&self) -> &'static str {
        match self {
            Self::NotFound(_) => "NOT_FOUND",
            Self::Validation(_) => "VALIDATION_FAILED",
            Self::Io(_) => "IO_ERROR",
            Self::Csv(_) => "CSV_ERROR",
            Self::Regex(_) => "REGEX_ERROR",
        }
    }
}
