use thiserror::Error;

#[derive(Error, Debug)]
pub enum ModelError {
    #[error("Pattern compilation failed: {0}")]
    PatternError(#[from] regex::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

pub type Result<T> = std::result::Result<T, ModelError>;
