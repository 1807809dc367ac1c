//! Error types shared across the content, prompt and generation layers

use crate::llm::provider::LLMError;

/// Top-level error for fastutor operations
#[derive(Debug, thiserror::Error)]
pub enum FasError {
    /// An identifier that the content store does not know about
    #[error("Unknown standard: {0}")]
    NotFound(String),

    /// A prompt variable was missing or blank
    #[error("Prompt variable '{field}' must not be empty")]
    Validation { field: &'static str },

    /// The external generation service failed
    #[error(transparent)]
    Generation(#[from] LLMError),

    /// Missing credential or unusable configuration
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl FasError {
    pub fn is_generation(&self) -> bool {
        matches!(self, Self::Generation(_))
    }
}

pub type Result<T> = std::result::Result<T, FasError>;
