//! Captionista Error Definitions
//!
//! Defines error types used throughout the project.

use thiserror::Error;

/// Core engine error types
#[derive(Error, Debug)]
pub enum CoreError {
    // =========================================================================
    // Catalog Errors
    // =========================================================================
    #[error("Invalid style catalog: {0}")]
    InvalidStyleCatalog(String),

    #[error("Invalid language table: {0}")]
    InvalidLanguageTable(String),

    // =========================================================================
    // Collaborator Errors
    // =========================================================================
    #[error("Translation failed: {0}")]
    TranslationFailed(String),

    #[error("Captioning failed: {0}")]
    CaptioningFailed(String),

    // =========================================================================
    // Input Errors
    // =========================================================================
    #[error("Invalid image input: {0}")]
    InvalidImage(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    // =========================================================================
    // General Errors
    // =========================================================================
    #[error("Not supported: {0}")]
    NotSupported(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Timeout: {0}")]
    Timeout(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    JsonError(#[from] serde_json::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Core engine result type
pub type CoreResult<T> = Result<T, CoreError>;

impl CoreError {
    /// Convert to a user-friendly error message for IPC
    pub fn to_ipc_error(&self) -> String {
        self.to_string()
    }
}
