//! Chaptarr Core - Shared foundations for the book-acquisition dashboard
//!
//! This crate provides the building blocks common to all Chaptarr components:
//! configuration management, the error root, and logging setup.

pub mod config;
pub mod tracing_setup;

// Re-export main types for convenient access
pub use config::{ChaptarrConfig, Language, LibraryConfig, SearchConfig};

/// Core errors that can bubble up from any Chaptarr subsystem.
#[derive(Debug, thiserror::Error)]
pub enum ChaptarrError {
    #[error("Configuration error: {reason}")]
    Configuration { reason: String },

    #[error("Sort state store error: {reason}")]
    SortStateStore { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChaptarrError {
    /// Returns a user-friendly error message suitable for display.
    pub fn user_message(&self) -> String {
        match self {
            ChaptarrError::Configuration { reason } => {
                format!("Configuration error: {reason}")
            }
            ChaptarrError::SortStateStore { .. } => {
                "Could not persist sort preference".to_string()
            }
            ChaptarrError::Io(_) => "File system error occurred".to_string(),
        }
    }

    /// Checks if this error is due to user input validation.
    pub fn is_user_error(&self) -> bool {
        matches!(self, ChaptarrError::Configuration { .. })
    }
}

pub type Result<T> = std::result::Result<T, ChaptarrError>;
