//! Error types and handling for the `Yatra` application

use thiserror::Error;

/// Main error type for the `Yatra` application
#[derive(Error, Debug)]
pub enum YatraError {
    /// A referenced destination is absent from the supplied catalog
    #[error("Destination id {id} not found")]
    NotFound { id: u32 },

    /// Input validation errors
    #[error("Invalid input: {message}")]
    Validation { message: String },

    /// Catalog data errors (malformed or unreadable data files)
    #[error("Data error: {message}")]
    Data { message: String },

    /// I/O operation errors
    #[error("I/O error: {source}")]
    Io {
        #[from]
        source: std::io::Error,
    },

    /// General application errors
    #[error("Application error: {message}")]
    General { message: String },
}

impl YatraError {
    /// Create a new not-found error for a destination id
    #[must_use]
    pub fn not_found(id: u32) -> Self {
        Self::NotFound { id }
    }

    /// Create a new validation error
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a new data error
    pub fn data<S: Into<String>>(message: S) -> Self {
        Self::Data {
            message: message.into(),
        }
    }

    /// Create a new general error
    pub fn general<S: Into<String>>(message: S) -> Self {
        Self::General {
            message: message.into(),
        }
    }

    /// Get a user-friendly error message
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            YatraError::NotFound { id } => {
                format!("Destination {id} does not exist in the catalog.")
            }
            YatraError::Validation { message } => {
                format!("Invalid input: {message}")
            }
            YatraError::Data { .. } => {
                "Catalog data could not be loaded. Please check the data file.".to_string()
            }
            YatraError::Io { .. } => {
                "File operation failed. Please check file permissions.".to_string()
            }
            YatraError::General { message } => message.clone(),
        }
    }
}
