//! Unified error types for the gallery browser.

use std::fmt;

/// Application-specific errors.
#[derive(Debug)]
pub enum AppError {
    /// A backend call failed or answered with an unexpected payload
    BackendFetch(String),
    /// Error reading a directory while scanning the gallery
    DirectoryScan(String),
    /// The gallery root could not be turned into a gallery
    GalleryCreation(String),
    /// No gallery root has been cached yet
    GalleryNotLoaded,
    /// The current directory has no subdirectory with this name
    DirectoryNotFound(String),
    /// The current directory is the gallery root
    AtRoot,
    /// The backend does not know this command
    UnknownCommand(String),
    /// Command arguments did not have the expected shape
    InvalidArguments(String),
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AppError::BackendFetch(msg) => write!(f, "Backend call failed: {}", msg),
            AppError::DirectoryScan(msg) => write!(f, "Directory scan failed: {}", msg),
            AppError::GalleryCreation(msg) => {
                write!(f, "The gallery could not be created: {}", msg)
            }
            AppError::GalleryNotLoaded => write!(f, "No gallery root has been opened"),
            AppError::DirectoryNotFound(name) => write!(f, "No subdirectory named {:?}", name),
            AppError::AtRoot => write!(f, "Already at the gallery root"),
            AppError::UnknownCommand(name) => write!(f, "Unknown backend command: {}", name),
            AppError::InvalidArguments(msg) => write!(f, "Invalid command arguments: {}", msg),
        }
    }
}

impl std::error::Error for AppError {}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::DirectoryScan(err.to_string())
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BackendFetch(err.to_string())
    }
}

/// Type alias for Results in this application.
pub type Result<T> = std::result::Result<T, AppError>;
