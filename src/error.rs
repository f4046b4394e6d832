use std::path::PathBuf;
use thiserror::Error;

/// Errors from saving or opening a drawing
#[derive(Debug, Error)]
pub enum FileError {
    #[error("Failed to save drawing to {}: {source}", .path.display())]
    Save {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to open image {}: {source}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },
}

impl FileError {
    pub fn path(&self) -> &PathBuf {
        match self {
            FileError::Save { path, .. } | FileError::Open { path, .. } => path,
        }
    }

    /// Short message for the error dialog
    pub fn user_message(&self) -> &'static str {
        match self {
            FileError::Save { .. } => "Error saving the drawing",
            FileError::Open { .. } => "Error opening the drawing",
        }
    }
}

/// Result type for file operations
pub type FileResult<T> = Result<T, FileError>;
