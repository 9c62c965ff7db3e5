//! Error types for collage composition and file handling

use std::fmt;
use std::path::PathBuf;

/// Main error type for all collage operations
#[derive(Debug)]
pub enum CollageError {
    /// Failed to load an input image from the filesystem
    ImageLoad {
        /// Path to the image file
        path: PathBuf,
        /// Underlying image loading error
        source: image::ImageError,
    },

    /// Failed to decode an in-memory image buffer
    BufferDecode {
        /// Position of the buffer in the submitted sequence
        index: usize,
        /// Underlying image decoding error
        source: image::ImageError,
    },

    /// The designated center image is absent from the input folder
    MissingCenterImage {
        /// Folder that was scanned
        folder: PathBuf,
        /// Expected filename of the center image
        file_name: String,
    },

    /// A file's extension is outside the supported format allow-list
    UnsupportedFormat {
        /// Path to the offending file
        path: PathBuf,
        /// The rejected extension, if the file had one
        extension: Option<String>,
    },

    /// Grid parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Failed to save the composed canvas to disk
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for CollageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ImageLoad { path, source } => {
                write!(f, "Failed to load image '{}': {source}", path.display())
            }
            Self::BufferDecode { index, source } => {
                write!(f, "Failed to decode uploaded image {index}: {source}")
            }
            Self::MissingCenterImage { folder, file_name } => {
                write!(
                    f,
                    "Center image '{file_name}' must be present in '{}'",
                    folder.display()
                )
            }
            Self::UnsupportedFormat { path, extension } => match extension {
                Some(ext) => write!(
                    f,
                    "Unsupported image format '.{ext}' for '{}'",
                    path.display()
                ),
                None => write!(
                    f,
                    "File '{}' has no recognizable image extension",
                    path.display()
                ),
            },
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export collage to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for CollageError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageLoad { source, .. }
            | Self::BufferDecode { source, .. }
            | Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for collage results
pub type Result<T> = std::result::Result<T, CollageError>;

impl From<std::io::Error> for CollageError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> CollageError {
    CollageError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}
