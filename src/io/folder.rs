//! Folder scanning with a fixed image-format allow-list
//!
//! The scanner separates the designated center image from the remaining
//! files and orders the rest by filename so composition is deterministic
//! regardless of directory-enumeration order.

use crate::io::configuration::SUPPORTED_EXTENSIONS;
use crate::io::error::{CollageError, Result};
use std::path::{Path, PathBuf};

/// Result of scanning an input folder
#[derive(Debug)]
pub struct FolderScan {
    /// Path to the designated center image
    pub center: PathBuf,
    /// Non-center image paths, sorted by filename
    pub others: Vec<PathBuf>,
}

/// Check a path's extension against the supported format allow-list
pub fn is_supported_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| {
            let lowered = ext.to_ascii_lowercase();
            SUPPORTED_EXTENSIONS.contains(&lowered.as_str())
        })
}

/// Scan a folder for grid images and locate the center image
///
/// Every regular file must carry an extension from the allow-list;
/// anything else is rejected with a typed error instead of being skipped.
/// Subdirectories are ignored.
///
/// # Errors
///
/// Returns an error if:
/// - The folder cannot be read
/// - A regular file has a missing or unsupported extension
/// - No file named `center_name` exists in the folder
pub fn scan_folder(folder: &Path, center_name: &str) -> Result<FolderScan> {
    let entries = std::fs::read_dir(folder).map_err(|e| CollageError::FileSystem {
        path: folder.to_path_buf(),
        operation: "read directory",
        source: e,
    })?;

    let mut center = None;
    let mut others = Vec::new();

    for entry in entries {
        let path = entry
            .map_err(|e| CollageError::FileSystem {
                path: folder.to_path_buf(),
                operation: "read directory entry",
                source: e,
            })?
            .path();

        if !path.is_file() {
            continue;
        }

        if !is_supported_extension(&path) {
            let extension = path
                .extension()
                .and_then(|ext| ext.to_str())
                .map(str::to_ascii_lowercase);
            return Err(CollageError::UnsupportedFormat { path, extension });
        }

        if path.file_name().and_then(|name| name.to_str()) == Some(center_name) {
            center = Some(path);
        } else {
            others.push(path);
        }
    }

    let center = center.ok_or_else(|| CollageError::MissingCenterImage {
        folder: folder.to_path_buf(),
        file_name: center_name.to_string(),
    })?;

    others.sort();

    Ok(FolderScan { center, others })
}
