//! Image loading and canvas export

use crate::io::error::{CollageError, Result};
use image::{DynamicImage, RgbImage};
use std::path::Path;

/// Load an image from disk, attaching the path to any failure
///
/// # Errors
///
/// Returns `ImageLoad` if the file cannot be opened or is not decodable
/// as a supported raster format.
pub fn load_image(path: &Path) -> Result<DynamicImage> {
    image::open(path).map_err(|e| CollageError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Save the composed canvas to the output path
///
/// The encoding is chosen from the output extension by the `image` crate.
/// Missing parent directories are created first.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The canvas cannot be encoded or written to the given path
pub fn export_canvas(canvas: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| CollageError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    canvas.save(output_path).map_err(|e| CollageError::ImageExport {
        path: output_path.to_path_buf(),
        source: e,
    })
}
