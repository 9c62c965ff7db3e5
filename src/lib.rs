//! Square image-grid collage compositor with a designated center cell
//!
//! The system square-crops a set of input images, resizes each to a uniform
//! cell size, and packs them into an odd-sided N×N canvas in row-major order,
//! reserving the middle cell for one designated center image.

#![forbid(unsafe_code)]

/// Core compositing logic: cropping, grid layout, and canvas assembly
pub mod compose;
/// Input/output operations, adapters, and error handling
pub mod io;

pub use io::error::{CollageError, Result};
