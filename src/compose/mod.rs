//! Core compositing pipeline
//!
//! This module contains the collage-building functionality:
//! - Center cropping of arbitrary-aspect images to squares
//! - Row-major grid layout with a reserved center cell
//! - Canvas assembly from prepared cell images

/// Canvas allocation and cell pasting
pub mod canvas;
/// Symmetric center cropping to square aspect ratio
pub mod crop;
/// Grid geometry and slot index mapping
pub mod layout;

pub use canvas::compose;
pub use layout::GridSpec;
