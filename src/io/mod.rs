//! Input/output operations and adapters
//!
//! This module contains everything outside the core compositor:
//! - Typed errors and result alias
//! - Folder scanning against the format allow-list
//! - Image loading, decoding, and canvas export
//! - The command-line interface and progress display

/// Command-line interface and folder processing orchestration
pub mod cli;
/// Compile-time defaults and limits
pub mod configuration;
/// Error types and result alias
pub mod error;
/// Folder scanning with extension allow-list enforcement
pub mod folder;
/// Image loading and canvas export
pub mod image;
/// Progress display for image loading
pub mod progress;
/// In-memory byte-buffer adapter for uploaded images
pub mod upload;
