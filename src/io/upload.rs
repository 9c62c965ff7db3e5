//! In-memory adapter for images received as uploaded byte buffers
//!
//! Mirrors the folder adapter for callers that already hold encoded image
//! bytes (e.g. form uploads). No compositing logic lives here; the buffers
//! are decoded and handed to the one compositor.

use crate::compose::canvas::compose;
use crate::compose::layout::GridSpec;
use crate::io::error::{CollageError, Result};
use image::{DynamicImage, RgbImage};

/// Decode one uploaded buffer, attaching its sequence index to any failure
///
/// # Errors
///
/// Returns `BufferDecode` if the bytes are not a decodable raster image.
pub fn decode_buffer(index: usize, bytes: &[u8]) -> Result<DynamicImage> {
    image::load_from_memory(bytes).map_err(|source| CollageError::BufferDecode { index, source })
}

/// Compose a collage directly from encoded image buffers
///
/// Non-center buffers are decoded in order, truncated to the grid's
/// capacity before decoding, and composed around the decoded center
/// buffer. A failed center decode is reported at the index one past the
/// last considered non-center buffer.
///
/// # Errors
///
/// Returns `BufferDecode` if any considered buffer fails to decode.
pub fn compose_from_memory<B: AsRef<[u8]>>(
    others: &[B],
    center: &[u8],
    spec: &GridSpec,
) -> Result<RgbImage> {
    let considered = others.len().min(spec.capacity());

    let mut images = Vec::with_capacity(considered);
    for (index, bytes) in others.iter().take(considered).enumerate() {
        images.push(decode_buffer(index, bytes.as_ref())?);
    }

    let center_image = decode_buffer(considered, center)?;

    Ok(compose(&images, &center_image, spec))
}
