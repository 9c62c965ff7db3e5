//! Symmetric center cropping to square aspect ratio

use image::DynamicImage;

/// Crop an image to a square by keeping its center region
///
/// The larger dimension is trimmed symmetrically around the image's own
/// center, with the leading offset computed by integer floor division.
/// An already-square image is returned as an equivalent copy. Succeeds for
/// any image with positive dimensions.
pub fn crop_to_square(image: &DynamicImage) -> DynamicImage {
    let (width, height) = (image.width(), image.height());
    if width == height {
        return image.clone();
    }

    let side = width.min(height);
    let left = (width - side) / 2;
    let top = (height - side) / 2;
    image.crop_imm(left, top, side, side)
}
