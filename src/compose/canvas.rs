//! Canvas assembly from cropped and resized cell images

use crate::compose::crop::crop_to_square;
use crate::compose::layout::GridSpec;
use image::imageops::{self, FilterType};
use image::{DynamicImage, RgbImage};

// Solid colors and photographic content both survive Lanczos resampling
// without visible artifacts at contact-sheet cell sizes
const RESIZE_FILTER: FilterType = FilterType::Lanczos3;

/// Square-crop an image and resize it to one grid cell
fn prepare_cell(image: &DynamicImage, cell_size: u32) -> RgbImage {
    let square = crop_to_square(image);
    if square.width() == cell_size {
        return square.to_rgb8();
    }
    imageops::resize(&square.to_rgb8(), cell_size, cell_size, RESIZE_FILTER)
}

/// Compose non-center images and one center image into a single grid canvas
///
/// Non-center images are pasted in input order into row-major cells, skipping
/// the reserved middle cell, which receives `center` last. Inputs beyond the
/// grid's capacity are silently ignored. Supplying fewer images than the
/// capacity leaves the unassigned cells black; this is a documented degraded
/// mode rather than an error.
///
/// The output is deterministic: identical ordered inputs always produce a
/// pixel-identical canvas.
pub fn compose(others: &[DynamicImage], center: &DynamicImage, spec: &GridSpec) -> RgbImage {
    let side = spec.canvas_size();
    let mut canvas = RgbImage::new(side, side);

    for (k, source) in others.iter().take(spec.capacity()).enumerate() {
        let cell = prepare_cell(source, spec.cell_size());
        let (x, y) = spec.cell_origin(spec.slot_for(k));
        imageops::replace(&mut canvas, &cell, i64::from(x), i64::from(y));
    }

    let cell = prepare_cell(center, spec.cell_size());
    let (x, y) = spec.cell_origin(spec.center_index());
    imageops::replace(&mut canvas, &cell, i64::from(x), i64::from(y));

    canvas
}
