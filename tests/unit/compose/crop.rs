//! Tests for symmetric center cropping to square aspect ratio

#[cfg(test)]
mod tests {
    use gridfolio::compose::crop::crop_to_square;
    use image::{DynamicImage, GenericImageView, Rgb, RgbImage};

    // Encodes pixel coordinates into channel values so crops are traceable
    fn gradient(width: u32, height: u32) -> DynamicImage {
        let img = RgbImage::from_fn(width, height, |x, y| Rgb([x as u8, y as u8, 0]));
        DynamicImage::ImageRgb8(img)
    }

    // Tests landscape crop keeps the vertically full center band
    // Verified by shifting the left offset off-center
    #[test]
    fn test_crop_landscape_to_square() {
        let source = gradient(10, 4);
        let cropped = crop_to_square(&source);

        assert_eq!(cropped.dimensions(), (4, 4));
        // left offset = (10 - 4) / 2 = 3
        assert_eq!(cropped.get_pixel(0, 0), source.get_pixel(3, 0));
        assert_eq!(cropped.get_pixel(3, 3), source.get_pixel(6, 3));
    }

    // Tests portrait crop keeps the horizontally full center band
    #[test]
    fn test_crop_portrait_to_square() {
        let source = gradient(4, 10);
        let cropped = crop_to_square(&source);

        assert_eq!(cropped.dimensions(), (4, 4));
        // top offset = (10 - 4) / 2 = 3
        assert_eq!(cropped.get_pixel(0, 0), source.get_pixel(0, 3));
        assert_eq!(cropped.get_pixel(3, 3), source.get_pixel(3, 6));
    }

    // Tests odd size differences floor the offset
    #[test]
    fn test_crop_offset_uses_floor_division() {
        let source = gradient(7, 4);
        let cropped = crop_to_square(&source);

        assert_eq!(cropped.dimensions(), (4, 4));
        // left offset = (7 - 4) / 2 = 1 with floor division
        assert_eq!(cropped.get_pixel(0, 0), source.get_pixel(1, 0));
    }

    // Tests already-square images come back unchanged
    #[test]
    fn test_square_input_is_noop() {
        let source = gradient(5, 5);
        let cropped = crop_to_square(&source);

        assert_eq!(cropped.dimensions(), (5, 5));
        assert_eq!(cropped.to_rgb8(), source.to_rgb8());
    }

    // Tests the degenerate single-pixel image
    #[test]
    fn test_single_pixel_image() {
        let source = gradient(1, 1);
        let cropped = crop_to_square(&source);

        assert_eq!(cropped.dimensions(), (1, 1));
    }

    // Tests output side always equals the smaller input dimension
    #[test]
    fn test_output_side_is_min_dimension() {
        for (w, h) in [(2, 9), (9, 2), (300, 200), (200, 300), (31, 30)] {
            let cropped = crop_to_square(&gradient(w, h));
            let side = w.min(h);
            assert_eq!(cropped.dimensions(), (side, side));
        }
    }
}
