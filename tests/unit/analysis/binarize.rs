//! Tests for grayscale conversion, bounded downscaling and thresholding

#[cfg(test)]
mod tests {
    use image::{DynamicImage, GrayImage, ImageFormat, Luma, Rgb, RgbImage};
    use std::borrow::Cow;
    use std::io::Cursor;
    use viscrypt::analysis::binarize::{bounded_dimensions, downscale, grayscale, quantize};
    use viscrypt::{Binarizer, CryptError, Ink};

    fn uniform(width: u32, height: u32, intensity: u8) -> DynamicImage {
        DynamicImage::ImageLuma8(GrayImage::from_pixel(width, height, Luma([intensity])))
    }

    // Tests that intensity 120 is black and 121 is white under the defaults
    #[test]
    fn test_threshold_boundary() {
        let binarizer = Binarizer::default();

        let at = binarizer.binarize(&uniform(1, 1, 120));
        let above = binarizer.binarize(&uniform(1, 1, 121));

        assert_eq!(at.get(0, 0), Some(Ink::Black));
        assert_eq!(above.get(0, 0), Some(Ink::White));
    }

    #[test]
    fn test_default_parameters() {
        let binarizer = Binarizer::default();
        assert_eq!(binarizer.max_dimension(), 150);
        assert_eq!(binarizer.threshold(), 120);
    }

    // Tests size fitting for wide, tall, square, in-bounds and extreme shapes
    #[test]
    fn test_bounded_dimensions() {
        assert_eq!(bounded_dimensions(300, 200, 150), (150, 100));
        assert_eq!(bounded_dimensions(40, 400, 150), (15, 150));
        assert_eq!(bounded_dimensions(300, 300, 150), (150, 150));
        assert_eq!(bounded_dimensions(151, 150, 150), (150, 149));
        assert_eq!(bounded_dimensions(150, 80, 150), (150, 80));
        assert_eq!(bounded_dimensions(10, 10, 150), (10, 10));
        assert_eq!(bounded_dimensions(1000, 1, 150), (150, 1));
    }

    // Tests that in-bounds images are borrowed and large ones are resized
    #[test]
    fn test_downscale_only_when_needed() {
        let small = GrayImage::from_pixel(20, 10, Luma([50]));
        assert!(matches!(downscale(&small, 150), Cow::Borrowed(_)));

        let large = GrayImage::from_pixel(400, 200, Luma([200]));
        let resized = downscale(&large, 150);
        assert!(matches!(resized, Cow::Owned(_)));
        assert_eq!(resized.dimensions(), (150, 75));
    }

    // Tests that the binarized grid respects the bound and keeps uniform content
    #[test]
    fn test_binarize_bounds_output() {
        let binarizer = Binarizer::default();

        let wide = binarizer.binarize(&uniform(400, 200, 200));
        assert_eq!(wide.dimensions(), (75, 150));
        assert!(wide.cells().iter().all(|&ink| ink == Ink::White));

        let tall = binarizer.binarize(&uniform(90, 600, 30));
        assert_eq!(tall.dimensions(), (150, 23));
        assert!(tall.cells().iter().all(|&ink| ink == Ink::Black));

        let native = binarizer.binarize(&uniform(33, 17, 0));
        assert_eq!(native.dimensions(), (17, 33));
    }

    // Tests luminance weighting of saturated primaries
    #[test]
    fn test_colour_conversion_uses_luminance() {
        let mut rgb = RgbImage::new(3, 1);
        rgb.put_pixel(0, 0, Rgb([255, 0, 0]));
        rgb.put_pixel(1, 0, Rgb([0, 255, 0]));
        rgb.put_pixel(2, 0, Rgb([0, 0, 255]));
        let source = DynamicImage::ImageRgb8(rgb);

        let gray = grayscale(&source);
        let grid = Binarizer::default().binarize(&source);

        assert!(gray.get_pixel(1, 0).0[0] > gray.get_pixel(0, 0).0[0]);
        assert!(gray.get_pixel(0, 0).0[0] > gray.get_pixel(2, 0).0[0]);
        assert_eq!(grid.get(0, 0), Some(Ink::Black));
        assert_eq!(grid.get(0, 1), Some(Ink::White));
        assert_eq!(grid.get(0, 2), Some(Ink::Black));
    }

    // Tests quantization of a gradient row with a custom threshold
    #[test]
    fn test_quantize_custom_threshold() {
        let gray = GrayImage::from_fn(5, 1, |x, _| Luma([(x * 50) as u8]));

        let grid = quantize(&gray, 100);

        let row: Vec<Ink> = grid.cells().iter().copied().collect();
        assert_eq!(
            row,
            vec![Ink::Black, Ink::Black, Ink::Black, Ink::White, Ink::White]
        );
    }

    // Tests decoding an encoded PNG held in memory
    #[test]
    fn test_binarize_bytes_png() {
        let mut bytes = Cursor::new(Vec::new());
        uniform(8, 4, 250)
            .write_to(&mut bytes, ImageFormat::Png)
            .unwrap();

        let grid = Binarizer::default()
            .binarize_bytes(bytes.get_ref())
            .unwrap();

        assert_eq!(grid.dimensions(), (4, 8));
        assert!(grid.cells().iter().all(|&ink| ink == Ink::White));
    }

    // Tests that undecodable bytes raise UnreadableImage
    #[test]
    fn test_binarize_bytes_unreadable() {
        let err = Binarizer::default()
            .binarize_bytes(b"definitely not an image")
            .unwrap_err();

        assert!(
            matches!(err, CryptError::UnreadableImage { .. }),
            "unexpected error: {err:?}"
        );
    }

    // Tests that a missing file is reported separately from a decode failure
    #[test]
    fn test_binarize_file_missing() {
        let dir = tempfile::tempdir().unwrap();

        let err = Binarizer::default()
            .binarize_file(dir.path().join("absent.png"))
            .unwrap_err();

        assert!(
            matches!(err, CryptError::FileSystem { .. }),
            "unexpected error: {err:?}"
        );
    }

    // Tests rejection of a zero size bound
    #[test]
    fn test_zero_max_dimension_rejected() {
        let err = Binarizer::new(0, 120).unwrap_err();
        assert!(matches!(
            err,
            CryptError::InvalidParameter {
                parameter: "max_dimension",
                ..
            }
        ));

        let custom = Binarizer::new(64, 10).unwrap();
        assert_eq!(custom.max_dimension(), 64);
        assert_eq!(custom.threshold(), 10);
    }
}
