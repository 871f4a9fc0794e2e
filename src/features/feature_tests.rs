#[cfg(test)]
mod tests {
    use image::GrayImage;

    use crate::{
        core::{
            MashqError,
            Rect,
        },
        features::{
            crop_to_canonical,
            extract_features,
            CANONICAL_SIZE,
            CROP_MARGIN,
            FEATURE_LEN,
        },
    };

    fn canonical_blank() -> GrayImage {
        GrayImage::new(CANONICAL_SIZE, CANONICAL_SIZE)
    }

    #[test]
    fn extract_produces_exactly_1024_values_in_range() {
        let mut image = canonical_blank();
        image.put_pixel(3, 7, image::Luma([255]));

        let features = extract_features(&image).unwrap();

        assert_eq!(features.len(), FEATURE_LEN);
        assert!(features.iter().all(|&v| (0.0..=255.0).contains(&v)));
    }

    #[test]
    fn extract_is_row_major() {
        let mut image = canonical_blank();
        // (x = 5, y = 2) lands at row * width + column
        image.put_pixel(5, 2, image::Luma([200]));

        let features = extract_features(&image).unwrap();

        assert_eq!(features[2 * CANONICAL_SIZE as usize + 5], 200.0);
        assert_eq!(features.iter().filter(|&&v| v != 0.0).count(), 1);
    }

    #[test]
    fn extract_rejects_wrong_dimensions() {
        for (width, height) in [(31, 32), (32, 31), (64, 64), (1, 1)] {
            let image = GrayImage::new(width, height);
            match extract_features(&image) {
                Err(MashqError::DimensionMismatch { width: w, height: h, expected }) => {
                    assert_eq!((w, h), (width, height));
                    assert_eq!(expected, CANONICAL_SIZE);
                }
                other => panic!("expected DimensionMismatch, got {:?}", other.map(|v| v.len())),
            }
        }
    }

    #[test]
    fn extract_reproduces_checkerboard_exactly() {
        let image = GrayImage::from_fn(CANONICAL_SIZE, CANONICAL_SIZE, |x, y| {
            if (x + y) % 2 == 0 {
                image::Luma([255])
            } else {
                image::Luma([0])
            }
        });

        let features = extract_features(&image).unwrap();

        for (i, &value) in features.iter().enumerate() {
            let x = i as u32 % CANONICAL_SIZE;
            let y = i as u32 / CANONICAL_SIZE;
            let expected = if (x + y) % 2 == 0 { 255.0 } else { 0.0 };
            assert_eq!(value, expected, "pixel ({}, {})", x, y);
        }
    }

    #[test]
    fn crop_output_is_canonical() {
        let mut image = GrayImage::new(100, 100);
        for x in 30..50 {
            for y in 30..50 {
                image.put_pixel(x, y, image::Luma([255]));
            }
        }

        let region = Rect::new(10.0, 10.0, 60.0, 60.0);
        let cropped = crop_to_canonical(&image, region, 1.0).unwrap();

        assert_eq!(cropped.dimensions(), (CANONICAL_SIZE, CANONICAL_SIZE));
        // The white block sits mid-region, so the center of the canonical
        // bitmap must be bright.
        assert!(cropped.get_pixel(16, 16).0[0] > 128);
    }

    #[test]
    fn crop_excludes_border_decoration() {
        let mut image = GrayImage::new(100, 100);
        let region = Rect::new(10.0, 10.0, 50.0, 50.0);

        // 1px frame exactly on the region boundary, like the on-screen
        // bounding box stroke.
        for i in 10..60u32 {
            image.put_pixel(i, 10, image::Luma([255]));
            image.put_pixel(i, 59, image::Luma([255]));
            image.put_pixel(10, i, image::Luma([255]));
            image.put_pixel(59, i, image::Luma([255]));
        }

        let cropped = crop_to_canonical(&image, region, 1.0).unwrap();

        assert!(cropped.pixels().all(|p| p.0[0] == 0), "border must not bleed into the crop");
    }

    #[test]
    fn crop_maps_logical_coordinates_by_density_scale() {
        // 2x density: a 50x50 logical frame backed by a 100x100 raster.
        let mut image = GrayImage::new(100, 100);
        for x in 40..60 {
            for y in 40..60 {
                image.put_pixel(x, y, image::Luma([255]));
            }
        }

        let region = Rect::new(5.0, 5.0, 40.0, 40.0);
        let cropped = crop_to_canonical(&image, region, 2.0).unwrap();

        assert_eq!(cropped.dimensions(), (CANONICAL_SIZE, CANONICAL_SIZE));
        assert!(cropped.get_pixel(16, 16).0[0] > 128);
    }

    #[test]
    fn crop_out_of_bounds_fails_closed() {
        let image = GrayImage::new(64, 64);

        let region = Rect::new(40.0, 40.0, 60.0, 60.0);
        assert!(matches!(
            crop_to_canonical(&image, region, 1.0),
            Err(MashqError::CropOutOfBounds { .. })
        ));

        // Negative origin after inset is still out of bounds.
        let region = Rect::new(-10.0, 0.0, 30.0, 30.0);
        assert!(matches!(
            crop_to_canonical(&image, region, 1.0),
            Err(MashqError::CropOutOfBounds { .. })
        ));
    }

    #[test]
    fn crop_is_idempotent_for_stable_scale() {
        let mut image = GrayImage::new(128, 128);
        for x in 20..90 {
            for y in 40..70 {
                image.put_pixel(x, y, image::Luma([200]));
            }
        }

        let region = Rect::new(8.0, 8.0, 100.0, 100.0);
        let first = crop_to_canonical(&image, region, 1.0).unwrap();

        // The whole canonical bitmap, widened so the margin inset cancels out.
        let full = Rect::new(
            -CROP_MARGIN,
            -CROP_MARGIN,
            CANONICAL_SIZE as f64 + 2.0 * CROP_MARGIN,
            CANONICAL_SIZE as f64 + 2.0 * CROP_MARGIN,
        );
        let second = crop_to_canonical(&first, full, 1.0).unwrap();

        assert_eq!(first.as_raw(), second.as_raw());
    }
}
