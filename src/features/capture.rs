use std::io::Cursor;

use image::{
    imageops::{
        self,
        FilterType,
    },
    DynamicImage,
    GrayImage,
    ImageFormat,
};

use crate::core::{
    MashqError,
    Rect,
};

/// Side length of the canonical bitmap the classifier consumes.
pub const CANONICAL_SIZE: u32 = 32;

/// Inward inset applied to the crop region so the bounding-box border
/// decoration never bleeds into the sample.
pub const CROP_MARGIN: f64 = 2.0;

/// Crops `image` to `region` and resizes the result to the canonical 32x32.
///
/// `region` is in logical coordinates; `scale` is the device pixel density
/// factor mapping logical points to raw pixels. The region is inset by
/// [`CROP_MARGIN`] before scaling. A region that does not fit inside the
/// image aborts with `CropOutOfBounds` and produces no output.
pub fn crop_to_canonical(
    image: &GrayImage,
    region: Rect,
    scale: f64,
) -> Result<GrayImage, MashqError> {
    let inset = region.inset(CROP_MARGIN);

    let x = (inset.x * scale).round() as i64;
    let y = (inset.y * scale).round() as i64;
    let width = (inset.width * scale).round() as u32;
    let height = (inset.height * scale).round() as u32;

    let (image_width, image_height) = image.dimensions();

    let fits = x >= 0
        && y >= 0
        && width > 0
        && height > 0
        && x as u64 + width as u64 <= image_width as u64
        && y as u64 + height as u64 <= image_height as u64;

    if !fits {
        return Err(MashqError::CropOutOfBounds {
            x,
            y,
            width,
            height,
            image_width,
            image_height,
        });
    }

    let cropped = imageops::crop_imm(image, x as u32, y as u32, width, height).to_image();

    // Already canonical: resampling would only smear pixels, and cropping a
    // crop must reproduce the same bitmap.
    if width == CANONICAL_SIZE && height == CANONICAL_SIZE {
        return Ok(cropped);
    }

    let canonical =
        imageops::resize(&cropped, CANONICAL_SIZE, CANONICAL_SIZE, FilterType::Triangle);

    Ok(canonical)
}

/// Encodes a bitmap as PNG, the canonical upload format for cropped glyphs.
pub fn encode_png(image: &GrayImage) -> Result<Vec<u8>, MashqError> {
    let mut bytes = Vec::new();
    DynamicImage::ImageLuma8(image.clone())
        .write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
