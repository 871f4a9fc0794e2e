use image::GrayImage;

use super::capture::CANONICAL_SIZE;
use crate::core::MashqError;

/// Length of every feature vector: one value per canonical-bitmap pixel.
pub const FEATURE_LEN: usize = (CANONICAL_SIZE * CANONICAL_SIZE) as usize;

/// Linearizes a canonical 32x32 grayscale bitmap into a 1024-element feature
/// vector in raster scan order (row-major, top-to-bottom, left-to-right).
///
/// Values are the raw byte intensities in [0, 255]. They are deliberately not
/// divided down to [0, 1]: the remote service's models were fit against raw
/// intensities, and changing the scale here would silently poison the dataset.
///
/// A bitmap of any other dimensions fails closed with `DimensionMismatch`;
/// this never emits a truncated or padded vector.
pub fn extract_features(image: &GrayImage) -> Result<Vec<f64>, MashqError> {
    let (width, height) = image.dimensions();

    if width != CANONICAL_SIZE || height != CANONICAL_SIZE {
        return Err(MashqError::DimensionMismatch { width, height, expected: CANONICAL_SIZE });
    }

    let features: Vec<f64> = image.as_raw().iter().map(|&byte| byte as f64).collect();

    debug_assert_eq!(features.len(), FEATURE_LEN);

    Ok(features)
}
