pub mod capture;
pub mod extractor;

#[cfg(test)]
mod feature_tests;

pub use capture::{
    crop_to_canonical,
    encode_png,
    CANONICAL_SIZE,
    CROP_MARGIN,
};
pub use extractor::{
    extract_features,
    FEATURE_LEN,
};
