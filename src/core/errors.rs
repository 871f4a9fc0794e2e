use thiserror::Error;

#[derive(Error, Debug)]
pub enum MashqError {
    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Image error: {0}")]
    Image(Box<image::ImageError>),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),

    #[error("expected a {expected}x{expected} canonical bitmap, got {width}x{height}")]
    DimensionMismatch { width: u32, height: u32, expected: u32 },

    #[error(
        "crop region ({x}, {y}) {width}x{height} falls outside a {image_width}x{image_height} image"
    )]
    CropOutOfBounds {
        x: i64,
        y: i64,
        width: u32,
        height: u32,
        image_width: u32,
        image_height: u32,
    },

    #[error("upload failed: {0}")]
    UploadFailed(String),

    #[error("training failed: {0}")]
    TrainingFailed(String),

    #[error("no stroke template for letter: {0}")]
    UnknownLetter(String),

    #[error("no lesson with index {0}")]
    InvalidLesson(usize),

    #[error("MashqError: {0}")]
    Custom(String),
}

impl From<std::io::Error> for MashqError {
    fn from(error: std::io::Error) -> Self {
        MashqError::Io(Box::new(error))
    }
}

impl From<image::ImageError> for MashqError {
    fn from(error: image::ImageError) -> Self {
        MashqError::Image(Box::new(error))
    }
}

impl From<reqwest::Error> for MashqError {
    fn from(error: reqwest::Error) -> Self {
        MashqError::Reqwest(Box::new(error))
    }
}
