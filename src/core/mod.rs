pub mod errors;
pub mod models;
pub mod tasks;

pub use errors::MashqError;
pub use models::{ DatasetId, Point, Rect, Sample };
