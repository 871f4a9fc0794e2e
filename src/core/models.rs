use serde::{
    Deserialize,
    Serialize,
};

/// Integer key grouping samples for one training run on the remote service.
pub type DatasetId = u32;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }
}

/// Axis-aligned rectangle in logical (pre-density-scale) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,      // Origin, top-left
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Rect { x, y, width, height }
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.x
            && point.x <= self.x + self.width
            && point.y >= self.y
            && point.y <= self.y + self.height
    }

    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Shrinks the rectangle by `margin` on every side.
    pub fn inset(&self, margin: f64) -> Rect {
        Rect {
            x: self.x + margin,
            y: self.y + margin,
            width: self.width - 2.0 * margin,
            height: self.height - 2.0 * margin,
        }
    }
}

/// One labeled feature vector derived from a single traced glyph.
/// Immutable once created; buffered in the session until uploaded.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Sample {
    pub features: Vec<f64>, // Raw grayscale intensities in [0, 255], row-major
    pub label: String,      // Single-letter target class
}

impl Sample {
    pub fn new(features: Vec<f64>, label: impl Into<String>) -> Self {
        Sample { features, label: label.into() }
    }
}
