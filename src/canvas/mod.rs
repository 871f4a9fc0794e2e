use image::GrayImage;

use crate::core::{
    Point,
    Rect,
};


/// Stroke width of the user's ink, in logical points.
pub const STROKE_WIDTH: f64 = 19.0;

/// Side length of the square bounding box the user draws within.
pub const BOX_SIZE: f64 = 300.0;

const INK: u8 = 255;

/// Headless raster drawing surface standing in for the rendered screen:
/// black background, white ink, a centered bounding box that rejects touches
/// outside it. Coordinates are logical; the backing raster is `scale` times
/// larger, mirroring device pixel density.
pub struct TraceCanvas {
    image: GrayImage,
    frame: Rect,                    // Logical bounds of the whole surface
    bounds: Rect,                   // The centered bounding box
    scale: f64,                     // Logical point -> raw pixel factor
    touch_coordinates: Vec<Point>,  // Accepted touch trail for the current glyph
    pen: Option<Point>,             // Last pen position, None when lifted
}

impl TraceCanvas {
    pub fn new(width: f64, height: f64, scale: f64) -> Self {
        let frame = Rect::new(0.0, 0.0, width, height);
        let center = frame.center();
        let bounds = Rect::new(
            center.x - BOX_SIZE / 2.0,
            center.y - BOX_SIZE / 2.0,
            BOX_SIZE,
            BOX_SIZE,
        );

        let image =
            GrayImage::new((width * scale).round() as u32, (height * scale).round() as u32);

        Self { image, frame, bounds, scale, touch_coordinates: Vec::new(), pen: None }
    }

    pub fn frame(&self) -> Rect {
        self.frame
    }

    /// The crop region for submission.
    pub fn bounding_box(&self) -> Rect {
        self.bounds
    }

    pub fn scale(&self) -> f64 {
        self.scale
    }

    pub fn touch_coordinates(&self) -> &[Point] {
        &self.touch_coordinates
    }

    /// Pen down. Nothing is inked until the pen moves.
    pub fn begin_stroke(&mut self, point: Point) {
        self.pen = Some(point);
    }

    /// Pen drag. Points outside the bounding box are rejected, matching the
    /// touch filter of the on-screen surface.
    pub fn move_to(&mut self, point: Point) {
        if !self.bounds.contains(point) {
            println!("Touch point is outside the bounding box: ({}, {})", point.x, point.y);
            return;
        }

        if let Some(pen) = self.pen {
            self.ink_segment(pen, point);
        }

        self.pen = Some(point);
        self.touch_coordinates.push(point);
    }

    /// Pen up, ending the current connected stroke.
    pub fn end_stroke(&mut self) {
        self.pen = None;
    }

    /// Clears the ink and the touch trail; the bounding box stays put.
    pub fn clear(&mut self) {
        for pixel in self.image.pixels_mut() {
            pixel.0[0] = 0;
        }
        self.touch_coordinates.clear();
        self.pen = None;
    }

    /// Snapshot of the rendered surface, black-backed like the screen grab
    /// the original pipeline captured.
    pub fn capture(&self) -> GrayImage {
        self.image.clone()
    }

    fn ink_segment(&mut self, from: Point, to: Point) {
        let length = ((to.x - from.x).powi(2) + (to.y - from.y).powi(2)).sqrt();
        let steps = (length * self.scale * 2.0).ceil().max(1.0) as usize;

        for i in 0..=steps {
            let t = i as f64 / steps as f64;
            let x = from.x + (to.x - from.x) * t;
            let y = from.y + (to.y - from.y) * t;
            self.stamp(Point::new(x, y));
        }
    }

    /// Stamps a filled disc of half the stroke width at a logical point.
    fn stamp(&mut self, at: Point) {
        let radius = STROKE_WIDTH / 2.0 * self.scale;
        let cx = at.x * self.scale;
        let cy = at.y * self.scale;

        let min_x = ((cx - radius).floor().max(0.0)) as u32;
        let min_y = ((cy - radius).floor().max(0.0)) as u32;
        let max_x = ((cx + radius).ceil() as u32).min(self.image.width().saturating_sub(1));
        let max_y = ((cy + radius).ceil() as u32).min(self.image.height().saturating_sub(1));

        for py in min_y..=max_y {
            for px in min_x..=max_x {
                let dx = px as f64 + 0.5 - cx;
                let dy = py as f64 + 0.5 - cy;
                if dx * dx + dy * dy <= radius * radius {
                    self.image.put_pixel(px, py, image::Luma([INK]));
                }
            }
        }
    }
}
