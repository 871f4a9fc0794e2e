use crate::core::{
    MashqError,
    Point,
};

mod letters;


/// One drawing primitive of a letter's stroke template.
#[derive(Debug, Clone, PartialEq)]
pub enum Stroke {
    Line { from: Point, to: Point },
    Curve { from: Point, to: Point, control1: Point, control2: Point },
    Dot { at: Point },
}

/// The ordered set of primitives a learner traces for one letter.
#[derive(Debug, Clone)]
pub struct LetterTemplate {
    pub letter: String,
    pub strokes: Vec<Stroke>,
}

/// The four lessons, each a fixed ordered set of seven letters.
pub const LESSONS: [[&str; 7]; 4] = [
    ["ا", "ب", "ت", "ث", "ج", "ح", "خ"],
    ["د", "ذ", "ر", "ز", "س", "ش", "ص"],
    ["ض", "ط", "ظ", "ع", "غ", "ف", "ق"],
    ["ك", "ل", "م", "ن", "ه", "و", "ي"],
];

pub fn lesson_letters(lesson_index: usize) -> Result<&'static [&'static str], MashqError> {
    LESSONS
        .get(lesson_index)
        .map(|letters| letters.as_slice())
        .ok_or(MashqError::InvalidLesson(lesson_index))
}

/// Looks up the stroke template for `letter`, positioned against `center`,
/// the midpoint of the drawing surface's bounding box.
pub fn letter_template(letter: &str, center: Point) -> Result<LetterTemplate, MashqError> {
    letters::strokes_for(letter, center)
        .map(|strokes| LetterTemplate { letter: letter.to_string(), strokes })
        .ok_or_else(|| MashqError::UnknownLetter(letter.to_string()))
}

/// Audio file announcing the letter's sound. Playback is the caller's
/// concern; this is pure lookup data.
pub fn letter_sound(letter: &str) -> Option<&'static str> {
    let file = match letter {
        "ا" => "Alif.wav",
        "ب" => "Ba.wav",
        "ت" => "Ta.wav",
        "ث" => "Sa.wav",
        "ج" => "Jeem.wav",
        "ح" => "Hha.wav",
        "خ" => "Kha.wav",
        "د" => "Dal.wav",
        "ذ" => "Taj Zhal.wav",
        "ر" => "Raa.wav",
        "ز" => "Taj Zaa.wav",
        "س" => "Seen.wav",
        "ش" => "Sheen.wav",
        "ص" => "Saud.wav",
        "ض" => "Duad.wav",
        "ط" => "Taj Tua.wav",
        "ظ" => "Taj Zua.wav",
        "ع" => "Aain.wav",
        "غ" => "Ghain.wav",
        "ف" => "Faa.wav",
        "ق" => "Qauf.wav",
        "ك" => "Kaif.wav",
        "ل" => "Laam.wav",
        "م" => "Meem.wav",
        "ن" => "Noon.wav",
        "ه" => "Haa.wav",
        "و" => "Taj wao.wav",
        "ي" => "Taj Yaa.wav",
        _ => return None,
    };
    Some(file)
}

/// Flattens each primitive into a traced polyline: lines and curves are
/// sampled at `steps` points, dots become a small pen circle. The output is
/// what a faithful tracing of the template looks like as touch input.
pub fn trace_points(template: &LetterTemplate, steps: usize) -> Vec<Vec<Point>> {
    let steps = steps.max(2);

    template
        .strokes
        .iter()
        .map(|stroke| match *stroke {
            Stroke::Line { from, to } => (0..steps)
                .map(|i| {
                    let t = i as f64 / (steps - 1) as f64;
                    Point::new(from.x + (to.x - from.x) * t, from.y + (to.y - from.y) * t)
                })
                .collect(),
            Stroke::Curve { from, to, control1, control2 } => {
                (0..steps).map(|i| cubic_at(from, control1, control2, to, i as f64 / (steps - 1) as f64)).collect()
            }
            Stroke::Dot { at } => {
                // Pen circle matching the drawn dot radius.
                let radius = 6.0;
                (0..=8)
                    .map(|i| {
                        let angle = i as f64 / 8.0 * std::f64::consts::TAU;
                        Point::new(at.x + radius * angle.cos(), at.y + radius * angle.sin())
                    })
                    .collect()
            }
        })
        .collect()
}

/// Cubic Bezier position via polynomial coefficients.
fn cubic_at(p0: Point, c1: Point, c2: Point, p1: Point, t: f64) -> Point {
    let cx = 3.0 * (c1.x - p0.x);
    let bx = 3.0 * (c2.x - c1.x) - cx;
    let ax = p1.x - p0.x - bx - cx;

    let cy = 3.0 * (c1.y - p0.y);
    let by = 3.0 * (c2.y - c1.y) - cy;
    let ay = p1.y - p0.y - by - cy;

    Point::new(
        ((ax * t + bx) * t + cx) * t + p0.x,
        ((ay * t + by) * t + cy) * t + p0.y,
    )
}
