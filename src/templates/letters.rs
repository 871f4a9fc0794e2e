use super::Stroke;
use crate::core::Point;

fn line(x1: f64, y1: f64, x2: f64, y2: f64) -> Stroke {
    Stroke::Line { from: Point::new(x1, y1), to: Point::new(x2, y2) }
}

fn curve(x1: f64, y1: f64, x2: f64, y2: f64, cx1: f64, cy1: f64, cx2: f64, cy2: f64) -> Stroke {
    Stroke::Curve {
        from: Point::new(x1, y1),
        to: Point::new(x2, y2),
        control1: Point::new(cx1, cy1),
        control2: Point::new(cx2, cy2),
    }
}

fn dot(x: f64, y: f64) -> Stroke {
    Stroke::Dot { at: Point::new(x, y) }
}

/// Stroke templates for all 28 letters. Coordinates are hand-authored in the
/// logical space of the drawing surface; a handful of letters are positioned
/// relative to `center`, the midpoint of the bounding box.
pub(super) fn strokes_for(letter: &str, center: Point) -> Option<Vec<Stroke>> {
    let strokes = match letter {
        // Lesson 1
        "ا" => {
            let offset = -20.0;
            vec![line(center.x, center.y + offset - 100.0, center.x, center.y + offset + 100.0)]
        }
        "ب" => vec![
            curve(100.0, 360.0, 300.0, 360.0, 50.0, 456.0, 350.0, 456.0),
            dot(200.0, 480.0),
        ],
        "ت" => vec![
            curve(100.0, 380.0, 300.0, 380.0, 50.0, 476.0, 350.0, 476.0),
            dot(180.0, 350.0),
            dot(220.0, 350.0),
        ],
        "ث" => vec![
            curve(100.0, 380.0, 300.0, 380.0, 50.0, 476.0, 350.0, 476.0),
            dot(180.0, 355.0),
            dot(220.0, 355.0),
            dot(200.0, 335.0),
        ],
        "ج" => vec![
            curve(139.0, 348.0, 254.0, 341.0, 193.0, 289.0, 192.0, 378.0),
            curve(254.0, 341.0, 254.0, 471.0, 117.0, 365.0, 117.0, 527.0),
            dot(208.0, 428.0),
        ],
        "ح" => vec![
            curve(139.0, 348.0, 254.0, 341.0, 193.0, 289.0, 192.0, 378.0),
            curve(254.0, 341.0, 254.0, 471.0, 117.0, 365.0, 117.0, 527.0),
        ],
        "خ" => vec![
            curve(139.0, 348.0, 254.0, 341.0, 193.0, 289.0, 192.0, 378.0),
            curve(254.0, 341.0, 254.0, 471.0, 117.0, 365.0, 117.0, 527.0),
            dot(200.0, 300.0),
        ],

        // Lesson 2
        "د" => vec![curve(130.0, 490.0, 240.0, 390.0, 120.0, 550.0, 360.0, 535.0)],
        "ذ" => vec![
            curve(130.0, 490.0, 240.0, 390.0, 120.0, 550.0, 360.0, 535.0),
            dot(240.0, 360.0),
        ],
        "ر" => vec![curve(150.0, 500.0, 240.0, 390.0, 150.0, 510.0, 300.0, 535.0)],
        "ز" => vec![
            curve(150.0, 500.0, 240.0, 390.0, 150.0, 510.0, 300.0, 535.0),
            dot(235.0, 360.0),
        ],
        "س" => vec![
            curve(125.8, 415.9, 190.6, 415.9, 44.8, 545.5, 271.6, 545.5),
            curve(198.9, 427.95, 254.1, 417.95, 198.4, 482.75, 270.8, 482.75),
            curve(254.1, 417.95, 295.3, 417.95, 237.4, 482.75, 335.8, 482.75),
        ],
        "ش" => vec![
            curve(125.8, 415.9, 190.6, 415.9, 44.8, 545.5, 271.6, 545.5),
            curve(198.9, 427.95, 254.1, 417.95, 198.4, 482.75, 270.8, 482.75),
            curve(254.1, 417.95, 295.3, 417.95, 237.4, 482.75, 335.8, 482.75),
            dot(275.0, 400.0),
            dot(220.0, 400.0),
            dot(247.5, 370.0),
        ],
        "ص" | "ض" => {
            let ox = center.x - 337.0;
            let oy = center.y - 201.0;
            let mut strokes = vec![
                curve(
                    344.0 + ox, 195.0 + oy, 344.0 + ox, 195.0 + oy,
                    409.0 + ox, 110.0 + oy, 491.0 + ox, 219.0 + oy,
                ),
                curve(
                    343.0 + ox, 177.0 + oy, 248.0 + ox, 194.0 + oy,
                    358.0 + ox, 272.0 + oy, 213.0 + ox, 259.0 + oy,
                ),
            ];
            if letter == "ض" {
                strokes.push(dot(385.0 + ox, 135.0 + oy));
            }
            strokes
        }

        // Lesson 3
        "ط" | "ظ" => {
            // Scaled 1.5x around the template's own center, then shifted to
            // sit inside the bounding box.
            let scale = 1.5;
            let (origin_x, origin_y) = (284.0, 210.0);
            let ox = center.x - origin_x - 30.0;
            let oy = center.y - origin_y + 40.0;
            let sp = |x: f64, y: f64| {
                Point::new(
                    (x - origin_x) * scale + origin_x + ox,
                    (y - origin_y) * scale + origin_y + oy,
                )
            };

            let mut strokes = vec![
                Stroke::Curve {
                    from: sp(284.0, 210.0),
                    to: sp(284.0, 210.0),
                    control1: sp(332.0, 133.0),
                    control2: sp(437.0, 239.0),
                },
                Stroke::Line { from: sp(284.0, 210.0), to: sp(267.0, 210.0) },
                Stroke::Line { from: sp(284.0, 210.0), to: sp(284.0, 110.0) },
            ];
            if letter == "ظ" {
                strokes.push(Stroke::Dot { at: sp(328.0, 156.0) });
            }
            strokes
        }
        "ع" | "غ" => {
            let ox = center.x - 337.0;
            let oy = center.y - 267.0;
            let mut strokes = vec![
                curve(
                    357.0 + ox, 197.0 + oy, 357.0 + ox, 234.0 + oy,
                    303.0 + ox, 121.0 + oy, 268.0 + ox, 254.0 + oy,
                ),
                curve(
                    357.0 + ox, 234.0 + oy, 396.0 + ox, 360.0 + oy,
                    259.0 + ox, 243.0 + oy, 256.0 + ox, 401.0 + oy,
                ),
            ];
            if letter == "غ" {
                strokes.push(dot(326.0 + ox, 145.0 + oy));
            }
            strokes
        }
        "ف" => vec![
            curve(240.0, 400.0, 300.0, 460.0, 170.0, 400.0, 170.0, 550.0),
            curve(150.0, 540.0, 240.0, 400.0, 360.0, 600.0, 310.0, 395.0),
            curve(150.0, 540.0, 140.0, 460.0, 110.0, 520.0, 140.0, 460.0),
            dot(240.0, 370.0),
        ],
        "ق" => vec![
            curve(240.0, 380.0, 300.0, 440.0, 170.0, 380.0, 170.0, 530.0),
            curve(145.0, 520.0, 240.0, 380.0, 370.0, 580.0, 310.0, 375.0),
            curve(145.0, 520.0, 140.0, 440.0, 105.0, 500.0, 140.0, 440.0),
            dot(220.0, 350.0),
            dot(260.0, 350.0),
        ],

        // Lesson 4
        "ك" => vec![
            curve(150.0, 450.0, 250.0, 480.0, 90.0, 530.0, 260.0, 540.0),
            line(250.0, 370.0, 250.0, 480.0),
            curve(215.1, 438.75, 202.5, 454.5, 191.25, 432.75, 175.5, 452.0),
            curve(185.5, 470.25, 198.1, 454.5, 209.35, 479.25, 225.1, 459.0),
        ],
        "ل" => vec![
            curve(170.0, 450.0, 250.0, 460.0, 120.0, 550.0, 265.0, 560.0),
            line(250.0, 340.0, 250.0, 460.0),
        ],
        "م" => vec![
            curve(240.0, 430.0, 190.0, 380.0, 320.0, 430.0, 230.0, 290.0),
            line(180.0, 430.0, 240.0, 430.0),
            line(180.0, 430.0, 180.0, 550.0),
        ],
        "ن" => vec![
            curve(160.0, 390.0, 240.0, 390.0, 60.0, 550.0, 340.0, 550.0),
            dot(200.0, 360.0),
        ],
        "ه" => vec![curve(197.0, 370.0, 200.0, 370.0, 60.0, 530.0, 340.0, 530.0)],
        "و" => vec![
            curve(230.0, 350.0, 280.0, 420.0, 160.0, 350.0, 160.0, 500.0),
            curve(130.0, 510.0, 230.0, 350.0, 320.0, 530.0, 300.0, 345.0),
        ],
        "ي" => vec![
            curve(290.0, 350.0, 250.0, 420.0, 210.0, 310.0, 130.0, 400.0),
            curve(130.0, 420.0, 250.0, 420.0, 60.0, 560.0, 400.0, 475.0),
            dot(190.0, 520.0),
            dot(230.0, 520.0),
        ],

        _ => return None,
    };

    Some(strokes)
}
