use iced::Point;

use crate::sim::units::{Float, Vector, AU, KM};

// 1 AU = 200 pixels
pub(crate) const SCALE: Float = 200. / AU;

/// Maps a position in meters onto the canvas, with the origin at `center`.
pub(crate) fn project(position: &Vector, center: Point) -> Point {
    Point::new(
        (position[0] * SCALE) as f32 + center.x,
        (position[1] * SCALE) as f32 + center.y,
    )
}

/// Kilometers with one decimal, `.` between thousands and `,` before the decimal.
pub(crate) fn format_distance_km(meters: Float) -> String {
    let tenths = (meters / KM * 10.).round() as i64;
    let sign = if tenths < 0 { "-" } else { "" };
    let tenths = tenths.unsigned_abs();
    let whole = (tenths / 10).to_string();

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push('.');
        }
        grouped.push(digit);
    }
    format!("{}{},{}km", sign, grouped, tenths % 10)
}
