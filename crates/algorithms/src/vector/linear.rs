//! Linear referencing along line strings
//!
//! Stations are arc-length distances from the start of a line, in CRS units.
//! `geo`'s interpolation and projection traits work in fractions of total
//! length; these wrappers expose them in station space, which is what the
//! sampling and tangent code works in.

use geo::{Euclidean, Length, LineInterpolatePoint, LineLocatePoint, LineString, Point};

/// Arc length of a line string in CRS units.
pub fn arc_length(line: &LineString<f64>) -> f64 {
    line.length::<Euclidean>()
}

/// Point at an arc-length station along the line.
///
/// Stations outside `[0, length]` are clamped to the endpoints. Returns
/// `None` for an empty or zero-length line.
pub fn point_at(line: &LineString<f64>, station: f64) -> Option<Point<f64>> {
    let total = arc_length(line);
    if total <= 0.0 {
        return None;
    }
    let fraction = (station / total).clamp(0.0, 1.0);
    line.line_interpolate_point(fraction)
}

/// Arc-length station of the point on the line nearest to `point`.
///
/// Returns `None` for an empty or zero-length line.
pub fn station_of(line: &LineString<f64>, point: &Point<f64>) -> Option<f64> {
    let total = arc_length(line);
    if total <= 0.0 {
        return None;
    }
    line.line_locate_point(point).map(|fraction| fraction * total)
}
