//! Arc-length sampling along a centerline

use crate::vector::{arc_length, point_at};
use geo::{LineString, Point};
use transgis_core::{Error, Result};

/// Tolerance absorbing floating-point drift in the station accumulator, so
/// the terminal sample at station ~= length is not dropped.
pub const SAMPLE_EPSILON: f64 = 1e-9;

/// Sample points along a line at a fixed station interval.
///
/// Stations run 0, interval, 2*interval, ... up to the line length (plus
/// [`SAMPLE_EPSILON`]). The start point is always included; a sample lands
/// exactly on the end only when the length is a near-exact multiple of the
/// interval. A zero-length line yields no samples.
///
/// # Errors
/// `Error::InvalidParameter` when `interval` is not a positive, finite
/// distance.
pub fn sample_along(line: &LineString<f64>, interval: f64) -> Result<Vec<Point<f64>>> {
    if !interval.is_finite() || interval <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "interval",
            value: interval.to_string(),
            reason: "sampling interval must be a positive, finite distance".into(),
        });
    }

    let total = arc_length(line);
    if total <= 0.0 {
        return Ok(Vec::new());
    }

    let mut points = Vec::with_capacity((total / interval) as usize + 1);
    let mut station = 0.0;
    while station <= total + SAMPLE_EPSILON {
        if let Some(p) = point_at(line, station) {
            points.push(p);
        }
        station += interval;
    }
    Ok(points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn baseline(length: f64) -> LineString<f64> {
        LineString::from(vec![(0.0, 0.0), (length, 0.0)])
    }

    #[test]
    fn test_sample_exact_multiple() {
        let pts = sample_along(&baseline(100.0), 20.0).unwrap();
        assert_eq!(pts.len(), 6);
        for (i, p) in pts.iter().enumerate() {
            assert_relative_eq!(p.x(), 20.0 * i as f64, epsilon = 1e-9);
            assert_relative_eq!(p.y(), 0.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sample_non_multiple_stops_short() {
        let pts = sample_along(&baseline(100.0), 30.0).unwrap();
        // Stations 0, 30, 60, 90; no terminal sample at 100
        assert_eq!(pts.len(), 4);
        assert_relative_eq!(pts.last().unwrap().x(), 90.0, epsilon = 1e-9);
    }

    #[test]
    fn test_sample_spacing_is_uniform() {
        let line = LineString::from(vec![(0.0, 0.0), (30.0, 40.0), (60.0, 0.0)]);
        let interval = 7.0;
        let pts = sample_along(&line, interval).unwrap();
        assert!(pts.len() >= 2);

        for pair in pts.windows(2) {
            let dx = pair[1].x() - pair[0].x();
            let dy = pair[1].y() - pair[0].y();
            // Consecutive samples on a straight stretch are exactly one
            // interval apart; across the elbow the chord is shorter.
            let chord = (dx * dx + dy * dy).sqrt();
            assert!(chord <= interval + 1e-9);
        }
    }

    #[test]
    fn test_sample_interval_longer_than_line() {
        let pts = sample_along(&baseline(10.0), 50.0).unwrap();
        assert_eq!(pts.len(), 1);
        assert_relative_eq!(pts[0].x(), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_zero_length_line() {
        let line = LineString::from(vec![(5.0, 5.0), (5.0, 5.0)]);
        let pts = sample_along(&line, 10.0).unwrap();
        assert!(pts.is_empty());
    }

    #[test]
    fn test_sample_rejects_bad_interval() {
        let line = baseline(100.0);
        for bad in [0.0, -5.0, f64::NAN, f64::INFINITY] {
            let err = sample_along(&line, bad).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "interval", .. }));
        }
    }
}
