//! Proxy centerline extraction
//!
//! The centerline of an elongated footprint is approximated by the longest
//! edge of its oriented minimum-area bounding rectangle. For road and
//! sidewalk corridors this tracks the long axis well; it is a single straight
//! segment, so sinuous corridors are only coarsely approximated.

use geo::{Area, Coord, LineString, MinimumRotatedRect, Polygon};
use transgis_core::{Error, Result};

/// Extract the proxy centerline of a polygon.
///
/// Computes the oriented minimum bounding rectangle, takes its 4 corner
/// points, and returns the longest of the 4 edges as a 2-point line string.
/// Equal-length edges keep the first in ring order, so the result is
/// deterministic (near-square footprints get an arbitrary but stable axis).
///
/// # Errors
/// `Error::DegenerateGeometry` when the rectangle cannot be computed
/// (zero-area ring, non-finite coordinates) or has fewer than 4 distinct
/// corners.
pub fn extract_centerline(polygon: &Polygon<f64>) -> Result<LineString<f64>> {
    if polygon
        .exterior()
        .0
        .iter()
        .any(|c| !c.x.is_finite() || !c.y.is_finite())
    {
        return Err(Error::degenerate("non-finite coordinate in exterior ring"));
    }
    if polygon.unsigned_area() <= 0.0 {
        return Err(Error::degenerate("zero-area exterior ring"));
    }

    let rect = polygon
        .minimum_rotated_rect()
        .ok_or_else(|| Error::degenerate("oriented bounding rectangle could not be computed"))?;

    let mut corners: Vec<Coord<f64>> = rect.exterior().0.clone();
    if corners.len() > 1 && corners.first() == corners.last() {
        corners.pop();
    }
    corners.dedup();
    if corners.len() < 4 {
        return Err(Error::degenerate(format!(
            "bounding rectangle has {} distinct corners",
            corners.len()
        )));
    }

    let mut best_edge = (corners[0], corners[1]);
    let mut best_sq = 0.0_f64;
    for i in 0..corners.len() {
        let a = corners[i];
        let b = corners[(i + 1) % corners.len()];
        let sq = (b.x - a.x).powi(2) + (b.y - a.y).powi(2);
        if sq > best_sq {
            best_sq = sq;
            best_edge = (a, b);
        }
    }
    if best_sq <= 0.0 {
        return Err(Error::degenerate("bounding rectangle edges have zero length"));
    }

    Ok(LineString::new(vec![best_edge.0, best_edge.1]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::arc_length;
    use approx::assert_relative_eq;

    fn corridor_100x20() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (100.0, 0.0),
                (100.0, 20.0),
                (0.0, 20.0),
                (0.0, 0.0),
            ]),
            vec![],
        )
    }

    #[test]
    fn test_centerline_axis_aligned() {
        let line = extract_centerline(&corridor_100x20()).unwrap();
        assert_eq!(line.0.len(), 2);
        assert_relative_eq!(arc_length(&line), 100.0, epsilon = 1e-9);
    }

    #[test]
    fn test_centerline_rotated() {
        // 100x20 corridor rotated 30 degrees about the origin
        let (sin, cos) = 30.0_f64.to_radians().sin_cos();
        let rot = |x: f64, y: f64| (x * cos - y * sin, x * sin + y * cos);
        let ring: Vec<(f64, f64)> = [
            (0.0, 0.0),
            (100.0, 0.0),
            (100.0, 20.0),
            (0.0, 20.0),
            (0.0, 0.0),
        ]
        .iter()
        .map(|&(x, y)| rot(x, y))
        .collect();
        let poly = Polygon::new(LineString::from(ring), vec![]);

        let line = extract_centerline(&poly).unwrap();
        assert_relative_eq!(arc_length(&line), 100.0, epsilon = 1e-6);
    }

    #[test]
    fn test_centerline_matches_longest_rect_edge() {
        let poly = Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (40.0, 5.0),
                (80.0, 0.0),
                (80.0, 12.0),
                (0.0, 12.0),
                (0.0, 0.0),
            ]),
            vec![],
        );
        let line = extract_centerline(&poly).unwrap();

        let rect = poly.minimum_rotated_rect().unwrap();
        let longest = rect
            .exterior()
            .lines()
            .map(|l| {
                let d = l.delta();
                (d.x * d.x + d.y * d.y).sqrt()
            })
            .fold(0.0_f64, f64::max);
        assert_relative_eq!(arc_length(&line), longest, epsilon = 1e-9);
    }

    #[test]
    fn test_centerline_square_is_deterministic() {
        let square = Polygon::new(
            LineString::from(vec![
                (0.0, 0.0),
                (10.0, 0.0),
                (10.0, 10.0),
                (0.0, 10.0),
                (0.0, 0.0),
            ]),
            vec![],
        );
        let a = extract_centerline(&square).unwrap();
        let b = extract_centerline(&square).unwrap();
        assert_eq!(a.0, b.0);
        assert_relative_eq!(arc_length(&a), 10.0, epsilon = 1e-9);
    }

    #[test]
    fn test_centerline_collinear_ring_fails() {
        let flat = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (5.0, 0.0), (10.0, 0.0), (0.0, 0.0)]),
            vec![],
        );
        let err = extract_centerline(&flat).unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry { .. }));
    }

    #[test]
    fn test_centerline_non_finite_fails() {
        let poly = Polygon::new(
            LineString::from(vec![(0.0, 0.0), (f64::NAN, 0.0), (10.0, 10.0), (0.0, 0.0)]),
            vec![],
        );
        let err = extract_centerline(&poly).unwrap_err();
        assert!(matches!(err, Error::DegenerateGeometry { .. }));
    }
}
