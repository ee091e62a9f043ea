//! Raw transect construction

use geo::{Coord, LineString, Point};
use transgis_core::{Error, Result};

/// Build the raw (unclipped) transect at a sample point.
///
/// The unit tangent is rotated 90 degrees to get the normal, and the segment
/// runs from `point - normal*reach` to `point + normal*reach`: centered on
/// the sample, perpendicular to the local centerline direction, total length
/// `2*reach`. The segment is not yet guaranteed to touch the polygon at all
/// (possible near a narrow or skewed extremity).
///
/// # Errors
/// `Error::InvalidParameter` when `reach` is not a positive, finite distance.
pub fn perpendicular_transect(
    point: &Point<f64>,
    tangent: Coord<f64>,
    reach: f64,
) -> Result<LineString<f64>> {
    if !reach.is_finite() || reach <= 0.0 {
        return Err(Error::InvalidParameter {
            name: "reach",
            value: reach.to_string(),
            reason: "transect reach must be a positive, finite distance".into(),
        });
    }

    let normal = Coord { x: -tangent.y, y: tangent.x };
    let a = Coord {
        x: point.x() - normal.x * reach,
        y: point.y() - normal.y * reach,
    };
    let b = Coord {
        x: point.x() + normal.x * reach,
        y: point.y() + normal.y * reach,
    };
    Ok(LineString::new(vec![a, b]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::arc_length;
    use approx::assert_relative_eq;

    #[test]
    fn test_transect_length_and_center() {
        let p = Point::new(10.0, 5.0);
        let tangent = Coord { x: 1.0, y: 0.0 };
        let line = perpendicular_transect(&p, tangent, 50.0).unwrap();

        assert_relative_eq!(arc_length(&line), 100.0, epsilon = 1e-9);
        let mid_x = (line.0[0].x + line.0[1].x) / 2.0;
        let mid_y = (line.0[0].y + line.0[1].y) / 2.0;
        assert_relative_eq!(mid_x, 10.0, epsilon = 1e-12);
        assert_relative_eq!(mid_y, 5.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transect_perpendicular_to_tangent() {
        let p = Point::new(0.0, 0.0);
        let inv_sqrt2 = std::f64::consts::FRAC_1_SQRT_2;
        let tangent = Coord { x: inv_sqrt2, y: inv_sqrt2 };
        let line = perpendicular_transect(&p, tangent, 10.0).unwrap();

        let dx = line.0[1].x - line.0[0].x;
        let dy = line.0[1].y - line.0[0].y;
        let dot = dx * tangent.x + dy * tangent.y;
        assert_relative_eq!(dot, 0.0, epsilon = 1e-9);
    }

    #[test]
    fn test_transect_horizontal_tangent_gives_vertical_segment() {
        let p = Point::new(40.0, 10.0);
        let line = perpendicular_transect(&p, Coord { x: 1.0, y: 0.0 }, 50.0).unwrap();

        assert_relative_eq!(line.0[0].x, 40.0, epsilon = 1e-12);
        assert_relative_eq!(line.0[1].x, 40.0, epsilon = 1e-12);
        assert_relative_eq!(line.0[0].y, -40.0, epsilon = 1e-12);
        assert_relative_eq!(line.0[1].y, 60.0, epsilon = 1e-12);
    }

    #[test]
    fn test_transect_rejects_bad_reach() {
        let p = Point::new(0.0, 0.0);
        let tangent = Coord { x: 1.0, y: 0.0 };
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            let err = perpendicular_transect(&p, tangent, bad).unwrap_err();
            assert!(matches!(err, Error::InvalidParameter { name: "reach", .. }));
        }
    }
}
