//! Geometric measurements: area, length, perimeter
//!
//! All results are in CRS units (or squared CRS units for areas); inputs are
//! assumed to be in a projected, linear-unit CRS.

use geo::{Area as GeoArea, Euclidean, Geometry, Length};

/// Calculate the area of a geometry.
///
/// Returns unsigned area; non-areal geometries measure 0.
pub fn area(geom: &Geometry<f64>) -> f64 {
    match geom {
        Geometry::Polygon(p) => p.unsigned_area(),
        Geometry::MultiPolygon(mp) => mp.unsigned_area(),
        Geometry::Rect(r) => r.unsigned_area(),
        _ => 0.0,
    }
}

/// Calculate the length of a linear geometry.
///
/// This is the width estimate when applied to a clipped transect.
/// Non-linear geometries measure 0.
pub fn length(geom: &Geometry<f64>) -> f64 {
    match geom {
        Geometry::LineString(ls) => ls.length::<Euclidean>(),
        Geometry::MultiLineString(mls) => {
            mls.0.iter().map(|ls| ls.length::<Euclidean>()).sum()
        }
        Geometry::Line(l) => {
            let dx = l.end.x - l.start.x;
            let dy = l.end.y - l.start.y;
            (dx * dx + dy * dy).sqrt()
        }
        _ => 0.0,
    }
}

/// Calculate the perimeter of a polygon geometry.
///
/// Returns the total length of exterior and interior rings.
pub fn perimeter(geom: &Geometry<f64>) -> f64 {
    match geom {
        Geometry::Polygon(p) => {
            let ext = p.exterior().length::<Euclidean>();
            let int: f64 = p.interiors().iter().map(|r| r.length::<Euclidean>()).sum();
            ext + int
        }
        Geometry::MultiPolygon(mp) => {
            mp.0.iter()
                .map(|p| {
                    let ext = p.exterior().length::<Euclidean>();
                    let int: f64 = p.interiors().iter().map(|r| r.length::<Euclidean>()).sum();
                    ext + int
                })
                .sum()
        }
        _ => 0.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use geo::{Line, LineString, Polygon, Coord};

    fn corridor() -> Polygon<f64> {
        Polygon::new(
            LineString::from(vec![
                (0.0, 0.0), (100.0, 0.0), (100.0, 20.0), (0.0, 20.0), (0.0, 0.0),
            ]),
            vec![],
        )
    }

    #[test]
    fn test_area_corridor() {
        let a = area(&Geometry::Polygon(corridor()));
        assert!((a - 2000.0).abs() < 1e-10);
    }

    #[test]
    fn test_area_non_polygon() {
        let line = Geometry::LineString(LineString::from(vec![(0.0, 0.0), (10.0, 10.0)]));
        assert_eq!(area(&line), 0.0);
    }

    #[test]
    fn test_length_transect() {
        let transect = Geometry::LineString(LineString::from(vec![
            (50.0, 0.0), (50.0, 20.0),
        ]));
        assert!((length(&transect) - 20.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_segment() {
        let line = Geometry::Line(Line::new(
            Coord { x: 0.0, y: 0.0 },
            Coord { x: 6.0, y: 8.0 },
        ));
        assert!((length(&line) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn test_length_non_linear() {
        assert_eq!(length(&Geometry::Polygon(corridor())), 0.0);
    }

    #[test]
    fn test_perimeter_corridor() {
        let p = perimeter(&Geometry::Polygon(corridor()));
        assert!((p - 240.0).abs() < 1e-10);
    }
}
