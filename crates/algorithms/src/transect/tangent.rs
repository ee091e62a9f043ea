//! Local tangent estimation
//!
//! The tangent at a station is estimated from two probe points a small fixed
//! offset either side of it. On a 2-point centerline this is exact; on a
//! polyline it smooths over vertices within the probe window.

use crate::vector::{arc_length, point_at};
use geo::{Coord, LineString};

/// Probe offset either side of the station, in CRS units.
const PROBE_OFFSET: f64 = 0.01;

/// Unit vector returned when no direction can be computed (zero-length line
/// or coincident probe points).
const FALLBACK: Coord<f64> = Coord { x: 1.0, y: 0.0 };

/// Unit tangent of the line at an arc-length station.
///
/// Out-of-range stations are clamped to `[0, length]`, so the tangent is
/// defined at both endpoints. Degenerate inputs get the fixed fallback
/// direction `(1, 0)` rather than an error.
pub fn tangent_at(line: &LineString<f64>, station: f64) -> Coord<f64> {
    let total = arc_length(line);
    if total <= 0.0 {
        return FALLBACK;
    }

    let s0 = (station - PROBE_OFFSET).clamp(0.0, total);
    let s1 = (station + PROBE_OFFSET).clamp(0.0, total);
    let (Some(p0), Some(p1)) = (point_at(line, s0), point_at(line, s1)) else {
        return FALLBACK;
    };

    let dx = p1.x() - p0.x();
    let dy = p1.y() - p0.y();
    let norm = (dx * dx + dy * dy).sqrt();
    if norm <= 0.0 {
        return FALLBACK;
    }
    Coord { x: dx / norm, y: dy / norm }
}
