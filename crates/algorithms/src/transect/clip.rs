//! Boundary-exact transect clipping
//!
//! Trims a raw transect so it spans boundary-to-boundary through the polygon
//! interior. The primary path intersects the segment with the exterior ring
//! and connects the two extreme crossings; when the ring yields fewer than
//! two distinct points, the segment is clipped against the filled interior
//! and the longest resulting piece wins.
//!
//! Connecting only the extreme crossings assumes the segment crosses the
//! boundary exactly twice. A concave footprint can be crossed 4+ times, in
//! which case the result may leave and re-enter the polygon; callers needing
//! strict containment should treat these widths as upper bounds.

use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{BooleanOps, Coord, Euclidean, Length, Line, LineString, MultiLineString, Polygon};

/// Two boundary points closer than this (per axis) are treated as the same
/// crossing.
const POINT_TOLERANCE: f64 = 1e-9;

/// How the raw segment meets the exterior ring.
enum BoundaryContact {
    /// The segment never touches the ring curve.
    None,
    /// A single distinct touch point (tangency or endpoint contact).
    Single,
    /// Two or more distinct crossings.
    Crossings(Vec<Coord<f64>>),
}

/// Clip a raw transect to a polygon.
///
/// Returns the boundary-to-boundary span through the interior, or `None`
/// when no usable span exists (segment misses the polygon, or every
/// candidate piece is degenerate). A returned line always has positive
/// length. Only the exterior ring participates in boundary matching; holes
/// are not specially handled.
pub fn clip_to_polygon(raw: &LineString<f64>, polygon: &Polygon<f64>) -> Option<LineString<f64>> {
    let [start, end] = [*raw.0.first()?, *raw.0.last()?];
    let segment = Line::new(start, end);

    match boundary_contact(&segment, polygon.exterior()) {
        BoundaryContact::None | BoundaryContact::Single => longest_interior_piece(raw, polygon),
        BoundaryContact::Crossings(points) => {
            let (lo, hi) = extreme_crossings(&segment, &points);
            let span = LineString::new(vec![lo, hi]);
            if span.length::<Euclidean>() > 0.0 {
                Some(span)
            } else {
                None
            }
        }
    }
}

/// Intersect the segment with every ring edge and classify the contact.
///
/// `line_intersection` reports each edge as a tagged variant: disjoint, a
/// single point, or a collinear overlap. Overlaps contribute their endpoints,
/// so a segment running along the boundary is handled as a point set.
fn boundary_contact(segment: &Line<f64>, ring: &LineString<f64>) -> BoundaryContact {
    let mut points: Vec<Coord<f64>> = Vec::new();
    for edge in ring.lines() {
        match line_intersection(*segment, edge) {
            None => {}
            Some(LineIntersection::SinglePoint { intersection, .. }) => {
                push_distinct(&mut points, intersection);
            }
            Some(LineIntersection::Collinear { intersection }) => {
                push_distinct(&mut points, intersection.start);
                push_distinct(&mut points, intersection.end);
            }
        }
    }

    match points.len() {
        0 => BoundaryContact::None,
        1 => BoundaryContact::Single,
        _ => BoundaryContact::Crossings(points),
    }
}

fn push_distinct(points: &mut Vec<Coord<f64>>, candidate: Coord<f64>) {
    let duplicate = points.iter().any(|p| {
        (p.x - candidate.x).abs() <= POINT_TOLERANCE && (p.y - candidate.y).abs() <= POINT_TOLERANCE
    });
    if !duplicate {
        points.push(candidate);
    }
}

/// The two crossings with minimum and maximum parametric position along the
/// segment. Intermediate crossings (concave footprints) are discarded.
fn extreme_crossings(segment: &Line<f64>, points: &[Coord<f64>]) -> (Coord<f64>, Coord<f64>) {
    let mut lo = (f64::INFINITY, points[0]);
    let mut hi = (f64::NEG_INFINITY, points[0]);
    for &p in points {
        let t = parameter_along(segment, p);
        if t < lo.0 {
            lo = (t, p);
        }
        if t > hi.0 {
            hi = (t, p);
        }
    }
    (lo.1, hi.1)
}

/// Parametric position of a point projected onto the segment's carrier line
/// (0 at the start, 1 at the end).
fn parameter_along(segment: &Line<f64>, point: Coord<f64>) -> f64 {
    let d = segment.delta();
    let len_sq = d.x * d.x + d.y * d.y;
    if len_sq <= 0.0 {
        return 0.0;
    }
    ((point.x - segment.start.x) * d.x + (point.y - segment.start.y) * d.y) / len_sq
}

/// Clip the segment against the filled interior and keep the single longest
/// connected piece. Ties keep the first piece encountered; point-like and
/// zero-length pieces are rejected.
fn longest_interior_piece(raw: &LineString<f64>, polygon: &Polygon<f64>) -> Option<LineString<f64>> {
    let clipped = polygon.clip(&MultiLineString::new(vec![raw.clone()]), false);

    let mut best: Option<(f64, LineString<f64>)> = None;
    for piece in clipped.0 {
        if piece.0.len() < 2 {
            continue;
        }
        let len = piece.length::<Euclidean>();
        if len <= 0.0 {
            continue;
        }
        match &best {
            Some((best_len, _)) if len <= *best_len => {}
            _ => best = Some((len, piece)),
        }
    }
    best.map(|(_, piece)| piece)
}
