//! Batch transect generation over feature collections
//!
//! The per-polygon pipeline is pure, so a batch is a parallel map over the
//! input geometries with results flattened back in input order. Degenerate
//! polygons are skipped and counted; parameter errors abort the whole run
//! before any feature is touched.

use crate::maybe_rayon::*;
use crate::transect::{polygon_transects, PolygonTransects, TransectParams};
use crate::vector::length;
use geo::{Geometry, Polygon};
use tracing::{debug, warn};
use transgis_core::{Error, Feature, FeatureCollection, Result};

/// Output of a batch run
#[derive(Debug, Clone, Default)]
pub struct BatchOutput {
    /// One centerline feature per processed polygon part, tagged with
    /// `feature` (input index) and `part` (index within a multi-polygon)
    pub centerlines: FeatureCollection,
    /// Clipped transect features tagged with `feature`, `part`, `sample`
    /// and `width`
    pub transects: FeatureCollection,
    /// Number of skipped inputs (degenerate polygons and non-areal
    /// geometries)
    pub skipped: usize,
}

/// Generate width transects for every polygon in a collection.
///
/// `Polygon` inputs are processed directly; `MultiPolygon` inputs are
/// processed per constituent part; any other geometry type is counted as
/// skipped. Per-part degenerate-geometry failures are isolated: the part is
/// skipped, counted, and logged, and the batch continues. With the
/// `parallel` feature enabled, features are processed across worker threads;
/// output ordering (and content) is identical to the sequential run.
///
/// # Errors
/// `Error::InvalidParameter` when `interval` or `reach` is invalid, raised
/// before any feature is processed.
pub fn run_batch(geometries: &[Geometry<f64>], params: &TransectParams) -> Result<BatchOutput> {
    params.validate()?;

    let outcomes: Vec<FeatureOutcome> = (0..geometries.len())
        .into_par_iter()
        .map(|idx| process_feature(idx, &geometries[idx], params))
        .collect();

    let mut output = BatchOutput::default();
    for outcome in outcomes {
        output.centerlines.extend(outcome.centerlines);
        output.transects.extend(outcome.transects);
        output.skipped += outcome.skipped;
    }
    Ok(output)
}

/// Per-input-feature result, flattened into the batch output in input order.
#[derive(Default)]
struct FeatureOutcome {
    centerlines: Vec<Feature>,
    transects: Vec<Feature>,
    skipped: usize,
}

fn process_feature(idx: usize, geometry: &Geometry<f64>, params: &TransectParams) -> FeatureOutcome {
    let mut outcome = FeatureOutcome::default();
    match geometry {
        Geometry::Polygon(polygon) => {
            process_part(idx, 0, polygon, params, &mut outcome);
        }
        Geometry::MultiPolygon(multi) => {
            for (part, polygon) in multi.0.iter().enumerate() {
                process_part(idx, part, polygon, params, &mut outcome);
            }
        }
        other => {
            debug!(feature = idx, kind = geometry_kind(other), "skipping unsupported geometry");
            outcome.skipped += 1;
        }
    }
    outcome
}

fn process_part(
    feature: usize,
    part: usize,
    polygon: &Polygon<f64>,
    params: &TransectParams,
    outcome: &mut FeatureOutcome,
) {
    let result = match polygon_transects(polygon, params) {
        Ok(result) => result,
        Err(Error::DegenerateGeometry { reason }) => {
            warn!(feature, part, %reason, "skipping degenerate polygon");
            outcome.skipped += 1;
            return;
        }
        // Parameters were validated before the batch started
        Err(e) => {
            warn!(feature, part, error = %e, "skipping polygon");
            outcome.skipped += 1;
            return;
        }
    };

    let PolygonTransects {
        centerline,
        transects,
    } = result;
    debug!(feature, part, transects = transects.len(), "processed polygon");

    outcome.centerlines.push(
        Feature::new(Geometry::LineString(centerline))
            .with_property("feature", feature)
            .with_property("part", part),
    );
    for t in transects {
        let geometry = Geometry::LineString(t.line);
        let width = length(&geometry);
        outcome.transects.push(
            Feature::new(geometry)
                .with_property("feature", feature)
                .with_property("part", part)
                .with_property("sample", t.sample)
                .with_property("width", width),
        );
    }
}

fn geometry_kind(geometry: &Geometry<f64>) -> &'static str {
    match geometry {
        Geometry::Point(_) => "Point",
        Geometry::Line(_) => "Line",
        Geometry::LineString(_) => "LineString",
        Geometry::Polygon(_) => "Polygon",
        Geometry::MultiPoint(_) => "MultiPoint",
        Geometry::MultiLineString(_) => "MultiLineString",
        Geometry::MultiPolygon(_) => "MultiPolygon",
        Geometry::GeometryCollection(_) => "GeometryCollection",
        Geometry::Rect(_) => "Rect",
        Geometry::Triangle(_) => "Triangle",
    }
}
