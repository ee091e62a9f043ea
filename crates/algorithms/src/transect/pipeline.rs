//! Per-polygon transect pipeline

use crate::transect::{
    clip_to_polygon, extract_centerline, perpendicular_transect, sample_along, tangent_at,
};
use crate::vector::station_of;
use geo::{Euclidean, Length, LineString, MultiPolygon, Polygon};
use tracing::debug;
use transgis_core::{Algorithm, Error, Result};

/// Parameters for transect generation
#[derive(Debug, Clone, Copy)]
pub struct TransectParams {
    /// Station spacing along the centerline, in CRS units
    pub interval: f64,
    /// Half-length of the raw transect before clipping, in CRS units
    pub reach: f64,
}

impl Default for TransectParams {
    fn default() -> Self {
        // Roadbed defaults in feet: one station every 20 ft, raw transects
        // reaching 600 ft either side before trimming
        Self {
            interval: 20.0,
            reach: 600.0,
        }
    }
}

impl TransectParams {
    /// Check both parameters up front, before any geometry work.
    pub(crate) fn validate(&self) -> Result<()> {
        if !self.interval.is_finite() || self.interval <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "interval",
                value: self.interval.to_string(),
                reason: "sampling interval must be a positive, finite distance".into(),
            });
        }
        if !self.reach.is_finite() || self.reach <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "reach",
                value: self.reach.to_string(),
                reason: "transect reach must be a positive, finite distance".into(),
            });
        }
        Ok(())
    }
}

/// A clipped width transect
#[derive(Debug, Clone)]
pub struct Transect {
    /// The boundary-to-boundary segment
    pub line: LineString<f64>,
    /// Index of the centerline sample this transect was taken at
    pub sample: usize,
}

impl Transect {
    /// Width estimate at this sample: the clipped segment's length.
    pub fn width(&self) -> f64 {
        self.line.length::<Euclidean>()
    }
}

/// Output of the pipeline for one simple polygon
#[derive(Debug, Clone)]
pub struct PolygonTransects {
    /// The proxy centerline (2-point line)
    pub centerline: LineString<f64>,
    /// Clipped transects in sample order
    pub transects: Vec<Transect>,
}

/// Generate width transects for a single polygon.
///
/// Validates parameters, extracts the proxy centerline, samples stations at
/// `interval`, and for each sample builds a perpendicular segment of half
/// length `reach` and clips it to the polygon. Samples whose clip fails or
/// collapses to zero length are dropped; the rest are returned in sample
/// order. The whole computation is pure, so identical inputs produce
/// identical outputs.
///
/// # Errors
/// `Error::InvalidParameter` for non-positive `interval` or `reach` (checked
/// before any geometry work); `Error::DegenerateGeometry` when no centerline
/// can be derived for this polygon.
pub fn polygon_transects(
    polygon: &Polygon<f64>,
    params: &TransectParams,
) -> Result<PolygonTransects> {
    params.validate()?;

    let centerline = extract_centerline(polygon)?;
    let samples = sample_along(&centerline, params.interval)?;

    let mut transects = Vec::new();
    for (sample, point) in samples.iter().enumerate() {
        let Some(station) = station_of(&centerline, point) else {
            continue;
        };
        let tangent = tangent_at(&centerline, station);
        let raw = perpendicular_transect(point, tangent, params.reach)?;
        if let Some(line) = clip_to_polygon(&raw, polygon) {
            if line.length::<Euclidean>() > 0.0 {
                transects.push(Transect { line, sample });
            }
        }
    }

    Ok(PolygonTransects {
        centerline,
        transects,
    })
}

/// Generate transects for every part of a multi-polygon.
///
/// Each constituent polygon gets its own centerline and transect set.
/// Degenerate parts are skipped (logged at debug level) without aborting the
/// remaining parts; parameter errors abort immediately.
pub fn multi_polygon_transects(
    multi: &MultiPolygon<f64>,
    params: &TransectParams,
) -> Result<Vec<PolygonTransects>> {
    params.validate()?;

    let mut results = Vec::with_capacity(multi.0.len());
    for (part, polygon) in multi.0.iter().enumerate() {
        match polygon_transects(polygon, params) {
            Ok(result) => results.push(result),
            Err(Error::DegenerateGeometry { reason }) => {
                debug!(part, %reason, "skipping degenerate polygon part");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(results)
}

/// Width-transect generation as an [`Algorithm`]
#[derive(Debug, Clone, Default)]
pub struct TransectBuild;

impl Algorithm for TransectBuild {
    type Input = Polygon<f64>;
    type Output = PolygonTransects;
    type Params = TransectParams;
    type Error = Error;

    fn name(&self) -> &'static str {
        "Transects"
    }

    fn description(&self) -> &'static str {
        "Derive a proxy centerline and boundary-clipped perpendicular width transects for a polygon"
    }

    fn execute(&self, input: Self::Input, params: Self::Params) -> Result<Self::Output> {
        polygon_transects(&input, &params)
    }
}
