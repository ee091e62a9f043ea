//! Width transects for elongated polygon footprints
//!
//! Derives a proxy centerline for a polygon (the long axis of its oriented
//! minimum bounding rectangle), samples stations along it at a fixed interval,
//! and emits perpendicular segments trimmed boundary-to-boundary through the
//! polygon interior. The length of each trimmed segment estimates the
//! corridor width at that station.
//!
//! Pipeline: centerline -> stations -> tangent -> raw transect -> clip.
//! The approach is a fast approximation for elongated, largely-convex
//! footprints, not a medial-axis computation; see `clip` for the concavity
//! caveats.

mod batch;
mod build;
mod centerline;
mod clip;
mod pipeline;
mod sample;
mod tangent;

pub use batch::{run_batch, BatchOutput};
pub use build::perpendicular_transect;
pub use centerline::extract_centerline;
pub use clip::clip_to_polygon;
pub use pipeline::{
    multi_polygon_transects, polygon_transects, PolygonTransects, Transect, TransectBuild,
    TransectParams,
};
pub use sample::{sample_along, SAMPLE_EPSILON};
pub use tangent::tangent_at;
