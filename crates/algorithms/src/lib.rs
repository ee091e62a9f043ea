//! # TransGis Algorithms
//!
//! Vector analysis algorithms for TransGis.
//!
//! ## Available Algorithm Categories
//!
//! - **transect**: proxy centerlines and boundary-clipped width transects
//!   for elongated polygon footprints (roadbeds, sidewalk corridors)
//! - **vector**: linear referencing and geometric measurements

pub mod transect;
pub mod vector;

mod maybe_rayon;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::transect::{
        clip_to_polygon, extract_centerline, multi_polygon_transects, perpendicular_transect,
        polygon_transects, run_batch, sample_along, tangent_at, BatchOutput, PolygonTransects,
        Transect, TransectBuild, TransectParams,
    };
    pub use crate::vector::{arc_length, area, length, perimeter, point_at, station_of};
    pub use transgis_core::prelude::*;
}
