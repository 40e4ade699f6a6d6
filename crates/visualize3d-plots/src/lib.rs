//! Plot builders for visualize3d.
//!
//! - [`primitives`]: single traces (point sets, spheres, vectors)
//! - [`plots`]: complete figures (point cloud, segmentation, flow field)

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod plots;
pub mod primitives;

pub use plots::{
    bounding_cube_scene, flow_fig, flow_traces, pointcloud_fig, segmentation_fig,
    segmentation_traces, FlowOptions, SegmentationOptions, DEFAULT_SEGMENTATION_SIZE,
};
pub use primitives::{
    pointcloud, sphere, vector, PointCloudOptions, PointColors, SPHERE_RESOLUTION,
};
