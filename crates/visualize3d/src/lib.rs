//! visualize3d: 3D point cloud plots published as a static website.
//!
//! # Quick Start
//!
//! ```no_run
//! use visualize3d::*;
//!
//! fn main() -> Result<()> {
//!     init_logging();
//!
//!     let points: Vec<Vec3> = (0..1000)
//!         .map(|i| Vec3::new((i as f32).sin(), (i as f32).cos(), i as f32 * 0.001))
//!         .collect();
//!
//!     let mut site = PlotlyWebsiteBuilder::new("demo");
//!     site.register_plot("Show", "0", pointcloud_fig(&points, &PointCloudOptions::default())?);
//!     site.write_site("site")?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Layers
//!
//! - [`primitives`](visualize3d_plots::primitives) turn arrays into single traces
//! - [`plots`](visualize3d_plots::plots) assemble traces into [`Figure`]s with a
//!   cubic, undistorted scene
//! - [`PlotlyWebsiteBuilder`] groups figures by category and object id and
//!   writes one page per object plus an index

pub use visualize3d_core::{
    error::{Result, VizError},
    label_color, points_from_flat, points_from_rows, Color, Figure, HtmlExport, Margin, Scene,
    Trace, Vec3, ALPHABET, DEFAULT_SCENE, PLOTLY_CDN_URL,
};

pub use visualize3d_plots::{
    bounding_cube_scene, flow_fig, flow_traces, pointcloud, pointcloud_fig, segmentation_fig,
    segmentation_traces, sphere, vector, FlowOptions, PointCloudOptions, PointColors,
    SegmentationOptions,
};

pub use visualize3d_site::{
    derive_object_id, PageInfo, PlotlyWebsiteBuilder, SiteOptions, SiteSummary,
};

/// Initializes `env_logger` once; later calls are ignored.
///
/// The log level is taken from `RUST_LOG`.
pub fn init_logging() {
    if env_logger::try_init().is_ok() {
        log::debug!("logging initialized");
    }
}
