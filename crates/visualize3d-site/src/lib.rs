//! Static website generation for visualize3d.
//!
//! Figures (and optional videos) are registered under categories. Ids share
//! a page when they share an object id, the part before the first `_`:
//! `"7_open"` and `"7_closed"` both land on `7.html`. An `index.html` links
//! every object page, grouped by category.
//!
//! ```no_run
//! use visualize3d_core::Figure;
//! use visualize3d_site::PlotlyWebsiteBuilder;
//!
//! # fn main() -> visualize3d_core::Result<()> {
//! let mut site = PlotlyWebsiteBuilder::new("my experiment");
//! site.register_plot("Show", "7_open", Figure::new());
//! site.register_video("Show", "7_open", "./7_open.mp4");
//! site.write_site("site")?;
//! # Ok(())
//! # }
//! ```

// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod builder;
pub mod grouping;
pub mod html;
pub mod options;

pub use builder::{PageInfo, PlotEntry, PlotlyWebsiteBuilder, SiteSummary, VideoEntry};
pub use grouping::{derive_object_id, group_by_object, OrderedMultiMap};
pub use options::SiteOptions;
