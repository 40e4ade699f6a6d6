//! Core types for visualize3d.
//!
//! This crate provides the pieces shared by the plotting and site crates:
//! - [`Figure`] and its traces/layout, serialized to Plotly JSON
//! - HTML export of figures ([`HtmlExport`])
//! - Colors and the qualitative label palette
//! - The [`VizError`] error type

// Graphics code intentionally uses casts for indices, colors, and coordinates
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
// Documentation lints - internal functions don't need exhaustive panic/error docs
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]

pub mod color;
pub mod error;
pub mod figure;
pub mod points;

pub use color::{label_color, Color, ALPHABET};
pub use error::{Result, VizError};
pub use figure::{
    escape_html, AspectRatio, Axis, ColorBar, Figure, Frame, HtmlExport, Layout, Legend, Line,
    Margin, Marker, MarkerColor, MarkerSize, Mode, Scatter3d, Scene, Surface, Title, Trace,
    DEFAULT_SCENE, PLOTLY_CDN_URL,
};
pub use points::{centroid, points_from_flat, points_from_rows};

// Re-export glam types for convenience
pub use glam::Vec3;
