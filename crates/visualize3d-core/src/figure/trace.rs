//! Trace types: the individual drawable layers of a figure.

use glam::Vec3;
use serde::Serialize;

/// Drawing mode of a scatter trace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum Mode {
    #[default]
    #[serde(rename = "markers")]
    Markers,
    #[serde(rename = "lines")]
    Lines,
    #[serde(rename = "lines+markers")]
    LinesMarkers,
}

/// Marker size, either shared by every point or given per point.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerSize {
    Uniform(f32),
    PerPoint(Vec<f32>),
}

impl Default for MarkerSize {
    fn default() -> Self {
        Self::Uniform(3.0)
    }
}

/// Marker color specification.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MarkerColor {
    /// One CSS color for every marker.
    Single(String),
    /// One CSS color per marker.
    PerPoint(Vec<String>),
    /// One scalar per marker, mapped through the trace's color scale.
    Scalars(Vec<f32>),
}

impl MarkerColor {
    /// Returns the number of per-point entries, or `None` for a single color.
    #[must_use]
    pub fn per_point_len(&self) -> Option<usize> {
        match self {
            Self::Single(_) => None,
            Self::PerPoint(c) => Some(c.len()),
            Self::Scalars(s) => Some(s.len()),
        }
    }
}

/// Color bar attached to a scalar-colored marker set.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColorBar {
    pub thickness: f32,
}

/// Line styling, used both for line traces and marker outlines.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Line {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
}

impl Line {
    /// Creates a colored line of the given width.
    pub fn new(color: impl Into<String>, width: f32) -> Self {
        Self {
            color: Some(color.into()),
            width: Some(width),
        }
    }
}

/// Marker styling.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Marker {
    pub size: MarkerSize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<MarkerColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub colorbar: Option<ColorBar>,
}

/// A 3D scatter trace (markers, lines, or both).
///
/// Coordinates are stored column-wise. A `None` entry is emitted as `null`,
/// which breaks a line trace into separate segments.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Scatter3d {
    pub x: Vec<Option<f32>>,
    pub y: Vec<Option<f32>>,
    pub z: Vec<Option<f32>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub marker: Option<Marker>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line: Option<Line>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub scene: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
}

impl Scatter3d {
    /// Creates a trace from a sequence of points, placed in `scene`.
    pub fn from_points(points: impl IntoIterator<Item = Vec3>, scene: impl Into<String>) -> Self {
        Self::from_coords(points.into_iter().map(Some), scene)
    }

    /// Creates a trace from points with gaps; `None` becomes a null coordinate.
    pub fn from_coords(
        coords: impl IntoIterator<Item = Option<Vec3>>,
        scene: impl Into<String>,
    ) -> Self {
        let mut trace = Self {
            scene: scene.into(),
            ..Self::default()
        };
        for c in coords {
            trace.x.push(c.map(|p| p.x));
            trace.y.push(c.map(|p| p.y));
            trace.z.push(c.map(|p| p.z));
        }
        trace
    }

    /// Returns the number of coordinate entries, gaps included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns true if the trace has no coordinates.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns the coordinate entries as points; gaps yield `None`.
    pub fn coords(&self) -> impl Iterator<Item = Option<Vec3>> + '_ {
        self.x
            .iter()
            .zip(&self.y)
            .zip(&self.z)
            .map(|((x, y), z)| Some(Vec3::new((*x)?, (*y)?, (*z)?)))
    }
}

/// A parametrized surface.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Surface {
    pub x: Vec<Vec<f32>>,
    pub y: Vec<Vec<f32>>,
    pub z: Vec<Vec<f32>>,
    pub colorscale: Vec<(f32, String)>,
    pub opacity: f32,
    pub showscale: bool,
    pub scene: String,
}

/// Any trace that can be placed in a figure.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Scatter3d(Scatter3d),
    Surface(Surface),
}

impl Trace {
    /// Returns the scene this trace is drawn into.
    #[must_use]
    pub fn scene(&self) -> &str {
        match self {
            Self::Scatter3d(t) => &t.scene,
            Self::Surface(t) => &t.scene,
        }
    }

    /// Returns the legend name, if any.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Scatter3d(t) => t.name.as_deref(),
            Self::Surface(_) => None,
        }
    }

    /// Returns the inner scatter trace, if this is one.
    #[must_use]
    pub fn as_scatter3d(&self) -> Option<&Scatter3d> {
        match self {
            Self::Scatter3d(t) => Some(t),
            Self::Surface(_) => None,
        }
    }

    /// Returns the inner surface, if this is one.
    #[must_use]
    pub fn as_surface(&self) -> Option<&Surface> {
        match self {
            Self::Surface(t) => Some(t),
            Self::Scatter3d(_) => None,
        }
    }
}

impl From<Scatter3d> for Trace {
    fn from(t: Scatter3d) -> Self {
        Self::Scatter3d(t)
    }
}

impl From<Surface> for Trace {
    fn from(t: Surface) -> Self {
        Self::Surface(t)
    }
}
