//! Figure layout: title, legend, margins and 3D scenes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Default scene id used by traces and layouts.
pub const DEFAULT_SCENE: &str = "scene";

/// Figure title.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Title {
    pub text: String,
}

/// Plot margins in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Margin {
    pub l: u32,
    pub r: u32,
    pub t: u32,
    pub b: u32,
}

impl Margin {
    /// Creates a margin from left, right, top and bottom insets.
    #[must_use]
    pub const fn new(l: u32, r: u32, t: u32, b: u32) -> Self {
        Self { l, r, t, b }
    }
}

/// Legend anchor in normalized paper coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Legend {
    pub x: f32,
    pub y: f32,
}

/// A single 3D axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Axis {
    pub nticks: u32,
    pub range: [f32; 2],
}

impl Axis {
    /// Returns the numeric width of the axis range.
    #[must_use]
    pub fn width(&self) -> f32 {
        self.range[1] - self.range[0]
    }
}

/// Relative axis lengths of a 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AspectRatio {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

/// Axis configuration of a 3D scene.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Scene {
    pub xaxis: Axis,
    pub yaxis: Axis,
    pub zaxis: Axis,
    pub aspectratio: AspectRatio,
}

/// Figure-wide layout.
///
/// Scenes are keyed by their id (`scene`, `scene2`, ...) and flattened into
/// the layout object, which is where the browser side looks them up.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Title>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub showlegend: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub margin: Option<Margin>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub legend: Option<Legend>,
    #[serde(flatten)]
    pub scenes: BTreeMap<String, Scene>,
}
