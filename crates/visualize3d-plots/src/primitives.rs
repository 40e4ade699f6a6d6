//! Geometry primitives: point sets, spheres and single vectors.
//!
//! Each function converts raw coordinates into one trace and has no state.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::Vec3;
use visualize3d_core::{
    Color, ColorBar, Line, Marker, MarkerColor, MarkerSize, Mode, Result, Scatter3d, Surface,
    VizError, DEFAULT_SCENE,
};

/// Angular resolution (in both directions) of [`sphere`] meshes.
pub const SPHERE_RESOLUTION: usize = 20;

/// Per-point colors for a point cloud.
#[derive(Debug, Clone, PartialEq)]
pub enum PointColors {
    /// 8-bit RGB triples.
    Rgb(Vec<[u8; 3]>),
    /// CSS color names or hex strings.
    Css(Vec<String>),
    /// Scalars mapped through the default color scale.
    Scalars(Vec<f32>),
}

impl PointColors {
    /// Returns the number of colors.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Rgb(c) => c.len(),
            Self::Css(c) => c.len(),
            Self::Scalars(c) => c.len(),
        }
    }

    /// Returns true if there are no colors.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn sampled(&self, stride: usize) -> MarkerColor {
        match self {
            Self::Rgb(c) => MarkerColor::PerPoint(
                c.iter()
                    .step_by(stride)
                    .map(|&rgb| Color::from(rgb).to_css())
                    .collect(),
            ),
            Self::Css(c) => MarkerColor::PerPoint(c.iter().step_by(stride).cloned().collect()),
            Self::Scalars(c) => MarkerColor::Scalars(c.iter().step_by(stride).copied().collect()),
        }
    }
}

/// Options for [`pointcloud`].
#[derive(Debug, Clone, PartialEq)]
pub struct PointCloudOptions {
    /// Keep every `downsample`-th point, starting at index 0.
    pub downsample: usize,
    pub colors: Option<PointColors>,
    /// Marker size in pixels.
    pub size: f32,
    /// Attach a color bar. Only has an effect when `colors` is set.
    pub colorbar: bool,
    pub scene: String,
    pub name: Option<String>,
}

impl Default for PointCloudOptions {
    fn default() -> Self {
        Self {
            downsample: 5,
            colors: None,
            size: 3.0,
            colorbar: false,
            scene: DEFAULT_SCENE.to_string(),
            name: None,
        }
    }
}

impl PointCloudOptions {
    /// Default options with the given stride.
    #[must_use]
    pub fn with_downsample(downsample: usize) -> Self {
        Self {
            downsample,
            ..Self::default()
        }
    }
}

/// Builds a marker trace from `positions`, sampled at a fixed stride.
pub fn pointcloud(positions: &[Vec3], opts: &PointCloudOptions) -> Result<Scatter3d> {
    if opts.downsample == 0 {
        return Err(VizError::InvalidStride);
    }

    let mut marker = Marker {
        size: MarkerSize::Uniform(opts.size),
        ..Marker::default()
    };

    if let Some(colors) = &opts.colors {
        if colors.len() != positions.len() {
            return Err(VizError::SizeMismatch {
                expected: positions.len(),
                actual: colors.len(),
            });
        }
        marker.color = Some(colors.sampled(opts.downsample));
        if opts.colorbar {
            marker.colorbar = Some(ColorBar { thickness: 20.0 });
        }
    }

    let mut trace = Scatter3d::from_points(
        positions.iter().step_by(opts.downsample).copied(),
        opts.scene.clone(),
    );
    trace.mode = Some(Mode::Markers);
    trace.marker = Some(marker);
    trace.name.clone_from(&opts.name);
    Ok(trace)
}

fn linspace(start: f32, end: f32, n: usize) -> Vec<f32> {
    if n == 1 {
        return vec![start];
    }
    let step = (end - start) / (n - 1) as f32;
    (0..n).map(|i| start + step * i as f32).collect()
}

/// Builds a solid-colored sphere surface around `center`.
///
/// Rows run over latitude (`-pi/2..=pi/2`), columns over longitude
/// (`0..=2pi`), both sampled [`SPHERE_RESOLUTION`] times.
pub fn sphere(center: Vec3, radius: f32, opacity: f32, color: &str, scene: &str) -> Surface {
    let phis = linspace(0.0, 2.0 * PI, SPHERE_RESOLUTION);
    let thetas = linspace(-FRAC_PI_2, FRAC_PI_2, SPHERE_RESOLUTION);

    let mut xs = Vec::with_capacity(SPHERE_RESOLUTION);
    let mut ys = Vec::with_capacity(SPHERE_RESOLUTION);
    let mut zs = Vec::with_capacity(SPHERE_RESOLUTION);

    for &theta in &thetas {
        let (sin_t, cos_t) = theta.sin_cos();
        xs.push(
            phis.iter()
                .map(|phi| cos_t * phi.sin() * radius + center.x)
                .collect(),
        );
        ys.push(
            phis.iter()
                .map(|phi| cos_t * phi.cos() * radius + center.y)
                .collect(),
        );
        zs.push(vec![sin_t * radius + center.z; SPHERE_RESOLUTION]);
    }

    Surface {
        x: xs,
        y: ys,
        z: zs,
        colorscale: vec![(0.0, color.to_string()), (1.0, color.to_string())],
        opacity,
        showscale: false,
        scene: scene.to_string(),
    }
}

/// Builds a single line segment from `origin` to `origin + direction`.
pub fn vector(origin: Vec3, direction: Vec3, color: &str, scene: &str, name: &str) -> Scatter3d {
    let mut trace = Scatter3d::from_points([origin, origin + direction], scene);
    trace.line = Some(Line::new(color, 10.0));
    trace.name = Some(name.to_string());
    trace
}
