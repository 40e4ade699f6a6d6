//! Complete figures built from primitives.
//!
//! All builders size their scene with [`bounding_cube_scene`], so the three
//! axes always share one scale.

use std::collections::BTreeMap;

use glam::Vec3;
use visualize3d_core::{
    centroid, label_color, AspectRatio, Axis, Figure, Legend, Line, Margin, Marker, MarkerColor,
    MarkerSize, Mode, Result, Scatter3d, Scene, Trace, VizError, DEFAULT_SCENE,
};

use crate::primitives::{pointcloud, PointCloudOptions};

/// Marker size used for segmentation points when no sizes are given.
pub const DEFAULT_SEGMENTATION_SIZE: f32 = 4.0;

/// Computes a cubic scene centered on the centroid of `data`.
///
/// The half-width is the largest absolute deviation from the centroid along
/// any axis, so every axis range has the same width.
pub fn bounding_cube_scene(data: &[Vec3]) -> Result<Scene> {
    let mean = centroid(data).ok_or(VizError::EmptyData)?;
    let half = data
        .iter()
        .map(|&p| (p - mean).abs().max_element())
        .fold(0.0_f32, f32::max);

    let axis = |c: f32| Axis {
        nticks: 10,
        range: [c - half, c + half],
    };
    Ok(Scene {
        xaxis: axis(mean.x),
        yaxis: axis(mean.y),
        zaxis: axis(mean.z),
        aspectratio: AspectRatio {
            x: 1.0,
            y: 1.0,
            z: 1.0,
        },
    })
}

/// A plain point cloud figure with the legend hidden.
pub fn pointcloud_fig(data: &[Vec3], opts: &PointCloudOptions) -> Result<Figure> {
    let mut fig = Figure::new();
    fig.add_trace(pointcloud(data, opts)?);
    fig.set_scene(opts.scene.clone(), bounding_cube_scene(data)?)
        .set_showlegend(false);
    Ok(fig)
}

/// Options for segmentation figures.
#[derive(Debug, Clone, Copy)]
pub struct SegmentationOptions<'a> {
    /// Legend text per label. When set, every label must be present.
    pub labelmap: Option<&'a BTreeMap<i64, String>>,
    /// Per-point marker sizes. Defaults to [`DEFAULT_SEGMENTATION_SIZE`].
    pub sizes: Option<&'a [f32]>,
    pub scene: &'a str,
}

impl Default for SegmentationOptions<'_> {
    fn default() -> Self {
        Self {
            labelmap: None,
            sizes: None,
            scene: DEFAULT_SCENE,
        }
    }
}

/// Builds one marker trace per unique label, in ascending label order.
pub fn segmentation_traces(
    data: &[Vec3],
    labels: &[i64],
    opts: &SegmentationOptions<'_>,
) -> Result<Vec<Trace>> {
    if labels.len() != data.len() {
        return Err(VizError::SizeMismatch {
            expected: data.len(),
            actual: labels.len(),
        });
    }
    if let Some(sizes) = opts.sizes {
        if sizes.len() != data.len() {
            return Err(VizError::SizeMismatch {
                expected: data.len(),
                actual: sizes.len(),
            });
        }
    }

    let mut groups: BTreeMap<i64, Vec<usize>> = BTreeMap::new();
    for (i, &label) in labels.iter().enumerate() {
        groups.entry(label).or_default().push(i);
    }

    let mut traces = Vec::with_capacity(groups.len());
    for (label, indices) in groups {
        let legend = match opts.labelmap {
            Some(map) => map
                .get(&label)
                .cloned()
                .ok_or(VizError::LabelNotFound(label))?,
            None => label.to_string(),
        };
        let size = match opts.sizes {
            Some(sizes) => MarkerSize::PerPoint(indices.iter().map(|&i| sizes[i]).collect()),
            None => MarkerSize::Uniform(DEFAULT_SEGMENTATION_SIZE),
        };

        let mut trace = Scatter3d::from_points(indices.iter().map(|&i| data[i]), opts.scene);
        trace.mode = Some(Mode::Markers);
        trace.marker = Some(Marker {
            size,
            color: Some(MarkerColor::Single(label_color(label).to_string())),
            line: Some(Line {
                color: None,
                width: Some(0.0),
            }),
            colorbar: None,
        });
        trace.name = Some(legend);
        traces.push(trace.into());
    }

    log::debug!("built {} segmentation traces", traces.len());
    Ok(traces)
}

/// A segmentation figure, optionally drawn onto an existing figure.
pub fn segmentation_fig(
    data: &[Vec3],
    labels: &[i64],
    opts: &SegmentationOptions<'_>,
    fig: Option<Figure>,
) -> Result<Figure> {
    let mut fig = fig.unwrap_or_default();
    fig.add_traces(segmentation_traces(data, labels, opts)?);
    fig.set_scene(opts.scene, bounding_cube_scene(data)?)
        .set_showlegend(true)
        .set_margin(Margin::new(0, 0, 40, 0));
    fig.layout.legend = Some(Legend { x: 1.0, y: 0.75 });
    Ok(fig)
}

/// Options for flow traces.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowOptions {
    /// Multiplier applied to each flow vector before drawing.
    pub flowscale: f32,
    pub color: String,
    pub width: f32,
    pub name: String,
    pub scene: String,
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            flowscale: 0.05,
            color: "red".to_string(),
            width: 10.0,
            name: "flow".to_string(),
            scene: DEFAULT_SCENE.to_string(),
        }
    }
}

/// Builds the flow segment trace and the arrowhead marker trace.
///
/// Points whose flow is exactly zero in all components are skipped. All
/// segments share one line trace, separated by null coordinates.
pub fn flow_traces(start: &[Vec3], flows: &[Vec3], opts: &FlowOptions) -> Result<Vec<Trace>> {
    if flows.len() != start.len() {
        return Err(VizError::SizeMismatch {
            expected: start.len(),
            actual: flows.len(),
        });
    }

    let segments: Vec<(Vec3, Vec3)> = start
        .iter()
        .zip(flows)
        .filter(|&(_, f)| *f != Vec3::ZERO)
        .map(|(&s, &f)| (s, s + f * opts.flowscale))
        .collect();

    let mut lines = Scatter3d::from_coords(
        segments
            .iter()
            .flat_map(|&(s, e)| [Some(s), Some(e), None]),
        opts.scene.clone(),
    );
    lines.mode = Some(Mode::Lines);
    lines.line = Some(Line::new(opts.color.clone(), opts.width));
    lines.name = Some(opts.name.clone());

    let mut heads = Scatter3d::from_points(segments.iter().map(|&(_, e)| e), opts.scene.clone());
    heads.mode = Some(Mode::Markers);
    heads.marker = Some(Marker {
        size: MarkerSize::Uniform(3.0),
        color: Some(MarkerColor::Single("darkred".to_string())),
        ..Marker::default()
    });
    heads.showlegend = Some(false);

    Ok(vec![lines.into(), heads.into()])
}

/// A point cloud with a flow vector drawn at every point.
///
/// The scene is sized from `pos` only.
pub fn flow_fig(pos: &[Vec3], flows: &[Vec3], flowscale: f32) -> Result<Figure> {
    let mut fig = Figure::new();
    fig.add_trace(pointcloud(pos, &PointCloudOptions::with_downsample(1))?);
    let opts = FlowOptions {
        flowscale,
        ..FlowOptions::default()
    };
    fig.add_traces(flow_traces(pos, flows, &opts)?);
    fig.set_scene(DEFAULT_SCENE, bounding_cube_scene(pos)?);
    Ok(fig)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use visualize3d_core::ALPHABET;

    fn cloud(n: usize) -> Vec<Vec3> {
        (0..n)
            .map(|i| {
                let t = i as f32;
                Vec3::new(t.sin(), (t * 0.37).cos() * 2.0, t * 0.01)
            })
            .collect()
    }

    #[test]
    fn test_cube_scene_simple() {
        let pts = [Vec3::ZERO, Vec3::new(4.0, 1.0, 0.0)];
        let scene = bounding_cube_scene(&pts).unwrap();
        assert_eq!(scene.xaxis.range, [0.0, 4.0]);
        assert_eq!(scene.yaxis.range, [-1.5, 2.5]);
        assert_eq!(scene.zaxis.range, [-2.0, 2.0]);
        assert_eq!(scene.xaxis.nticks, 10);
    }

    #[test]
    fn test_cube_scene_empty() {
        assert!(matches!(bounding_cube_scene(&[]), Err(VizError::EmptyData)));
    }

    #[test]
    fn test_pointcloud_fig_hides_legend() {
        let fig = pointcloud_fig(&cloud(100), &PointCloudOptions::default()).unwrap();
        assert_eq!(fig.num_traces(), 1);
        assert_eq!(fig.layout.showlegend, Some(false));
        assert!(fig.scene(DEFAULT_SCENE).is_some());
    }

    #[test]
    fn test_segmentation_four_labels() {
        let data = cloud(1000);
        let labels: Vec<i64> = (0..1000).map(|i| (i * 7 % 4) as i64).collect();
        let labelmap: BTreeMap<i64, String> = [(0, "this"), (1, "is"), (2, "a"), (3, "label")]
            .into_iter()
            .map(|(k, v)| (k, v.to_string()))
            .collect();
        let opts = SegmentationOptions {
            labelmap: Some(&labelmap),
            ..SegmentationOptions::default()
        };
        let fig = segmentation_fig(&data, &labels, &opts, None).unwrap();

        assert_eq!(fig.num_traces(), 4);
        for (label, trace) in fig.data.iter().enumerate() {
            let t = trace.as_scatter3d().unwrap();
            let color = t.marker.as_ref().unwrap().color.clone();
            assert_eq!(color, Some(MarkerColor::Single(ALPHABET[label].to_string())));
            assert_eq!(t.name.as_deref(), Some(labelmap[&(label as i64)].as_str()));
        }
        let total: usize = fig
            .data
            .iter()
            .map(|t| t.as_scatter3d().unwrap().len())
            .sum();
        assert_eq!(total, 1000);
        assert_eq!(fig.layout.showlegend, Some(true));
        assert_eq!(fig.layout.margin, Some(Margin::new(0, 0, 40, 0)));
    }

    #[test]
    fn test_segmentation_color_wraps_palette() {
        let data = cloud(2);
        let labels = [3, 29];
        let traces = segmentation_traces(&data, &labels, &SegmentationOptions::default()).unwrap();
        let colors: Vec<_> = traces
            .iter()
            .map(|t| t.as_scatter3d().unwrap().marker.clone().unwrap().color)
            .collect();
        assert_eq!(colors[0], colors[1]);
        assert_eq!(traces[1].name(), Some("29"));
    }

    #[test]
    fn test_segmentation_missing_label() {
        let labelmap: BTreeMap<i64, String> = [(0, "zero".to_string())].into_iter().collect();
        let opts = SegmentationOptions {
            labelmap: Some(&labelmap),
            ..SegmentationOptions::default()
        };
        let err = segmentation_traces(&cloud(3), &[0, 1, 0], &opts).unwrap_err();
        assert!(matches!(err, VizError::LabelNotFound(1)));
    }

    #[test]
    fn test_segmentation_sizes_sliced() {
        let sizes = [1.0, 2.0, 3.0, 4.0];
        let opts = SegmentationOptions {
            sizes: Some(&sizes),
            ..SegmentationOptions::default()
        };
        let traces = segmentation_traces(&cloud(4), &[1, 0, 1, 0], &opts).unwrap();
        let size_of = |i: usize| traces[i].as_scatter3d().unwrap().marker.clone().unwrap().size;
        assert_eq!(size_of(0), MarkerSize::PerPoint(vec![2.0, 4.0]));
        assert_eq!(size_of(1), MarkerSize::PerPoint(vec![1.0, 3.0]));
    }

    #[test]
    fn test_segmentation_onto_existing_figure() {
        let base = pointcloud_fig(&cloud(10), &PointCloudOptions::default()).unwrap();
        let fig = segmentation_fig(
            &cloud(10),
            &[0; 10],
            &SegmentationOptions::default(),
            Some(base),
        )
        .unwrap();
        assert_eq!(fig.num_traces(), 2);
    }

    #[test]
    fn test_flow_skips_zero_vectors() {
        let pos = [Vec3::ZERO, Vec3::X, Vec3::Y];
        let flows = [Vec3::ZERO, Vec3::new(0.0, 0.0, 10.0), Vec3::new(0.0, -0.0, 0.0)];
        let fig = flow_fig(&pos, &flows, 0.1).unwrap();
        assert_eq!(fig.num_traces(), 3);

        let lines = fig.data[1].as_scatter3d().unwrap();
        let coords: Vec<_> = lines.coords().collect();
        assert_eq!(coords, vec![Some(Vec3::X), Some(Vec3::new(1.0, 0.0, 1.0)), None]);
        assert_eq!(lines.mode, Some(Mode::Lines));

        let heads = fig.data[2].as_scatter3d().unwrap();
        assert_eq!(heads.len(), 1);
        assert_eq!(heads.showlegend, Some(false));
    }

    #[test]
    fn test_flow_scene_ignores_flows() {
        let pos = cloud(50);
        let flows = vec![Vec3::splat(1000.0); 50];
        let fig = flow_fig(&pos, &flows, 1.0).unwrap();
        assert_eq!(
            fig.scene(DEFAULT_SCENE),
            Some(&bounding_cube_scene(&pos).unwrap())
        );
    }

    #[test]
    fn test_flow_length_mismatch() {
        let err = flow_traces(&cloud(3), &[Vec3::X], &FlowOptions::default()).unwrap_err();
        assert!(matches!(err, VizError::SizeMismatch { .. }));
    }

    proptest! {
        #[test]
        fn prop_cube_axes_equal_width(
            pts in prop::collection::vec((-1e3f32..1e3, -1e3f32..1e3, -1e3f32..1e3), 1..64)
        ) {
            let pts: Vec<Vec3> = pts.into_iter().map(|(x, y, z)| Vec3::new(x, y, z)).collect();
            let scene = bounding_cube_scene(&pts).unwrap();
            let (wx, wy, wz) = (scene.xaxis.width(), scene.yaxis.width(), scene.zaxis.width());
            let tol = 1e-3 * wx.abs().max(1.0);
            prop_assert!((wx - wy).abs() <= tol);
            prop_assert!((wx - wz).abs() <= tol);
            for p in &pts {
                prop_assert!(p.x >= scene.xaxis.range[0] - tol && p.x <= scene.xaxis.range[1] + tol);
                prop_assert!(p.z >= scene.zaxis.range[0] - tol && p.z <= scene.zaxis.range[1] + tol);
            }
        }

        #[test]
        fn prop_one_segment_per_nonzero_flow(
            flags in prop::collection::vec(any::<bool>(), 0..100)
        ) {
            let pos: Vec<Vec3> = (0..flags.len()).map(|i| Vec3::splat(i as f32)).collect();
            let flows: Vec<Vec3> = flags
                .iter()
                .map(|&nz| if nz { Vec3::ONE } else { Vec3::ZERO })
                .collect();
            let nonzero = flags.iter().filter(|&&b| b).count();
            let traces = flow_traces(&pos, &flows, &FlowOptions::default()).unwrap();
            prop_assert_eq!(traces[0].as_scatter3d().unwrap().len(), nonzero * 3);
            prop_assert_eq!(traces[1].as_scatter3d().unwrap().len(), nonzero);
        }
    }
}
