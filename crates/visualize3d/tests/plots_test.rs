//! Figure builder tests on random data, mirroring typical notebook usage.

use std::collections::BTreeMap;

use proptest::prelude::*;
use rand::Rng;
use visualize3d::*;

fn random_cloud(n: usize) -> Vec<Vec3> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| Vec3::new(rng.gen(), rng.gen(), rng.gen()))
        .collect()
}

#[test]
fn test_pc() {
    let pc = random_cloud(1000);
    let fig = pointcloud_fig(&pc, &PointCloudOptions::default()).unwrap();
    let trace = fig.data[0].as_scatter3d().unwrap();
    assert_eq!(trace.len(), 200);
    assert!(fig.to_json().unwrap().contains("\"scatter3d\""));
}

#[test]
fn test_seg() {
    let pc = random_cloud(1000);
    let mut rng = rand::thread_rng();
    let mut labels: Vec<i64> = (0..1000).map(|_| rng.gen_range(0..4)).collect();
    // Every label present at least once.
    labels[..4].copy_from_slice(&[0, 1, 2, 3]);
    let labelmap: BTreeMap<i64, String> = [(0, "this"), (1, "is"), (2, "a"), (3, "label")]
        .into_iter()
        .map(|(k, v)| (k, v.to_string()))
        .collect();

    let opts = SegmentationOptions {
        labelmap: Some(&labelmap),
        ..SegmentationOptions::default()
    };
    let fig = segmentation_fig(&pc, &labels, &opts, None).unwrap();
    assert_eq!(fig.num_traces(), 4);
    let names: Vec<_> = fig.data.iter().filter_map(Trace::name).collect();
    assert_eq!(names, vec!["this", "is", "a", "label"]);
}

#[test]
fn test_flow() {
    let pc = random_cloud(1000);
    let mut flows = random_cloud(1000);
    flows[10] = Vec3::ZERO;
    flows[20] = Vec3::ZERO;
    let fig = flow_fig(&pc, &flows, 0.1).unwrap();

    let lines = fig.data[1].as_scatter3d().unwrap();
    let heads = fig.data[2].as_scatter3d().unwrap();
    assert_eq!(lines.len(), 998 * 3);
    assert_eq!(heads.len(), 998);
}

#[test]
fn test_composed_scene() {
    let mut fig = Figure::new();
    fig.add_trace(sphere(Vec3::ZERO, 1.0, 0.3, "gray", DEFAULT_SCENE));
    fig.add_trace(vector(Vec3::ZERO, Vec3::X * 2.0, "blue", DEFAULT_SCENE, "x"));
    fig.set_scene(
        DEFAULT_SCENE,
        bounding_cube_scene(&[Vec3::splat(-1.0), Vec3::splat(2.0)]).unwrap(),
    );
    let html = fig.to_html(&HtmlExport::default()).unwrap();
    assert!(html.contains("\"surface\""));
    assert!(html.contains(PLOTLY_CDN_URL));
}

#[test]
fn test_flat_input_shape_checked() {
    assert!(points_from_flat(&[0.0; 9]).is_ok());
    assert!(matches!(
        points_from_flat(&[0.0; 10]),
        Err(VizError::SizeMismatch { .. })
    ));
}

proptest! {
    #[test]
    fn prop_segmentation_one_trace_per_label(labels in prop::collection::vec(-30i64..30, 1..200)) {
        let pc = random_cloud(labels.len());
        let traces = segmentation_traces(&pc, &labels, &SegmentationOptions::default()).unwrap();
        let mut unique = labels.clone();
        unique.sort_unstable();
        unique.dedup();
        prop_assert_eq!(traces.len(), unique.len());
        for (trace, label) in traces.iter().zip(&unique) {
            let label_text = label.to_string();
            prop_assert_eq!(trace.name(), Some(label_text.as_str()));
        }
    }
}
