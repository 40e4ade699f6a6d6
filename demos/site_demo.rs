//! Builds a small site with every kind of figure.
//!
//! Run with: cargo run --example site_demo -- [output_dir]

use std::collections::BTreeMap;
use std::f32::consts::TAU;

use rand::Rng;
use visualize3d::*;

fn torus(n: usize) -> Vec<Vec3> {
    let mut rng = rand::thread_rng();
    (0..n)
        .map(|_| {
            let (u, v) = (rng.gen::<f32>() * TAU, rng.gen::<f32>() * TAU);
            let r = 1.0 + 0.3 * v.cos();
            Vec3::new(r * u.cos(), r * u.sin(), 0.3 * v.sin())
        })
        .collect()
}

fn main() -> Result<()> {
    init_logging();
    let out_dir = std::env::args().nth(1).unwrap_or_else(|| "site".to_string());

    let points = torus(4000);
    let mut site = PlotlyWebsiteBuilder::new("visualize3d demo");

    // Point cloud colored by height.
    let heights: Vec<f32> = points.iter().map(|p| p.z).collect();
    let opts = PointCloudOptions {
        colors: Some(PointColors::Scalars(heights)),
        colorbar: true,
        ..PointCloudOptions::default()
    };
    site.register_plot("Shapes", "0_cloud", pointcloud_fig(&points, &opts)?);

    // Segmentation by quadrant.
    let labels: Vec<i64> = points
        .iter()
        .map(|p| i64::from(p.x > 0.0) + 2 * i64::from(p.y > 0.0))
        .collect();
    let labelmap: BTreeMap<i64, String> = ["-x -y", "+x -y", "-x +y", "+x +y"]
        .iter()
        .enumerate()
        .map(|(i, name)| (i as i64, (*name).to_string()))
        .collect();
    let seg = SegmentationOptions {
        labelmap: Some(&labelmap),
        ..SegmentationOptions::default()
    };
    site.register_plot("Shapes", "0_segmentation", segmentation_fig(&points, &labels, &seg, None)?);

    // Rotational flow, zero on the inner ring.
    let flows: Vec<Vec3> = points
        .iter()
        .map(|p| {
            if p.truncate().length() < 0.8 {
                Vec3::ZERO
            } else {
                Vec3::new(-p.y, p.x, 0.0)
            }
        })
        .collect();
    site.register_plot("Flow", "1", flow_fig(&points[..500], &flows[..500], 0.2)?);

    // Sphere with an axis vector.
    let mut fig = Figure::new();
    fig.add_trace(sphere(Vec3::ZERO, 1.0, 0.4, "lightblue", DEFAULT_SCENE));
    fig.add_trace(vector(Vec3::ZERO, Vec3::Z * 1.5, "black", DEFAULT_SCENE, "axis"));
    fig.set_scene(
        DEFAULT_SCENE,
        bounding_cube_scene(&[Vec3::splat(-1.5), Vec3::splat(1.5)])?,
    );
    site.register_plot("Primitives", "2_sphere", fig);

    let summary = site.write_site(&out_dir)?;
    println!(
        "wrote {} pages; open {}",
        summary.pages.len(),
        summary.index.display()
    );
    Ok(())
}
