//! Sample scene exercising every primitive kind.

use anyhow::{Context, Result};
use fresco_engine::coords::{Axis, DMat4, DVec3};
use fresco_engine::paint::{LineStyleId, MarkerPath, SurfaceStyleId};
use fresco_engine::scene::{
    Container, DataMesh, FacingContainer, LineSegments, Mesh, NodeId, Points, PolyLine, Scene, Text, Triangle,
};

use crate::painter::NamedLabels;

const GRID: usize = 9;

pub fn build_scene() -> Result<(Scene, NodeId)> {
    let mut scene = Scene::new();
    let root = scene.add(Container::new(DMat4::IDENTITY));

    let axis_line = Some(LineStyleId::new(0));
    let grid_line = Some(LineStyleId::new(1));
    let fill = Some(SurfaceStyleId::new(0));

    // axes and their labels
    let ends = [3.0, 0.0, 0.0, 0.0, 3.0, 0.0, 0.0, 0.0, 3.0];
    scene
        .add_child(root, LineSegments::from_triples(&[0.0; 9], &ends, axis_line))
        .context("adding axes")?;
    let tips: Vec<f64> = ends.iter().map(|v| v * 1.1).collect();
    scene
        .add_child(root, Text::new(tips.clone(), tips.iter().map(|v| v + 0.5).collect(), NamedLabels(vec!["x", "y", "z"])))
        .context("adding axis labels")?;

    // saddle surface with a plane cutting through it
    let pos: Vec<f64> = (0..GRID).map(|i| -2.0 + 4.0 * i as f64 / (GRID - 1) as f64).collect();
    let heights: Vec<f64> = pos
        .iter()
        .flat_map(|&a| pos.iter().map(move |&b| 0.25 * (a * a - b * b)))
        .collect();
    scene
        .add_child(root, Mesh::new(pos.clone(), pos.clone(), heights, Axis::Z, grid_line, fill))
        .context("adding saddle")?;
    scene
        .add_child(
            root,
            Triangle::new(
                [DVec3::new(-2.5, -2.5, -1.0), DVec3::new(2.5, -2.5, 1.0), DVec3::new(0.0, 2.5, 0.0)],
                Some(SurfaceStyleId::new(1)),
            ),
        )
        .context("adding cutting plane")?;

    // binned data with a hole, drawn on the back wall
    let edges: Vec<f64> = (0..=4).map(|i| -2.0 + i as f64).collect();
    let mut values: Vec<f64> = (0..16).map(|i| (i % 5) as f64 * 0.3).collect();
    values[5] = f64::NAN;
    let mut data = DataMesh::new(edges.clone(), edges, values, Axis::Y, Axis::X, Axis::Z);
    data.high_res = true;
    data.line = grid_line;
    data.surface = Some(SurfaceStyleId::new(2));
    let wall = scene
        .add_child(root, Container::new(DMat4::from_translation(DVec3::new(0.0, 2.5, 0.0))))
        .context("adding wall")?;
    scene.add_child(wall, data).context("adding data mesh")?;

    // helix traced as a line and as markers
    let t: Vec<f64> = (0..40).map(|i| i as f64 * 0.2).collect();
    let hx: Vec<f64> = t.iter().map(|t| 1.5 * t.cos()).collect();
    let hy: Vec<f64> = t.iter().map(|t| 1.5 * t.sin()).collect();
    let hz: Vec<f64> = t.iter().map(|t| t * 0.3 - 1.0).collect();
    let mut helix = PolyLine::new(axis_line);
    helix.add_points(&hx, &hy, &hz);
    scene.add_child(root, helix).context("adding helix")?;

    let mut markers = Points::new(hx, hy, hz, MarkerPath::circle(0.05, 12));
    markers.sizes = t.iter().map(|t| 1.0 + 0.1 * t).collect();
    markers.surface = fill;
    scene.add_child(root, markers).context("adding helix markers")?;

    add_cube(&mut scene, root, DVec3::new(-3.0, -3.0, 0.0))?;

    Ok((scene, root))
}

/// Unit cube whose faces are culled when turned away from the viewer.
fn add_cube(scene: &mut Scene, parent: NodeId, at: DVec3) -> Result<()> {
    let cube = scene
        .add_child(parent, Container::new(DMat4::from_translation(at)))
        .context("adding cube")?;

    let faces = [
        (DVec3::new(1.0, 0.0, 0.0), DMat4::from_rotation_y(std::f64::consts::FRAC_PI_2)),
        (DVec3::new(-1.0, 0.0, 0.0), DMat4::from_rotation_y(-std::f64::consts::FRAC_PI_2)),
        (DVec3::new(0.0, 1.0, 0.0), DMat4::from_rotation_x(-std::f64::consts::FRAC_PI_2)),
        (DVec3::new(0.0, -1.0, 0.0), DMat4::from_rotation_x(std::f64::consts::FRAC_PI_2)),
        (DVec3::new(0.0, 0.0, 1.0), DMat4::IDENTITY),
        (DVec3::new(0.0, 0.0, -1.0), DMat4::from_rotation_x(std::f64::consts::PI)),
    ];
    for (normal, rotation) in faces {
        // unit square in the xy plane at z = 0.5, rotated onto its face
        let face = scene
            .add_child(cube, FacingContainer::new(rotation, DVec3::new(0.0, 0.0, 1.0)))
            .with_context(|| format!("adding cube face {normal:?}"))?;
        let c = [
            DVec3::new(-0.5, -0.5, 0.5),
            DVec3::new(0.5, -0.5, 0.5),
            DVec3::new(0.5, 0.5, 0.5),
            DVec3::new(-0.5, 0.5, 0.5),
        ];
        let s = Some(SurfaceStyleId::new(3));
        scene.add_child(face, Triangle::new([c[0], c[1], c[2]], s))?;
        scene.add_child(face, Triangle::new([c[0], c[2], c[3]], s))?;
    }
    Ok(())
}
