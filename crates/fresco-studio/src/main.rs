mod demo;
mod painter;

use anyhow::Result;
use fresco_engine::camera::Camera;
use fresco_engine::coords::DVec3;
use fresco_engine::logging::{init_logging, LoggingConfig};
use fresco_engine::split::Splitter;

use painter::{Canvas, resolve_overlaps};

fn main() -> Result<()> {
    init_logging(LoggingConfig::default());

    let (scene, root) = demo::build_scene()?;

    let mut camera = Camera::default();
    camera.look_at(DVec3::new(4.0, -6.0, 5.0), DVec3::ZERO, DVec3::Z);
    camera.set_perspective(40.0, 4.0 / 3.0, 1.0, 50.0);

    let mut list = scene.render_pass(root, &camera);
    for err in list.diagnostics() {
        log::warn!("node skipped: {err}");
    }
    let generated = list.len();

    let stats = resolve_overlaps(&mut list, &Splitter::default());
    log::info!(
        "resolved {} interleaved pairs: {} split, {} fragments added",
        stats.pairs_tested,
        stats.splits,
        stats.added
    );

    let mut canvas = Canvas::default();
    canvas.paint(&scene, &camera, &mut list);

    println!();
    println!("  fresco studio");
    println!("  ─────────────────────────────────────────");
    println!("  nodes            {:>8}", scene.len());
    println!("  generated        {:>8}", generated);
    println!("  after splitting  {:>8}", list.len());
    println!("  triangles        {:>8}", canvas.triangles);
    println!("  line segments    {:>8}", canvas.lines);
    println!("  markers          {:>8}", canvas.markers);
    println!("  labels           {:>8}", canvas.labels.len());
    for label in &canvas.labels {
        println!("    {label}");
    }
    println!();

    Ok(())
}
