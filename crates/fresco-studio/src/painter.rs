use std::any::Any;

use fresco_engine::camera::Camera;
use fresco_engine::coords::DVec2;
use fresco_engine::fragment::{Fragment, FragmentKind, FragmentList, FragmentParams};
use fresco_engine::scene::{LabelDraw, Scene};
use fresco_engine::split::Splitter;

/// Growth allowed from splitting, as a multiple of the generated count.
const MAX_GROWTH: usize = 8;

#[derive(Debug, Default, Clone, Copy)]
pub struct ResolveStats {
    pub pairs_tested: usize,
    pub splits: usize,
    pub added: usize,
}

/// Splits every pair of overlapping triangles whose depth ranges interleave.
///
/// Pieces are appended to the list and revisited like any other fragment;
/// the split cap bounds how often one region can be cut.
pub fn resolve_overlaps(list: &mut FragmentList, splitter: &Splitter) -> ResolveStats {
    let frags = list.fragments_mut();
    let start = frags.len();
    let budget = start.saturating_mul(MAX_GROWTH);
    let mut stats = ResolveStats::default();
    let mut scratch = Vec::with_capacity(8);

    let mut i = 0;
    while i < frags.len() {
        let mut j = i + 1;
        while j < frags.len() {
            if frags.len() >= budget {
                log::warn!("split budget of {budget} fragments reached; remaining overlaps left as is");
                stats.added = frags.len() - start;
                return stats;
            }
            if interleaved(&frags[i], &frags[j]) {
                stats.pairs_tested += 1;
                scratch.clear();
                let (n1, n2) = splitter.split_fragments(&frags[i], &frags[j], &mut scratch);
                if n1 > 1 || n2 > 1 {
                    stats.splits += 1;
                    frags[i] = scratch[0];
                    frags[j] = scratch[n1];
                    frags.extend_from_slice(&scratch[1..n1]);
                    frags.extend_from_slice(&scratch[n1 + 1..]);
                }
            }
            j += 1;
        }
        i += 1;
    }

    stats.added = frags.len() - start;
    stats
}

fn interleaved(a: &Fragment, b: &Fragment) -> bool {
    a.kind == FragmentKind::Triangle
        && b.kind == FragmentKind::Triangle
        && a.min_depth() < b.max_depth()
        && b.min_depth() < a.max_depth()
}

/// Stand-in painting surface that tallies what a real backend would draw.
#[derive(Debug, Default)]
pub struct Canvas {
    pub triangles: usize,
    pub lines: usize,
    pub markers: usize,
    pub labels: Vec<String>,
}

impl Canvas {
    pub fn paint(&mut self, scene: &Scene, camera: &Camera, list: &mut FragmentList) {
        for f in list.iter_in_paint_order() {
            match (f.kind, f.params) {
                (FragmentKind::Triangle, _) => self.triangles += 1,
                (FragmentKind::LineSegment, _) => self.lines += 1,
                (FragmentKind::PathMarker, Some(FragmentParams::Label { anchor, .. })) => {
                    let pt1 = f.projected[0].truncate();
                    let pt2 = camera.project(anchor.extend(1.0)).truncate();
                    if !scene.draw_label(f, &mut *self, pt1, pt2, 1.0, 1.0) {
                        log::debug!("label fragment without a text node");
                    }
                }
                (FragmentKind::PathMarker, _) => self.markers += 1,
                (FragmentKind::None, _) => {}
            }
        }
    }
}

/// Fixed label strings, drawn by index.
pub struct NamedLabels(pub Vec<&'static str>);

impl LabelDraw for NamedLabels {
    fn draw(&self, surface: &mut dyn Any, pt1: DVec2, pt2: DVec2, index: usize, _scale: f64, _line_scale: f64) {
        let Some(canvas) = surface.downcast_mut::<Canvas>() else {
            return;
        };
        let name = self.0.get(index).copied().unwrap_or("?");
        let angle = (pt2.y - pt1.y).atan2(pt2.x - pt1.x).to_degrees();
        canvas.labels.push(format!("{name:<6} at ({:+.3}, {:+.3}) angle {angle:+.1}", pt1.x, pt1.y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fresco_engine::coords::{DMat4, DVec3};
    use fresco_engine::paint::SurfaceStyleId;
    use fresco_engine::scene::{Container, Text, Triangle};

    fn flat_camera() -> Camera {
        let mut cam = Camera::default();
        cam.view = DMat4::IDENTITY;
        cam.set_projection(DMat4::from_scale(DVec3::new(1.0, 1.0, -1.0)));
        cam
    }

    #[test]
    fn crossing_triangles_are_split_and_painted() {
        let mut scene = Scene::new();
        let root = scene.add(Container::new(DMat4::IDENTITY));
        let s = Some(SurfaceStyleId::new(0));
        scene
            .add_child(root, Triangle::new([DVec3::new(0.0, 0.0, 0.0), DVec3::new(2.0, 0.0, -2.0), DVec3::new(0.0, 2.0, 0.0)], s))
            .unwrap();
        scene
            .add_child(root, Triangle::new([DVec3::new(0.0, 0.0, -2.0), DVec3::new(2.0, 0.0, 0.0), DVec3::new(0.0, 2.0, -2.0)], s))
            .unwrap();
        scene
            .add_child(root, Text::new(vec![0.0, 0.0, 0.0], vec![1.0, 0.0, 0.0], NamedLabels(vec!["origin"])))
            .unwrap();

        let cam = flat_camera();
        let mut list = scene.render_pass(root, &cam);
        assert_eq!(list.len(), 3);

        let stats = resolve_overlaps(&mut list, &Splitter::default());
        assert_eq!(stats.splits, 1);
        assert_eq!(stats.added, 4);

        let mut canvas = Canvas::default();
        canvas.paint(&scene, &cam, &mut list);
        assert_eq!(canvas.triangles, 6);
        assert_eq!(canvas.labels.len(), 1);
        assert!(canvas.labels[0].starts_with("origin"));
    }
}
