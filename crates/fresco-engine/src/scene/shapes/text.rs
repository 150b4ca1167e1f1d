use std::any::Any;
use std::fmt;

use crate::camera::Camera;
use crate::coords::{DMat4, DVec2, DVec3};
use crate::fragment::{Fragment, FragmentKind, FragmentList, FragmentParams};
use crate::scene::NodeId;

use super::place;

/// Deferred label painting, supplied by whoever owns the `Text` node.
///
/// The engine never calls this while generating fragments. The painting
/// backend calls it through [`Scene::draw_label`](crate::scene::Scene::draw_label)
/// once the label fragment's turn comes in paint order.
pub trait LabelDraw {
    /// Draws label `index` onto `surface`. `pt1` is the projected anchor,
    /// `pt2` the projected second anchor giving the label direction.
    fn draw(&self, surface: &mut dyn Any, pt1: DVec2, pt2: DVec2, index: usize, scale: f64, line_scale: f64);
}

/// Labels placed at pairs of anchor points.
///
/// `pos1` and `pos2` are flat `x, y, z, x, y, z, ...` sequences; item `i`
/// uses the `i`-th triple of each.
pub struct Text {
    pub pos1: Vec<f64>,
    pub pos2: Vec<f64>,
    pub drawer: Box<dyn LabelDraw>,
}

impl fmt::Debug for Text {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Text")
            .field("pos1", &self.pos1)
            .field("pos2", &self.pos2)
            .finish_non_exhaustive()
    }
}

impl Text {
    pub fn new(pos1: Vec<f64>, pos2: Vec<f64>, drawer: impl LabelDraw + 'static) -> Self {
        Self { pos1, pos2, drawer: Box::new(drawer) }
    }

    /// Number of complete anchor pairs.
    #[inline]
    pub fn len(&self) -> usize {
        self.pos1.len().min(self.pos2.len()) / 3
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub(crate) fn emit(&self, id: NodeId, outer: &DMat4, camera: &Camera, out: &mut FragmentList) {
        let mut f = Fragment::new(FragmentKind::PathMarker);
        f.source = Some(id);
        f.path_size = 1.0;

        for index in 0..self.len() {
            let b = index * 3;
            let p1 = DVec3::new(self.pos1[b], self.pos1[b + 1], self.pos1[b + 2]);
            let p2 = DVec3::new(self.pos2[b], self.pos2[b + 1], self.pos2[b + 2]);

            f.set_point(0, place(outer, camera, p1));
            let anchor = (*outer * p2.extend(1.0)).truncate();
            f.params = Some(FragmentParams::Label { index, anchor });

            if f.is_finite() && anchor.is_finite() {
                out.push(f);
            }
        }
    }
}
