/// Geometric kind of a fragment.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Default)]
pub enum FragmentKind {
    /// No geometry; never occludes and is never occluded.
    #[default]
    None,
    Triangle,
    LineSegment,
    /// Single anchor point drawn with a 2D marker outline or a label.
    PathMarker,
}

impl FragmentKind {
    /// Number of meaningful entries in `points`/`projected`.
    #[inline]
    pub const fn n_points(self) -> usize {
        match self {
            FragmentKind::Triangle => 3,
            FragmentKind::LineSegment => 2,
            FragmentKind::PathMarker => 1,
            FragmentKind::None => 0,
        }
    }
}
