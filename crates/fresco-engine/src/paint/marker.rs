use crate::coords::DVec2;

/// 2D outline drawn at every point of a marker primitive.
///
/// Coordinates are relative to the marker center in unscaled marker units;
/// the backend multiplies them by the fragment's `path_size`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MarkerPath {
    pub outline: Vec<DVec2>,
    pub closed: bool,
}

impl MarkerPath {
    #[inline]
    pub fn new(outline: Vec<DVec2>, closed: bool) -> Self {
        Self { outline, closed }
    }

    /// Closed square of half-width `r`.
    pub fn square(r: f64) -> Self {
        Self::new(
            vec![DVec2::new(-r, -r), DVec2::new(r, -r), DVec2::new(r, r), DVec2::new(-r, r)],
            true,
        )
    }

    /// Closed regular polygon approximating a circle of radius `r`.
    pub fn circle(r: f64, segments: usize) -> Self {
        let n = segments.max(3);
        let outline = (0..n)
            .map(|i| {
                let a = core::f64::consts::TAU * i as f64 / n as f64;
                DVec2::from_angle(a) * r
            })
            .collect();
        Self::new(outline, true)
    }
}
