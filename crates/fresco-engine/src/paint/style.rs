/// Identity of an externally owned surface (fill) style.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct SurfaceStyleId(pub u32);

/// Identity of an externally owned line (stroke) style.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct LineStyleId(pub u32);

impl SurfaceStyleId {
    #[inline]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }
}

impl LineStyleId {
    #[inline]
    pub const fn new(v: u32) -> Self {
        Self(v)
    }
}
