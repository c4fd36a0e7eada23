
use {
    ggez::nalgebra as na,
};

pub type V2 = na::Vector2<f32>;
pub type P2 = na::Point2<f32>;

/// Quarter turn counter-clockwise: `(x, y)` becomes `(-y, x)`.
pub fn left(v: V2) -> V2 {
    V2::new(-v.y, v.x)
}

/// The 1D range a shape covers when its vertices are dotted against an axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Interval {
    pub min: f32,
    pub max: f32,
}

impl Interval {
    pub fn new(min: f32, max: f32) -> Interval {
        Interval { min, max }
    }

    pub fn width(&self) -> f32 {
        self.max - self.min
    }

    /// Signed overlap with `other`: positive when the intervals share a
    /// range, zero when they touch, negative when there is a gap.
    pub fn overlap(&self, other: &Interval) -> f32 {
        self.max.min(other.max) - self.min.max(other.min)
    }
}
