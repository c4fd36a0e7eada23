
use {
    crate::{
        math::*,
        render::LineCanvas,
    },
    ggez::GameResult,
    rand::{
        distributions::{Distribution, Uniform},
        Rng,
    },
    smallvec::SmallVec,
    thiserror::Error,
};

/// Edge count of the largest shape in the demo; axis buffers this size or
/// larger never spill to the heap.
pub const MAX_AXES: usize = 10;

/// One unit normal per edge, in traversal order.
pub type Axes = SmallVec<[V2; MAX_AXES]>;

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ShapeError {
    #[error("a polygon needs at least 3 points, got {0}")]
    TooFewPoints(usize),
    #[error("axis buffer has {capacity} slots but the shape has {needed} edges")]
    AxesBufferTooSmall { capacity: usize, needed: usize },
    #[error("vertex index {index} out of range for {count} vertices")]
    VertexOutOfRange { index: usize, count: usize },
}

/// A polygon stored as an ordered vertex loop: vertex `i` joins vertex
/// `(i + 1) % len`. Callers guarantee at least 3 vertices and convexity;
/// neither is checked, and the collision test is wrong for concave input.
/// Vertices may be rewritten in place, so a shape can track the pointer
/// without losing its place in the arena.
#[derive(Clone, Debug)]
pub struct Shape2D {
    points: Vec<P2>,
}

impl Shape2D {
    pub fn new(points: Vec<P2>) -> Shape2D {
        Shape2D { points }
    }

    /// Axis-aligned rectangle, wound clockwise in screen coordinates:
    /// top-left, top-right, bottom-right, bottom-left.
    pub fn rectangle(x: f32, y: f32, width: f32, height: f32) -> Shape2D {
        let mut shape = Shape2D { points: vec![P2::origin(); 4] };
        shape.update_rectangle(x, y, width, height);
        shape
    }

    /// Rewrites all four corners in place. The shape keeps its identity, so
    /// handles and collision results taken earlier still refer to it.
    pub fn update_rectangle(&mut self, x: f32, y: f32, width: f32, height: f32) {
        debug_assert_eq!(self.points.len(), 4);
        self.points[0] = P2::new(x, y);
        self.points[1] = P2::new(x + width, y);
        self.points[2] = P2::new(x + width, y + height);
        self.points[3] = P2::new(x, y + height);
    }

    /// Right triangle with the right angle at `(x, y)`, the base running to
    /// `(x + base, y)` and the apex at `(x, y - height)`.
    pub fn right_triangle(x: f32, y: f32, base: f32, height: f32) -> Shape2D {
        let mut shape = Shape2D { points: vec![P2::origin(); 3] };
        shape.update_right_triangle(x, y, base, height);
        shape
    }

    pub fn update_right_triangle(&mut self, x: f32, y: f32, base: f32, height: f32) {
        debug_assert_eq!(self.points.len(), 3);
        self.points[0] = P2::new(x, y);
        self.points[1] = P2::new(x + base, y);
        self.points[2] = P2::new(x, y - height);
    }

    /// Places `point_count` vertices at equal angular steps around `center`,
    /// each at `radius` plus a uniform wobble in `[-perturbation,
    /// +perturbation]`. Angles increase monotonically and are never
    /// re-sorted, so the loop stays convex as long as the wobble is small
    /// against the radius.
    pub fn random_convex(
        point_count:  usize,
        center:       P2,
        radius:       f32,
        perturbation: f32,
        rng:          &mut impl Rng,
    ) -> Result<Shape2D, ShapeError> {
        if point_count < 3 {
            return Err(ShapeError::TooFewPoints(point_count));
        }

        let wobble = Uniform::new_inclusive(-perturbation, perturbation);
        let step = 2. * std::f32::consts::PI / point_count as f32;

        let points = (0..point_count)
            .map(|i| {
                let angle = i as f32 * step;
                let r = radius + wobble.sample(rng);
                center + r * V2::new(angle.cos(), angle.sin())
            })
            .collect();

        Ok(Shape2D { points })
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn vertex(&self, index: usize) -> Result<P2, ShapeError> {
        self.points.get(index)
            .copied()
            .ok_or(ShapeError::VertexOutOfRange { index, count: self.points.len() })
    }

    pub fn set_vertex(&mut self, index: usize, point: P2) -> Result<(), ShapeError> {
        let count = self.points.len();
        match self.points.get_mut(index) {
            Some(slot) => {
                *slot = point;
                Ok(())
            }
            None => Err(ShapeError::VertexOutOfRange { index, count }),
        }
    }

    /// Arithmetic mean of the vertices, recomputed on every call.
    pub fn center(&self) -> P2 {
        let sum = self.points.iter()
            .fold(V2::zeros(), |sum, p| sum + p.coords);
        P2::from(sum / self.points.len() as f32)
    }

    fn edge(&self, i: usize) -> V2 {
        let n = self.points.len();
        self.points[(i + 1) % n] - self.points[i]
    }

    fn edge_normal(&self, i: usize) -> V2 {
        // A zero-length edge yields a NaN axis here; degenerate shapes are
        // the caller's problem, the same as concave ones.
        left(self.edge(i)).normalize()
    }

    /// Unit normals of every edge, one per vertex, in traversal order.
    /// Parallel normals are not deduplicated.
    pub fn axes(&self) -> Axes {
        (0..self.points.len())
            .map(|i| self.edge_normal(i))
            .collect()
    }

    /// Fills `out` left to right with the edge normals and returns how many
    /// were written, which is always the vertex count.
    pub fn get_axes(&self, out: &mut [V2]) -> Result<usize, ShapeError> {
        let needed = self.points.len();
        if out.len() < needed {
            return Err(ShapeError::AxesBufferTooSmall { capacity: out.len(), needed });
        }

        for (i, slot) in out[..needed].iter_mut().enumerate() {
            *slot = self.edge_normal(i);
        }
        Ok(needed)
    }

    /// Dots every vertex against `axis` and returns the [min, max] range.
    pub fn project(&self, axis: V2) -> Interval {
        self.points.iter()
            .map(|p| axis.dot(&p.coords))
            .fold(
                Interval::new(f32::INFINITY, f32::NEG_INFINITY),
                |iv, dot| Interval::new(iv.min.min(dot), iv.max.max(dot)),
            )
    }

    /// Outlines the shape: one segment per edge, closing back to the first
    /// vertex.
    pub fn draw(&self, canvas: &mut impl LineCanvas) -> GameResult {
        let n = self.points.len();
        for i in 0..n {
            canvas.line(self.points[i], self.points[(i + 1) % n])?;
        }
        Ok(())
    }
}
