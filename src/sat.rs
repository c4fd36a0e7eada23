
use {
    crate::{
        math::*,
        shape::Shape2D,
    },
};

/// Separating-axis test for a pair of convex polygons.
///
/// Returns `None` as soon as any edge normal of either shape separates the
/// projections, scanning all of `shape1`'s axes and then all of `shape2`'s.
/// When every axis overlaps, returns the minimum translation vector: the
/// first axis in scan order with the strictly smallest overlap, scaled by
/// that overlap. The vector points along the scanned axis, whose sign
/// depends on the winding of the shape it came from.
pub fn is_colliding(shape1: &Shape2D, shape2: &Shape2D) -> Option<V2> {
    let mut min_overlap = f32::INFINITY;
    let mut mtv = V2::zeros();

    overlap_on_axes(shape1, shape2, &shape1.axes(), &mut min_overlap, &mut mtv)?;
    overlap_on_axes(shape1, shape2, &shape2.axes(), &mut min_overlap, &mut mtv)?;

    Some(mtv)
}

// Returns None on the first separating axis, so the caller's `?` stops the
// scan without touching the remaining axes.
fn overlap_on_axes(
    shape1:      &Shape2D,
    shape2:      &Shape2D,
    axes:        &[V2],
    min_overlap: &mut f32,
    mtv:         &mut V2,
) -> Option<()> {
    for &axis in axes {
        let overlap = shape1.project(axis).overlap(&shape2.project(axis));
        if overlap <= 0. {
            return None;
        }

        if overlap < *min_overlap {
            *min_overlap = overlap;
            *mtv = axis * overlap;
        }
    }

    Some(())
}
