//! Boundary extraction from the padded mask.
//!
//! A pixel is on the boundary if it is set and at least one of its four
//! axis-aligned neighbours is not. Only the interior (one pixel in from
//! every side) is examined, so the outermost ring is never an edge.
//!
//! [`edge_points`] turns the edge mask into a row-major list of
//! coordinates. The stitch and fringe passes collect points with different
//! insets ([`STITCH_INSET`](crate::style::STITCH_INSET) and
//! [`FRINGE_INSET`](crate::style::FRINGE_INSET)); the fringe pass needs the
//! extra pixel so its gradient lookups stay inside the mask.

use crate::types::{EdgePoint, Mask};

/// Extract the 4-connected boundary of `padded`.
#[must_use = "returns the edge mask"]
pub fn find_edges(padded: &Mask) -> Mask {
    let (w, h) = (padded.width(), padded.height());
    let mut edges = Mask::new(w, h);
    if w < 3 || h < 3 {
        return edges;
    }

    for y in 1..h - 1 {
        for x in 1..w - 1 {
            if !padded.get(x, y) {
                continue;
            }
            if !padded.get(x - 1, y)
                || !padded.get(x + 1, y)
                || !padded.get(x, y - 1)
                || !padded.get(x, y + 1)
            {
                edges.set(x, y, true);
            }
        }
    }
    edges
}

/// Collect set pixels of `edges` in row-major order, skipping any pixel
/// within `inset` of the image border.
#[must_use = "returns the edge point list"]
pub fn edge_points(edges: &Mask, inset: u32) -> Vec<EdgePoint> {
    let (w, h) = (edges.width(), edges.height());
    let Some(limit_x) = w.checked_sub(inset) else {
        return Vec::new();
    };
    let Some(limit_y) = h.checked_sub(inset) else {
        return Vec::new();
    };

    let mut points = Vec::new();
    for y in inset..limit_y {
        for x in inset..limit_x {
            if edges.get(x, y) {
                points.push(EdgePoint { x, y });
            }
        }
    }
    points
}
