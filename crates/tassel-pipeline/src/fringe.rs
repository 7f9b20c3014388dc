//! Randomised fringe strokes radiating from the padded boundary.
//!
//! Two passes, both sampling edge points uniformly with replacement so
//! strokes cluster the way loose threads do:
//!
//! - **Primary**: `density` hairlines pointing roughly outward. The
//!   outward direction is the negated mask gradient at the root, jittered
//!   per axis by up to [`FRINGE_JITTER`] and re-normalised.
//! - **Thickening**: `floor(density * THICKEN_RATIO)` short strokes in
//!   random directions that fill in the base of the fringe.
//!
//! An empty point list makes the whole stage a no-op.

use tiny_skia::{Color, Paint, PathBuilder, Pixmap, Stroke, Transform};

use crate::random::RandomSource;
use crate::style::{
    FRINGE_COLOR, FRINGE_JITTER, FRINGE_LENGTH_MAX, FRINGE_LENGTH_MIN, FRINGE_OPACITY,
    STROKE_WIDTH, THICKEN_COLOR, THICKEN_LENGTH_MAX, THICKEN_LENGTH_MIN, THICKEN_OPACITY,
    THICKEN_RATIO,
};
use crate::types::{EdgePoint, Mask};

/// A straight stroke from `from` to `to`, in canvas coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Root of the stroke (an edge point).
    pub from: (f64, f64),
    /// Free end of the stroke.
    pub to: (f64, f64),
}

impl Segment {
    /// Euclidean length of the segment.
    #[must_use]
    pub fn length(&self) -> f64 {
        (self.to.0 - self.from.0).hypot(self.to.1 - self.from.1)
    }
}

/// Number of strokes drawn by each pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FringeStats {
    /// Primary hairlines.
    pub primary: usize,
    /// Thickening strokes.
    pub secondary: usize,
}

/// Number of thickening strokes for a given primary density.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn thicken_count(density: u32) -> usize {
    (f64::from(density) * THICKEN_RATIO).floor() as usize
}

/// Scale `(x, y)` to unit length. A zero vector is divided by one and so
/// stays zero; the result is always finite.
fn normalize(x: f64, y: f64) -> (f64, f64) {
    let len = x.hypot(y);
    let len = if len > 0.0 { len } else { 1.0 };
    (x / len, y / len)
}

/// Reads the padded mask at an offset from `p`, as `1.0` or `0.0`.
fn sample(padded: &Mask, p: EdgePoint, dx: i32, dy: i32) -> f64 {
    match (p.x.checked_add_signed(dx), p.y.checked_add_signed(dy)) {
        (Some(x), Some(y)) if padded.get(x, y) => 1.0,
        _ => 0.0,
    }
}

/// Outward direction at `p`: the negated central-difference gradient of
/// the padded mask. Each component is in `{-1, 0, 1}`.
#[must_use]
pub fn outward_normal(padded: &Mask, p: EdgePoint) -> (f64, f64) {
    let gx = sample(padded, p, 1, 0) - sample(padded, p, -1, 0);
    let gy = sample(padded, p, 0, 1) - sample(padded, p, 0, -1);
    (-gx, -gy)
}

/// Geometry of one primary hairline rooted at `p`.
pub fn primary_segment<R: RandomSource + ?Sized>(
    padded: &Mask,
    p: EdgePoint,
    length: u32,
    rng: &mut R,
) -> Segment {
    let (nx, ny) = outward_normal(padded, p);
    let (nx, ny) = normalize(nx, ny);
    let dx = nx + rng.uniform(-FRINGE_JITTER, FRINGE_JITTER);
    let dy = ny + rng.uniform(-FRINGE_JITTER, FRINGE_JITTER);
    let (dx, dy) = normalize(dx, dy);

    let len = f64::from(length) * rng.uniform(FRINGE_LENGTH_MIN, FRINGE_LENGTH_MAX);
    let from = (f64::from(p.x), f64::from(p.y));
    Segment {
        from,
        to: (dx.mul_add(len, from.0), dy.mul_add(len, from.1)),
    }
}

/// Geometry of one short thickening stroke rooted at `p`.
pub fn thicken_segment<R: RandomSource + ?Sized>(
    p: EdgePoint,
    length: u32,
    rng: &mut R,
) -> Segment {
    let angle = rng.uniform(0.0, std::f64::consts::TAU);
    let len = f64::from(length) * rng.uniform(THICKEN_LENGTH_MIN, THICKEN_LENGTH_MAX);
    let from = (f64::from(p.x), f64::from(p.y));
    Segment {
        from,
        to: (angle.cos().mul_add(len, from.0), angle.sin().mul_add(len, from.1)),
    }
}

fn paint(rgb: [u8; 3], opacity: f32) -> Paint<'static> {
    let [r, g, b] = rgb;
    let mut color = Color::from_rgba8(r, g, b, 255);
    color.apply_opacity(opacity);

    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;
    paint
}

#[allow(clippy::cast_possible_truncation)]
fn stroke_segment(pixmap: &mut Pixmap, segment: &Segment, paint: &Paint<'_>, stroke: &Stroke) {
    let mut pb = PathBuilder::new();
    pb.move_to(segment.from.0 as f32, segment.from.1 as f32);
    pb.line_to(segment.to.0 as f32, segment.to.1 as f32);
    // Zero-length segments produce no path and nothing to draw.
    if let Some(path) = pb.finish() {
        pixmap.stroke_path(&path, paint, stroke, Transform::identity(), None);
    }
}

/// Draw both fringe passes onto `pixmap`.
///
/// `points` are the fringe roots, `padded` the mask they were derived
/// from. Returns how many strokes each pass drew.
pub fn draw_fringe<R: RandomSource + ?Sized>(
    pixmap: &mut Pixmap,
    points: &[EdgePoint],
    padded: &Mask,
    length: u32,
    density: u32,
    rng: &mut R,
) -> FringeStats {
    if points.is_empty() {
        return FringeStats::default();
    }

    let stroke = Stroke {
        width: STROKE_WIDTH,
        ..Stroke::default()
    };
    let mut stats = FringeStats::default();

    let primary_paint = paint(FRINGE_COLOR, FRINGE_OPACITY);
    for _ in 0..density {
        let root = points[rng.index(points.len())];
        let segment = primary_segment(padded, root, length, rng);
        stroke_segment(pixmap, &segment, &primary_paint, &stroke);
        stats.primary += 1;
    }

    let thicken_paint = paint(THICKEN_COLOR, THICKEN_OPACITY);
    for _ in 0..thicken_count(density) {
        let root = points[rng.index(points.len())];
        let segment = thicken_segment(root, length, rng);
        stroke_segment(pixmap, &segment, &thicken_paint, &stroke);
        stats.secondary += 1;
    }

    log::debug!(
        "fringe: {} roots, {} primary + {} thickening strokes",
        points.len(),
        stats.primary,
        stats.secondary
    );
    stats
}
