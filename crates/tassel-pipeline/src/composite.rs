//! Layered rasterisation of the mockup.
//!
//! The surface is a [`Pixmap`] owned by the render call and handed by
//! `&mut` to each stage in order. Later stages overwrite earlier ones:
//!
//! 1. [`blank_canvas`]: opaque white.
//! 2. [`draw_backing`]: noisy light grey under the padded mask.
//! 3. [`draw_subject`]: original colours under the segmentation mask.
//! 4. [`draw_stitches`]: brown dots along the padded boundary.
//! 5. Fringe strokes, see [`crate::fringe`].
//!
//! The canvas starts fully opaque and every stage either writes opaque
//! pixels or composites source-over, so alpha stays 255 everywhere.

use tiny_skia::{Color, FillRule, Paint, PathBuilder, Pixmap, Transform};

use crate::random::RandomSource;
use crate::style::{
    BACKING_BASE, BACKING_NOISE, STITCH_COLOR, STITCH_COLOR_ALPHA, STITCH_OPACITY, STITCH_RADIUS,
    STITCH_STRIDE,
};
use crate::types::{EdgePoint, Mask, PipelineError, RgbaImage};

/// Allocate an opaque white canvas.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyCanvas`] if either dimension is zero.
pub fn blank_canvas(width: u32, height: u32) -> Result<Pixmap, PipelineError> {
    let mut pixmap =
        Pixmap::new(width, height).ok_or(PipelineError::EmptyCanvas { width, height })?;
    pixmap.fill(Color::WHITE);
    Ok(pixmap)
}

/// Fill every padded pixel with a light fabric grey.
///
/// Each pixel gets an independent noise sample in
/// `[-BACKING_NOISE, BACKING_NOISE)` around [`BACKING_BASE`], so the
/// channel value lands in `[227, 243]`. Pixels outside the padded mask
/// are left as they are.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn draw_backing<R: RandomSource + ?Sized>(pixmap: &mut Pixmap, padded: &Mask, rng: &mut R) {
    let data = pixmap.data_mut();
    for (px, &set) in data.chunks_exact_mut(4).zip(padded.as_raw()) {
        if set == 0 {
            continue;
        }
        let noise = rng.uniform(-BACKING_NOISE, BACKING_NOISE);
        let v = (BACKING_BASE + noise).round().clamp(0.0, 255.0) as u8;
        px.copy_from_slice(&[v, v, v, 255]);
    }
}

/// Copy the source RGB of every subject pixel onto the canvas, fully
/// opaque.
pub fn draw_subject(pixmap: &mut Pixmap, source: &RgbaImage, mask: &Mask) {
    let data = pixmap.data_mut();
    for ((px, src), &set) in data
        .chunks_exact_mut(4)
        .zip(source.as_raw().chunks_exact(4))
        .zip(mask.as_raw())
    {
        if set == 0 {
            continue;
        }
        px.copy_from_slice(&[src[0], src[1], src[2], 255]);
    }
}

/// Draw a stitch dot on every [`STITCH_STRIDE`]-th point, starting with
/// the first.
///
/// Returns the number of dots drawn.
pub fn draw_stitches(pixmap: &mut Pixmap, points: &[EdgePoint]) -> usize {
    let [r, g, b] = STITCH_COLOR;
    let mut color = Color::from_rgba8(r, g, b, 255);
    color.apply_opacity(STITCH_COLOR_ALPHA * STITCH_OPACITY);

    let mut paint = Paint::default();
    paint.set_color(color);
    paint.anti_alias = true;

    let mut drawn = 0;
    for p in points.iter().step_by(STITCH_STRIDE) {
        #[allow(clippy::cast_precision_loss)]
        let Some(circle) = PathBuilder::from_circle(p.x as f32, p.y as f32, STITCH_RADIUS) else {
            continue;
        };
        pixmap.fill_path(&circle, &paint, FillRule::Winding, Transform::identity(), None);
        drawn += 1;
    }
    drawn
}

/// Convert the finished canvas into a straight-alpha [`RgbaImage`].
#[must_use = "returns the composited image"]
pub fn into_rgba(pixmap: &Pixmap) -> RgbaImage {
    let mut img = RgbaImage::new(pixmap.width(), pixmap.height());
    for (out, px) in img.pixels_mut().zip(pixmap.pixels()) {
        let c = px.demultiply();
        *out = image::Rgba([c.red(), c.green(), c.blue(), c.alpha()]);
    }
    img
}
