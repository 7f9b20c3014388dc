//! tassel-pipeline: Pure image processing pipeline (sans-IO).
//!
//! Turns a subject photo on a near-white background into a tassel /
//! embroidered-patch mockup through:
//! segmentation -> dilation -> edge extraction -> backing -> subject
//! overlay -> stitch dots -> fringe strokes.
//!
//! This crate has **no I/O dependencies** -- it operates on in-memory
//! byte slices and pixel buffers. Reading and writing files lives in the
//! `tassel` command-line crate.

pub mod canvas;
pub mod composite;
pub mod dilate;
pub mod edge;
pub mod fringe;
pub mod random;
pub mod segment;
pub mod style;
pub mod types;

pub use random::RandomSource;
pub use types::{
    Dimensions, EdgePoint, Mask, PipelineError, RenderConfig, RenderStats, Rendered, RgbaImage,
};

/// Render a mockup of `source` using the thread-local random generator.
///
/// `source` is normally a canvas produced by [`canvas::load_centered`].
/// Output is not reproducible between calls; use [`render_with`] and a
/// seeded generator when that matters.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyCanvas`] if `source` has a zero
/// dimension.
pub fn render(source: &RgbaImage, config: &RenderConfig) -> Result<RgbaImage, PipelineError> {
    render_with(source, config, &mut rand::rng())
}

/// Render a mockup of `source`, drawing all randomness from `rng`.
///
/// Two calls with identically seeded generators, the same source, and
/// the same config produce byte-identical images.
///
/// # Errors
///
/// Returns [`PipelineError::EmptyCanvas`] if `source` has a zero
/// dimension.
pub fn render_with<R: RandomSource + ?Sized>(
    source: &RgbaImage,
    config: &RenderConfig,
    rng: &mut R,
) -> Result<RgbaImage, PipelineError> {
    render_staged(source, config, rng).map(|rendered| rendered.image)
}

/// Render a mockup and keep every intermediate mask and count.
///
/// # Pipeline steps
///
/// 1. Segment subject from background
/// 2. Dilate the segmentation mask by `config.padding`
/// 3. Extract the boundary of the padded mask
/// 4. Clear to opaque white
/// 5. Noisy backing under the padded mask
/// 6. Original subject colours under the segmentation mask
/// 7. Stitch dots along the boundary
/// 8. Primary and thickening fringe strokes
///
/// # Errors
///
/// Returns [`PipelineError::EmptyCanvas`] if `source` has a zero
/// dimension.
pub fn render_staged<R: RandomSource + ?Sized>(
    source: &RgbaImage,
    config: &RenderConfig,
    rng: &mut R,
) -> Result<Rendered, PipelineError> {
    let (width, height) = source.dimensions();
    let mut pixmap = composite::blank_canvas(width, height)?;

    // 1-3. Masks.
    let mask = segment::segment(source);
    let padded = dilate::dilate(&mask, config.padding);
    let edges = edge::find_edges(&padded);
    let stitch_points = edge::edge_points(&edges, style::STITCH_INSET);
    let fringe_points = edge::edge_points(&edges, style::FRINGE_INSET);
    log::debug!(
        "render {width}x{height}: {} subject, {} padded, {} edge pixels",
        mask.count(),
        padded.count(),
        edges.count()
    );

    // 4-7. Layers.
    composite::draw_backing(&mut pixmap, &padded, rng);
    composite::draw_subject(&mut pixmap, source, &mask);
    let stitches = composite::draw_stitches(&mut pixmap, &stitch_points);

    // 8. Fringe.
    let fringe = fringe::draw_fringe(
        &mut pixmap,
        &fringe_points,
        &padded,
        config.fringe_length,
        config.fringe_density,
        rng,
    );

    let stats = RenderStats {
        subject_pixels: mask.count(),
        padded_pixels: padded.count(),
        stitch_points: stitch_points.len(),
        fringe_points: fringe_points.len(),
        stitches,
        primary_strokes: fringe.primary,
        secondary_strokes: fringe.secondary,
    };

    Ok(Rendered {
        image: composite::into_rgba(&pixmap),
        mask,
        padded,
        edges,
        stats,
    })
}
