//! Visual style constants.
//!
//! Every threshold, colour, opacity, and ratio used by the drawing stages
//! lives here. Changing any of them changes the look of every mockup, so
//! they are kept together rather than inlined at their call sites.

/// Side length of the square working canvas, in pixels.
pub const CANVAS_SIDE: u32 = 900;

/// A pixel is background only if R, G and B all strictly exceed this value.
pub const BACKGROUND_THRESHOLD: u8 = 245;

/// Upper bound on dilation steps, regardless of the requested padding.
pub const MAX_DILATION_STEPS: u32 = 60;

/// Base grey level of the fabric backing.
pub const BACKING_BASE: f64 = 235.0;

/// Half-width of the uniform noise added to [`BACKING_BASE`].
pub const BACKING_NOISE: f64 = 8.0;

/// Every n-th stitch edge point receives a stitch dot.
pub const STITCH_STRIDE: usize = 6;

/// Stitch dot radius in pixels.
pub const STITCH_RADIUS: f32 = 1.2;

/// Stitch dot colour (RGB) and its own alpha.
pub const STITCH_COLOR: [u8; 3] = [90, 64, 40];
pub const STITCH_COLOR_ALPHA: f32 = 0.95;

/// Layer opacity applied on top of [`STITCH_COLOR_ALPHA`].
pub const STITCH_OPACITY: f32 = 0.9;

/// Edge points closer than this to the image border are skipped when
/// collecting stitch positions.
pub const STITCH_INSET: u32 = 1;

/// Edge points closer than this to the image border are skipped when
/// collecting fringe roots.
pub const FRINGE_INSET: u32 = 2;

/// Primary fringe stroke colour and opacity.
pub const FRINGE_COLOR: [u8; 3] = [160, 140, 110];
pub const FRINGE_OPACITY: f32 = 0.55;

/// Maximum per-axis jitter added to the outward normal before
/// re-normalisation.
pub const FRINGE_JITTER: f64 = 0.45;

/// Primary stroke length range, as multiples of the configured fringe length.
pub const FRINGE_LENGTH_MIN: f64 = 0.4;
pub const FRINGE_LENGTH_MAX: f64 = 1.3;

/// Number of thickening strokes per primary stroke (floored).
pub const THICKEN_RATIO: f64 = 0.25;

/// Thickening stroke colour and opacity.
pub const THICKEN_COLOR: [u8; 3] = [110, 90, 70];
pub const THICKEN_OPACITY: f32 = 0.22;

/// Thickening stroke length range, as multiples of the configured fringe length.
pub const THICKEN_LENGTH_MIN: f64 = 0.15;
pub const THICKEN_LENGTH_MAX: f64 = 0.30;

/// Width of every fringe stroke, in pixels.
pub const STROKE_WIDTH: f32 = 1.0;
