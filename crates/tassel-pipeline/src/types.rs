//! Shared types for the tassel mockup pipeline.

use serde::{Deserialize, Serialize};

/// Re-export `GrayImage` so downstream crates can write mask previews
/// without depending on `image` directly.
pub use image::GrayImage;

/// Re-export `RgbaImage`, the pixel buffer every stage reads and writes.
pub use image::RgbaImage;

/// Image dimensions in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Dimensions {
    /// Total number of pixels.
    #[must_use]
    pub const fn area(self) -> usize {
        self.width as usize * self.height as usize
    }
}

/// Binary per-pixel mask, row-major, one byte per pixel.
///
/// A value of `1` marks subject (or padded subject) and `0` marks
/// background. Masks are produced once by their generating stage and are
/// read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    dimensions: Dimensions,
    data: Vec<u8>,
}

impl Mask {
    /// Create an all-background mask.
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        let dimensions = Dimensions { width, height };
        Self {
            dimensions,
            data: vec![0; dimensions.area()],
        }
    }

    /// Build a mask by evaluating `f` at every pixel.
    #[must_use]
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> bool) -> Self {
        let mut mask = Self::new(width, height);
        for y in 0..height {
            for x in 0..width {
                if f(x, y) {
                    mask.set(x, y, true);
                }
            }
        }
        mask
    }

    /// Mask dimensions.
    #[must_use]
    pub const fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Width in pixels.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.dimensions.width
    }

    /// Height in pixels.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.dimensions.height
    }

    /// Row-major index of `(x, y)`.
    #[must_use]
    pub const fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.dimensions.width as usize + x as usize
    }

    /// Whether `(x, y)` is set. Out-of-range coordinates read as unset.
    #[must_use]
    pub fn get(&self, x: u32, y: u32) -> bool {
        x < self.width() && y < self.height() && self.data[self.index(x, y)] != 0
    }

    /// Set or clear `(x, y)`. Out-of-range coordinates are ignored.
    pub fn set(&mut self, x: u32, y: u32, value: bool) {
        if x < self.width() && y < self.height() {
            let i = self.index(x, y);
            self.data[i] = u8::from(value);
        }
    }

    /// Raw `0/1` values.
    #[must_use]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    /// Number of set pixels.
    #[must_use]
    pub fn count(&self) -> usize {
        self.data.iter().filter(|&&v| v != 0).count()
    }

    /// Returns `true` if no pixel is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.iter().all(|&v| v == 0)
    }

    /// Returns `true` if every pixel set here is also set in `other`.
    ///
    /// Masks of different dimensions are never subsets of each other.
    #[must_use]
    pub fn is_subset_of(&self, other: &Self) -> bool {
        self.dimensions == other.dimensions
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(&a, &b)| a == 0 || b != 0)
    }

    /// Render as a grayscale preview: 255 for set pixels, 0 otherwise.
    #[must_use = "returns the preview image"]
    pub fn to_luma(&self) -> GrayImage {
        GrayImage::from_fn(self.width(), self.height(), |x, y| {
            image::Luma([if self.get(x, y) { 255 } else { 0 }])
        })
    }
}

/// Integer pixel coordinate of a boundary pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgePoint {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

/// Per-render configuration supplied by the caller.
///
/// The fixed look of the mockup (colours, opacities, thresholds) is not
/// configurable here; see [`crate::style`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Dilation radius in pixels. Values above
    /// [`MAX_DILATION_STEPS`](crate::style::MAX_DILATION_STEPS) are clamped.
    pub padding: u32,

    /// Nominal fringe stroke length in pixels.
    pub fringe_length: u32,

    /// Number of primary fringe strokes.
    pub fringe_density: u32,
}

impl RenderConfig {
    /// Default dilation radius.
    pub const DEFAULT_PADDING: u32 = 12;
    /// Default fringe stroke length.
    pub const DEFAULT_FRINGE_LENGTH: u32 = 18;
    /// Default number of primary fringe strokes.
    pub const DEFAULT_FRINGE_DENSITY: u32 = 2500;
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            padding: Self::DEFAULT_PADDING,
            fringe_length: Self::DEFAULT_FRINGE_LENGTH,
            fringe_density: Self::DEFAULT_FRINGE_DENSITY,
        }
    }
}

/// Counts gathered while rendering, useful for diagnostics and tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RenderStats {
    /// Pixels classified as subject.
    pub subject_pixels: usize,
    /// Pixels set in the padded mask.
    pub padded_pixels: usize,
    /// Edge points eligible for stitch dots.
    pub stitch_points: usize,
    /// Edge points eligible as fringe roots.
    pub fringe_points: usize,
    /// Stitch dots drawn.
    pub stitches: usize,
    /// Primary fringe strokes drawn.
    pub primary_strokes: usize,
    /// Thickening strokes drawn.
    pub secondary_strokes: usize,
}

/// Result of a render with all intermediate masks preserved.
#[derive(Debug, Clone)]
pub struct Rendered {
    /// Final composited image. Every pixel is fully opaque.
    pub image: RgbaImage,
    /// Segmentation mask of the source.
    pub mask: Mask,
    /// Segmentation mask grown by the configured padding.
    pub padded: Mask,
    /// One-pixel boundary of the padded mask.
    pub edges: Mask,
    /// Counts gathered along the way.
    pub stats: RenderStats,
}

/// Errors that can occur during pipeline processing.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Failed to decode the input image.
    #[error("failed to decode image: {0}")]
    ImageDecode(#[from] image::ImageError),

    /// The input image bytes were empty.
    #[error("input image data is empty")]
    EmptyInput,

    /// A drawing surface of zero area was requested.
    #[error("cannot render onto a {width}x{height} canvas")]
    EmptyCanvas {
        /// Requested width.
        width: u32,
        /// Requested height.
        height: u32,
    },

    /// Configuration is invalid.
    #[error("invalid render configuration: {0}")]
    InvalidConfig(String),
}
