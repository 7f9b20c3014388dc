//! Background segmentation by brightness threshold.
//!
//! Source photos are expected on a near-white background. Any pixel whose
//! R, G and B all exceed [`BACKGROUND_THRESHOLD`] is background; everything
//! else, including fully transparent pixels, is subject. Alpha is ignored.
//!
//! This is the first step in the pipeline: RGBA in, [`Mask`] out.

use crate::style::BACKGROUND_THRESHOLD;
use crate::types::{Mask, RgbaImage};

/// Returns `true` if an RGB triple counts as background.
#[must_use]
pub const fn is_background(r: u8, g: u8, b: u8) -> bool {
    r > BACKGROUND_THRESHOLD && g > BACKGROUND_THRESHOLD && b > BACKGROUND_THRESHOLD
}

/// Classify every pixel of `image` as subject (1) or background (0).
#[must_use = "returns the segmentation mask"]
pub fn segment(image: &RgbaImage) -> Mask {
    Mask::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, _] = image.get_pixel(x, y).0;
        !is_background(r, g, b)
    })
}
