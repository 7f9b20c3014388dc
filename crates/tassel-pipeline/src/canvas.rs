//! Canvas preparation: decode, fit, and centre the source photo.
//!
//! The renderer works on a fixed square canvas. The source is scaled down
//! (never up) so its longer side fits the canvas, then centred. The
//! uncovered margin is transparent black, which the segmenter treats as
//! subject since it ignores alpha; inputs are expected to be roughly
//! square.

use image::DynamicImage;
use image::imageops::{self, FilterType};

use crate::types::{PipelineError, RgbaImage};

/// Decode raw image bytes and centre them on a `side x side` canvas.
///
/// Supports PNG, JPEG, BMP, and WebP (whatever the `image` crate is built
/// with).
///
/// # Errors
///
/// Returns [`PipelineError::EmptyInput`] if `bytes` is empty.
/// Returns [`PipelineError::InvalidConfig`] if `side` is zero.
/// Returns [`PipelineError::ImageDecode`] if the image format is
/// unrecognized or the data is corrupt.
pub fn load_centered(bytes: &[u8], side: u32) -> Result<RgbaImage, PipelineError> {
    if bytes.is_empty() {
        return Err(PipelineError::EmptyInput);
    }
    if side == 0 {
        return Err(PipelineError::InvalidConfig(
            "canvas side must be at least 1 pixel".to_owned(),
        ));
    }

    let image = image::load_from_memory(bytes)?;
    log::debug!(
        "decoded {}x{} source image",
        image.width(),
        image.height()
    );
    Ok(center_on_canvas(&image, side))
}

/// Size of `(width, height)` after fitting within `side`, preserving
/// aspect ratio. Never upscales; never returns a zero dimension.
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub fn fitted_size(width: u32, height: u32, side: u32) -> (u32, u32) {
    if width == 0 || height == 0 {
        return (width, height);
    }
    let side = f64::from(side);
    let scale = (side / f64::from(width))
        .min(side / f64::from(height))
        .min(1.0);
    let fit = |v: u32| ((f64::from(v) * scale).round() as u32).max(1);
    (fit(width), fit(height))
}

/// Scale `image` to fit within `side` and centre it on a transparent
/// `side x side` canvas.
#[must_use = "returns the centred canvas"]
#[allow(clippy::cast_possible_truncation)]
pub fn center_on_canvas(image: &DynamicImage, side: u32) -> RgbaImage {
    let mut canvas = RgbaImage::new(side, side);
    let (w, h) = fitted_size(image.width(), image.height(), side);
    if w == 0 || h == 0 {
        return canvas;
    }

    let rgba = image.to_rgba8();
    let scaled = if (w, h) == rgba.dimensions() {
        rgba
    } else {
        imageops::resize(&rgba, w, h, FilterType::Triangle)
    };

    let offset = |extent: u32| ((f64::from(side) - f64::from(extent)) / 2.0).round() as i64;
    imageops::overlay(&mut canvas, &scaled, offset(w), offset(h));
    canvas
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use image::Rgba;

    use super::*;

    fn png_bytes(img: &RgbaImage) -> Vec<u8> {
        let mut buf = Vec::new();
        let encoder = image::codecs::png::PngEncoder::new(&mut buf);
        image::ImageEncoder::write_image(
            encoder,
            img.as_raw(),
            img.width(),
            img.height(),
            image::ExtendedColorType::Rgba8,
        )
        .unwrap();
        buf
    }

    #[test]
    fn empty_input_returns_error() {
        assert!(matches!(
            load_centered(&[], 900),
            Err(PipelineError::EmptyInput)
        ));
    }

    #[test]
    fn corrupt_bytes_returns_image_decode_error() {
        assert!(matches!(
            load_centered(&[0xFF, 0xFE, 0x00, 0x01], 900),
            Err(PipelineError::ImageDecode(_))
        ));
    }

    #[test]
    fn zero_side_is_rejected() {
        let png = png_bytes(&RgbaImage::new(2, 2));
        assert!(matches!(
            load_centered(&png, 0),
            Err(PipelineError::InvalidConfig(_))
        ));
    }

    #[test]
    fn fitted_size_scales_down_preserving_aspect() {
        assert_eq!(fitted_size(1800, 900, 900), (900, 450));
        assert_eq!(fitted_size(100, 50, 90), (90, 45));
        assert_eq!(fitted_size(300, 1200, 900), (225, 900));
    }

    #[test]
    fn fitted_size_never_upscales() {
        assert_eq!(fitted_size(200, 100, 900), (200, 100));
    }

    #[test]
    fn fitted_size_keeps_at_least_one_pixel() {
        assert_eq!(fitted_size(10_000, 1, 100), (100, 1));
    }

    #[test]
    fn wide_image_is_centred_vertically() {
        let img = RgbaImage::from_pixel(100, 50, Rgba([10, 20, 30, 255]));
        let canvas = center_on_canvas(&DynamicImage::ImageRgba8(img), 90);
        assert_eq!(canvas.dimensions(), (90, 90));

        // Content is 90x45 at offset (0, 23).
        assert_eq!(canvas.get_pixel(45, 22).0[3], 0);
        assert_eq!(canvas.get_pixel(45, 23).0, [10, 20, 30, 255]);
        assert_eq!(canvas.get_pixel(45, 67).0, [10, 20, 30, 255]);
        assert_eq!(canvas.get_pixel(45, 68).0[3], 0);
    }

    #[test]
    fn small_image_is_centred_unscaled() {
        let img = RgbaImage::from_pixel(4, 4, Rgba([0, 0, 0, 255]));
        let canvas = center_on_canvas(&DynamicImage::ImageRgba8(img), 10);
        assert_eq!(canvas.get_pixel(2, 2).0[3], 0);
        assert_eq!(canvas.get_pixel(3, 3).0, [0, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(6, 6).0, [0, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(7, 7).0[3], 0);
    }

    #[test]
    fn load_centered_decodes_png() {
        let png = png_bytes(&RgbaImage::from_pixel(30, 30, Rgba([200, 0, 0, 255])));
        let canvas = load_centered(&png, 60).unwrap();
        assert_eq!(canvas.dimensions(), (60, 60));
        assert_eq!(canvas.get_pixel(30, 30).0, [200, 0, 0, 255]);
        assert_eq!(canvas.get_pixel(0, 0).0, [0, 0, 0, 0]);
    }
}
