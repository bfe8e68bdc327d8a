//! Image-level color space conversion
//!
//! Provides whole-image conversions between the additive (RGB) and
//! perceptual (HSV) representations, plus grayscale derivation. The
//! pixel-level math lives in `colorpop_core::color`.

use crate::ColorResult;
use colorpop_core::{GrayImage, HsvImage, RgbImage, color};

/// Convert an RGB image to its HSV representation.
///
/// The output stores H, S, V in the R, G, B byte positions. Dimensions are
/// preserved exactly; the conversion is lossless up to the standard
/// color-space quantization.
pub fn convert_rgb_to_hsv(img: &RgbImage) -> ColorResult<HsvImage> {
    let (width, height) = img.dimensions();
    let mut out = HsvImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = color::extract_rgb(img.get_pixel_unchecked(x, y));
            let hsv = color::rgb_to_hsv(r, g, b);
            out.set_hsv(x, y, hsv)?;
        }
    }
    Ok(out)
}

/// Derive a single-channel luminance image (ITU-R BT.601).
pub fn convert_to_gray(img: &RgbImage) -> ColorResult<GrayImage> {
    let (width, height) = img.dimensions();
    let mut out = GrayImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let (r, g, b) = color::extract_rgb(img.get_pixel_unchecked(x, y));
            out.set(x, y, color::rgb_to_gray(r, g, b))?;
        }
    }
    Ok(out)
}

/// Expand a luminance image to three channels (R = G = B = luminance).
pub fn gray_to_rgb(img: &GrayImage) -> ColorResult<RgbImage> {
    let (width, height) = img.dimensions();
    let mut out = RgbImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let v = img.get_unchecked(x, y);
            out.set_pixel_unchecked(x, y, color::compose_rgb(v, v, v));
        }
    }
    Ok(out)
}
