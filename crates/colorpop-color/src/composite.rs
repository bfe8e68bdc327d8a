//! Selective Compositor
//!
//! Produces the output image: original color where the combined mask is
//! selected, grayscale everywhere else. The selection is an exact per-pixel
//! binary mux; the two sources are never blended, so no gray halo can leak
//! into a kept region or vice versa.

use crate::colorspace::convert_to_gray;
use crate::error::{ColorError, ColorResult};
use colorpop_core::{RgbImage, color};

/// Composite `original` against its grayscale derivation under `mask`.
///
/// # Errors
///
/// Returns a dimension-mismatch error if the mask's dimensions differ from
/// the image's; always succeeds otherwise.
pub fn composite(original: &RgbImage, mask: &colorpop_core::Mask) -> ColorResult<RgbImage> {
    let (width, height) = original.dimensions();
    if mask.dimensions() != (width, height) {
        return Err(ColorError::Core(colorpop_core::Error::DimensionMismatch {
            expected: (width, height),
            actual: mask.dimensions(),
        }));
    }

    let gray = convert_to_gray(original)?;
    let mut out = RgbImage::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let pixel = if mask.get_unchecked(x, y) {
                original.get_pixel_unchecked(x, y)
            } else {
                let v = gray.get_unchecked(x, y);
                color::compose_rgb(v, v, v)
            };
            out.set_pixel_unchecked(x, y, pixel);
        }
    }
    Ok(out)
}
