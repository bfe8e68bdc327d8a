//! Colorpop Core - Pixel buffer types for selective color processing
//!
//! This crate provides the data structures used throughout the colorpop
//! library:
//!
//! - [`RgbImage`] - 32-bit RGB image (packed `0xRRGGBBAA` pixels)
//! - [`HsvImage`] - perceptual-representation image (H, S, V packed in the
//!   R, G, B byte positions)
//! - [`GrayImage`] - 8-bit luminance image
//! - [`Mask`] - per-pixel binary selection buffer
//!
//! All buffers are ownership-exclusive and row-major. The [`color`] module
//! holds the pixel-level channel packing and color space math.

pub mod error;
pub mod gray;
pub mod hsv;
pub mod mask;
pub mod rgb;

pub use error::{Error, Result};
pub use gray::GrayImage;
pub use hsv::HsvImage;
pub use mask::Mask;
pub use rgb::RgbImage;

/// Color channel packing and pixel-level color space conversion.
///
/// # Pixel format
///
/// 32-bit pixels are stored as `0xRRGGBBAA` (red in MSB, alpha in LSB).
/// HSV pixels reuse the same layout with H, S, V in the R, G, B positions.
pub mod color {
    /// Shift amounts for extracting color channels
    pub const RED_SHIFT: u32 = 24;
    pub const GREEN_SHIFT: u32 = 16;
    pub const BLUE_SHIFT: u32 = 8;
    pub const ALPHA_SHIFT: u32 = 0;

    /// Maximum hue value; hue is cyclic over `[0, HUE_MAX]` with period
    /// `HUE_MAX + 1`, so the full circle fits in one byte (two degrees per
    /// hue step).
    pub const HUE_MAX: i32 = 179;

    /// Extract red component from a 32-bit pixel.
    #[inline]
    pub fn red(pixel: u32) -> u8 {
        ((pixel >> RED_SHIFT) & 0xff) as u8
    }

    /// Extract green component from a 32-bit pixel.
    #[inline]
    pub fn green(pixel: u32) -> u8 {
        ((pixel >> GREEN_SHIFT) & 0xff) as u8
    }

    /// Extract blue component from a 32-bit pixel.
    #[inline]
    pub fn blue(pixel: u32) -> u8 {
        ((pixel >> BLUE_SHIFT) & 0xff) as u8
    }

    /// Compose a 32-bit RGB pixel (alpha = 255).
    #[inline]
    pub fn compose_rgb(r: u8, g: u8, b: u8) -> u32 {
        ((r as u32) << RED_SHIFT)
            | ((g as u32) << GREEN_SHIFT)
            | ((b as u32) << BLUE_SHIFT)
            | (255 << ALPHA_SHIFT)
    }

    /// Extract RGB values from a 32-bit pixel.
    #[inline]
    pub fn extract_rgb(pixel: u32) -> (u8, u8, u8) {
        (red(pixel), green(pixel), blue(pixel))
    }

    /// HSV color values.
    ///
    /// Ranges: h [0..179] (h=180 wraps to 0), s [0..255], v [0..255].
    ///
    /// Hue correspondence:
    /// - 0: red
    /// - 30: yellow
    /// - 60: green
    /// - 90: cyan
    /// - 120: blue
    /// - 150: magenta
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Hsv {
        pub h: i32,
        pub s: i32,
        pub v: i32,
    }

    /// Pack an HSV triple into a 32-bit word, H/S/V in the R/G/B positions.
    #[inline]
    pub fn compose_hsv(hsv: Hsv) -> u32 {
        ((hsv.h as u32) << RED_SHIFT)
            | ((hsv.s as u32) << GREEN_SHIFT)
            | ((hsv.v as u32) << BLUE_SHIFT)
    }

    /// Unpack an HSV triple from a 32-bit word.
    #[inline]
    pub fn extract_hsv(pixel: u32) -> Hsv {
        Hsv {
            h: red(pixel) as i32,
            s: green(pixel) as i32,
            v: blue(pixel) as i32,
        }
    }

    /// Convert RGB to HSV color space.
    ///
    /// Hue is scaled so that the full circle covers `[0, HUE_MAX]`;
    /// saturation and value are linear `[0, 255]`. Achromatic input
    /// (r = g = b) yields h = 0, s = 0.
    pub fn rgb_to_hsv(r: u8, g: u8, b: u8) -> Hsv {
        let ri = r as i32;
        let gi = g as i32;
        let bi = b as i32;

        let min = ri.min(gi).min(bi);
        let max = ri.max(gi).max(bi);
        let delta = max - min;

        let v = max;
        if delta == 0 {
            return Hsv { h: 0, s: 0, v };
        }

        let s = (255.0 * delta as f32 / max as f32 + 0.5) as i32;
        let h_raw = if ri == max {
            (gi - bi) as f32 / delta as f32
        } else if gi == max {
            2.0 + (bi - ri) as f32 / delta as f32
        } else {
            4.0 + (ri - gi) as f32 / delta as f32
        };

        // Each of the six sectors spans 30 hue units
        let mut h = h_raw * 30.0;
        if h < 0.0 {
            h += 180.0;
        }
        if h >= 179.5 {
            h = 0.0;
        }
        let h = (h + 0.5) as i32;

        Hsv { h, s, v }
    }

    /// Convert RGB to a luminance value using ITU-R BT.601 coefficients.
    ///
    /// Formula: gray = 0.299*R + 0.587*G + 0.114*B, rounded.
    #[inline]
    pub fn rgb_to_gray(r: u8, g: u8, b: u8) -> u8 {
        (0.299 * r as f32 + 0.587 * g as f32 + 0.114 * b as f32 + 0.5) as u8
    }

}
