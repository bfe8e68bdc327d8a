//! colorpop-test - Shared test helpers
//!
//! Synthetic image builders and comparison helpers used by the integration
//! tests across the workspace. Everything here builds images in memory; no
//! test data files are involved.

use colorpop_core::color::{self, Hsv};
use colorpop_core::{HsvImage, RgbImage};

/// Create a uniform RGB image
pub fn make_uniform_rgb(r: u8, g: u8, b: u8, w: u32, h: u32) -> RgbImage {
    let mut img = RgbImage::new(w, h).unwrap();
    let pixel = color::compose_rgb(r, g, b);
    for y in 0..h {
        for x in 0..w {
            img.set_pixel_unchecked(x, y, pixel);
        }
    }
    img
}

/// Create a 3-color image: red (left), green (middle), blue (right)
pub fn make_tricolor(w: u32, h: u32) -> RgbImage {
    let mut img = RgbImage::new(w, h).unwrap();
    let third = w / 3;
    for y in 0..h {
        for x in 0..w {
            let pixel = if x < third {
                color::compose_rgb(255, 0, 0)
            } else if x < 2 * third {
                color::compose_rgb(0, 255, 0)
            } else {
                color::compose_rgb(0, 0, 255)
            };
            img.set_pixel_unchecked(x, y, pixel);
        }
    }
    img
}

/// Create a one-row RGB image from explicit pixels
pub fn make_rgb_row(pixels: &[(u8, u8, u8)]) -> RgbImage {
    let mut img = RgbImage::new(pixels.len() as u32, 1).unwrap();
    for (x, &(r, g, b)) in pixels.iter().enumerate() {
        img.set_rgb(x as u32, 0, r, g, b).unwrap();
    }
    img
}

/// Create a one-row HSV image from explicit triples
pub fn make_hsv_row(pixels: &[Hsv]) -> HsvImage {
    let mut img = HsvImage::new(pixels.len() as u32, 1).unwrap();
    for (x, &p) in pixels.iter().enumerate() {
        img.set_hsv(x as u32, 0, p).unwrap();
    }
    img
}

/// Create a one-row image sweeping every hue at full saturation and value
pub fn make_hue_sweep() -> HsvImage {
    let mut img = HsvImage::new((color::HUE_MAX + 1) as u32, 1).unwrap();
    for h in 0..=color::HUE_MAX {
        img.set_hsv(h as u32, 0, Hsv { h, s: 255, v: 255 }).unwrap();
    }
    img
}

/// Compare two RGB images pixel-exactly
pub fn images_equal(a: &RgbImage, b: &RgbImage) -> bool {
    a.dimensions() == b.dimensions() && a.data() == b.data()
}

/// Compare two RGB images allowing a per-channel difference of `delta`
pub fn images_equal_within(a: &RgbImage, b: &RgbImage, delta: u8) -> bool {
    if a.dimensions() != b.dimensions() {
        return false;
    }
    a.pixels().zip(b.pixels()).all(|(pa, pb)| {
        let (ra, ga, ba) = color::extract_rgb(pa);
        let (rb, gb, bb) = color::extract_rgb(pb);
        (ra as i32 - rb as i32).unsigned_abs() <= delta as u32
            && (ga as i32 - gb as i32).unsigned_abs() <= delta as u32
            && (ba as i32 - bb as i32).unsigned_abs() <= delta as u32
    })
}

/// Check that every pixel has equal R, G, B channels
pub fn image_is_grayscale(img: &RgbImage) -> bool {
    img.pixels().all(|p| {
        let (r, g, b) = color::extract_rgb(p);
        r == g && g == b
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_make_tricolor_bands() {
        let img = make_tricolor(9, 2);
        assert_eq!(img.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(img.get_rgb(4, 1), Some((0, 255, 0)));
        assert_eq!(img.get_rgb(8, 0), Some((0, 0, 255)));
    }

    #[test]
    fn test_images_equal_within() {
        let a = make_uniform_rgb(100, 100, 100, 2, 2);
        let b = make_uniform_rgb(101, 99, 100, 2, 2);
        assert!(images_equal_within(&a, &b, 1));
        assert!(!images_equal_within(&a, &b, 0));
        assert!(!images_equal(&a, &b));
    }

    #[test]
    fn test_image_is_grayscale() {
        assert!(image_is_grayscale(&make_uniform_rgb(7, 7, 7, 2, 2)));
        assert!(!image_is_grayscale(&make_uniform_rgb(7, 8, 7, 2, 2)));
    }
}
