//! HSV image buffer
//!
//! Stores the perceptual representation of an image with H, S, V packed in
//! the R, G, B byte positions of each 32-bit word. Hue is cyclic over
//! `[0, HUE_MAX]`; saturation and value are linear `[0, 255]`.

use crate::color::{self, Hsv};
use crate::error::{Error, Result};

/// HSV image container
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HsvImage {
    width: u32,
    height: u32,
    data: Vec<u32>,
}

impl HsvImage {
    /// Create a new image with all pixels (h=0, s=0, v=0).
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![0u32; (width as usize) * (height as usize)];
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the image width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the image height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Get raw access to the packed data.
    #[inline]
    pub fn data(&self) -> &[u32] {
        &self.data
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Get the HSV triple at (x, y).
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get_hsv(&self, x: u32, y: u32) -> Option<Hsv> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(color::extract_hsv(self.data[self.index(x, y)]))
    }

    /// Get the HSV triple without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_hsv_unchecked(&self, x: u32, y: u32) -> Hsv {
        color::extract_hsv(self.data[self.index(x, y)])
    }

    /// Set the HSV triple at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] for coordinates outside the grid and
    /// [`Error::InvalidParameter`] for channel values outside their ranges.
    pub fn set_hsv(&mut self, x: u32, y: u32, hsv: Hsv) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        if hsv.h < 0 || hsv.h > color::HUE_MAX {
            return Err(Error::InvalidParameter(format!(
                "hue {} outside [0, {}]",
                hsv.h,
                color::HUE_MAX
            )));
        }
        if !(0..=255).contains(&hsv.s) || !(0..=255).contains(&hsv.v) {
            return Err(Error::InvalidParameter(format!(
                "saturation/value ({}, {}) outside [0, 255]",
                hsv.s, hsv.v
            )));
        }
        let idx = self.index(x, y);
        self.data[idx] = color::compose_hsv(hsv);
        Ok(())
    }

    /// Iterate over all HSV triples in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Hsv> + '_ {
        self.data.iter().map(|&p| color::extract_hsv(p))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_set() {
        let mut img = HsvImage::new(4, 4).unwrap();
        let hsv = Hsv { h: 90, s: 128, v: 255 };
        img.set_hsv(1, 2, hsv).unwrap();
        assert_eq!(img.get_hsv(1, 2), Some(hsv));
        assert_eq!(img.get_hsv(0, 0), Some(Hsv { h: 0, s: 0, v: 0 }));
        assert_eq!(img.get_hsv(4, 0), None);
    }

    #[test]
    fn test_set_rejects_illegal_channels() {
        let mut img = HsvImage::new(2, 2).unwrap();
        assert!(img.set_hsv(0, 0, Hsv { h: 180, s: 0, v: 0 }).is_err());
        assert!(img.set_hsv(0, 0, Hsv { h: 0, s: 256, v: 0 }).is_err());
        assert!(img.set_hsv(0, 0, Hsv { h: 0, s: 0, v: -1 }).is_err());
        assert!(img.set_hsv(0, 0, Hsv { h: 179, s: 255, v: 255 }).is_ok());
    }

    #[test]
    fn test_creation_invalid() {
        assert!(HsvImage::new(0, 4).is_err());
    }
}
