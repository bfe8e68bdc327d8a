//! Binary selection mask
//!
//! A `Mask` marks, per pixel, whether the pixel is selected. Masks are built
//! fresh for each color target and then unioned into an accumulator; they are
//! never mutated after being combined.

use crate::error::{Error, Result};

/// Per-pixel binary selection buffer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mask {
    width: u32,
    height: u32,
    data: Vec<bool>,
}

impl Mask {
    /// Create a new all-unselected mask.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidDimension`] if width or height is 0.
    pub fn new(width: u32, height: u32) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidDimension { width, height });
        }
        let data = vec![false; (width as usize) * (height as usize)];
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Get the mask width in pixels.
    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the mask height in pixels.
    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get (width, height).
    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        (y as usize) * (self.width as usize) + (x as usize)
    }

    /// Check whether the cell at (x, y) is selected.
    ///
    /// Returns `None` if coordinates are out of bounds.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> Option<bool> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some(self.data[self.index(x, y)])
    }

    /// Check selection without bounds checking.
    ///
    /// # Panics
    ///
    /// Panics if `x >= width` or `y >= height`.
    #[inline]
    pub fn get_unchecked(&self, x: u32, y: u32) -> bool {
        self.data[self.index(x, y)]
    }

    /// Set the selection state at (x, y).
    ///
    /// # Errors
    ///
    /// Returns [`Error::OutOfBounds`] if coordinates are out of bounds.
    pub fn set(&mut self, x: u32, y: u32, selected: bool) -> Result<()> {
        if x >= self.width || y >= self.height {
            return Err(Error::OutOfBounds {
                x,
                y,
                width: self.width,
                height: self.height,
            });
        }
        let idx = self.index(x, y);
        self.data[idx] = selected;
        Ok(())
    }

    /// Union another mask into this one (logical OR, in place).
    ///
    /// # Errors
    ///
    /// Returns [`Error::DimensionMismatch`] if the dimensions differ.
    pub fn or_with(&mut self, other: &Mask) -> Result<()> {
        if self.width != other.width || self.height != other.height {
            return Err(Error::DimensionMismatch {
                expected: (self.width, self.height),
                actual: (other.width, other.height),
            });
        }
        for (dst, &src) in self.data.iter_mut().zip(other.data.iter()) {
            *dst |= src;
        }
        Ok(())
    }

    /// Count the selected cells.
    pub fn count_selected(&self) -> usize {
        self.data.iter().filter(|&&b| b).count()
    }

    /// Check whether no cell is selected.
    pub fn is_empty(&self) -> bool {
        !self.data.iter().any(|&b| b)
    }
}
