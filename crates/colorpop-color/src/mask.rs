//! Hue-Wrap Mask Builder and Mask Combiner
//!
//! Builds a binary selection mask from an HSV image and a [`ColorTarget`],
//! treating hue wraparound as a first-class case: a window that crosses the
//! cyclic boundary is split into two linear sub-ranges whose masks are
//! unioned. Saturation and value are linear and never wrap.

use crate::error::{ColorError, ColorResult};
use crate::spec::{ColorTarget, RANGE_SAT_MIN, RANGE_VAL_MIN};
use colorpop_core::color::HUE_MAX;
use colorpop_core::{HsvImage, Mask};

/// Hue period: the number of distinct hue values.
const HUE_PERIOD: i32 = HUE_MAX + 1;

/// Resolved match window: up to two linear hue sub-ranges plus inclusive
/// saturation and value bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HsvWindow {
    hue: [(i32, i32); 2],
    hue_ranges: usize,
    sat: (i32, i32),
    val: (i32, i32),
}

impl HsvWindow {
    #[inline]
    fn contains(&self, h: i32, s: i32, v: i32) -> bool {
        if s < self.sat.0 || s > self.sat.1 || v < self.val.0 || v > self.val.1 {
            return false;
        }
        self.hue[..self.hue_ranges]
            .iter()
            .any(|&(lo, hi)| h >= lo && h <= hi)
    }
}

#[inline]
fn clamp_channel(v: i32) -> i32 {
    v.clamp(0, 255)
}

/// Resolve a target into its effective match window, splitting wraparound
/// hue ranges into two linear sub-ranges.
fn resolve_window(target: &ColorTarget) -> ColorResult<HsvWindow> {
    match *target {
        ColorTarget::Point { hsv, tol } => {
            if tol.hue < 0 || tol.sat < 0 || tol.val < 0 {
                return Err(ColorError::Core(colorpop_core::Error::InvalidParameter(
                    format!("negative tolerance ({}, {}, {})", tol.hue, tol.sat, tol.val),
                )));
            }
            let sat = (clamp_channel(hsv.s - tol.sat), clamp_channel(hsv.s + tol.sat));
            let val = (clamp_channel(hsv.v - tol.val), clamp_channel(hsv.v + tol.val));

            let lo = hsv.h - tol.hue;
            let hi = hsv.h + tol.hue;
            let (hue, hue_ranges) = if hi - lo + 1 >= HUE_PERIOD {
                // Window covers the whole circle
                ([(0, HUE_MAX), (0, 0)], 1)
            } else if lo < 0 {
                // Wraps below the origin
                ([(0, hi), (lo + HUE_PERIOD, HUE_MAX)], 2)
            } else if hi > HUE_MAX {
                // Wraps above the maximum
                ([(lo, HUE_MAX), (0, hi - HUE_PERIOD)], 2)
            } else {
                ([(lo, hi), (0, 0)], 1)
            };
            Ok(HsvWindow {
                hue,
                hue_ranges,
                sat,
                val,
            })
        }
        ColorTarget::HueRange { hue_min, hue_max } => {
            if !(0..=HUE_MAX).contains(&hue_min) || !(0..=HUE_MAX).contains(&hue_max) {
                return Err(ColorError::InvalidRange {
                    min: hue_min,
                    max: hue_max,
                });
            }
            let (hue, hue_ranges) = if hue_min > hue_max {
                // Wraparound spec: [min, HUE_MAX] + [0, max]
                ([(hue_min, HUE_MAX), (0, hue_max)], 2)
            } else {
                ([(hue_min, hue_max), (0, 0)], 1)
            };
            Ok(HsvWindow {
                hue,
                hue_ranges,
                sat: (RANGE_SAT_MIN, 255),
                val: (RANGE_VAL_MIN, 255),
            })
        }
    }
}

/// Build a binary mask of the pixels matching `target`.
///
/// A pixel is selected when its hue lies in any of the target's linear hue
/// sub-ranges and its saturation and value lie within the target's bounds,
/// all inclusive.
///
/// # Errors
///
/// Returns [`ColorError::InvalidRange`] for hue bounds outside the legal
/// cyclic range; never fails on valid input.
pub fn build_mask(hsv: &HsvImage, target: &ColorTarget) -> ColorResult<Mask> {
    let window = resolve_window(target)?;
    let (width, height) = hsv.dimensions();
    let mut mask = Mask::new(width, height)?;
    for y in 0..height {
        for x in 0..width {
            let p = hsv.get_hsv_unchecked(x, y);
            if window.contains(p.h, p.s, p.v) {
                mask.set(x, y, true)?;
            }
        }
    }
    Ok(mask)
}

/// Union a sequence of masks into one combined mask.
///
/// Starts from an all-unselected `width` x `height` accumulator; union is
/// commutative and associative, so input order does not matter. An empty
/// slice yields an all-unselected mask (no colors selected).
///
/// # Errors
///
/// Returns a dimension-mismatch error if any mask's dimensions differ from
/// the accumulator's.
pub fn combine_masks(width: u32, height: u32, masks: &[Mask]) -> ColorResult<Mask> {
    let mut combined = Mask::new(width, height)?;
    for mask in masks {
        combined.or_with(mask)?;
    }
    Ok(combined)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spec::Tolerance;
    use colorpop_core::color::Hsv;

    /// One-row HSV image from a slice of triples
    fn hsv_row(pixels: &[Hsv]) -> HsvImage {
        let mut img = HsvImage::new(pixels.len() as u32, 1).unwrap();
        for (x, &p) in pixels.iter().enumerate() {
            img.set_hsv(x as u32, 0, p).unwrap();
        }
        img
    }

    fn saturated(h: i32) -> Hsv {
        Hsv { h, s: 255, v: 255 }
    }

    #[test]
    fn test_point_no_wrap() {
        let img = hsv_row(&[saturated(55), saturated(63), saturated(70)]);
        let target = ColorTarget::Point {
            hsv: saturated(60),
            tol: Tolerance { hue: 7, sat: 50, val: 50 },
        };
        let mask = build_mask(&img, &target).unwrap();
        assert_eq!(mask.get(0, 0), Some(true));
        assert_eq!(mask.get(1, 0), Some(true));
        assert_eq!(mask.get(2, 0), Some(false)); // 70 > 60 + 7
    }

    #[test]
    fn test_point_wraps_below_zero() {
        // Center 0 with tol 7: [0, 7] + [173, 179]
        let img = hsv_row(&[saturated(3), saturated(176), saturated(90), saturated(172)]);
        let target = ColorTarget::Point {
            hsv: saturated(0),
            tol: Tolerance::default(),
        };
        let mask = build_mask(&img, &target).unwrap();
        assert_eq!(mask.get(0, 0), Some(true));
        assert_eq!(mask.get(1, 0), Some(true));
        assert_eq!(mask.get(2, 0), Some(false));
        assert_eq!(mask.get(3, 0), Some(false)); // just below the wrapped bound
    }

    #[test]
    fn test_point_wraps_above_max() {
        // Center 177 with tol 7: [170, 179] + [0, 4]
        let img = hsv_row(&[saturated(171), saturated(4), saturated(5), saturated(169)]);
        let target = ColorTarget::Point {
            hsv: saturated(177),
            tol: Tolerance::default(),
        };
        let mask = build_mask(&img, &target).unwrap();
        assert_eq!(mask.get(0, 0), Some(true));
        assert_eq!(mask.get(1, 0), Some(true));
        assert_eq!(mask.get(2, 0), Some(false));
        assert_eq!(mask.get(3, 0), Some(false));
    }

    #[test]
    fn test_point_full_circle_tolerance() {
        let img = hsv_row(&[saturated(0), saturated(90), saturated(179)]);
        let target = ColorTarget::Point {
            hsv: saturated(45),
            tol: Tolerance { hue: 90, sat: 255, val: 255 },
        };
        let mask = build_mask(&img, &target).unwrap();
        assert_eq!(mask.count_selected(), 3);
    }

    #[test]
    fn test_point_sat_val_windows() {
        let target = ColorTarget::Point {
            hsv: Hsv { h: 60, s: 200, v: 200 },
            tol: Tolerance { hue: 7, sat: 50, val: 50 },
        };
        let img = hsv_row(&[
            Hsv { h: 60, s: 150, v: 150 }, // both at lower bound, inclusive
            Hsv { h: 60, s: 149, v: 200 }, // saturation below window
            Hsv { h: 60, s: 200, v: 251 }, // value above window
            Hsv { h: 60, s: 250, v: 250 }, // both at upper bound
        ]);
        let mask = build_mask(&img, &target).unwrap();
        assert_eq!(mask.get(0, 0), Some(true));
        assert_eq!(mask.get(1, 0), Some(false));
        assert_eq!(mask.get(2, 0), Some(false));
        assert_eq!(mask.get(3, 0), Some(true));
    }

    #[test]
    fn test_explicit_range_wraparound() {
        // Preset red: 160..20 wraps
        let img = hsv_row(&[saturated(5), saturated(170), saturated(90)]);
        let target = ColorTarget::HueRange { hue_min: 160, hue_max: 20 };
        let mask = build_mask(&img, &target).unwrap();
        assert_eq!(mask.get(0, 0), Some(true));
        assert_eq!(mask.get(1, 0), Some(true));
        assert_eq!(mask.get(2, 0), Some(false));
    }

    #[test]
    fn test_explicit_range_sat_val_floor() {
        let img = hsv_row(&[
            Hsv { h: 60, s: 100, v: 50 },  // exactly at the floors
            Hsv { h: 60, s: 99, v: 255 },  // under-saturated
            Hsv { h: 60, s: 255, v: 49 },  // too dark
        ]);
        let target = ColorTarget::HueRange { hue_min: 35, hue_max: 85 };
        let mask = build_mask(&img, &target).unwrap();
        assert_eq!(mask.get(0, 0), Some(true));
        assert_eq!(mask.get(1, 0), Some(false));
        assert_eq!(mask.get(2, 0), Some(false));
    }

    #[test]
    fn test_malformed_range_rejected() {
        let img = hsv_row(&[saturated(0)]);
        let target = ColorTarget::HueRange { hue_min: 0, hue_max: 180 };
        assert!(matches!(
            build_mask(&img, &target),
            Err(ColorError::InvalidRange { min: 0, max: 180 })
        ));
        let target = ColorTarget::HueRange { hue_min: -1, hue_max: 20 };
        assert!(build_mask(&img, &target).is_err());
    }

    #[test]
    fn test_combine_empty_is_unselected() {
        let combined = combine_masks(4, 3, &[]).unwrap();
        assert!(combined.is_empty());
        assert_eq!(combined.dimensions(), (4, 3));
    }

    #[test]
    fn test_combine_dimension_mismatch() {
        let other = Mask::new(2, 2).unwrap();
        assert!(combine_masks(4, 3, &[other]).is_err());
    }

    #[test]
    fn test_combine_order_independent() {
        let mut a = Mask::new(3, 1).unwrap();
        let mut b = Mask::new(3, 1).unwrap();
        let mut c = Mask::new(3, 1).unwrap();
        a.set(0, 0, true).unwrap();
        b.set(1, 0, true).unwrap();
        c.set(1, 0, true).unwrap();
        c.set(2, 0, true).unwrap();

        let abc = combine_masks(3, 1, &[a.clone(), b.clone(), c.clone()]).unwrap();
        let cab = combine_masks(3, 1, &[c, a, b]).unwrap();
        assert_eq!(abc, cab);
        assert_eq!(abc.count_selected(), 3);
    }
}
