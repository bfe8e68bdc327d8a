//! Color Spec Parser
//!
//! Converts a color token into a canonical [`ColorTarget`]. Three token
//! shapes are accepted:
//!
//! - hex: `#RRGGBB` or `#RGB`, converted to an HSV target point with
//!   symmetric per-channel tolerances
//! - named preset: `red`, `green`, `blue`, `yellow`, `cyan`, `purple`,
//!   looked up in a fixed table of hue ranges
//! - explicit hue range: `"<min>-<max>"` (e.g. `35-85`); `min > max`
//!   signals a wraparound range, not an error
//!
//! Parsing is a pure function with no side effects.

use crate::error::{ColorError, ColorResult};
use colorpop_core::color::{self, HUE_MAX, Hsv};

/// Saturation floor for preset and explicit-range targets
pub const RANGE_SAT_MIN: i32 = 100;
/// Value floor for preset and explicit-range targets
pub const RANGE_VAL_MIN: i32 = 50;

/// Named hue-range presets: (name, hue_min, hue_max).
///
/// Red wraps across the hue origin (160..20).
const PRESETS: &[(&str, i32, i32)] = &[
    ("red", 160, 20),
    ("green", 35, 85),
    ("blue", 100, 130),
    ("yellow", 20, 35),
    ("cyan", 85, 100),
    ("purple", 130, 155),
];

/// Symmetric per-channel match tolerances for point targets.
///
/// These are configuration defaults, not derived constants. Hue is in the
/// 0..179 convention; saturation and value in 0..255.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tolerance {
    /// Half-width of the hue window
    pub hue: i32,
    /// Half-width of the saturation window
    pub sat: i32,
    /// Half-width of the value window
    pub val: i32,
}

impl Default for Tolerance {
    fn default() -> Self {
        Self {
            hue: 7,
            sat: 50,
            val: 50,
        }
    }
}

/// A single parsed color target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorTarget {
    /// An HSV point with symmetric tolerances (from a hex token)
    Point { hsv: Hsv, tol: Tolerance },
    /// An explicit hue range with fixed saturation/value floors
    /// (from a preset or range token); `hue_min > hue_max` wraps
    HueRange { hue_min: i32, hue_max: i32 },
}

/// Parse one color token with the default tolerances.
pub fn parse_color_token(token: &str) -> ColorResult<ColorTarget> {
    parse_color_token_with(token, Tolerance::default())
}

/// Parse one color token, applying `tol` to hex (point) targets.
///
/// # Errors
///
/// - [`ColorError::InvalidColorSpec`] for malformed hex or unrecognized
///   token shapes
/// - [`ColorError::UnknownColorPreset`] for a name not in the preset table
/// - [`ColorError::InvalidRange`] for range bounds outside `0..=179`
pub fn parse_color_token_with(token: &str, tol: Tolerance) -> ColorResult<ColorTarget> {
    let token = token.trim();
    if let Some(hex) = token.strip_prefix('#') {
        let (r, g, b) = parse_hex(token, hex)?;
        let hsv = color::rgb_to_hsv(r, g, b);
        return Ok(ColorTarget::Point { hsv, tol });
    }
    if let Some(range) = parse_range_token(token)? {
        return Ok(range);
    }
    if !token.is_empty() && token.chars().all(|c| c.is_ascii_alphabetic()) {
        let name = token.to_ascii_lowercase();
        return match PRESETS.iter().find(|(n, _, _)| *n == name) {
            Some(&(_, hue_min, hue_max)) => Ok(ColorTarget::HueRange { hue_min, hue_max }),
            None => Err(ColorError::UnknownColorPreset(name)),
        };
    }
    Err(ColorError::InvalidColorSpec(token.to_string()))
}

/// Decode `RRGGBB` or `RGB` hex digits.
fn parse_hex(token: &str, hex: &str) -> ColorResult<(u8, u8, u8)> {
    let bad = || ColorError::InvalidColorSpec(token.to_string());
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(bad());
    }
    match hex.len() {
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).map_err(|_| bad())?;
            let g = u8::from_str_radix(&hex[2..4], 16).map_err(|_| bad())?;
            let b = u8::from_str_radix(&hex[4..6], 16).map_err(|_| bad())?;
            Ok((r, g, b))
        }
        3 => {
            // #RGB expands each nibble: 0xA -> 0xAA
            let r = u8::from_str_radix(&hex[0..1], 16).map_err(|_| bad())?;
            let g = u8::from_str_radix(&hex[1..2], 16).map_err(|_| bad())?;
            let b = u8::from_str_radix(&hex[2..3], 16).map_err(|_| bad())?;
            Ok((r * 17, g * 17, b * 17))
        }
        _ => Err(bad()),
    }
}

/// Try to read a `"<min>-<max>"` range token.
///
/// Returns `Ok(None)` if the token does not have that shape at all, so the
/// caller can fall through to preset lookup.
fn parse_range_token(token: &str) -> ColorResult<Option<ColorTarget>> {
    let Some((lo, hi)) = token.split_once('-') else {
        return Ok(None);
    };
    let (Ok(hue_min), Ok(hue_max)) = (lo.trim().parse::<i32>(), hi.trim().parse::<i32>()) else {
        return Ok(None);
    };
    if !(0..=HUE_MAX).contains(&hue_min) || !(0..=HUE_MAX).contains(&hue_max) {
        return Err(ColorError::InvalidRange {
            min: hue_min,
            max: hue_max,
        });
    }
    Ok(Some(ColorTarget::HueRange { hue_min, hue_max }))
}
