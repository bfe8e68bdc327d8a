//! Error types for colorpop-color

use thiserror::Error;

/// Errors that can occur during color-pop processing
#[derive(Debug, Error)]
pub enum ColorError {
    /// Core library error
    #[error("core error: {0}")]
    Core(#[from] colorpop_core::Error),

    /// Malformed color token (bad hex digits, unrecognized shape)
    #[error("invalid color spec: {0}")]
    InvalidColorSpec(String),

    /// Color name not present in the preset table
    #[error("unknown color preset: {0}")]
    UnknownColorPreset(String),

    /// Hue bounds outside the legal cyclic range
    #[error("invalid hue range: {min}..{max} (legal range 0..{})", colorpop_core::color::HUE_MAX)]
    InvalidRange { min: i32, max: i32 },

    /// Every token in a non-empty color list failed to parse
    #[error("no valid color targets in request")]
    NoValidColors,
}

/// Result type for color-pop operations
pub type ColorResult<T> = Result<T, ColorError>;
