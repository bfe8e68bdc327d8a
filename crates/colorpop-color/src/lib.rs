//! Colorpop Color - the selective color-pop transform
//!
//! Given an image and a set of target colors, produces a derived image in
//! which pixels matching any target color (within tolerance) keep their
//! original color while all other pixels are desaturated to grayscale.
//!
//! The transform is a pure, synchronous pipeline over in-memory buffers:
//!
//! - **Color spec parsing** ([`spec`]): hex tokens, named presets, explicit
//!   hue ranges -> canonical HSV targets
//! - **Mask building** ([`mask`]): per-target binary masks with first-class
//!   hue wraparound, unioned into one combined selection
//! - **Compositing** ([`composite`]): exact per-pixel mux between original
//!   color and BT.601 grayscale
//! - **Pipeline driver** ([`pipeline`]): parse -> build -> combine ->
//!   composite, transport-agnostic
//! - **Color space conversion** ([`colorspace`]): image-level RGB <-> HSV
//!   and grayscale derivation
//!
//! # Example
//!
//! ```
//! use colorpop_color::transform;
//! use colorpop_core::RgbImage;
//!
//! let mut img = RgbImage::new(2, 1).unwrap();
//! img.set_rgb(0, 0, 255, 0, 0).unwrap();
//! img.set_rgb(1, 0, 0, 0, 255).unwrap();
//!
//! let result = transform(&img, &["#FF0000"]).unwrap();
//! assert_eq!(result.image.get_rgb(0, 0), Some((255, 0, 0))); // kept
//! assert_eq!(result.image.get_rgb(1, 0), Some((29, 29, 29))); // grayed
//! ```

pub mod colorspace;
pub mod composite;
pub mod error;
pub mod mask;
pub mod pipeline;
pub mod spec;

// Re-export core types
pub use colorpop_core;

// Re-export error types
pub use error::{ColorError, ColorResult};

// Re-export color space conversions
pub use colorspace::{convert_rgb_to_hsv, convert_to_gray, gray_to_rgb};

// Re-export parser types and functions
pub use spec::{ColorTarget, Tolerance, parse_color_token, parse_color_token_with};

// Re-export mask building
pub use mask::{build_mask, combine_masks};

// Re-export compositing
pub use composite::composite;

// Re-export the pipeline driver
pub use pipeline::{SkippedToken, TransformResult, transform, transform_with_options};
