//! Colorpop - selective color-pop image transform
//!
//! Keeps the pixels that match a set of target colors and desaturates
//! everything else to grayscale, producing the "color pop" photographic
//! effect.
//!
//! # Overview
//!
//! - Color targets: hex codes (`#FF0000`), named presets (`red`, `green`,
//!   ...) and explicit hue ranges (`35-85`), with first-class hue wraparound
//! - A pure transform pipeline over in-memory buffers
//! - PNG and JPEG decode/encode with content-based format sniffing
//!
//! # Example
//!
//! ```
//! use colorpop::RgbImage;
//! use colorpop::color::transform;
//!
//! let mut img = RgbImage::new(2, 1).unwrap();
//! img.set_rgb(0, 0, 255, 0, 0).unwrap();
//! img.set_rgb(1, 0, 0, 0, 255).unwrap();
//!
//! let result = transform(&img, &["red"]).unwrap();
//! assert_eq!(result.image.get_rgb(0, 0), Some((255, 0, 0)));
//! assert_eq!(result.image.get_rgb(1, 0), Some((29, 29, 29)));
//! ```

// Re-export core types (primary data structures used everywhere)
pub use colorpop_core::*;

// Re-export domain crates as modules to avoid name conflicts
pub use colorpop_color as color;
pub use colorpop_io as io;
