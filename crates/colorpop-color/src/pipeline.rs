//! Pipeline Driver
//!
//! Orchestrates parse -> build -> combine -> composite for one or many color
//! tokens. The driver has no knowledge of how the image or the token list
//! arrived; it operates on decoded buffers only and holds no state across
//! calls.
//!
//! Token policy: each token is parsed independently. An invalid token does
//! not abort the request; it is skipped, logged, and reported back in
//! [`TransformResult::skipped`]. Only a non-empty token list in which *every*
//! token is invalid fails the whole call.

use crate::colorspace::convert_rgb_to_hsv;
use crate::composite::composite;
use crate::error::{ColorError, ColorResult};
use crate::mask::{build_mask, combine_masks};
use crate::spec::{ColorTarget, Tolerance, parse_color_token_with};
use colorpop_core::{Mask, RgbImage};
use log::{debug, warn};

/// A color token that failed to parse, with the reason it was skipped
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedToken {
    /// The token as supplied by the caller
    pub token: String,
    /// Human-readable parse failure
    pub reason: String,
}

/// Result of one transform call
#[derive(Debug, Clone)]
pub struct TransformResult {
    /// The composited output image
    pub image: RgbImage,
    /// Tokens that were skipped during parsing, in input order
    pub skipped: Vec<SkippedToken>,
}

/// Run the selective color-pop transform with default tolerances.
///
/// An empty token list is valid and produces a fully grayscale image.
pub fn transform<S: AsRef<str>>(image: &RgbImage, tokens: &[S]) -> ColorResult<TransformResult> {
    transform_with_options(image, tokens, Tolerance::default())
}

/// Run the selective color-pop transform, applying `tol` to hex targets.
///
/// # Errors
///
/// - [`ColorError::NoValidColors`] if `tokens` is non-empty and every token
///   failed to parse
/// - mask/composite errors propagate unchanged (dimension mismatches cannot
///   occur here since every buffer derives from `image`)
pub fn transform_with_options<S: AsRef<str>>(
    image: &RgbImage,
    tokens: &[S],
    tol: Tolerance,
) -> ColorResult<TransformResult> {
    let mut targets: Vec<ColorTarget> = Vec::with_capacity(tokens.len());
    let mut skipped = Vec::new();
    for token in tokens {
        let token = token.as_ref();
        match parse_color_token_with(token, tol) {
            Ok(target) => targets.push(target),
            Err(err) => {
                warn!("skipping color token {token:?}: {err}");
                skipped.push(SkippedToken {
                    token: token.to_string(),
                    reason: err.to_string(),
                });
            }
        }
    }
    if !tokens.is_empty() && targets.is_empty() {
        return Err(ColorError::NoValidColors);
    }

    let hsv = convert_rgb_to_hsv(image)?;
    debug!(
        "transform: {} targets over {}x{}",
        targets.len(),
        image.width(),
        image.height()
    );

    // Per-target masks are independent; union is order-free
    let masks: Vec<Mask> = targets
        .iter()
        .map(|t| build_mask(&hsv, t))
        .collect::<ColorResult<_>>()?;
    let combined = combine_masks(image.width(), image.height(), &masks)?;
    debug!("transform: {} pixels selected", combined.count_selected());

    let out = composite(image, &combined)?;
    Ok(TransformResult {
        image: out,
        skipped,
    })
}
