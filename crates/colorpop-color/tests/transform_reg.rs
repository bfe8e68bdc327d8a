//! End-to-end selective color-pop transform over synthetic RGB images

use colorpop_color::{ColorError, convert_to_gray, gray_to_rgb, transform};
use colorpop_core::RgbImage;
use colorpop_test::{image_is_grayscale, images_equal, make_rgb_row, make_tricolor};

/// An empty token list is a valid request that desaturates everything.
#[test]
fn test_empty_list_yields_full_grayscale() {
    let img = make_tricolor(9, 3);
    let result = transform::<&str>(&img, &[]).unwrap();
    assert!(result.skipped.is_empty());
    assert!(image_is_grayscale(&result.image));

    // BT.601 weights on the pure primaries
    assert_eq!(result.image.get_rgb(0, 0), Some((76, 76, 76)));
    assert_eq!(result.image.get_rgb(4, 0), Some((150, 150, 150)));
    assert_eq!(result.image.get_rgb(8, 0), Some((29, 29, 29)));
}

/// A range covering the whole hue circle keeps every saturated, bright
/// pixel, reproducing the input exactly.
#[test]
fn test_full_hue_range_is_identity_on_saturated_input() {
    let img = make_tricolor(9, 3);
    let result = transform(&img, &["0-179"]).unwrap();
    assert!(images_equal(&result.image, &img));
}

/// Every output pixel is either the original pixel or its gray expansion,
/// bit for bit. There is no blending at mask boundaries.
#[test]
fn test_output_is_exact_per_pixel_mux() {
    let img = make_rgb_row(&[
        (255, 0, 0),
        (200, 30, 40),
        (0, 255, 0),
        (13, 200, 80),
        (0, 0, 255),
        (128, 128, 128),
        (255, 255, 255),
    ]);
    let gray = gray_to_rgb(&convert_to_gray(&img).unwrap()).unwrap();
    let result = transform(&img, &["green"]).unwrap();

    let mut kept = 0;
    for y in 0..img.height() {
        for x in 0..img.width() {
            let out = result.image.get_pixel_unchecked(x, y);
            let orig = img.get_pixel_unchecked(x, y);
            let g = gray.get_pixel_unchecked(x, y);
            assert!(
                out == orig || out == g,
                "pixel ({x}, {y}) is neither original nor grayscale"
            );
            if out == orig && orig != g {
                kept += 1;
            }
        }
    }
    // Both green-ish pixels survive; nothing else does
    assert_eq!(kept, 2);
}

/// The concrete 2x2 scenario: red kept, green/blue/white desaturated.
#[test]
fn test_pop_red_on_two_by_two() {
    let mut img = RgbImage::new(2, 2).unwrap();
    img.set_rgb(0, 0, 255, 0, 0).unwrap();
    img.set_rgb(1, 0, 0, 255, 0).unwrap();
    img.set_rgb(0, 1, 0, 0, 255).unwrap();
    img.set_rgb(1, 1, 255, 255, 255).unwrap();

    let result = transform(&img, &["#FF0000"]).unwrap();
    assert_eq!(result.image.get_rgb(0, 0), Some((255, 0, 0)));
    assert_eq!(result.image.get_rgb(1, 0), Some((150, 150, 150)));
    assert_eq!(result.image.get_rgb(0, 1), Some((29, 29, 29)));
    assert_eq!(result.image.get_rgb(1, 1), Some((255, 255, 255)));
}

/// A hex target near the hue origin matches pixels on both sides of the
/// wrap seam.
#[test]
fn test_hex_target_matches_across_wrap_seam() {
    // hues 3, 176, 60 in the 0..179 convention
    let img = make_rgb_row(&[(255, 26, 0), (255, 0, 34), (0, 255, 0)]);
    let result = transform(&img, &["#FF0000"]).unwrap();
    assert_eq!(result.image.get_rgb(0, 0), Some((255, 26, 0)));
    assert_eq!(result.image.get_rgb(1, 0), Some((255, 0, 34)));
    assert!(result.image.get_rgb(2, 0) != Some((0, 255, 0)));
}

/// Invalid tokens are skipped; the output equals the transform over the
/// valid tokens alone.
#[test]
fn test_invalid_tokens_skip_without_changing_output() {
    let img = make_tricolor(9, 3);
    let mixed = transform(&img, &["notacolor", "#00FF00", "0-999"]).unwrap();
    let clean = transform(&img, &["#00FF00"]).unwrap();

    assert!(images_equal(&mixed.image, &clean.image));
    assert_eq!(mixed.skipped.len(), 2);
    assert_eq!(mixed.skipped[0].token, "notacolor");
    assert_eq!(mixed.skipped[1].token, "0-999");
    assert!(clean.skipped.is_empty());
}

/// A non-empty list in which nothing parses is an error, not a silent
/// grayscale conversion.
#[test]
fn test_all_invalid_tokens_error() {
    let img = make_tricolor(9, 3);
    let err = transform(&img, &["nope", "#zz"]).unwrap_err();
    assert!(matches!(err, ColorError::NoValidColors));
}
