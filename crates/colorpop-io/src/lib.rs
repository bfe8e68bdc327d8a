//! Colorpop I/O - image decoding and encoding
//!
//! Bridges encoded image bytes and the in-memory [`RgbImage`] buffer the
//! transform pipeline operates on. Reading sniffs the format from magic
//! numbers, never from file names; writing picks the encoder from the
//! requested format (or the output path's extension).
//!
//! Format support is feature-gated per codec:
//! - `png-format` (default): PNG via the `png` crate
//! - `jpeg` (default): JPEG via `jpeg-decoder` / `jpeg-encoder`

pub mod error;
pub mod format;

#[cfg(feature = "jpeg")]
pub mod jpeg;
#[cfg(feature = "png-format")]
pub mod png;

pub use error::{IoError, IoResult};
pub use format::{ImageFormat, detect_format, detect_format_from_bytes};

use colorpop_core::RgbImage;
use std::fs::File;
use std::io::{BufWriter, Cursor};
use std::path::Path;

/// Decode an image from in-memory bytes, sniffing the format.
///
/// # Errors
///
/// - [`IoError::UnsupportedFormat`] if the header is unrecognized or the
///   matching codec feature is disabled
/// - [`IoError::DecodeError`] if the codec rejects the data
pub fn read_image_bytes(data: &[u8]) -> IoResult<RgbImage> {
    match detect_format_from_bytes(data)? {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(Cursor::new(data)),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::read_jpeg(Cursor::new(data)),
        #[allow(unreachable_patterns)]
        format => Err(IoError::UnsupportedFormat(format!(
            "support for {:?} is not enabled",
            format
        ))),
    }
}

/// Read an image from a file path, sniffing the format from its content.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<RgbImage> {
    let data = std::fs::read(path)?;
    read_image_bytes(&data)
}

/// Encode an image to in-memory bytes in the given format.
pub fn write_image_bytes(img: &RgbImage, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(img, &mut buffer)?,
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(img, &mut buffer)?,
        #[allow(unreachable_patterns)]
        format => {
            return Err(IoError::UnsupportedFormat(format!(
                "support for {:?} is not enabled",
                format
            )));
        }
    }
    Ok(buffer)
}

/// Write an image to a file path, choosing the format from the extension.
///
/// # Errors
///
/// Returns [`IoError::UnsupportedFormat`] if the extension does not name a
/// supported format.
pub fn write_image<P: AsRef<Path>>(img: &RgbImage, path: P) -> IoResult<()> {
    let path = path.as_ref();
    let format = ImageFormat::from_extension(path).ok_or_else(|| {
        IoError::UnsupportedFormat(format!("cannot infer format from path {:?}", path))
    })?;
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(img, &mut writer),
        #[cfg(feature = "jpeg")]
        ImageFormat::Jpeg => jpeg::write_jpeg(img, &mut writer),
        #[allow(unreachable_patterns)]
        format => Err(IoError::UnsupportedFormat(format!(
            "support for {:?} is not enabled",
            format
        ))),
    }
}
