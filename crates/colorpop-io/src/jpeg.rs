//! JPEG image format support
//!
//! Reads JPEG images with the `jpeg-decoder` crate and writes them with
//! `jpeg-encoder`. Grayscale and CMYK inputs are expanded to RGB on decode;
//! encoding always produces baseline 8-bit RGB.

use crate::{IoError, IoResult};
use colorpop_core::{RgbImage, color};
use jpeg_decoder::PixelFormat;
use std::io::{Read, Write};

/// Default encoder quality, on the usual 1..100 scale
pub const DEFAULT_JPEG_QUALITY: u8 = 90;

/// Read a JPEG image from a reader positioned at the SOI marker (`FF D8`)
pub fn read_jpeg<R: Read>(reader: R) -> IoResult<RgbImage> {
    let mut decoder = jpeg_decoder::Decoder::new(reader);
    let data = decoder
        .decode()
        .map_err(|e| IoError::DecodeError(format!("JPEG decode error: {}", e)))?;
    let info = decoder
        .info()
        .ok_or_else(|| IoError::DecodeError("JPEG header missing after decode".to_string()))?;

    let width = info.width as u32;
    let height = info.height as u32;
    let mut img = RgbImage::new(width, height)?;

    match info.pixel_format {
        PixelFormat::L8 => {
            for y in 0..height {
                let row_start = y as usize * width as usize;
                for x in 0..width {
                    let g = data[row_start + x as usize];
                    img.set_pixel_unchecked(x, y, color::compose_rgb(g, g, g));
                }
            }
        }
        PixelFormat::RGB24 => {
            for y in 0..height {
                let row_start = y as usize * width as usize * 3;
                for x in 0..width {
                    let idx = row_start + x as usize * 3;
                    let pixel = color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]);
                    img.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        PixelFormat::CMYK32 => {
            for y in 0..height {
                let row_start = y as usize * width as usize * 4;
                for x in 0..width {
                    let idx = row_start + x as usize * 4;
                    let (c, m, ye, k) = (
                        data[idx] as u32,
                        data[idx + 1] as u32,
                        data[idx + 2] as u32,
                        data[idx + 3] as u32,
                    );
                    // jpeg-decoder emits inverted CMYK, so channels multiply
                    let r = (c * k / 255) as u8;
                    let g = (m * k / 255) as u8;
                    let b = (ye * k / 255) as u8;
                    img.set_pixel_unchecked(x, y, color::compose_rgb(r, g, b));
                }
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported JPEG pixel format: {:?}",
                other
            )));
        }
    }

    Ok(img)
}

/// Write an image as baseline RGB JPEG at [`DEFAULT_JPEG_QUALITY`]
pub fn write_jpeg<W: Write>(img: &RgbImage, writer: W) -> IoResult<()> {
    write_jpeg_with_quality(img, writer, DEFAULT_JPEG_QUALITY)
}

/// Write an image as baseline RGB JPEG at the given quality (1..100)
pub fn write_jpeg_with_quality<W: Write>(img: &RgbImage, writer: W, quality: u8) -> IoResult<()> {
    let (width, height) = img.dimensions();
    if width > u16::MAX as u32 || height > u16::MAX as u32 {
        return Err(IoError::EncodeError(format!(
            "image {}x{} exceeds the JPEG dimension limit",
            width, height
        )));
    }

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for pixel in img.pixels() {
        let (r, g, b) = color::extract_rgb(pixel);
        data.push(r);
        data.push(g);
        data.push(b);
    }

    let encoder = jpeg_encoder::Encoder::new(writer, quality);
    encoder
        .encode(
            &data,
            width as u16,
            height as u16,
            jpeg_encoder::ColorType::Rgb,
        )
        .map_err(|e| IoError::EncodeError(format!("JPEG encode error: {}", e)))?;
    Ok(())
}
