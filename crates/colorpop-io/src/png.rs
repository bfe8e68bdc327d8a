//! PNG image format support
//!
//! Decodes any PNG the `png` crate can normalize to 8-bit channels and
//! produces a 32-bit RGB image. Alpha channels are dropped on decode; the
//! transform pipeline operates on opaque color only. Encoding always writes
//! 8-bit RGB.

use crate::{IoError, IoResult};
use colorpop_core::{RgbImage, color};
use png::{ColorType, Decoder, Encoder, Transformations};
use std::io::{BufRead, Seek, Write};

/// Read a PNG image
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<RgbImage> {
    let mut decoder = Decoder::new(reader);
    // Expands palette/low-bit-depth images and strips 16-bit channels, so
    // every decode lands on one of the four 8-bit color types below.
    decoder.set_transformations(Transformations::normalize_to_color8());
    let mut reader = decoder
        .read_info()
        .map_err(|e| IoError::DecodeError(format!("PNG decode error: {}", e)))?;

    let buf_size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("failed to get output buffer size".to_string()))?;
    let mut buf = vec![0; buf_size];
    let output_info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(format!("PNG frame error: {}", e)))?;

    let width = output_info.width;
    let height = output_info.height;
    let data = &buf[..output_info.buffer_size()];
    let bytes_per_row = output_info.line_size;

    let mut img = RgbImage::new(width, height)?;
    match output_info.color_type {
        ColorType::Grayscale => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let g = data[row_start + x as usize];
                    img.set_pixel_unchecked(x, y, color::compose_rgb(g, g, g));
                }
            }
        }
        ColorType::GrayscaleAlpha => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let g = data[row_start + x as usize * 2];
                    img.set_pixel_unchecked(x, y, color::compose_rgb(g, g, g));
                }
            }
        }
        ColorType::Rgb => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * 3;
                    let pixel = color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]);
                    img.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        ColorType::Rgba => {
            for y in 0..height {
                let row_start = y as usize * bytes_per_row;
                for x in 0..width {
                    let idx = row_start + x as usize * 4;
                    let pixel = color::compose_rgb(data[idx], data[idx + 1], data[idx + 2]);
                    img.set_pixel_unchecked(x, y, pixel);
                }
            }
        }
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNG color type after normalization: {:?}",
                other
            )));
        }
    }

    Ok(img)
}

/// Write an image as 8-bit RGB PNG
pub fn write_png<W: Write>(img: &RgbImage, writer: W) -> IoResult<()> {
    let (width, height) = img.dimensions();

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(png::BitDepth::Eight);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(format!("PNG header error: {}", e)))?;

    let mut data = Vec::with_capacity((width as usize) * (height as usize) * 3);
    for pixel in img.pixels() {
        let (r, g, b) = color::extract_rgb(pixel);
        data.push(r);
        data.push(g);
        data.push(b);
    }

    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(format!("PNG write error: {}", e)))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_png_roundtrip_rgb() {
        let mut img = RgbImage::new(5, 5).unwrap();
        img.set_rgb(0, 0, 255, 0, 0).unwrap();
        img.set_rgb(1, 1, 0, 255, 0).unwrap();
        img.set_rgb(2, 2, 0, 0, 255).unwrap();

        let mut buffer = Vec::new();
        write_png(&img, &mut buffer).unwrap();

        let img2 = read_png(Cursor::new(buffer)).unwrap();
        assert_eq!(img2.dimensions(), (5, 5));
        assert_eq!(img2.get_rgb(0, 0), Some((255, 0, 0)));
        assert_eq!(img2.get_rgb(1, 1), Some((0, 255, 0)));
        assert_eq!(img2.get_rgb(2, 2), Some((0, 0, 255)));
    }

    #[test]
    fn test_png_decode_garbage() {
        let err = read_png(Cursor::new(b"not a png".to_vec())).unwrap_err();
        assert!(matches!(err, IoError::DecodeError(_)));
    }
}
