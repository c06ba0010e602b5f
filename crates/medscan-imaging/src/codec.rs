//! Image decode and encode.
//!
//! Decoding accepts JPEG or PNG bytes from the boundary layer; a malformed
//! or empty buffer is an explicit [`ImagingError`], never a panic. PNG
//! output uses fixed encoder settings so identical buffers produce
//! byte-identical files.

use std::io::Write;
use std::path::Path;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use png::{BitDepth, ColorType, Compression, Encoder, FilterType};

use crate::error::{ImagingError, ImagingResult};
use crate::frame::{GrayFrame, ImageFrame};

/// Decode JPEG/PNG bytes into an RGB frame.
pub fn decode_rgb(bytes: &[u8]) -> ImagingResult<ImageFrame> {
    if bytes.is_empty() {
        return Err(ImagingError::EmptyInput);
    }
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ImagingError::decode(e.to_string()))?
        .to_rgb8();
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(ImagingError::decode("image has zero dimensions"));
    }
    let pixels = decoded.pixels().map(|p| [p[0], p[1], p[2]]).collect();
    Ok(ImageFrame::from_pixels(width, height, pixels))
}

/// Decode JPEG/PNG bytes into a grayscale frame.
pub fn decode_gray(bytes: &[u8]) -> ImagingResult<GrayFrame> {
    if bytes.is_empty() {
        return Err(ImagingError::EmptyInput);
    }
    let decoded = image::load_from_memory(bytes)
        .map_err(|e| ImagingError::decode(e.to_string()))?
        .to_luma8();
    let (width, height) = decoded.dimensions();
    if width == 0 || height == 0 {
        return Err(ImagingError::decode("image has zero dimensions"));
    }
    let pixels = decoded.pixels().map(|p| p[0]).collect();
    Ok(GrayFrame::from_pixels(width, height, pixels))
}

/// JPEG quality used for annotated visualization output.
const JPEG_QUALITY: u8 = 90;

/// Encode an RGB frame as JPEG bytes.
pub fn encode_jpeg(frame: &ImageFrame) -> ImagingResult<Vec<u8>> {
    let mut data = Vec::new();
    let mut encoder =
        image::codecs::jpeg::JpegEncoder::new_with_quality(&mut data, JPEG_QUALITY);
    encoder
        .encode(
            &frame.to_raw(),
            frame.width,
            frame.height,
            image::ExtendedColorType::Rgb8,
        )
        .map_err(|e| ImagingError::encode(e.to_string()))?;
    Ok(data)
}

/// Encode an RGB frame as a base64 JPEG data URI.
pub fn to_jpeg_data_uri(frame: &ImageFrame) -> ImagingResult<String> {
    let jpeg = encode_jpeg(frame)?;
    Ok(format!("data:image/jpeg;base64,{}", BASE64.encode(jpeg)))
}

/// Write an RGB frame to any writer as PNG with fixed settings.
pub fn write_rgb_png_to_writer<W: Write>(frame: &ImageFrame, writer: W) -> ImagingResult<()> {
    let mut encoder = Encoder::new(writer, frame.width, frame.height);
    encoder.set_color(ColorType::Rgb);
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(Compression::Default);
    encoder.set_filter(FilterType::NoFilter);
    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(&frame.to_raw())?;
    Ok(())
}

/// Write an RGB frame to a PNG file.
pub fn write_rgb_png(frame: &ImageFrame, path: &Path) -> ImagingResult<()> {
    let file = std::fs::File::create(path)?;
    let writer = std::io::BufWriter::new(file);
    write_rgb_png_to_writer(frame, writer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_an_explicit_error() {
        assert!(matches!(decode_rgb(&[]), Err(ImagingError::EmptyInput)));
        assert!(matches!(decode_gray(&[]), Err(ImagingError::EmptyInput)));
    }

    #[test]
    fn malformed_input_is_a_decode_error() {
        let garbage = vec![0x42; 64];
        assert!(matches!(
            decode_rgb(&garbage),
            Err(ImagingError::Decode { .. })
        ));
    }

    #[test]
    fn png_round_trip() {
        let mut frame = ImageFrame::new(8, 8);
        for y in 0..8 {
            for x in 0..8 {
                frame.set(x, y, [x as u8 * 30, y as u8 * 30, 128]);
            }
        }
        let mut bytes = Vec::new();
        write_rgb_png_to_writer(&frame, &mut bytes).unwrap();
        let back = decode_rgb(&bytes).unwrap();
        assert_eq!(back.width, 8);
        assert_eq!(back.height, 8);
        assert_eq!(back.get(3, 2), frame.get(3, 2));
    }

    #[test]
    fn data_uri_has_jpeg_prefix() {
        let frame = ImageFrame::new(16, 16);
        let uri = to_jpeg_data_uri(&frame).unwrap();
        assert!(uri.starts_with("data:image/jpeg;base64,"));
    }
}
