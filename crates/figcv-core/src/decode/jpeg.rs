//! Encoded buffer decoding with EXIF orientation handling.

use std::io::Cursor;

use exif::{In, Reader, Tag};
use image::DynamicImage;
use image::ImageReader;

use super::{DecodeError, Orientation, RasterImage};

/// Decode a compressed color image, applying EXIF orientation correction.
///
/// The result is always a 3-channel RGB raster.
///
/// # Errors
///
/// Returns `DecodeError::InvalidFormat` for an empty buffer and
/// `DecodeError::CorruptedFile` when the bytes cannot be decoded.
pub fn decode(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let orientation = extract_orientation(bytes);
    let img = decode_dynamic(bytes)?;
    let oriented = apply_orientation(img, orientation);
    Ok(RasterImage::from_rgb_image(oriented.into_rgb8()))
}

/// Decode without applying the EXIF orientation tag.
pub fn decode_no_orientation(bytes: &[u8]) -> Result<RasterImage, DecodeError> {
    let img = decode_dynamic(bytes)?;
    Ok(RasterImage::from_rgb_image(img.into_rgb8()))
}

fn decode_dynamic(bytes: &[u8]) -> Result<DynamicImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::InvalidFormat);
    }

    let reader = ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    let img = reader
        .decode()
        .map_err(|e| DecodeError::CorruptedFile(e.to_string()))?;

    tracing::debug!(width = img.width(), height = img.height(), "decoded image");
    Ok(img)
}

/// Extract EXIF orientation from encoded bytes.
///
/// Returns `Orientation::Normal` if no EXIF data is found.
fn extract_orientation(bytes: &[u8]) -> Orientation {
    let mut cursor = Cursor::new(bytes);

    match Reader::new().read_from_container(&mut cursor) {
        Ok(exif) => exif
            .get_field(Tag::Orientation, In::PRIMARY)
            .and_then(|field| field.value.get_uint(0))
            .map(Orientation::from)
            .unwrap_or_default(),
        Err(_) => Orientation::Normal,
    }
}

fn apply_orientation(img: DynamicImage, orientation: Orientation) -> DynamicImage {
    match orientation {
        Orientation::Normal => img,
        Orientation::FlipHorizontal => img.fliph(),
        Orientation::Rotate180 => img.rotate180(),
        Orientation::FlipVertical => img.flipv(),
        Orientation::Transpose => img.rotate90().fliph(),
        Orientation::Rotate90CW => img.rotate90(),
        Orientation::Transverse => img.rotate270().fliph(),
        Orientation::Rotate270CW => img.rotate270(),
    }
}

/// Read the EXIF orientation of an encoded buffer.
pub fn get_orientation(bytes: &[u8]) -> Orientation {
    extract_orientation(bytes)
}
