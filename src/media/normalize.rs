use crate::error::NormalizeError;
use crate::settings::UploadLimits;
use fast_image_resize::Resizer;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, ImageReader};
use std::io::Cursor;

/// A file handed over from the UI layer: the name and declared media type it
/// arrived with, plus the raw bytes. The declared type is what gets checked;
/// the name is only used in reports.
#[derive(Debug, Clone)]
pub struct IncomingFile {
    pub name: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Decodes an input image, constrains its longer dimension to
/// `limits.max_dimension`, and re-encodes it as JPEG at a fixed quality so
/// every stored asset is uniform regardless of what was uploaded.
///
/// The media-type and raw-size checks run before any decode work. Images
/// already within bounds are never upsampled. The input is left untouched.
///
/// # Errors
/// [`NormalizeError::UnsupportedType`] for non-image declared types,
/// [`NormalizeError::TooLarge`] for oversized payloads, and
/// [`NormalizeError::Decode`] for anything the decoder rejects.
pub fn normalize(file: &IncomingFile, limits: &UploadLimits) -> Result<Vec<u8>, NormalizeError> {
    let declared = file
        .content_type
        .parse::<mime::Mime>()
        .map_err(|_| NormalizeError::UnsupportedType(file.content_type.clone()))?;
    if declared.type_() != mime::IMAGE {
        return Err(NormalizeError::UnsupportedType(file.content_type.clone()));
    }
    if file.bytes.len() > limits.max_raw_bytes {
        return Err(NormalizeError::TooLarge {
            size: file.bytes.len(),
            limit: limits.max_raw_bytes,
        });
    }

    let img = ImageReader::new(Cursor::new(&file.bytes))
        .with_guessed_format()
        .map_err(|e| NormalizeError::Decode(image::ImageError::IoError(e)))?
        .decode()
        .map_err(NormalizeError::Decode)?;

    let img = if img.width().max(img.height()) > limits.max_dimension {
        downscale(img, limits.max_dimension)?
    } else {
        img
    };

    let rgb = match img {
        DynamicImage::ImageRgb8(_) => img,
        other => DynamicImage::ImageRgb8(other.to_rgb8()),
    };
    let mut out = Cursor::new(Vec::new());
    let encoder = JpegEncoder::new_with_quality(&mut out, limits.jpeg_quality);
    rgb.write_with_encoder(encoder)
        .map_err(NormalizeError::Encode)?;
    Ok(out.into_inner())
}

/// Scales so the longer side equals `max_dimension`, preserving aspect ratio.
fn downscale(img: DynamicImage, max_dimension: u32) -> Result<DynamicImage, NormalizeError> {
    let (w, h) = (u64::from(img.width()), u64::from(img.height()));
    let max = u64::from(max_dimension);
    let (target_w, target_h) = if w >= h {
        (max, (h * max / w).max(1))
    } else {
        ((w * max / h).max(1), max)
    };

    let src = DynamicImage::ImageRgb8(img.into_rgb8());
    let mut dst = DynamicImage::new_rgb8(target_w as u32, target_h as u32);
    let mut resizer = Resizer::new();
    resizer.resize(&src, &mut dst, None)?;
    Ok(dst)
}
