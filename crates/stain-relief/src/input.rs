//! Input boundary: gallery selections and uploaded data URIs.
//!
//! The caller resolves which UI control fired and hands the core a tagged
//! [`Input`]; the core never needs to know about widgets.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use image::DynamicImage;
use stain_relief_core::{PixelArray, PixelArrayError};

/// One user interaction's worth of input, resolved by the caller.
#[derive(Clone, Debug)]
pub enum Input {
    /// A gallery entry by display name (extension-stripped file stem).
    Gallery(String),
    /// Raw uploaded image bytes, already stripped of data-URI framing.
    Upload(Vec<u8>),
}

impl Input {
    /// Build an upload input from a `<mime-info>,<base64 payload>` data URI.
    pub fn from_data_uri(contents: &str) -> Result<Self, InputError> {
        Ok(Self::Upload(decode_data_uri(contents)?))
    }
}

/// Errors surfaced while turning outside bytes into a pixel array.
#[derive(thiserror::Error, Debug)]
pub enum InputError {
    #[error("malformed data URI (missing ',' separator)")]
    MalformedDataUri,

    #[error(transparent)]
    Base64(#[from] base64::DecodeError),

    #[error(transparent)]
    Decode(#[from] image::ImageError),

    #[error(transparent)]
    Pixels(#[from] PixelArrayError),
}

/// Split a data URI on its first comma and decode the base64 payload.
pub fn decode_data_uri(contents: &str) -> Result<Vec<u8>, InputError> {
    let (_mime, payload) = contents
        .split_once(',')
        .ok_or(InputError::MalformedDataUri)?;
    Ok(STANDARD.decode(payload)?)
}

/// Decode raw image bytes (any raster format `image` can sniff) into a
/// pixel array.
pub fn pixels_from_bytes(bytes: &[u8]) -> Result<PixelArray, InputError> {
    pixels_from_image(&image::load_from_memory(bytes)?)
}

/// Adapt a decoded image: grayscale stays single-channel, everything else
/// converts to RGB8 with alpha dropped.
pub fn pixels_from_image(img: &DynamicImage) -> Result<PixelArray, InputError> {
    let pixels = match img.color() {
        image::ColorType::L8 | image::ColorType::L16 => {
            let gray = img.to_luma8();
            let data = gray.as_raw().iter().map(|&v| v as f32).collect();
            PixelArray::gray(gray.width() as usize, gray.height() as usize, data)?
        }
        _ => {
            let rgb = img.to_rgb8();
            let data = rgb.as_raw().iter().map(|&v| v as f32).collect();
            PixelArray::rgb(rgb.width() as usize, rgb.height() as usize, data)?
        }
    };
    Ok(pixels)
}
