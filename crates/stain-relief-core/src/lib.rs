//! Core types and the image-to-heightfield pipeline.
//!
//! This crate is intentionally small and purely numeric. It does *not*
//! perform any I/O and does not depend on an image decoder; callers hand it
//! a decoded [`PixelArray`] and get back a [`HeightField`] ready for
//! rendering.

mod generate;
mod heightfield;
mod logger;
mod pixels;

pub use generate::{
    downsample_block_mean, gaussian_blur, generate, invert, luma, normalize_range, LUMA_WEIGHTS,
    SMOOTHING_SIGMA, TARGET_SAMPLES,
};
pub use heightfield::HeightField;
pub use pixels::{PixelArray, PixelArrayError};

#[cfg(feature = "tracing")]
pub use logger::init_tracing;

pub use logger::init_with_level;
