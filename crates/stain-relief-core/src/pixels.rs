use thiserror::Error;

/// Errors produced when constructing a [`PixelArray`].
#[derive(Error, Debug)]
pub enum PixelArrayError {
    #[error("unsupported channel count {channels} (expected 1 or 3)")]
    UnsupportedChannels { channels: usize },

    #[error("empty image axis (width={width}, height={height})")]
    EmptyAxis { width: usize, height: usize },

    #[error("invalid pixel buffer length (expected {expected} values, got {got})")]
    InvalidBufferLength { expected: usize, got: usize },
}

/// Decoded raster input: single-channel intensity or interleaved RGB.
///
/// Row-major, `channels` values per pixel. Channel values may be in the
/// 0..=255 integer range or already normalized to [0, 1]; the generator
/// decides which with a single global max test. NaN/Inf content is not
/// checked and propagates into downstream rendering.
#[derive(Clone, Debug)]
pub struct PixelArray {
    width: usize,
    height: usize,
    channels: usize,
    data: Vec<f32>,
}

impl PixelArray {
    /// Validate dimensions and wrap a raw channel buffer.
    pub fn new(
        width: usize,
        height: usize,
        channels: usize,
        data: Vec<f32>,
    ) -> Result<Self, PixelArrayError> {
        if channels != 1 && channels != 3 {
            return Err(PixelArrayError::UnsupportedChannels { channels });
        }
        if width == 0 || height == 0 {
            return Err(PixelArrayError::EmptyAxis { width, height });
        }
        let expected = width * height * channels;
        if data.len() != expected {
            return Err(PixelArrayError::InvalidBufferLength {
                expected,
                got: data.len(),
            });
        }
        Ok(Self {
            width,
            height,
            channels,
            data,
        })
    }

    /// Single-channel constructor.
    pub fn gray(width: usize, height: usize, data: Vec<f32>) -> Result<Self, PixelArrayError> {
        Self::new(width, height, 1, data)
    }

    /// Interleaved-RGB constructor.
    pub fn rgb(width: usize, height: usize, data: Vec<f32>) -> Result<Self, PixelArrayError> {
        Self::new(width, height, 3, data)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn channels(&self) -> usize {
        self.channels
    }

    pub fn data(&self) -> &[f32] {
        &self.data
    }

    pub fn is_rgb(&self) -> bool {
        self.channels == 3
    }

    /// Largest channel value across all pixels.
    pub fn max_value(&self) -> f32 {
        self.data.iter().copied().fold(f32::NEG_INFINITY, f32::max)
    }
}
