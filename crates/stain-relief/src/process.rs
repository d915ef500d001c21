//! End-to-end processing: input -> pixel array -> heightfield -> figures.

use stain_relief_core::{generate, HeightField, PixelArray};
use stain_relief_render::{render_all, FigureSet, PaletteError};

#[cfg(feature = "tracing")]
use tracing::instrument;

use crate::gallery::{Gallery, GalleryError};
use crate::input::{pixels_from_bytes, Input, InputError};

/// Everything one computation cycle produces.
#[derive(Clone, Debug)]
pub struct Processed {
    pub pixels: PixelArray,
    pub heights: HeightField,
    pub figures: FigureSet,
}

/// Union error for the end-to-end helper.
#[derive(thiserror::Error, Debug)]
pub enum ProcessError {
    #[error(transparent)]
    Input(#[from] InputError),

    #[error(transparent)]
    Gallery(#[from] GalleryError),

    #[error(transparent)]
    Palette(#[from] PaletteError),
}

/// Turn a tagged input into a pixel array.
pub fn resolve_input(input: &Input, gallery: &Gallery) -> Result<PixelArray, ProcessError> {
    match input {
        Input::Gallery(name) => Ok(gallery.load(name)?),
        Input::Upload(bytes) => Ok(pixels_from_bytes(bytes)?),
    }
}

/// Run the whole pipeline for one user interaction.
///
/// Either all five figures are produced from one consistent heightfield,
/// or the cycle fails with no partial output.
#[cfg_attr(
    feature = "tracing",
    instrument(level = "info", skip(input, gallery), fields(palette = palette))
)]
pub fn process(input: &Input, gallery: &Gallery, palette: &str) -> Result<Processed, ProcessError> {
    let pixels = resolve_input(input, gallery)?;
    let heights = generate(&pixels);
    let figures = render_all(&pixels, &heights, palette)?;
    Ok(Processed {
        pixels,
        heights,
        figures,
    })
}
