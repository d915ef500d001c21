//! Figure builders for stain relief heightfields.
//!
//! Five independently callable pure views over a
//! [`HeightField`](stain_relief_core::HeightField) (plus the optional
//! process storyboard), all returning a declarative, serializable
//! [`Figure`]. The palette name is resolved against the colormap registry
//! once per view; one sampled 255-step colorscale is shared across the
//! surface and contour figures of a view for visual consistency.
//!
//! ## Quickstart
//!
//! ```
//! use stain_relief_core::{generate, PixelArray};
//! use stain_relief_render::render_all;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let pixels = PixelArray::gray(64, 64, vec![128.0; 64 * 64])?;
//! let field = generate(&pixels);
//! let figures = render_all(&pixels, &field, "terrain")?;
//! println!("traces: {}", figures.contour.data.len());
//! # Ok(())
//! # }
//! ```

mod colorscale;
mod contour;
mod figure;
mod flat;
mod storyboard;
mod surface;

use serde::{Deserialize, Serialize};
use stain_relief_core::{HeightField, PixelArray};

pub use colorscale::{gray_scale, resolve, Colorscale, PaletteError, SCALE_STEPS, SUPPORTED};
pub use contour::contour_map;
pub use figure::{
    AspectMode, AspectRatio, Axis, AxisRange, Camera, Constrain, ContourTrace, Figure,
    HeatmapTrace, Layout, Scene, SceneAxis, SurfaceContours, SurfaceTrace, Trace, Vec3, ZContours,
};
pub use flat::{flat_original, flat_transformed};
pub use storyboard::{process_storyboard, STORYBOARD_SIGMA};
pub use surface::{surface_isometric, surface_overhead};

/// The five figures of one computation cycle.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FigureSet {
    pub original: Figure,
    pub transformed: Figure,
    pub surface_isometric: Figure,
    pub surface_overhead: Figure,
    pub contour: Figure,
}

/// Build all five views from one consistent heightfield.
///
/// The palette resolves before any figure is built, so an unknown name
/// produces no partial set.
pub fn render_all(
    pixels: &PixelArray,
    field: &HeightField,
    palette: &str,
) -> Result<FigureSet, PaletteError> {
    let scale = resolve(palette)?;
    Ok(FigureSet {
        original: flat::flat_original(pixels),
        transformed: flat::flat_transformed(field),
        surface_isometric: surface::surface_isometric_scaled(field, scale.clone()),
        surface_overhead: surface::surface_overhead_scaled(field, scale.clone()),
        contour: contour::contour_map_scaled(field, scale),
    })
}
