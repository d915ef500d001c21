//! Flat comparison views: the source image and the generated heightfield
//! rendered as plain grayscale grids, side by side with the 3D figures.

use stain_relief_core::{luma, normalize_range, HeightField, PixelArray};

use crate::colorscale::gray_scale;
use crate::figure::{Axis, Figure, HeatmapTrace, Layout, Trace};

/// Render the *original* pixel array as a flat grayscale view.
///
/// Intensity and range are re-derived here (same luma weights, same global
/// max test as the generator) rather than cached; the view exists for
/// visual comparison, not numerical equivalence.
pub fn flat_original(pixels: &PixelArray) -> Figure {
    let mut gray = luma(pixels);
    normalize_range(&mut gray);
    flat_figure(to_rows(&gray, pixels.width()))
}

/// Render the heightfield as a flat grayscale view: the generator's effect
/// without 3D projection.
pub fn flat_transformed(field: &HeightField) -> Figure {
    flat_figure(field.to_rows())
}

fn flat_figure(z: Vec<Vec<f32>>) -> Figure {
    Figure {
        data: vec![Trace::Heatmap(HeatmapTrace {
            z,
            colorscale: gray_scale(),
            showscale: false,
        })],
        layout: Layout {
            scene: None,
            xaxis: Some(Axis::hidden()),
            // row 0 at the top, image convention
            yaxis: Some(Axis::hidden().reversed()),
        },
    }
}

fn to_rows(values: &[f32], width: usize) -> Vec<Vec<f32>> {
    values.chunks(width).map(<[f32]>::to_vec).collect()
}
