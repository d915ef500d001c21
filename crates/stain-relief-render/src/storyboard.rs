//! Process storyboard: one figure stacking the transformation stages.
//!
//! Five surfaces at z offsets 0..4 narrate the pipeline: the field as a
//! flat grayscale plane, its inversion, the blurred version, a terraced
//! contour-banded terrain, and the final relief. The first three stages use
//! the gray ramp; the last two use the chosen palette.

use stain_relief_core::{gaussian_blur, HeightField};

use crate::colorscale::{gray_scale, resolve, PaletteError};
use crate::figure::{
    AspectMode, AspectRatio, Figure, Layout, Scene, SceneAxis, SurfaceContours, SurfaceTrace,
    Trace, ZContours,
};

/// Number of color bands in the terraced stage.
const TERRACE_BANDS: usize = 15;

/// Default blur applied between the inversion and terrace stages.
pub const STORYBOARD_SIGMA: f32 = 8.0;

pub fn process_storyboard(
    field: &HeightField,
    palette: &str,
    sigma: f32,
) -> Result<Figure, PaletteError> {
    let terrain = resolve(palette)?;
    let gray = gray_scale();

    let flat = flat_plane(field, 0.0, field.to_rows(), &gray);

    let inverted = HeightField {
        width: field.width,
        height: field.height,
        data: field.data.iter().map(|v| 1.0 - v).collect(),
    };
    let flipped = flat_plane(field, 1.0, inverted.to_rows(), &gray);

    let blurred = gaussian_blur(&inverted, sigma);
    let smoothed = flat_plane(field, 2.0, blurred.to_rows(), &gray);

    // Terraced stage: a nearly flat raised plane whose surface color is
    // quantized into bands, with matching black iso-lines.
    let raised: Vec<f32> = blurred.data.iter().map(|v| 0.001 * v + 3.0).collect();
    let cmin = raised.iter().copied().fold(f32::INFINITY, f32::min);
    let cmax = raised.iter().copied().fold(f32::NEG_INFINITY, f32::max);
    let step = (cmax - cmin) / TERRACE_BANDS as f32;
    let banded: Vec<f32> = raised
        .iter()
        .map(|&v| {
            if step > 0.0 {
                ((v - cmin) / step).floor() * step + cmin
            } else {
                cmin
            }
        })
        .collect();
    let terraced = Trace::Surface(SurfaceTrace {
        z: to_rows(&raised, field.width),
        colorscale: terrain.clone(),
        showscale: false,
        surfacecolor: Some(to_rows(&banded, field.width)),
        contours: Some(SurfaceContours {
            z: ZContours {
                show: true,
                width: Some(1.0),
                color: Some("black".to_owned()),
                start: Some(cmin),
                end: Some(cmax),
                size: Some(step),
                ..ZContours::default()
            },
        }),
    });

    let final_relief: Vec<f32> = blurred.data.iter().map(|v| v + 4.0).collect();
    let relief = Trace::Surface(SurfaceTrace {
        z: to_rows(&final_relief, field.width),
        colorscale: terrain,
        showscale: false,
        surfacecolor: None,
        contours: None,
    });

    let longest = field.width.max(field.height) as f32;
    Ok(Figure {
        data: vec![flat, flipped, smoothed, terraced, relief],
        layout: Layout {
            scene: Some(Scene {
                camera: None,
                xaxis: SceneAxis::hidden().reversed(),
                yaxis: SceneAxis::hidden(),
                zaxis: SceneAxis::hidden(),
                aspectmode: AspectMode::Manual,
                aspectratio: AspectRatio {
                    x: field.width as f32 / longest,
                    y: field.height as f32 / longest,
                    z: 1.0,
                },
            }),
            xaxis: None,
            yaxis: None,
        },
    })
}

fn flat_plane(
    field: &HeightField,
    offset: f32,
    color: Vec<Vec<f32>>,
    scale: &crate::colorscale::Colorscale,
) -> Trace {
    Trace::Surface(SurfaceTrace {
        z: vec![vec![offset; field.width]; field.height],
        colorscale: scale.clone(),
        showscale: false,
        surfacecolor: Some(color),
        contours: None,
    })
}

fn to_rows(values: &[f32], width: usize) -> Vec<Vec<f32>> {
    values.chunks(width).map(<[f32]>::to_vec).collect()
}
