//! 3D surface views of a heightfield.
//!
//! Both cameras share the same geometry and manual aspect ratio: x and y
//! follow the grid's width:height ratio, z follows the field's own maximum
//! so terrain is neither exaggerated nor flattened by the input size. A
//! zero-variance field yields a z aspect of 0 and a legal, flat surface.

use stain_relief_core::HeightField;

use crate::colorscale::{resolve, Colorscale, PaletteError};
use crate::figure::{
    AspectMode, AspectRatio, Camera, Figure, Layout, Scene, SceneAxis, SurfaceContours,
    SurfaceTrace, Trace, Vec3, ZContours,
};

/// Isometric view: default camera, axis 0 reversed to match the viewing
/// convention.
pub fn surface_isometric(field: &HeightField, palette: &str) -> Result<Figure, PaletteError> {
    Ok(surface_isometric_scaled(field, resolve(palette)?))
}

/// Overhead view: near-vertical eye keeps 3D shading while reading like a
/// plan; axis 1 reversed instead of axis 0.
pub fn surface_overhead(field: &HeightField, palette: &str) -> Result<Figure, PaletteError> {
    Ok(surface_overhead_scaled(field, resolve(palette)?))
}

pub(crate) fn surface_isometric_scaled(field: &HeightField, scale: Colorscale) -> Figure {
    Figure {
        data: vec![relief_trace(field, scale)],
        layout: Layout {
            scene: Some(Scene {
                camera: None,
                xaxis: SceneAxis::hidden().reversed(),
                yaxis: SceneAxis::hidden(),
                zaxis: SceneAxis::hidden(),
                aspectmode: AspectMode::Manual,
                aspectratio: aspect(field),
            }),
            xaxis: None,
            yaxis: None,
        },
    }
}

pub(crate) fn surface_overhead_scaled(field: &HeightField, scale: Colorscale) -> Figure {
    Figure {
        data: vec![relief_trace(field, scale)],
        layout: Layout {
            scene: Some(Scene {
                camera: Some(Camera {
                    up: Vec3 {
                        x: 0.0,
                        y: 1.0,
                        z: 0.0,
                    },
                    eye: Vec3 {
                        x: 0.0,
                        y: 0.0,
                        z: 1.8,
                    },
                }),
                xaxis: SceneAxis::hidden(),
                yaxis: SceneAxis::hidden().reversed(),
                zaxis: SceneAxis::hidden(),
                aspectmode: AspectMode::Manual,
                aspectratio: aspect(field),
            }),
            xaxis: None,
            yaxis: None,
        },
    }
}

fn relief_trace(field: &HeightField, scale: Colorscale) -> Trace {
    Trace::Surface(SurfaceTrace {
        z: field.to_rows(),
        colorscale: scale,
        showscale: false,
        surfacecolor: None,
        contours: Some(SurfaceContours {
            z: ZContours {
                show: false,
                usecolormap: Some(true),
                highlightcolor: Some("limegreen".to_owned()),
                project_z: Some(true),
                ..ZContours::default()
            },
        }),
    })
}

fn aspect(field: &HeightField) -> AspectRatio {
    let longest = field.width.max(field.height) as f32;
    AspectRatio {
        x: field.width as f32 / longest,
        y: field.height as f32 / longest,
        z: field.max(),
    }
}
