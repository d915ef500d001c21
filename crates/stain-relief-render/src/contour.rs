//! 2D contour view of a heightfield.

use stain_relief_core::HeightField;

use crate::colorscale::{resolve, Colorscale, PaletteError};
use crate::figure::{Axis, Constrain, ContourTrace, Figure, Layout, Trace};

/// Iso-line rendering of the heightfield.
///
/// The y axis is anchored to x with ratio 1 so contour shapes keep their
/// proportions, and reversed so row 0 sits at the top.
pub fn contour_map(field: &HeightField, palette: &str) -> Result<Figure, PaletteError> {
    Ok(contour_map_scaled(field, resolve(palette)?))
}

pub(crate) fn contour_map_scaled(field: &HeightField, scale: Colorscale) -> Figure {
    let mut xaxis = Axis::hidden();
    xaxis.constrain = Some(Constrain::Domain);
    let mut yaxis = Axis::hidden().reversed();
    yaxis.scaleanchor = Some("x".to_owned());
    yaxis.scaleratio = Some(1.0);
    Figure {
        data: vec![Trace::Contour(ContourTrace {
            z: field.to_rows(),
            colorscale: scale,
            showscale: false,
        })],
        layout: Layout {
            scene: None,
            xaxis: Some(xaxis),
            yaxis: Some(yaxis),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_aspect_is_enforced() {
        let field = HeightField {
            width: 3,
            height: 2,
            data: vec![0.0, 0.2, 0.4, 0.6, 0.8, 1.0],
        };
        let fig = contour_map(&field, "terrain").unwrap();
        let yaxis = fig.layout.yaxis.as_ref().unwrap();
        assert_eq!(yaxis.scaleanchor.as_deref(), Some("x"));
        assert_eq!(yaxis.scaleratio, Some(1.0));
        assert!(yaxis.autorange.is_some());
        assert!(fig.layout.xaxis.as_ref().unwrap().constrain.is_some());
    }

    #[test]
    fn zero_variance_field_still_renders() {
        let field = HeightField {
            width: 4,
            height: 4,
            data: vec![0.0; 16],
        };
        let fig = contour_map(&field, "Greys").unwrap();
        let Trace::Contour(trace) = &fig.data[0] else {
            panic!("expected contour trace");
        };
        assert_eq!(trace.z.len(), 4);
    }
}
