//! Central colormap registry.
//!
//! Each named palette is a continuous piecewise-linear gradient over a
//! handful of control points. Figures consume a [`Colorscale`]: the
//! gradient sampled at 255 evenly spaced positions, each re-expressed as a
//! discrete 0-255 integer `rgb(r, g, b)` stop.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Built-in palette names (case-sensitive).
pub static SUPPORTED: [&str; 5] = ["terrain", "Greys", "gray", "viridis", "magma"];

/// Number of stops a sampled colorscale carries.
pub const SCALE_STEPS: usize = 255;

#[derive(Error, Debug)]
#[error("unknown palette '{name}' (supported: {})", SUPPORTED.join(", "))]
pub struct PaletteError {
    pub name: String,
}

/// A sampled colorscale: `(position, "rgb(r, g, b)")` stops over [0, 1].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Colorscale(pub Vec<(f32, String)>);

// Control points: position in [0, 1] plus unit-range RGB.
type Gradient = &'static [(f32, [f32; 3])];

const TERRAIN: Gradient = &[
    (0.00, [0.2, 0.2, 0.6]),
    (0.15, [0.0, 0.6, 1.0]),
    (0.25, [0.0, 0.8, 0.4]),
    (0.50, [1.0, 1.0, 0.6]),
    (0.75, [0.5, 0.36, 0.33]),
    (1.00, [1.0, 1.0, 1.0]),
];

const GREYS: Gradient = &[
    (0.000, [1.0000, 1.0000, 1.0000]),
    (0.125, [0.9412, 0.9412, 0.9412]),
    (0.250, [0.8510, 0.8510, 0.8510]),
    (0.375, [0.7412, 0.7412, 0.7412]),
    (0.500, [0.5882, 0.5882, 0.5882]),
    (0.625, [0.4510, 0.4510, 0.4510]),
    (0.750, [0.3216, 0.3216, 0.3216]),
    (0.875, [0.1451, 0.1451, 0.1451]),
    (1.000, [0.0000, 0.0000, 0.0000]),
];

const GRAY: Gradient = &[(0.0, [0.0, 0.0, 0.0]), (1.0, [1.0, 1.0, 1.0])];

// Coarse anchors at quartile positions; good enough for terrain shading,
// not a reference reproduction of the full maps.
const VIRIDIS: Gradient = &[
    (0.00, [0.267, 0.005, 0.329]),
    (0.25, [0.231, 0.322, 0.545]),
    (0.50, [0.129, 0.569, 0.549]),
    (0.75, [0.369, 0.788, 0.384]),
    (1.00, [0.993, 0.906, 0.145]),
];

const MAGMA: Gradient = &[
    (0.00, [0.000, 0.000, 0.016]),
    (0.25, [0.318, 0.071, 0.486]),
    (0.50, [0.718, 0.216, 0.475]),
    (0.75, [0.988, 0.537, 0.380]),
    (1.00, [0.988, 0.992, 0.749]),
];

fn gradient(name: &str) -> Result<Gradient, PaletteError> {
    match name {
        "terrain" => Ok(TERRAIN),
        "Greys" => Ok(GREYS),
        "gray" => Ok(GRAY),
        "viridis" => Ok(VIRIDIS),
        "magma" => Ok(MAGMA),
        _ => Err(PaletteError {
            name: name.to_owned(),
        }),
    }
}

fn eval(stops: Gradient, t: f32) -> [f32; 3] {
    let t = t.clamp(0.0, 1.0);
    let mut prev = stops[0];
    for &stop in &stops[1..] {
        if t <= stop.0 {
            let span = stop.0 - prev.0;
            let f = if span > 0.0 { (t - prev.0) / span } else { 0.0 };
            return [
                prev.1[0] + f * (stop.1[0] - prev.1[0]),
                prev.1[1] + f * (stop.1[1] - prev.1[1]),
                prev.1[2] + f * (stop.1[2] - prev.1[2]),
            ];
        }
        prev = stop;
    }
    stops[stops.len() - 1].1
}

fn sample(stops: Gradient) -> Colorscale {
    let h = 1.0 / (SCALE_STEPS - 1) as f32;
    let entries = (0..SCALE_STEPS)
        .map(|k| {
            let t = k as f32 * h;
            let [r, g, b] = eval(stops, t);
            let color = format!(
                "rgb({}, {}, {})",
                (r.clamp(0.0, 1.0) * 255.0).round() as u8,
                (g.clamp(0.0, 1.0) * 255.0).round() as u8,
                (b.clamp(0.0, 1.0) * 255.0).round() as u8
            );
            (t, color)
        })
        .collect();
    Colorscale(entries)
}

/// Resolve a palette name to its sampled colorscale.
pub fn resolve(name: &str) -> Result<Colorscale, PaletteError> {
    gradient(name).map(sample)
}

/// The grayscale ramp the flat comparison views use.
pub fn gray_scale() -> Colorscale {
    sample(GRAY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_palettes_resolve_with_255_stops() {
        for name in SUPPORTED {
            let scale = resolve(name).unwrap();
            assert_eq!(scale.0.len(), SCALE_STEPS, "palette {name}");
            assert_eq!(scale.0[0].0, 0.0);
            assert!((scale.0[SCALE_STEPS - 1].0 - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn endpoints_match_control_points() {
        let scale = resolve("terrain").unwrap();
        assert_eq!(scale.0[0].1, "rgb(51, 51, 153)");
        assert_eq!(scale.0[SCALE_STEPS - 1].1, "rgb(255, 255, 255)");

        let greys = resolve("Greys").unwrap();
        assert_eq!(greys.0[0].1, "rgb(255, 255, 255)");
        assert_eq!(greys.0[SCALE_STEPS - 1].1, "rgb(0, 0, 0)");
    }

    #[test]
    fn gray_ramp_is_monotonic() {
        let scale = gray_scale();
        let first = &scale.0[0].1;
        let last = &scale.0[SCALE_STEPS - 1].1;
        assert_eq!(first, "rgb(0, 0, 0)");
        assert_eq!(last, "rgb(255, 255, 255)");
    }

    #[test]
    fn unknown_palette_is_an_error_naming_the_input() {
        let err = resolve("plasma").unwrap_err();
        assert!(err.to_string().contains("plasma"));
        assert!(err.to_string().contains("terrain"));
    }
}
