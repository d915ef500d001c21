//! Declarative figure model.
//!
//! A [`Figure`] is a self-contained scene description: traces plus layout,
//! serializable to JSON for whatever host turns it into pixels. No figure
//! holds a reference to another; each is reproducible from the heightfield
//! and palette that built it.

use serde::{Deserialize, Serialize};

use crate::colorscale::Colorscale;

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Figure {
    pub data: Vec<Trace>,
    pub layout: Layout,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Trace {
    Surface(SurfaceTrace),
    Contour(ContourTrace),
    Heatmap(HeatmapTrace),
}

/// Height-mapped 3D surface.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SurfaceTrace {
    pub z: Vec<Vec<f32>>,
    pub colorscale: Colorscale,
    pub showscale: bool,
    /// Color the surface by a different scalar grid than `z`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub surfacecolor: Option<Vec<Vec<f32>>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub contours: Option<SurfaceContours>,
}

/// Iso-line settings along the z axis of a surface trace.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SurfaceContours {
    pub z: ZContours,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct ZContours {
    pub show: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub usecolormap: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlightcolor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_z: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<f32>,
}

/// 2D iso-line rendering of a scalar grid.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContourTrace {
    pub z: Vec<Vec<f32>>,
    pub colorscale: Colorscale,
    pub showscale: bool,
}

/// Flat scalar grid, used for the plain image views.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct HeatmapTrace {
    pub z: Vec<Vec<f32>>,
    pub colorscale: Colorscale,
    pub showscale: bool,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct Layout {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scene: Option<Scene>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xaxis: Option<Axis>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub yaxis: Option<Axis>,
}

/// 3D scene settings: camera, per-axis visibility and the manual aspect
/// ratio that keeps terrain proportions honest.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Scene {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub camera: Option<Camera>,
    pub xaxis: SceneAxis,
    pub yaxis: SceneAxis,
    pub zaxis: SceneAxis,
    pub aspectmode: AspectMode,
    pub aspectratio: AspectRatio,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AspectMode {
    Auto,
    Cube,
    Data,
    Manual,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct AspectRatio {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Camera {
    pub up: Vec3,
    pub eye: Vec3,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AxisRange {
    Reversed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Constrain {
    Domain,
}

/// 3D scene axis settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SceneAxis {
    pub showgrid: bool,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<AxisRange>,
}

impl SceneAxis {
    /// No grid, no ticks, no labels.
    pub fn hidden() -> Self {
        Self {
            showgrid: false,
            visible: false,
            autorange: None,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.autorange = Some(AxisRange::Reversed);
        self
    }
}

/// 2D layout axis settings.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Axis {
    pub showgrid: bool,
    pub visible: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub autorange: Option<AxisRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleanchor: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scaleratio: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constrain: Option<Constrain>,
}

impl Axis {
    pub fn hidden() -> Self {
        Self {
            showgrid: false,
            visible: false,
            autorange: None,
            scaleanchor: None,
            scaleratio: None,
            constrain: None,
        }
    }

    pub fn reversed(mut self) -> Self {
        self.autorange = Some(AxisRange::Reversed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::colorscale::gray_scale;

    #[test]
    fn traces_serialize_with_type_tags() {
        let trace = Trace::Heatmap(HeatmapTrace {
            z: vec![vec![0.0, 1.0]],
            colorscale: gray_scale(),
            showscale: false,
        });
        let json = serde_json::to_value(&trace).unwrap();
        assert_eq!(json["type"], "heatmap");
        assert_eq!(json["showscale"], false);
    }

    #[test]
    fn unset_layout_fields_are_omitted() {
        let layout = Layout {
            scene: None,
            xaxis: Some(Axis::hidden()),
            yaxis: Some(Axis::hidden().reversed()),
        };
        let json = serde_json::to_value(&layout).unwrap();
        assert!(json.get("scene").is_none());
        assert!(json["xaxis"].get("autorange").is_none());
        assert_eq!(json["yaxis"]["autorange"], "reversed");
    }

    #[test]
    fn scene_serializes_camera_and_aspect() {
        let scene = Scene {
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
            aspectratio: AspectRatio {
                x: 1.0,
                y: 0.5,
                z: 0.25,
            },
        };
        let json = serde_json::to_value(&scene).unwrap();
        assert_eq!(json["aspectmode"], "manual");
        let eye_z = json["camera"]["eye"]["z"].as_f64().unwrap();
        assert!((eye_z - 1.8).abs() < 1e-6);
        assert_eq!(json["yaxis"]["autorange"], "reversed");
    }
}
