//! High-level facade crate for the `stain-relief-*` workspace.
//!
//! This crate provides:
//! - stable, convenient re-exports of the core and render crates
//! - the input boundary (gallery selections, uploaded data URIs)
//! - the read-only example gallery configuration
//! - an end-to-end `process` helper running decode -> generate -> render
//!
//! ## Quickstart
//!
//! ```no_run
//! use stain_relief::{process, Gallery, Input};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let gallery = Gallery::scan("data")?;
//! let input = Input::Gallery("Humedad I".to_owned());
//! let out = process(&input, &gallery, "terrain")?;
//! println!("heightfield {}x{}", out.heights.width, out.heights.height);
//! # Ok(())
//! # }
//! ```
//!
//! ## API map
//! - `stain_relief::core`: pixel arrays and the heightfield generator.
//! - `stain_relief::render`: colorscales and the five figure builders.
//! - `stain_relief::{Input, Gallery, process}`: the outer boundary.

pub use stain_relief_core as core;
pub use stain_relief_render as render;

pub use stain_relief_core::{generate, HeightField, PixelArray, PixelArrayError};
pub use stain_relief_render::{
    contour_map, flat_original, flat_transformed, process_storyboard, render_all,
    surface_isometric, surface_overhead, Figure, FigureSet, PaletteError,
};

mod gallery;
mod input;
mod process;

pub use gallery::{Gallery, GalleryEntry, GalleryError};
pub use input::{decode_data_uri, pixels_from_bytes, pixels_from_image, Input, InputError};
pub use process::{process, resolve_input, Processed, ProcessError};
