//! Render a stain image to figure JSON files.
//!
//! ```text
//! stain-relief --gallery "Humedad I" --data-dir data --palette terrain --out figures
//! stain-relief --image foto.png --storyboard --out figures
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use log::{info, LevelFilter};

use stain_relief::render::{process_storyboard, STORYBOARD_SIGMA};
use stain_relief::{generate, render_all, Figure, Gallery, Input, Processed};

#[derive(Parser, Debug)]
#[command(
    name = "stain-relief",
    version,
    about = "Render a dampness stain image as pseudo-terrain figures"
)]
struct Args {
    /// Gallery root directory.
    #[arg(long, default_value = "data")]
    data_dir: PathBuf,

    /// Gallery entry to render (display name, no extension).
    #[arg(long, conflicts_with = "image")]
    gallery: Option<String>,

    /// Image file to render instead of a gallery entry.
    #[arg(long)]
    image: Option<PathBuf>,

    /// Palette name for the surface and contour figures.
    #[arg(long, default_value = "terrain")]
    palette: String,

    /// Output directory for the figure JSON files.
    #[arg(long, default_value = "figures")]
    out: PathBuf,

    /// Also write the process storyboard figure.
    #[arg(long)]
    storyboard: bool,

    /// Verbose logging (repeat for debug).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn write_figure(dir: &Path, name: &str, figure: &Figure) -> Result<(), Box<dyn std::error::Error>> {
    let path = dir.join(format!("{name}.json"));
    fs::write(&path, serde_json::to_string_pretty(figure)?)?;
    info!("wrote {}", path.display());
    Ok(())
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let level = match args.verbose {
        0 => LevelFilter::Info,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    stain_relief::core::init_with_level(level)?;

    let Processed {
        heights, figures, ..
    } = match (&args.gallery, &args.image) {
        (Some(name), None) => {
            let gallery = Gallery::scan(&args.data_dir)?;
            stain_relief::process(&Input::Gallery(name.clone()), &gallery, &args.palette)?
        }
        (None, Some(path)) => {
            let bytes = fs::read(path)?;
            let pixels = stain_relief::pixels_from_bytes(&bytes)?;
            let heights = generate(&pixels);
            let figures = render_all(&pixels, &heights, &args.palette)?;
            Processed {
                pixels,
                heights,
                figures,
            }
        }
        _ => {
            return Err("pass exactly one of --gallery or --image".into());
        }
    };

    fs::create_dir_all(&args.out)?;
    write_figure(&args.out, "original", &figures.original)?;
    write_figure(&args.out, "transformed", &figures.transformed)?;
    write_figure(&args.out, "surface-isometric", &figures.surface_isometric)?;
    write_figure(&args.out, "surface-overhead", &figures.surface_overhead)?;
    write_figure(&args.out, "contour", &figures.contour)?;

    if args.storyboard {
        let fig = process_storyboard(&heights, &args.palette, STORYBOARD_SIGMA)?;
        write_figure(&args.out, "storyboard", &fig)?;
    }

    Ok(())
}
