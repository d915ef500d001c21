use approx::assert_relative_eq;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::Path;

use stain_relief::render::Trace;
use stain_relief::{process, Gallery, Input, ProcessError};

fn write_png(path: &Path, width: u32, height: u32, value: u8) {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([value, value, value]));
    img.save(path).unwrap();
}

fn png_bytes(width: u32, height: u32, value: u8) -> Vec<u8> {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([value, value, value]));
    let mut bytes = Vec::new();
    image::DynamicImage::ImageRgb8(img)
        .write_to(
            &mut std::io::Cursor::new(&mut bytes),
            image::ImageFormat::Png,
        )
        .unwrap();
    bytes
}

#[test]
fn gallery_selection_runs_the_full_pipeline() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("Humedad I.png"), 500, 500, 128);
    let gallery = Gallery::scan(dir.path()).unwrap();

    let out = process(
        &Input::Gallery("Humedad I".to_owned()),
        &gallery,
        "terrain",
    )
    .unwrap();

    // uniform 128 -> luma 128 -> /255 -> inverted: ~0.498 everywhere;
    // block mean and blur of a uniform grid change nothing
    let expected = 1.0 - 128.0 / 255.0;
    for v in &out.heights.data {
        assert_relative_eq!(*v, expected, max_relative = 1e-3);
    }
    assert!(matches!(out.figures.original.data[0], Trace::Heatmap(_)));
    assert!(matches!(out.figures.contour.data[0], Trace::Contour(_)));
}

#[test]
fn large_upload_is_downsampled() {
    let dir = tempfile::tempdir().unwrap();
    let gallery = Gallery::scan(dir.path()).unwrap();

    let uri = format!(
        "data:image/png;base64,{}",
        STANDARD.encode(png_bytes(1200, 800, 64))
    );
    let input = Input::from_data_uri(&uri).unwrap();
    let out = process(&input, &gallery, "Greys").unwrap();

    assert_eq!((out.heights.width, out.heights.height), (400, 400));
    assert_eq!((out.pixels.width(), out.pixels.height()), (1200, 800));
}

#[test]
fn unknown_gallery_entry_surfaces_the_name() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("Humedad I.png"), 8, 8, 10);
    let gallery = Gallery::scan(dir.path()).unwrap();

    let err = process(
        &Input::Gallery("Humedad XIV".to_owned()),
        &gallery,
        "terrain",
    )
    .unwrap_err();
    assert!(matches!(err, ProcessError::Gallery(_)));
    assert!(err.to_string().contains("Humedad XIV"));
}

#[test]
fn unknown_palette_produces_no_partial_set() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("Humedad I.png"), 8, 8, 10);
    let gallery = Gallery::scan(dir.path()).unwrap();

    let err = process(
        &Input::Gallery("Humedad I".to_owned()),
        &gallery,
        "prism",
    )
    .unwrap_err();
    assert!(matches!(err, ProcessError::Palette(_)));
}

#[test]
fn malformed_upload_fails_decode() {
    let dir = tempfile::tempdir().unwrap();
    let gallery = Gallery::scan(dir.path()).unwrap();

    let err = process(
        &Input::Upload(vec![1, 2, 3, 4]),
        &gallery,
        "terrain",
    )
    .unwrap_err();
    assert!(matches!(err, ProcessError::Input(_)));
}

#[test]
fn figures_serialize_independently() {
    let dir = tempfile::tempdir().unwrap();
    write_png(&dir.path().join("Mancha.png"), 32, 16, 200);
    let gallery = Gallery::scan(dir.path()).unwrap();

    let out = process(&Input::Gallery("Mancha".to_owned()), &gallery, "terrain").unwrap();
    let surface = serde_json::to_value(&out.figures.surface_isometric).unwrap();
    assert_eq!(surface["data"][0]["type"], "surface");
    assert_eq!(surface["layout"]["scene"]["aspectmode"], "manual");
    assert_eq!(surface["layout"]["scene"]["xaxis"]["autorange"], "reversed");

    let overhead = serde_json::to_value(&out.figures.surface_overhead).unwrap();
    assert_eq!(overhead["layout"]["scene"]["yaxis"]["autorange"], "reversed");
    assert!(overhead["layout"]["scene"]["camera"]["eye"]["z"].is_number());
}
