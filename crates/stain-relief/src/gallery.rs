//! Read-only example gallery.
//!
//! The gallery root is scanned once at startup; the enumerated list never
//! changes afterwards. Display names are file stems with the extension
//! stripped, matching what a dropdown would show.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use stain_relief_core::PixelArray;

use crate::input::{pixels_from_bytes, InputError};

/// One gallery file: display name plus resolved path.
#[derive(Clone, Debug)]
pub struct GalleryEntry {
    pub name: String,
    pub path: PathBuf,
}

/// Errors produced while scanning or loading gallery images.
#[derive(thiserror::Error, Debug)]
pub enum GalleryError {
    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("unknown gallery entry '{name}'")]
    UnknownEntry { name: String },

    #[error(transparent)]
    Decode(#[from] InputError),
}

/// Enumerated gallery, built once and treated as read-only.
#[derive(Clone, Debug)]
pub struct Gallery {
    root: PathBuf,
    entries: Vec<GalleryEntry>,
}

impl Gallery {
    /// Enumerate the regular files under `root`, sorted by name.
    pub fn scan(root: impl AsRef<Path>) -> Result<Self, GalleryError> {
        let root = root.as_ref().to_path_buf();
        let mut entries = Vec::new();
        for dir_entry in fs::read_dir(&root)? {
            let dir_entry = dir_entry?;
            let path = dir_entry.path();
            if !path.is_file() {
                continue;
            }
            let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
                continue;
            };
            entries.push(GalleryEntry {
                name: stem.to_owned(),
                path,
            });
        }
        entries.sort_by(|a, b| a.name.cmp(&b.name));
        info!("gallery: {} entries under {}", entries.len(), root.display());
        Ok(Self { root, entries })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn entries(&self) -> &[GalleryEntry] {
        &self.entries
    }

    /// Display names in listing order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.name.as_str())
    }

    /// Look an entry up by display name.
    pub fn resolve(&self, name: &str) -> Result<&GalleryEntry, GalleryError> {
        self.entries
            .iter()
            .find(|e| e.name == name)
            .ok_or_else(|| GalleryError::UnknownEntry {
                name: name.to_owned(),
            })
    }

    /// Read and decode an entry by display name.
    pub fn load(&self, name: &str) -> Result<PixelArray, GalleryError> {
        let entry = self.resolve(name)?;
        let bytes = fs::read(&entry.path)?;
        Ok(pixels_from_bytes(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_png(path: &Path, width: u32, height: u32, value: u8) {
        let img = image::RgbImage::from_pixel(width, height, image::Rgb([value, value, value]));
        img.save(path).unwrap();
    }

    #[test]
    fn scan_lists_stems_sorted() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("Humedad II.png"), 4, 4, 100);
        write_png(&dir.path().join("Humedad I.png"), 4, 4, 50);
        let gallery = Gallery::scan(dir.path()).unwrap();
        let names: Vec<&str> = gallery.names().collect();
        assert_eq!(names, vec!["Humedad I", "Humedad II"]);
    }

    #[test]
    fn load_resolves_a_stem_to_its_file() {
        let dir = tempfile::tempdir().unwrap();
        write_png(&dir.path().join("Humedad I.png"), 6, 3, 128);
        let gallery = Gallery::scan(dir.path()).unwrap();
        let entry = gallery.resolve("Humedad I").unwrap();
        assert_eq!(entry.path, dir.path().join("Humedad I.png"));
        let pixels = gallery.load("Humedad I").unwrap();
        assert_eq!((pixels.width(), pixels.height()), (6, 3));
    }

    #[test]
    fn unknown_entry_is_an_error_naming_it() {
        let dir = tempfile::tempdir().unwrap();
        let gallery = Gallery::scan(dir.path()).unwrap();
        let err = gallery.load("Gotera").unwrap_err();
        assert!(err.to_string().contains("Gotera"));
    }

    #[test]
    fn directories_are_skipped() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        write_png(&dir.path().join("Mancha.png"), 2, 2, 10);
        let gallery = Gallery::scan(dir.path()).unwrap();
        assert_eq!(gallery.entries().len(), 1);
    }
}
