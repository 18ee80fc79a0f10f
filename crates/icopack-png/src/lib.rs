//! PNG collaborator for icopack.
//!
//! Supplies the [`SizeProbe`] implementation the container core needs,
//! backed by the `image` crate, plus file-level glue for turning a list
//! of PNG paths into an `.ico` on disk.

use icopack_core::SizeProbe;
use image::ImageReader;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// Extracts pixel dimensions from encoded PNG data.
///
/// Only the image header is inspected; pixel data is never decoded.
#[derive(Debug, Clone, Copy, Default)]
pub struct PngProbe;

impl SizeProbe for PngProbe {
    fn probe(&self, data: &[u8]) -> Result<(u32, u32), String> {
        let reader = ImageReader::new(Cursor::new(data))
            .with_guessed_format()
            .map_err(|e| format!("unrecognized image data: {}", e))?;

        reader
            .into_dimensions()
            .map_err(|e| format!("failed to read image dimensions: {}", e))
    }
}

/// Pack a list of PNG files into a single ICO file.
///
/// Images appear in the container in the order given. Nothing is written
/// on failure.
pub fn pack_files(inputs: &[PathBuf], output: &Path) -> Result<(), String> {
    let mut images = Vec::with_capacity(inputs.len());
    for path in inputs {
        let data = fs::read(path)
            .map_err(|e| format!("failed to read {}: {}", path.display(), e))?;
        images.push(data);
    }

    let ico = icopack_core::build(&images, &PngProbe)
        .map_err(|e| format!("failed to assemble icon: {}", e))?;

    fs::write(output, &ico)
        .map_err(|e| format!("failed to write {}: {}", output.display(), e))?;

    Ok(())
}
