//! Output naming and writing for stripped images.

use exifstrip_core::{CoreError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Derives the output path next to the source file: `photo.jpg` becomes
/// `photo.stripped.jpg`, keeping the original extension and its case.
/// A source without an extension gets a bare `.stripped` suffix.
pub fn stripped_path(path: &Path) -> PathBuf {
    match path.extension().and_then(|ext| ext.to_str()) {
        Some(ext) => path.with_extension(format!("stripped.{ext}")),
        None => path.with_extension("stripped"),
    }
}

/// Writes the rewritten image as a new file, leaving the source untouched.
pub fn write_output(path: &Path, data: &[u8]) -> Result<()> {
    fs::write(path, data).map_err(CoreError::WriteFailure)
}
