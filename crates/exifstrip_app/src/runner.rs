use std::path::{Path, PathBuf};

use exifstrip_core::{strip_exif, Result};
use exifstrip_io::{read_source, stripped_path, write_output};

/// Outcome of one successfully stripped file.
pub struct StrippedFile {
    pub output_path: PathBuf,
    pub bytes_removed: usize,
}

/// Totals for a whole run.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub processed: usize,
    pub failed: usize,
    pub bytes_removed: u64,
}

impl RunSummary {
    pub fn all_ok(&self) -> bool {
        self.failed == 0
    }
}

/// Processes one file end to end: read, strip, write the sibling output.
/// Nothing is written unless the rewritten buffer was fully assembled.
pub fn strip_file(path: &Path) -> Result<StrippedFile> {
    let source = read_source(path)?;
    let output = strip_exif(&source)?;
    let output_path = stripped_path(path);
    write_output(&output_path, &output)?;

    Ok(StrippedFile {
        output_path,
        bytes_removed: source.len() - output.len(),
    })
}

/// Strips every file in order. A failure is logged and counted; the run
/// always continues to the next file.
pub fn run(files: &[PathBuf]) -> RunSummary {
    let mut summary = RunSummary::default();

    for path in files {
        summary.processed += 1;
        match strip_file(path) {
            Ok(stripped) => {
                println!(
                    "Stripped EXIF: {} -> {}",
                    path.display(),
                    stripped.output_path.display()
                );
                summary.bytes_removed += stripped.bytes_removed as u64;
            }
            Err(e) => {
                log::error!("{}: {}", path.display(), e);
                summary.failed += 1;
            }
        }
    }

    summary
}
