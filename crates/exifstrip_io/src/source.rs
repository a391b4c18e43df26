//! Whole-file reading for source images.

use exifstrip_core::{CoreError, Result};
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::Path;

/// Reads the file at `path` fully into memory.
///
/// The size is taken from filesystem metadata first and the returned buffer
/// holds exactly that many bytes. A file that yields fewer bytes than its
/// reported size is an error, not a short read.
///
/// # Returns
///
/// The file contents on success, or an error if:
/// - The file cannot be stat'ed (`SizeUnavailable`)
/// - The file cannot be opened or fully read (`ReadFailure`)
pub fn read_source(path: &Path) -> Result<Vec<u8>> {
    let size = fs::metadata(path)
        .map_err(CoreError::SizeUnavailable)?
        .len();
    // A stat size beyond the address space cannot be buffered in full.
    let size = usize::try_from(size)
        .map_err(|_| CoreError::ReadFailure(io::Error::from(io::ErrorKind::FileTooLarge)))?;

    let mut file = File::open(path).map_err(CoreError::ReadFailure)?;
    let mut buffer = vec![0u8; size];
    file.read_exact(&mut buffer).map_err(CoreError::ReadFailure)?;

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_read_source_returns_full_content() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&[0xFF, 0xD8, 0x01, 0x02, 0x03]).unwrap();
        file.flush().unwrap();

        let data = read_source(file.path()).unwrap();
        assert_eq!(data, [0xFF, 0xD8, 0x01, 0x02, 0x03]);
    }

    #[test]
    fn test_read_source_empty_file() {
        let file = NamedTempFile::new().unwrap();
        assert!(read_source(file.path()).unwrap().is_empty());
    }

    #[test]
    fn test_read_source_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.jpg");
        assert!(matches!(
            read_source(&missing),
            Err(CoreError::SizeUnavailable(_))
        ));
    }

    #[cfg(target_pointer_width = "32")]
    #[test]
    fn test_read_source_rejects_size_beyond_address_space() {
        // A sparse file puts the stat size past usize::MAX without
        // writing the bytes.
        let file = NamedTempFile::new().unwrap();
        file.as_file().set_len(u64::from(u32::MAX) + 1).unwrap();
        assert!(matches!(
            read_source(file.path()),
            Err(CoreError::ReadFailure(_))
        ));
    }
}
