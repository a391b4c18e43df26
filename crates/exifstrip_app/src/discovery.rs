use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Extensions accepted during directory walks.
const JPEG_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Expands CLI arguments into the list of files to process.
///
/// Directories are walked recursively and yield every regular file with a
/// JPEG extension, matched case-insensitively. Any other argument is passed
/// through untouched; a path that does not exist fails later, when the file
/// itself is opened.
pub fn collect_jpeg_files(paths: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();

    for path in paths {
        if path.is_dir() {
            for entry in WalkDir::new(path).into_iter().filter_map(|e| e.ok()) {
                let candidate = entry.path();
                if candidate.is_file() && has_jpeg_extension(candidate) {
                    files.push(candidate.to_path_buf());
                }
            }
        } else {
            files.push(path.clone());
        }
    }

    files
}

fn has_jpeg_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| JPEG_EXTENSIONS.contains(&ext.to_lowercase().as_str()))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        fs::write(path, b"x").unwrap();
    }

    #[test]
    fn test_directory_walk_finds_jpegs_recursively() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("album").join("2024");
        fs::create_dir_all(&nested).unwrap();
        touch(&dir.path().join("a.jpg"));
        touch(&nested.join("b.JPEG"));
        touch(&nested.join("notes.txt"));

        let mut found = collect_jpeg_files(&[dir.path().to_path_buf()]);
        found.sort();

        assert_eq!(found, vec![dir.path().join("a.jpg"), nested.join("b.JPEG")]);
    }

    #[test]
    fn test_empty_directory_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(collect_jpeg_files(&[dir.path().to_path_buf()]).is_empty());
    }

    #[test]
    fn test_non_directory_args_pass_through() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("x.jpg");
        touch(&file);
        let ghost = dir.path().join("ghost.jpg");

        let found = collect_jpeg_files(&[file.clone(), ghost.clone()]);
        assert_eq!(found, vec![file, ghost]);
    }

    #[test]
    fn test_explicit_file_args_not_filtered_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("picture.png");
        touch(&file);
        assert_eq!(collect_jpeg_files(&[file.clone()]), vec![file]);
    }

    #[test]
    fn test_jpeg_extension_matching() {
        assert!(has_jpeg_extension(Path::new("a.jpg")));
        assert!(has_jpeg_extension(Path::new("a.JPeG")));
        assert!(!has_jpeg_extension(Path::new("a.jpg.bak")));
        assert!(!has_jpeg_extension(Path::new("noext")));
    }
}
