//! Directory scanning for batch input.
use std::fs;
use std::path::{Path, PathBuf};

use tracing::{debug, trace, warn};

use crate::error::Result;
use crate::types::IMAGE_EXTENSIONS;

/// True if the file name of `path` ends in one of the accepted image
/// extensions, in any case. A bare `.jpg` counts.
pub fn is_supported_image(path: &Path) -> bool {
    path.file_name()
        .map(|name| {
            let name = name.to_string_lossy().to_lowercase();
            IMAGE_EXTENSIONS
                .iter()
                .any(|ext| name.ends_with(&format!(".{ext}")))
        })
        .unwrap_or(false)
}

/// Lists the images directly inside `dir`, sorted by file name.
///
/// Subdirectories are not descended into. Symlinks are followed, so a link
/// to an image is kept and a link to a directory is not. Entries that cannot
/// be read are logged and skipped; only failing to list `dir` is an error.
pub fn scan_images(dir: &Path) -> Result<Vec<PathBuf>> {
    trace!("Scanning {:?} for images", dir);
    let mut files = Vec::new();

    for entry in fs::read_dir(dir)? {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                warn!("Skipping unreadable entry in {:?}: {}", dir, e);
                continue;
            }
        };
        let path = entry.path();
        if !is_supported_image(&path) {
            trace!("Skipping non-image: {:?}", path);
            continue;
        }
        match fs::metadata(&path) {
            Ok(meta) if meta.is_dir() => {
                debug!("Skipping directory: {:?}", path);
                continue;
            }
            Ok(_) => {}
            Err(e) => {
                warn!("Skipping {:?}: {}", path, e);
                continue;
            }
        }
        files.push(path);
    }

    files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
    debug!("Found {} image(s) in {:?}", files.len(), dir);
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    fn names(files: &[PathBuf]) -> Vec<String> {
        files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
            .collect()
    }

    #[test]
    fn matches_extensions_case_insensitively() {
        assert!(is_supported_image(Path::new("a.jpg")));
        assert!(is_supported_image(Path::new("a.JPEG")));
        assert!(is_supported_image(Path::new("dir/a.Png")));
        assert!(!is_supported_image(Path::new("a.tiff")));
        assert!(!is_supported_image(Path::new("a.jpg.txt")));
        assert!(!is_supported_image(Path::new("jpg")));
        assert!(!is_supported_image(Path::new(".png.bak")));
        assert!(is_supported_image(Path::new(".jpg")));
        assert!(is_supported_image(Path::new("dir/.JPEG")));
    }

    #[test]
    fn keeps_only_images_in_name_order() {
        let dir = tempdir().unwrap();
        for name in ["d.jpeg", "b.txt", "c.PNG", "a.jpg"] {
            File::create(dir.path().join(name)).unwrap();
        }

        let files = scan_images(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["a.jpg", "c.PNG", "d.jpeg"]);
        assert!(files.iter().all(|p| p.parent() == Some(dir.path())));
    }

    #[test]
    fn ignores_directories_and_nested_files() {
        let dir = tempdir().unwrap();
        fs::create_dir(dir.path().join("album.jpg")).unwrap();
        File::create(dir.path().join("album.jpg").join("inner.jpg")).unwrap();
        File::create(dir.path().join("top.png")).unwrap();

        let files = scan_images(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["top.png"]);
    }

    #[test]
    fn dotfile_named_like_an_extension_is_kept() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join(".jpg")).unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();

        let files = scan_images(dir.path()).unwrap();
        assert_eq!(names(&files), vec![".jpg", "a.jpg"]);
    }

    #[cfg(unix)]
    #[test]
    fn follows_symlinks_to_images() {
        use std::os::unix::fs::symlink;

        let elsewhere = tempdir().unwrap();
        let target = elsewhere.path().join("real.jpg");
        File::create(&target).unwrap();
        fs::create_dir(elsewhere.path().join("album")).unwrap();

        let dir = tempdir().unwrap();
        File::create(dir.path().join("a.jpg")).unwrap();
        symlink(&target, dir.path().join("link.jpg")).unwrap();
        symlink(elsewhere.path().join("album"), dir.path().join("album.png")).unwrap();

        let files = scan_images(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["a.jpg", "link.jpg"]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_symlink_is_skipped_not_fatal() {
        use std::os::unix::fs::symlink;

        let dir = tempdir().unwrap();
        File::create(dir.path().join("b.png")).unwrap();
        symlink(dir.path().join("gone.jpg"), dir.path().join("broken.jpg")).unwrap();

        let files = scan_images(dir.path()).unwrap();
        assert_eq!(names(&files), vec!["b.png"]);
    }

    #[test]
    fn empty_directory_yields_no_files() {
        let dir = tempdir().unwrap();
        assert!(scan_images(dir.path()).unwrap().is_empty());
    }

    #[test]
    fn missing_directory_is_an_error() {
        let dir = tempdir().unwrap();
        assert!(scan_images(&dir.path().join("gone")).is_err());
    }
}
