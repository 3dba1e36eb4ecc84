//! Filesystem-backed image store
//!
//! The only component that touches the filesystem. Lists image files in
//! a working directory, reads them into pixel grids, and clears the
//! directory. The directory is both input source and, via
//! [`ImageStore::delete_all`], a destructive sink; callers must serialize
//! access to it, no locking is provided here.

use crate::color::PixelGrid;
use crate::constants::ALLOWED_EXTENSIONS;
use crate::decode;
use crate::error::{Result, ToneError};
use std::path::{Path, PathBuf};

/// Store over a single working directory of images
#[derive(Debug, Clone)]
pub struct ImageStore {
    dir: PathBuf,
}

impl ImageStore {
    /// Create a store over the given directory
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// The working directory this store operates on
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Absolute path of a named image inside the directory
    pub fn path_of(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }

    /// List image filenames with an allowed extension, in filesystem
    /// enumeration order.
    ///
    /// The order is whatever the platform yields and is not guaranteed
    /// stable; callers may rely on it only for display. Extensions are
    /// matched case-insensitively against `{jpg, jpeg, png, gif}`.
    ///
    /// # Errors
    ///
    /// Returns [`ToneError::Directory`] if the directory cannot be read.
    pub fn list(&self) -> Result<Vec<String>> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            ToneError::directory(
                format!("Failed to list directory: {}", self.dir.display()),
                e,
            )
        })?;

        let mut names = Vec::new();
        for entry in entries {
            let entry = entry.map_err(|e| {
                ToneError::directory(
                    format!("Failed to read directory entry in {}", self.dir.display()),
                    e,
                )
            })?;
            let path = entry.path();
            if path.is_file() && has_allowed_extension(&path) {
                if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                    names.push(name.to_string());
                }
            }
        }
        Ok(names)
    }

    /// Decode a named image from the directory into a pixel grid
    pub fn read(&self, name: &str) -> Result<PixelGrid> {
        decode::load_pixels(&self.path_of(name))
    }

    /// Remove every file currently in the directory.
    ///
    /// This is an unfiltered destructive sweep: files that are not on
    /// the extension allow-list are removed too. Subdirectories are left
    /// in place.
    ///
    /// # Errors
    ///
    /// Returns [`ToneError::Directory`] if the listing or any removal fails.
    pub fn delete_all(&self) -> Result<()> {
        let entries = std::fs::read_dir(&self.dir).map_err(|e| {
            ToneError::directory(
                format!("Failed to list directory: {}", self.dir.display()),
                e,
            )
        })?;

        for entry in entries {
            let entry = entry.map_err(|e| {
                ToneError::directory(
                    format!("Failed to read directory entry in {}", self.dir.display()),
                    e,
                )
            })?;
            let path = entry.path();
            if path.is_file() {
                std::fs::remove_file(&path).map_err(|e| {
                    ToneError::directory(format!("Failed to delete: {}", path.display()), e)
                })?;
            }
        }
        Ok(())
    }
}

/// Check whether a path carries one of the allowed image extensions
fn has_allowed_extension(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            let lower = ext.to_lowercase();
            ALLOWED_EXTENSIONS.contains(&lower.as_str())
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn touch(dir: &Path, name: &str) {
        std::fs::write(dir.join(name), b"x").unwrap();
    }

    #[test]
    fn test_extension_allow_list() {
        assert!(has_allowed_extension(Path::new("a.jpg")));
        assert!(has_allowed_extension(Path::new("a.jpeg")));
        assert!(has_allowed_extension(Path::new("a.png")));
        assert!(has_allowed_extension(Path::new("a.gif")));
        assert!(has_allowed_extension(Path::new("a.PNG")));
        assert!(has_allowed_extension(Path::new("a.JpEg")));
        assert!(!has_allowed_extension(Path::new("a.webp")));
        assert!(!has_allowed_extension(Path::new("a.txt")));
        assert!(!has_allowed_extension(Path::new("noextension")));
    }

    #[test]
    fn test_list_filters_non_images() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "photo.jpg");
        touch(dir.path(), "scan.PNG");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "archive.zip");

        let store = ImageStore::new(dir.path());
        let mut names = store.list().unwrap();
        names.sort();
        assert_eq!(names, vec!["photo.jpg", "scan.PNG"]);
    }

    #[test]
    fn test_list_missing_directory() {
        let store = ImageStore::new("/definitely/not/a/real/dir");
        assert!(matches!(store.list(), Err(ToneError::Directory { .. })));
    }

    #[test]
    fn test_delete_all_is_unfiltered() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "photo.jpg");
        touch(dir.path(), "notes.txt");

        let store = ImageStore::new(dir.path());
        store.delete_all().unwrap();

        assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
    }

    #[test]
    fn test_delete_all_keeps_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        touch(dir.path(), "photo.jpg");
        std::fs::create_dir(dir.path().join("nested")).unwrap();

        let store = ImageStore::new(dir.path());
        store.delete_all().unwrap();

        assert!(dir.path().join("nested").is_dir());
        assert!(!dir.path().join("photo.jpg").exists());
    }
}
