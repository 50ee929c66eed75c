//! One node of the gallery directory tree.

use crate::file_utils::PathExt;
use crate::model::FileContent;
use std::path::{Path, PathBuf};

/// Index of a directory node inside its gallery.
pub type DirId = usize;

/// A directory of the gallery with the images it directly contains.
#[derive(Debug)]
pub struct GalleryDir {
    name: String,
    path: PathBuf,
    parent: Option<DirId>,
    directories: Vec<DirId>,
    files: Vec<FileContent>,
}

impl GalleryDir {
    /// Creates an empty node. Returns `None` when the path has no final
    /// component to name the directory after (e.g. `/`).
    pub fn new(path: PathBuf, parent: Option<DirId>) -> Option<Self> {
        let name = path.name_string()?;
        Some(Self {
            name,
            path,
            parent,
            directories: Vec::new(),
            files: Vec::new(),
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn parent(&self) -> Option<DirId> {
        self.parent
    }

    pub fn directories(&self) -> &[DirId] {
        &self.directories
    }

    pub fn files(&self) -> &[FileContent] {
        &self.files
    }

    pub fn add_file(&mut self, path: &Path) {
        self.files.push(FileContent {
            name: path.name_string(),
            path: path.to_string_lossy().into_owned(),
        });
    }

    pub fn add_dir(&mut self, id: DirId) {
        self.directories.push(id);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_takes_name_from_last_component() {
        // Arrange & Act
        let dir = GalleryDir::new(PathBuf::from("/home/u/Pictures"), None).unwrap();

        // Assert
        assert_eq!(dir.name(), "Pictures");
        assert_eq!(dir.parent(), None);
        assert!(dir.files().is_empty());
    }

    #[test]
    fn test_new_rejects_nameless_path() {
        // Arrange & Act & Assert
        assert!(GalleryDir::new(PathBuf::from("/"), None).is_none());
    }

    #[test]
    fn test_add_file_records_name_and_path() {
        // Arrange
        let mut dir = GalleryDir::new(PathBuf::from("/p"), Some(0)).unwrap();

        // Act
        dir.add_file(Path::new("/p/cat.png"));

        // Assert
        assert_eq!(
            dir.files(),
            &[FileContent {
                name: Some("cat.png".to_string()),
                path: "/p/cat.png".to_string(),
            }]
        );
    }
}
