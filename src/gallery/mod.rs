//! Gallery tree built from a root directory, with a cursor on the
//! directory the user is currently browsing.

mod gallery_dir;

pub use gallery_dir::{DirId, GalleryDir};

use crate::error::{AppError, Result};
use crate::file_utils::{self, PathExt};
use crate::model::DirContent;
use log::{debug, warn};
use std::collections::VecDeque;
use std::path::PathBuf;

/// State of the gallery exploration by the user.
#[derive(Debug)]
pub struct Gallery {
    dirs: Vec<GalleryDir>,
    current: DirId,
}

const ROOT: DirId = 0;

impl Gallery {
    /// Recursively scans `path` and makes it the gallery root.
    ///
    /// The root must be readable; unreadable subdirectories are skipped.
    pub fn new(path: PathBuf) -> Result<Self> {
        let start = std::time::Instant::now();
        if !path.is_dir() {
            return Err(AppError::GalleryCreation(format!(
                "{} is not a directory",
                path.format_for_log()
            )));
        }

        let root = GalleryDir::new(path.clone(), None).ok_or_else(|| {
            AppError::GalleryCreation(format!("{} has no name", path.format_for_log()))
        })?;
        let mut gallery = Gallery {
            dirs: vec![root],
            current: ROOT,
        };
        let scanned = file_utils::scan_directory(&path)?;
        gallery.fill(ROOT, scanned);

        debug!(
            "Scanned gallery {} ({} directories) in {:?}",
            path.format_for_log(),
            gallery.dirs.len(),
            start.elapsed()
        );
        Ok(gallery)
    }

    /// Adds the scanned content of `id` and, breadth first, of every
    /// directory below it.
    fn fill(&mut self, id: DirId, scanned: file_utils::ScannedDir) {
        let mut pending = VecDeque::from([(id, scanned)]);

        while let Some((id, scanned)) = pending.pop_front() {
            for image in &scanned.images {
                self.dirs[id].add_file(image);
            }

            for dir_path in scanned.directories {
                let Some(child) = GalleryDir::new(dir_path.clone(), Some(id)) else {
                    continue;
                };
                let content = match file_utils::scan_directory(&dir_path) {
                    Ok(content) => content,
                    Err(e) => {
                        warn!("Skipping {}: {}", dir_path.format_for_log(), e);
                        continue;
                    }
                };

                let child_id = self.dirs.len();
                self.dirs.push(child);
                self.dirs[id].add_dir(child_id);
                pending.push_back((child_id, content));
            }
        }
    }

    pub fn current_dir(&self) -> &GalleryDir {
        &self.dirs[self.current]
    }

    /// Listing of the current directory.
    pub fn current_dir_content(&self) -> DirContent {
        let dir = self.current_dir();
        DirContent {
            name: dir.name().to_string(),
            path: dir.path().to_string_lossy().into_owned(),
            files: dir.files().to_vec(),
            directories: dir
                .directories()
                .iter()
                .map(|&child| self.dirs[child].name().to_string())
                .collect(),
        }
    }

    /// Moves the cursor into the subdirectory called `name`.
    pub fn enter_dir(&mut self, name: &str) -> Result<()> {
        let child = self
            .current_dir()
            .directories()
            .iter()
            .copied()
            .find(|&child| self.dirs[child].name() == name)
            .ok_or_else(|| AppError::DirectoryNotFound(name.to_string()))?;
        self.current = child;
        Ok(())
    }

    /// Moves the cursor to the parent directory.
    pub fn leave_dir(&mut self) -> Result<()> {
        self.current = self.current_dir().parent().ok_or(AppError::AtRoot)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::{self, File};

    fn sample_tree() -> tempfile::TempDir {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path();
        File::create(root.join("b.png")).unwrap();
        File::create(root.join("a.JPG")).unwrap();
        File::create(root.join("notes.txt")).unwrap();
        fs::create_dir_all(root.join("Vacation/Beach")).unwrap();
        File::create(root.join("Vacation/sun.webp")).unwrap();
        File::create(root.join("Vacation/Beach/wave.gif")).unwrap();
        fs::create_dir(root.join("Empty")).unwrap();
        dir
    }

    #[test]
    fn test_new_lists_images_and_subdirectories_of_root() {
        // Arrange
        let tree = sample_tree();

        // Act
        let gallery = Gallery::new(tree.path().to_path_buf()).unwrap();
        let content = gallery.current_dir_content();

        // Assert
        assert_eq!(content.path, tree.path().to_string_lossy());
        let names: Vec<_> = content.files.iter().map(|f| f.name.clone()).collect();
        assert_eq!(
            names,
            vec![Some("a.JPG".to_string()), Some("b.png".to_string())]
        );
        assert_eq!(
            content.directories,
            vec!["Empty".to_string(), "Vacation".to_string()]
        );
    }

    #[test]
    fn test_new_rejects_a_file() {
        // Arrange
        let tree = sample_tree();

        // Act
        let result = Gallery::new(tree.path().join("b.png"));

        // Assert
        assert!(matches!(result, Err(AppError::GalleryCreation(_))));
    }

    #[test]
    fn test_enter_and_leave_nested_directories() {
        // Arrange
        let tree = sample_tree();
        let mut gallery = Gallery::new(tree.path().to_path_buf()).unwrap();

        // Act
        gallery.enter_dir("Vacation").unwrap();
        let vacation = gallery.current_dir_content();
        gallery.enter_dir("Beach").unwrap();
        let beach = gallery.current_dir_content();
        gallery.leave_dir().unwrap();
        gallery.leave_dir().unwrap();

        // Assert
        assert_eq!(vacation.name, "Vacation");
        assert_eq!(vacation.directories, vec!["Beach".to_string()]);
        assert_eq!(vacation.files[0].name.as_deref(), Some("sun.webp"));
        assert_eq!(beach.files[0].name.as_deref(), Some("wave.gif"));
        assert_eq!(gallery.current_dir().path(), tree.path());
    }

    #[test]
    fn test_enter_unknown_directory_keeps_cursor() {
        // Arrange
        let tree = sample_tree();
        let mut gallery = Gallery::new(tree.path().to_path_buf()).unwrap();

        // Act
        let result = gallery.enter_dir("Nope");

        // Assert
        assert!(matches!(result, Err(AppError::DirectoryNotFound(ref n)) if n == "Nope"));
        assert_eq!(gallery.current_dir().path(), tree.path());
    }

    #[test]
    fn test_leave_at_root_is_error() {
        // Arrange
        let tree = sample_tree();
        let mut gallery = Gallery::new(tree.path().to_path_buf()).unwrap();

        // Act & Assert
        assert!(matches!(gallery.leave_dir(), Err(AppError::AtRoot)));
    }

    #[test]
    fn test_empty_directory_has_empty_listing() {
        // Arrange
        let tree = sample_tree();
        let mut gallery = Gallery::new(tree.path().to_path_buf()).unwrap();

        // Act
        gallery.enter_dir("Empty").unwrap();
        let content = gallery.current_dir_content();

        // Assert
        assert_eq!(content.name, "Empty");
        assert!(content.files.is_empty());
        assert!(content.directories.is_empty());
    }

    #[test]
    fn test_deeply_nested_tree_is_scanned_completely() {
        // Arrange
        let tree = tempfile::tempdir().unwrap();
        let mut deepest = tree.path().to_path_buf();
        for level in 0..64 {
            deepest.push(format!("level{}", level));
        }
        fs::create_dir_all(&deepest).unwrap();
        File::create(deepest.join("bottom.png")).unwrap();
        let mut gallery = Gallery::new(tree.path().to_path_buf()).unwrap();

        // Act
        for level in 0..64 {
            gallery.enter_dir(&format!("level{}", level)).unwrap();
        }
        let content = gallery.current_dir_content();

        // Assert
        assert_eq!(content.name, "level63");
        assert_eq!(content.files[0].name.as_deref(), Some("bottom.png"));
    }
}
