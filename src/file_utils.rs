use crate::config::SUPPORTED_IMAGE_EXTENSIONS;
use crate::error::Result;
use log::warn;
use std::fs;
use std::path::{Path, PathBuf};

/// Image files and subdirectories found directly inside one directory.
#[derive(Debug, Default)]
pub struct ScannedDir {
    pub directories: Vec<PathBuf>,
    pub images: Vec<PathBuf>,
}

/// Returns true if the path has one of the supported image extensions.
pub fn is_supported_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext_str| {
            SUPPORTED_IMAGE_EXTENSIONS
                .iter()
                .any(|allowed| ext_str.eq_ignore_ascii_case(allowed))
        })
        .unwrap_or(false)
}

/// Lists the image files and subdirectories of `dir`, both sorted by path.
///
/// Symlinked directories are reported as neither, so a scan never loops.
pub fn scan_directory(dir: &Path) -> Result<ScannedDir> {
    let mut scanned = ScannedDir::default();

    for entry in fs::read_dir(dir)?.filter_map(|entry| entry.ok()) {
        let path = entry.path();
        let is_dir = entry.file_type().map(|t| t.is_dir()).unwrap_or(false);

        if is_dir {
            scanned.directories.push(path);
        } else if path.is_file() && is_supported_image(&path) {
            scanned.images.push(path);
        }
    }

    scanned.directories.sort();
    scanned.images.sort();
    Ok(scanned)
}

pub trait PathExt {
    /// Final path component as a string, `None` when the path has none.
    fn name_string(&self) -> Option<String>;
    fn format_for_log(&self) -> String;
}

impl PathExt for Path {
    fn name_string(&self) -> Option<String> {
        let name = self.file_name()?;
        Some(match name.to_str() {
            Some(name) => name.to_string(),
            None => {
                warn!(
                    "Non UTF-8 name in {}, listing it as \"unknown\"",
                    self.format_for_log()
                );
                "unknown".to_string()
            }
        })
    }

    fn format_for_log(&self) -> String {
        format!("{:?}", self.display().to_string())
    }
}
