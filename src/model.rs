//! Directory listing types exchanged with the backend.

use serde::{Deserialize, Serialize};

/// One image file of a directory listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileContent {
    pub name: Option<String>,
    pub path: String,
}

/// Listing of one directory as answered by `get_current_dir_data`.
///
/// `files` and `directories` keep the order the backend sent them in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DirContent {
    pub name: String,
    pub path: String,
    pub files: Vec<FileContent>,
    pub directories: Vec<String>,
}
