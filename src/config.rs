//! Application configuration constants.

/// Window title used by user-facing dialogs.
pub const APP_TITLE: &str = "Directogallery";

/// Image file extensions kept when scanning a gallery.
pub const SUPPORTED_IMAGE_EXTENSIONS: [&str; 11] = [
    "apng", "avif", "gif", "jpg", "jpeg", "jpe", "jif", "jfif", "png", "svg", "webp",
];

/// Initial value of the image scale preference.
pub const DEFAULT_IMG_SCALE: u32 = 200;

/// Backend command names.
pub mod commands {
    pub const CACHE_ROOT: &str = "cache_root";
    pub const GET_CURRENT_DIR_DATA: &str = "get_current_dir_data";
    pub const ENTER_DIR: &str = "enter_dir";
    pub const LEAVE_DIR: &str = "leave_dir";
}

/// Alert messages shown when a loader operation fails.
pub mod messages {
    pub const READ_CURRENT_DIR_FAILED: &str = "Could not read the current directory.";
    pub const OPEN_ROOT_FAILED: &str = "Could not open the selected directory.";
    pub const ENTER_DIR_FAILED: &str = "Could not open the directory.";
    pub const LEAVE_DIR_FAILED: &str = "Could not go back to the parent directory.";
}
