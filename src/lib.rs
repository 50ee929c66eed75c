//! Directogallery: browse a directory of images from the file system.
//!
//! The UI-facing side is [`state::BrowserState`], a set of `Mutable` cells,
//! filled by [`loader::DirectoryLoader`] from a [`backend::Backend`].

pub mod backend;
pub mod config;
pub mod error;
pub mod file_utils;
pub mod gallery;
pub mod loader;
pub mod model;
pub mod notifier;
pub mod state;

pub use backend::{Backend, LocalBackend};
pub use error::{AppError, Result};
pub use loader::DirectoryLoader;
pub use model::{DirContent, FileContent};
pub use notifier::{DialogNotifier, Notifier};
pub use state::{BrowserState, Location, browser_state};
