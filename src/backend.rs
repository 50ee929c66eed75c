//! Named-call boundary between the browser state and the process that
//! owns file system access.

use crate::config::commands;
use crate::error::{AppError, Result};
use crate::file_utils::PathExt;
use crate::gallery::Gallery;
use log::{debug, info};
use serde::Deserialize;
use serde_json::Value;
use std::future::Future;
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

/// Something that answers named requests with JSON payloads.
pub trait Backend: Send + Sync {
    fn invoke(&self, command: &str, args: Value) -> impl Future<Output = Result<Value>> + Send;
}

#[derive(Deserialize)]
struct CacheRootArgs {
    path: PathBuf,
}

#[derive(Deserialize)]
struct EnterDirArgs {
    name: String,
}

fn parse_args<T: for<'de> Deserialize<'de>>(args: Value) -> Result<T> {
    serde_json::from_value(args).map_err(|e| AppError::InvalidArguments(e.to_string()))
}

/// In-process backend keeping the gallery of the opened root directory.
#[derive(Clone, Default)]
pub struct LocalBackend {
    gallery: Arc<Mutex<Option<Gallery>>>,
}

impl LocalBackend {
    pub fn new() -> Self {
        Self::default()
    }

    fn gallery(&self) -> MutexGuard<'_, Option<Gallery>> {
        self.gallery.lock().unwrap_or_else(PoisonError::into_inner)
    }

    async fn cache_root(&self, path: PathBuf) -> Result<Value> {
        info!("Caching gallery root {}", path.format_for_log());
        let gallery = async_std::task::spawn_blocking(move || Gallery::new(path)).await?;
        *self.gallery() = Some(gallery);
        Ok(Value::Null)
    }

    fn current_dir_data(&self) -> Result<Value> {
        let gallery = self.gallery();
        let gallery = gallery.as_ref().ok_or(AppError::GalleryNotLoaded)?;
        Ok(serde_json::to_value(gallery.current_dir_content())?)
    }

    fn enter_dir(&self, name: &str) -> Result<Value> {
        let mut gallery = self.gallery();
        gallery
            .as_mut()
            .ok_or(AppError::GalleryNotLoaded)?
            .enter_dir(name)?;
        Ok(Value::Null)
    }

    fn leave_dir(&self) -> Result<Value> {
        let mut gallery = self.gallery();
        gallery
            .as_mut()
            .ok_or(AppError::GalleryNotLoaded)?
            .leave_dir()?;
        Ok(Value::Null)
    }
}

impl Backend for LocalBackend {
    async fn invoke(&self, command: &str, args: Value) -> Result<Value> {
        debug!("Backend command {}", command);
        match command {
            commands::CACHE_ROOT => {
                let args: CacheRootArgs = parse_args(args)?;
                self.cache_root(args.path).await
            }
            commands::GET_CURRENT_DIR_DATA => self.current_dir_data(),
            commands::ENTER_DIR => {
                let args: EnterDirArgs = parse_args(args)?;
                self.enter_dir(&args.name)
            }
            commands::LEAVE_DIR => self.leave_dir(),
            other => Err(AppError::UnknownCommand(other.to_string())),
        }
    }
}
