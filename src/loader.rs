//! Loads directory listings from the backend into the browser state.
//!
//! Every operation here is fully handled: a failure is logged, shown to the
//! user through the [`Notifier`] and leaves the state as it was. Overlapping
//! calls are not serialized, the response that resolves last wins.

use crate::backend::Backend;
use crate::config::{commands, messages};
use crate::error::{AppError, Result};
use crate::file_utils::PathExt;
use crate::model::DirContent;
use crate::notifier::Notifier;
use crate::state::BrowserState;
use log::{debug, error};
use serde_json::{Value, json};
use std::path::Path;

/// How a successful fetch changes the navigation stack.
#[derive(Debug, Clone, Copy)]
enum StackChange<'a> {
    Keep,
    Reset,
    Push(&'a str),
    Pop,
}

pub struct DirectoryLoader<B, N> {
    backend: B,
    notifier: N,
    state: BrowserState,
}

impl<B: Backend, N: Notifier> DirectoryLoader<B, N> {
    pub fn new(backend: B, notifier: N, state: BrowserState) -> Self {
        Self {
            backend,
            notifier,
            state,
        }
    }

    pub fn state(&self) -> &BrowserState {
        &self.state
    }

    /// Reloads the current directory. With `reset_stack` the navigation
    /// stack is replaced by the directory's name before `current_dir` is set.
    pub async fn load_current_dir_json(&self, reset_stack: bool) {
        let change = if reset_stack {
            StackChange::Reset
        } else {
            StackChange::Keep
        };
        if let Err(e) = self.refresh(change).await {
            self.report(messages::READ_CURRENT_DIR_FAILED, e);
        }
    }

    /// Opens `path` as the gallery root and loads it with a fresh stack.
    pub async fn open_root(&self, path: &Path) {
        let result = async {
            let args = json!({ "path": serde_json::to_value(path)? });
            self.backend.invoke(commands::CACHE_ROOT, args).await
        }
        .await;
        if let Err(e) = result {
            self.report(messages::OPEN_ROOT_FAILED, e);
            return;
        }
        debug!("Opened gallery root {}", path.format_for_log());
        self.load_current_dir_json(true).await;
    }

    /// Moves into the subdirectory `name` of the current directory.
    pub async fn enter_dir(&self, name: &str) {
        let result = async {
            self.backend
                .invoke(commands::ENTER_DIR, json!({ "name": name }))
                .await?;
            self.refresh(StackChange::Push(name)).await
        }
        .await;
        if let Err(e) = result {
            self.report(messages::ENTER_DIR_FAILED, e);
        }
    }

    /// Moves back to the parent of the current directory.
    pub async fn leave_dir(&self) {
        let result = async {
            self.backend.invoke(commands::LEAVE_DIR, Value::Null).await?;
            self.refresh(StackChange::Pop).await
        }
        .await;
        if let Err(e) = result {
            self.report(messages::LEAVE_DIR_FAILED, e);
        }
    }

    async fn fetch_current_dir(&self) -> Result<DirContent> {
        let value = self
            .backend
            .invoke(commands::GET_CURRENT_DIR_DATA, Value::Null)
            .await?;
        Ok(serde_json::from_value(value)?)
    }

    /// Fetches the current directory and applies it: stack first, then
    /// `current_dir`, so observers of `current_dir` see a matching stack.
    async fn refresh(&self, change: StackChange<'_>) -> Result<()> {
        let dir = self.fetch_current_dir().await?;
        debug!(
            "Loaded {} ({} files, {} directories)",
            dir.path,
            dir.files.len(),
            dir.directories.len()
        );

        match change {
            StackChange::Keep => {}
            StackChange::Reset => self.state.stack.set(vec![dir.name.clone()]),
            StackChange::Push(name) => self.state.stack.lock_mut().push(name.to_string()),
            StackChange::Pop => {
                self.state.stack.lock_mut().pop();
            }
        }
        self.state.current_dir.set(Some(dir));
        Ok(())
    }

    fn report(&self, message: &str, e: AppError) {
        error!("{}: {}", message, e);
        self.notifier.alert(message);
    }
}
